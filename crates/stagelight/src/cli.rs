//! Command-line interface for `stagelight`.
//!
//! # Examples
//!
//! ```bash
//! # Show the current theme state
//! stagelight show --json
//!
//! # Persist dark mode for the next session
//! stagelight set-mode dark
//!
//! # Preview a class list in right-to-left layout
//! stagelight rewrite --rtl "ms-2 text-start fw-bold"
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stagelight::{ColorMode, ComponentSkin};

/// Inspect and change the music site's theme state.
#[derive(Parser, Debug, Clone)]
#[command(name = "stagelight", author, version, about)]
pub struct Cli {
    /// Directory holding the persisted color mode
    #[arg(
        long,
        global = true,
        env = "STAGELIGHT_STATE_DIR",
        default_value = ".stagelight"
    )]
    pub state_dir: PathBuf,

    /// Theme defaults file (TOML or JSON)
    #[arg(long, global = true, env = "STAGELIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the current theme state
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Persist a color mode
    SetMode {
        /// light, dark or system
        mode: ColorMode,
    },

    /// Rewrite a class list for the given direction
    Rewrite {
        /// Rewrite for right-to-left layout
        #[arg(long)]
        rtl: bool,

        /// Whitespace-separated class names
        classes: String,
    },

    /// Show the state after changing one component's skin (not persisted)
    Skin {
        /// Component name (header, sidebar or player)
        component: String,

        skin: ComponentSkin,

        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Log filter implied by `-v`.
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
