#![forbid(unsafe_code)]

//! # Stagelight CLI
//!
//! Inspect and change the theme state persisted for the music site.

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use stagelight::{
    Direction, FileStorage, MemoryDocument, ThemeConfig, ThemeSession, ThemeSnapshot,
    bind_document,
};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => ThemeConfig::from_file(path)
            .with_context(|| format!("loading theme config {}", path.display()))?,
        None => ThemeConfig::default(),
    };

    let mut session = ThemeSession::new();
    let store = session.init(config, FileStorage::new(&cli.state_dir));
    let document = Arc::new(MemoryDocument::new());
    bind_document(store, document.clone());

    match cli.command {
        Command::Show { json } => print_state(&store.snapshot(), &document, json)?,
        Command::SetMode { mode } => {
            store.set_mode(mode);
            println!("{mode}");
        }
        Command::Rewrite { rtl, classes } => {
            store.set_direction(Direction::from_rtl(rtl));
            println!("{}", store.rewrite_class_name(&classes));
        }
        Command::Skin {
            component,
            skin,
            json,
        } => {
            if !store.set_component_skin_named(&component, skin) {
                anyhow::bail!(
                    "unknown component: {component} (expected header, sidebar or player)"
                );
            }
            print_state(&store.snapshot(), &document, json)?;
        }
    }

    session.teardown();
    Ok(())
}

fn print_state(
    state: &ThemeSnapshot,
    document: &MemoryDocument,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let value = serde_json::json!({
            "state": state,
            "document": document.state(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("mode:       {}", state.mode);
    println!("direction:  {}", state.direction);
    println!("header:     {}", state.skins.header);
    println!("sidebar:    {}", state.skins.sidebar);
    println!("player:     {}", state.skins.player);
    println!("button:     {}", state.accent.button);
    println!("text:       {}", state.accent.text);
    println!("background: {}", state.accent.background);
    println!("locale:     {}", document.locale());
    Ok(())
}
