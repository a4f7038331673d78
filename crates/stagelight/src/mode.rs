//! Color mode, layout direction and the accent classes derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Site-wide color mode.
///
/// The persisted form is the lowercase literal (`"light"`, `"dark"`, `"system"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
    /// Follows the operating system in name only: it is never sampled and
    /// derives the same accents as [`ColorMode::Light`].
    System,
}

impl ColorMode {
    /// Returns the literal stored in the persistence slot.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Returns all modes in declaration order.
    pub const fn all() -> [Self; 3] {
        [Self::Light, Self::Dark, Self::System]
    }

    /// Whether this mode selects the dark branch.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseError::UnknownMode(other.to_string())),
        }
    }
}

/// Text and layout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Builds a direction from the right-to-left flag.
    pub const fn from_rtl(rtl: bool) -> Self {
        if rtl { Self::Rtl } else { Self::Ltr }
    }

    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// Returns the opposite direction.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ltr => Self::Rtl,
            Self::Rtl => Self::Ltr,
        }
    }

    /// Returns the value of the HTML `dir` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accent classes derived from a [`ColorMode`].
///
/// The class names are framework utility classes; only the light/dark branch
/// is meaningful here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    pub button: &'static str,
    pub text: &'static str,
    pub background: &'static str,
}

impl Accent {
    const WARNING: Self = Self {
        button: "btn btn-warning",
        text: "text-warning",
        background: "bg-warning",
    };

    const DANGER: Self = Self {
        button: "btn btn-danger",
        text: "text-danger",
        background: "bg-danger",
    };

    /// Derives the accent for a mode: dark uses the warning family,
    /// everything else the danger family.
    pub const fn for_mode(mode: ColorMode) -> Self {
        if mode.is_dark() {
            Self::WARNING
        } else {
            Self::DANGER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_literals_parse_back() {
        for mode in ColorMode::all() {
            assert_eq!(mode.as_str().parse::<ColorMode>(), Ok(mode));
        }
    }

    #[test]
    fn mode_parse_is_case_sensitive() {
        assert!(matches!(
            "Dark".parse::<ColorMode>(),
            Err(ParseError::UnknownMode(s)) if s == "Dark"
        ));
    }

    #[test]
    fn mode_serializes_as_bare_literal() {
        let json = serde_json::to_string(&ColorMode::System).unwrap();
        assert_eq!(json, "\"system\"");
    }

    #[test]
    fn direction_flip_is_involution() {
        assert_eq!(Direction::Ltr.flipped(), Direction::Rtl);
        assert_eq!(Direction::Rtl.flipped().flipped(), Direction::Rtl);
        assert!(Direction::from_rtl(true).is_rtl());
        assert!(!Direction::from_rtl(false).is_rtl());
    }

    #[test]
    fn dark_uses_warning_accent() {
        let accent = Accent::for_mode(ColorMode::Dark);
        assert_eq!(accent.button, "btn btn-warning");
        assert_eq!(accent.text, "text-warning");
        assert_eq!(accent.background, "bg-warning");
    }

    #[test]
    fn system_shares_light_accent() {
        assert_eq!(
            Accent::for_mode(ColorMode::System),
            Accent::for_mode(ColorMode::Light)
        );
        assert_eq!(Accent::for_mode(ColorMode::Light).text, "text-danger");
    }
}
