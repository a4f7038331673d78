//! Per-region accent skins.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A UI region that carries its own skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentName {
    Header,
    Sidebar,
    Player,
}

impl ComponentName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Sidebar => "sidebar",
            Self::Player => "player",
        }
    }

    pub const fn all() -> [Self; 3] {
        [Self::Header, Self::Sidebar, Self::Player]
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(Self::Header),
            "sidebar" => Ok(Self::Sidebar),
            "player" => Ok(Self::Player),
            other => Err(ParseError::UnknownComponent(other.to_string())),
        }
    }
}

/// The fixed skin palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSkin {
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
    Purple,
    Indigo,
    Pink,
    Violet,
    Magenta,
}

impl ComponentSkin {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Indigo => "indigo",
            Self::Pink => "pink",
            Self::Violet => "violet",
            Self::Magenta => "magenta",
        }
    }

    pub const fn all() -> [Self; 10] {
        [
            Self::Red,
            Self::Green,
            Self::Blue,
            Self::Orange,
            Self::Yellow,
            Self::Purple,
            Self::Indigo,
            Self::Pink,
            Self::Violet,
            Self::Magenta,
        ]
    }
}

impl fmt::Display for ComponentSkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentSkin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|skin| skin.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSkin(s.to_string()))
    }
}

/// One skin per [`ComponentName`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSkins {
    pub header: ComponentSkin,
    pub sidebar: ComponentSkin,
    pub player: ComponentSkin,
}

impl ComponentSkins {
    pub const fn get(&self, name: ComponentName) -> ComponentSkin {
        match name {
            ComponentName::Header => self.header,
            ComponentName::Sidebar => self.sidebar,
            ComponentName::Player => self.player,
        }
    }

    /// Replaces the skin of `name`, returning the previous one.
    pub fn set(&mut self, name: ComponentName, skin: ComponentSkin) -> ComponentSkin {
        let slot = match name {
            ComponentName::Header => &mut self.header,
            ComponentName::Sidebar => &mut self.sidebar,
            ComponentName::Player => &mut self.player,
        };
        std::mem::replace(slot, skin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skin_parses_from_its_name() {
        for skin in ComponentSkin::all() {
            assert_eq!(skin.to_string().parse::<ComponentSkin>(), Ok(skin));
        }
    }

    #[test]
    fn unknown_component_is_rejected() {
        assert_eq!(
            "footer".parse::<ComponentName>(),
            Err(ParseError::UnknownComponent("footer".into()))
        );
    }

    #[test]
    fn set_touches_one_slot() {
        let mut skins = ComponentSkins {
            header: ComponentSkin::Blue,
            sidebar: ComponentSkin::Blue,
            player: ComponentSkin::Blue,
        };
        let previous = skins.set(ComponentName::Sidebar, ComponentSkin::Pink);
        assert_eq!(previous, ComponentSkin::Blue);
        assert_eq!(skins.get(ComponentName::Sidebar), ComponentSkin::Pink);
        assert_eq!(skins.header, ComponentSkin::Blue);
        assert_eq!(skins.player, ComponentSkin::Blue);
    }
}
