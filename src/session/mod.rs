pub mod earn;
pub mod save;

pub use earn::*;
pub use save::*;

use crate::geo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Earn,
    Save,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earn => "earn",
            Self::Save => "save",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "earn" => Some(Self::Earn),
            "save" => Some(Self::Save),
            _ => None,
        }
    }
}

/// One interactive session: the active tab plus one state container per
/// module. The modules never talk to each other, and nothing survives the
/// process.
pub struct Session {
    pub tab: Tab,
    pub location: String,
    pub earn: EarnState,
    pub save: SaveState,
}

impl Session {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            location: geo::location_summary(),
            earn: EarnState::default(),
            save: SaveState::seeded(),
        }
    }
}
