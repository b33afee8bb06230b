use serde::{Deserialize, Serialize};

/// Platform preference derived from the quiz's hardware question
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Windows,
    Mac,
    Linux,
    SteamDeck,
    /// No preference; platform filtering is skipped entirely
    All,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
            Platform::SteamDeck => "steam_deck",
            Platform::All => "all",
        };
        write!(f, "{}", label)
    }
}

/// Per-platform availability flags attached to each result record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformFlags {
    pub windows: bool,
    pub mac: bool,
    pub linux: bool,
    pub steam_deck: bool,
}
