use serde::{Deserialize, Serialize};

use super::{Platform, PlatformFlags};

/// External store identifier for a game (numeric app id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the game metadata table loaded from the startup artifact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameEntry {
    pub id: GameId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text tag list as exported by the store, e.g. "Puzzle,Co-op,Sci-fi"
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub windows: bool,
    #[serde(default)]
    pub mac: bool,
    #[serde(default)]
    pub linux: bool,
    #[serde(default)]
    pub steam_deck: bool,
}

impl GameEntry {
    /// Whether this entry satisfies the given platform preference
    pub fn supports(&self, platform: Platform) -> bool {
        match platform {
            Platform::Windows => self.windows,
            Platform::Mac => self.mac,
            Platform::Linux => self.linux,
            Platform::SteamDeck => self.steam_deck,
            Platform::All => true,
        }
    }

    pub fn platform_flags(&self) -> PlatformFlags {
        PlatformFlags {
            windows: self.windows,
            mac: self.mac,
            linux: self.linux,
            steam_deck: self.steam_deck,
        }
    }
}

/// Display shape for one recommended game, as returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRecord {
    pub title: String,
    pub description: String,
    pub tags: String,
    pub price: f64,
    pub platforms: PlatformFlags,
}

impl From<&GameEntry> for ResultRecord {
    fn from(entry: &GameEntry) -> Self {
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            tags: entry.tags.clone(),
            price: entry.price,
            platforms: entry.platform_flags(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> GameEntry {
        GameEntry {
            id: GameId(620),
            title: "Portal 2".to_string(),
            description: "Co-op puzzle solving with portals".to_string(),
            tags: "Puzzle,Co-op,Sci-fi,Singleplayer".to_string(),
            price: 9.99,
            windows: true,
            mac: true,
            linux: true,
            steam_deck: false,
        }
    }

    #[test]
    fn test_game_id_display() {
        assert_eq!(format!("{}", GameId(620)), "620");
    }

    #[test]
    fn test_supports_specific_platform() {
        let entry = create_test_entry();
        assert!(entry.supports(Platform::Windows));
        assert!(entry.supports(Platform::Linux));
        assert!(!entry.supports(Platform::SteamDeck));
    }

    #[test]
    fn test_supports_all_ignores_flags() {
        let mut entry = create_test_entry();
        entry.windows = false;
        entry.mac = false;
        entry.linux = false;
        entry.steam_deck = false;
        assert!(entry.supports(Platform::All));
    }

    #[test]
    fn test_result_record_from_entry() {
        let entry = create_test_entry();
        let record = ResultRecord::from(&entry);
        assert_eq!(record.title, "Portal 2");
        assert_eq!(record.price, 9.99);
        assert!(record.platforms.mac);
        assert!(!record.platforms.steam_deck);
    }

    #[test]
    fn test_entry_deserialization_defaults() {
        // Case: minimal artifact entry with only id and title
        let entry: GameEntry = serde_json::from_str(r#"{"id": 570, "title": "Dota 2"}"#).unwrap();
        assert_eq!(entry.id, GameId(570));
        assert_eq!(entry.description, "");
        assert_eq!(entry.tags, "");
        assert_eq!(entry.price, 0.0);
        assert!(!entry.windows);
    }
}
