pub mod artifact;

pub use artifact::{ArtifactBundle, ModelSection};

use std::collections::HashMap;

use crate::models::{GameEntry, GameId};

/// In-memory game metadata table.
///
/// Built once at startup from the artifact and read-only afterwards. Iteration
/// follows artifact order, which doubles as the tie-break order during tag
/// matching and as the source of the "first N" degenerate fallbacks.
pub struct GameCatalog {
    order: Vec<GameId>,
    entries: HashMap<GameId, GameEntry>,
}

impl GameCatalog {
    /// Builds a catalog from artifact entries, keeping the first occurrence
    /// of any duplicated id.
    pub fn new(games: Vec<GameEntry>) -> Self {
        let mut order = Vec::with_capacity(games.len());
        let mut entries = HashMap::with_capacity(games.len());

        for game in games {
            if entries.contains_key(&game.id) {
                tracing::warn!(game_id = %game.id, "Duplicate game id in artifact, keeping first");
                continue;
            }
            order.push(game.id);
            entries.insert(game.id, game);
        }

        Self { order, entries }
    }

    pub fn get(&self, id: GameId) -> Option<&GameEntry> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Iterates entries in artifact order
    pub fn iter(&self) -> impl Iterator<Item = &GameEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Returns the first `count` ids in artifact order
    pub fn first_ids(&self, count: usize) -> Vec<GameId> {
        self.order.iter().take(count).copied().collect()
    }

    /// Looks up an entry by exact title, ignoring ASCII case
    pub fn find_by_title(&self, title: &str) -> Option<&GameEntry> {
        self.iter()
            .find(|entry| entry.title.eq_ignore_ascii_case(title))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_games() -> Vec<GameEntry> {
        vec![
            GameEntry {
                id: GameId(620),
                title: "Portal 2".to_string(),
                description: String::new(),
                tags: "Puzzle,Co-op".to_string(),
                price: 9.99,
                windows: true,
                mac: true,
                linux: true,
                steam_deck: false,
            },
            GameEntry {
                id: GameId(570),
                title: "Dota 2".to_string(),
                description: String::new(),
                tags: "MOBA,Multiplayer".to_string(),
                price: 0.0,
                windows: true,
                mac: true,
                linux: true,
                steam_deck: false,
            },
            GameEntry {
                id: GameId(730),
                title: "Counter-Strike 2".to_string(),
                description: String::new(),
                tags: "FPS,Multiplayer".to_string(),
                price: 0.0,
                windows: true,
                mac: false,
                linux: true,
                steam_deck: false,
            },
        ]
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let catalog = GameCatalog::new(create_test_games());
        let ids: Vec<GameId> = catalog.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![GameId(620), GameId(570), GameId(730)]);
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let mut games = create_test_games();
        games.push(GameEntry {
            id: GameId(620),
            title: "Portal 2 (again)".to_string(),
            description: String::new(),
            tags: String::new(),
            price: 0.0,
            windows: false,
            mac: false,
            linux: false,
            steam_deck: false,
        });

        let catalog = GameCatalog::new(games);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(GameId(620)).unwrap().title, "Portal 2");
    }

    #[test]
    fn test_first_ids_truncates() {
        let catalog = GameCatalog::new(create_test_games());
        assert_eq!(catalog.first_ids(2), vec![GameId(620), GameId(570)]);
        assert_eq!(catalog.first_ids(10).len(), 3);
    }

    #[test]
    fn test_find_by_title_ignores_case() {
        let catalog = GameCatalog::new(create_test_games());
        assert_eq!(
            catalog.find_by_title("dota 2").map(|e| e.id),
            Some(GameId(570))
        );
        assert!(catalog.find_by_title("Half-Life 3").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = GameCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.first_ids(5).is_empty());
        assert!(catalog.get(GameId(1)).is_none());
    }
}
