use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::{GameEntry, GameId};

/// Serialized recommendation artifact produced by the offline training job.
///
/// Bundles the game metadata table with an optional pre-trained model
/// section. When the model section is absent the service runs in
/// tag-matching-only mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub games: Vec<GameEntry>,
    #[serde(default)]
    pub model: Option<ModelSection>,
}

/// Pre-trained model payload: item factors plus the id translation tables.
///
/// Row `i` of `factors` holds the latent factors of internal index `i`.
/// `game_index` maps external game ids to internal indices and `index_game`
/// is its inverse; both ship in the artifact so the service never has to
/// reconstruct them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSection {
    pub factors: Vec<Vec<f32>>,
    pub game_index: HashMap<GameId, usize>,
    pub index_game: HashMap<usize, GameId>,
}

impl ArtifactBundle {
    /// Loads and parses an artifact from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read artifact at {}", path.display()))?;
        let bundle: ArtifactBundle = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse artifact at {}", path.display()))?;

        tracing::info!(
            games = bundle.games.len(),
            has_model = bundle.model.is_some(),
            "Artifact loaded"
        );

        Ok(bundle)
    }
}
