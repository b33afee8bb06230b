use std::collections::BTreeSet;

use crate::catalog::{ArtifactBundle, GameCatalog};
use crate::models::{GameId, Platform, QuizAnswers, ResultRecord};

use super::formatter::format_results;
use super::matcher::{match_tags, ranked_matches};
use super::model::ModelBundle;
use super::tags::derive_tags;

/// How many tag-matched seeds feed the model
const SEED_LIMIT: usize = 10;
/// How many candidates to request from the model
const CANDIDATE_LIMIT: usize = 20;
/// Maximum records returned to the client
const RESULT_LIMIT: usize = 5;

/// Fixed titles for the legacy single-answer quiz variant, choices 1-4
const PERSONALITY_TITLES: [&str; 4] = [
    "Minecraft",
    "The Witcher 3",
    "Animal Crossing",
    "Elden Ring",
];
const PERSONALITY_DEFAULT: &str = "Tetris";

/// Immutable recommendation context.
///
/// Built once at startup from the artifact and shared read-only across
/// request handlers. Holds the game catalog and, when the artifact carries
/// one, the pre-trained similarity model with its id translation tables.
pub struct Recommender {
    catalog: GameCatalog,
    model: Option<ModelBundle>,
}

impl Recommender {
    pub fn new(catalog: GameCatalog, model: Option<ModelBundle>) -> Self {
        Self { catalog, model }
    }

    /// Builds the context from a loaded artifact
    pub fn from_bundle(bundle: ArtifactBundle) -> Self {
        let catalog = GameCatalog::new(bundle.games);
        let model = bundle.model.map(ModelBundle::from_section);
        if model.is_none() {
            tracing::warn!("Artifact carries no model section, running in tag-matching mode");
        }
        Self::new(catalog, model)
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    /// Runs the full pipeline: quiz answers to ranked result records.
    ///
    /// Infallible by design. Every internal failure degrades to direct tag
    /// matching rather than surfacing an error.
    pub fn recommend(&self, answers: QuizAnswers) -> Vec<ResultRecord> {
        // 1. Derive tags and platform preference from the answers
        let (tags, platform) = derive_tags(answers);
        tracing::debug!(tags = ?tags, platform = %platform, "Derived quiz tags");

        // 2. Find seed games by tag matching
        let seeds = match_tags(&self.catalog, &tags, SEED_LIMIT);
        tracing::debug!(seeds = seeds.len(), "Tag matching selected seed games");

        // 3. Expand the seeds through the model, or fall back to direct matching
        let model = match &self.model {
            Some(model) if !seeds.is_empty() => model,
            _ => return self.fallback_records(&tags, platform, RESULT_LIMIT),
        };

        let ranked = self.model_candidates(model, &seeds, CANDIDATE_LIMIT);
        if ranked.is_empty() {
            tracing::info!("Model yielded no usable candidates, falling back to tag matching");
            return self.fallback_records(&tags, platform, RESULT_LIMIT);
        }

        // 4. Platform filtering and final formatting
        format_results(&self.catalog, &ranked, platform, RESULT_LIMIT)
    }

    /// Expands tag-matched seeds into a ranked candidate list via the model.
    ///
    /// Never fails: when no seed is known to the model the candidates are the
    /// first catalog entries, and a model error yields the seeds padded with
    /// first catalog entries instead.
    fn model_candidates(&self, model: &ModelBundle, seeds: &[GameId], count: usize) -> Vec<GameId> {
        let seed_indices: Vec<usize> = seeds
            .iter()
            .filter_map(|id| model.game_index.get(id).copied())
            .collect();

        if seed_indices.is_empty() {
            tracing::warn!(
                seeds = seeds.len(),
                "No seed game is known to the model, using catalog order"
            );
            return self.catalog.first_ids(count);
        }

        let mut indicator = vec![0.0f32; model.model.vocabulary()];
        for index in &seed_indices {
            if let Some(slot) = indicator.get_mut(*index) {
                *slot = 1.0;
            }
        }

        match model.model.recommend(&indicator, count, &seed_indices) {
            Ok(ranking) => ranking
                .into_indices()
                .into_iter()
                .filter_map(|index| model.index_game.get(&index).copied())
                .filter(|id| self.catalog.contains(*id))
                .take(count)
                .collect(),
            Err(error) => {
                tracing::error!(error = %error, "Model call failed, returning best-effort candidates");
                seeds
                    .iter()
                    .copied()
                    .chain(self.catalog.first_ids(count))
                    .collect()
            }
        }
    }

    /// Direct tag matching for when the model path is unavailable or empty.
    ///
    /// The first scoring pass excludes platform-incompatible entries from
    /// candidacy entirely; a second unfiltered pass tops the list up with
    /// entries not already selected.
    fn fallback_records(
        &self,
        tags: &BTreeSet<String>,
        platform: Platform,
        count: usize,
    ) -> Vec<ResultRecord> {
        let preferred = ranked_matches(&self.catalog, tags, |entry| entry.supports(platform));
        let mut selected: Vec<GameId> = preferred.into_iter().take(count).collect();

        if selected.len() < count {
            let fill = ranked_matches(&self.catalog, tags, |entry| {
                !selected.contains(&entry.id)
            });
            selected.extend(fill.into_iter().take(count - selected.len()));
        }

        tracing::info!(results = selected.len(), "Tag-matching fallback produced results");

        selected
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .map(ResultRecord::from)
            .collect()
    }

    /// Legacy single-answer variant: the first personality value picks a
    /// fixed title, which is then resolved against the catalog.
    pub fn personality_pick(&self, personality: &[Option<i64>]) -> Vec<ResultRecord> {
        let title = match personality.first().copied().flatten() {
            Some(choice @ 1..=4) => PERSONALITY_TITLES[(choice - 1) as usize],
            _ => PERSONALITY_DEFAULT,
        };

        match self.catalog.find_by_title(title) {
            Some(entry) => vec![ResultRecord::from(entry)],
            None => {
                tracing::warn!(title, "Personality title has no catalog entry");
                Vec::new()
            }
        }
    }
}
