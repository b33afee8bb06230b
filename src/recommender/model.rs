use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::catalog::ModelSection;
use crate::models::GameId;

/// Errors a similarity model can raise from its recommend call.
///
/// These never reach the client; the pipeline absorbs them and degrades to a
/// best-effort candidate list.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Model has no item factors")]
    Empty,

    #[error("Indicator length {got} does not match vocabulary size {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Indicator has no active entries")]
    EmptyIndicator,

    #[error("Item factor rows have inconsistent widths")]
    RaggedFactors,
}

/// Ranked output of a recommend call.
///
/// Model implementations may return scored pairs or a bare index list;
/// callers must accept both shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    Scored(Vec<(usize, f32)>),
    Plain(Vec<usize>),
}

impl Ranking {
    /// Collapses either shape into the ranked index list, best first
    pub fn into_indices(self) -> Vec<usize> {
        match self {
            Ranking::Scored(pairs) => pairs.into_iter().map(|(index, _)| index).collect(),
            Ranking::Plain(indices) => indices,
        }
    }
}

/// A pre-trained item-similarity model.
///
/// The service treats the model as a black box: hand it an indicator vector
/// over the item vocabulary, get back a ranked list of other items. Indices
/// are internal; translation to game ids happens in the pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait SimilarityModel: Send + Sync {
    /// Number of items the model knows about
    fn vocabulary(&self) -> usize;

    /// Returns up to `count` item indices ranked best-first, never including
    /// any index listed in `exclude`.
    fn recommend(
        &self,
        indicator: &[f32],
        count: usize,
        exclude: &[usize],
    ) -> Result<Ranking, ModelError>;
}

/// Item-factor model produced by offline alternating-least-squares training.
///
/// Scores candidates by the dot product between each item's factor row and
/// the profile accumulated from the indicator vector.
pub struct AlsModel {
    factors: Vec<Vec<f32>>,
}

impl AlsModel {
    pub fn new(factors: Vec<Vec<f32>>) -> Self {
        Self { factors }
    }
}

impl SimilarityModel for AlsModel {
    fn vocabulary(&self) -> usize {
        self.factors.len()
    }

    fn recommend(
        &self,
        indicator: &[f32],
        count: usize,
        exclude: &[usize],
    ) -> Result<Ranking, ModelError> {
        if self.factors.is_empty() {
            return Err(ModelError::Empty);
        }
        if indicator.len() != self.factors.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.factors.len(),
                got: indicator.len(),
            });
        }
        let width = self.factors[0].len();
        if self.factors.iter().any(|row| row.len() != width) {
            return Err(ModelError::RaggedFactors);
        }

        // Profile = weighted sum of the factor rows active in the indicator
        let mut profile = vec![0.0f32; width];
        let mut active = 0usize;
        for (index, weight) in indicator.iter().enumerate() {
            if *weight == 0.0 {
                continue;
            }
            active += 1;
            for (slot, value) in profile.iter_mut().zip(&self.factors[index]) {
                *slot += weight * value;
            }
        }
        if active == 0 {
            return Err(ModelError::EmptyIndicator);
        }

        let excluded: HashSet<usize> = exclude.iter().copied().collect();
        let mut scored: Vec<(usize, f32)> = self
            .factors
            .iter()
            .enumerate()
            .filter(|(index, _)| !excluded.contains(index))
            .map(|(index, row)| {
                let score: f32 = row.iter().zip(&profile).map(|(a, b)| a * b).sum();
                (index, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(count);

        Ok(Ranking::Scored(scored))
    }
}

/// Loaded model plus the id translation tables it was trained with
pub struct ModelBundle {
    pub model: Arc<dyn SimilarityModel>,
    pub game_index: HashMap<GameId, usize>,
    pub index_game: HashMap<usize, GameId>,
}

impl ModelBundle {
    /// Wires an artifact's model section to the ALS implementation
    pub fn from_section(section: ModelSection) -> Self {
        Self {
            model: Arc::new(AlsModel::new(section.factors)),
            game_index: section.game_index,
            index_game: section.index_game,
        }
    }
}
