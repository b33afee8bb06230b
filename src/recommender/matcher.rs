use std::collections::BTreeSet;

use crate::catalog::GameCatalog;
use crate::models::{GameEntry, GameId};

/// Scores every eligible catalog entry against the tag set.
///
/// An entry's score is the number of requested tags appearing as a
/// case-insensitive substring of its tag field; zero-score entries are
/// dropped. The result is sorted by descending score, and the stable sort
/// keeps catalog order among equal scores.
pub fn ranked_matches<F>(
    catalog: &GameCatalog,
    tags: &BTreeSet<String>,
    mut eligible: F,
) -> Vec<GameId>
where
    F: FnMut(&GameEntry) -> bool,
{
    let mut scored: Vec<(GameId, usize)> = catalog
        .iter()
        .filter(|entry| !entry.tags.is_empty() && eligible(entry))
        .filter_map(|entry| {
            let haystack = entry.tags.to_lowercase();
            let score = tags
                .iter()
                .filter(|tag| haystack.contains(tag.as_str()))
                .count();
            (score > 0).then_some((entry.id, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(id, _)| id).collect()
}

/// Returns the top `limit` tag-matched ids with no eligibility filtering
pub fn match_tags(catalog: &GameCatalog, tags: &BTreeSet<String>, limit: usize) -> Vec<GameId> {
    let mut matches = ranked_matches(catalog, tags, |_| true);
    matches.truncate(limit);
    matches
}
