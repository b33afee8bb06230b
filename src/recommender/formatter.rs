use crate::catalog::GameCatalog;
use crate::models::{GameId, Platform, ResultRecord};

/// Formats ranked candidate ids into display records.
///
/// The first pass honors the platform preference; if it comes up short a
/// second pass tops the list up from the same ranking while ignoring the
/// platform, skipping titles already included. Ids without a catalog entry
/// are skipped in both passes.
pub fn format_results(
    catalog: &GameCatalog,
    ranked: &[GameId],
    platform: Platform,
    limit: usize,
) -> Vec<ResultRecord> {
    let mut records: Vec<ResultRecord> = Vec::new();

    for id in ranked {
        if records.len() >= limit {
            break;
        }
        let entry = match catalog.get(*id) {
            Some(entry) => entry,
            None => continue,
        };
        if !entry.supports(platform) {
            continue;
        }
        records.push(ResultRecord::from(entry));
    }

    if records.len() < limit {
        tracing::debug!(
            matched = records.len(),
            limit,
            "Short list after platform pass, topping up without the filter"
        );
        for id in ranked {
            if records.len() >= limit {
                break;
            }
            let entry = match catalog.get(*id) {
                Some(entry) => entry,
                None => continue,
            };
            if records.iter().any(|record| record.title == entry.title) {
                continue;
            }
            records.push(ResultRecord::from(entry));
        }
    }

    records
}
