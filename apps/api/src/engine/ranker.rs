//! Structured ranking: exclude, score, stable-sort, truncate.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::catalogue::index::CatalogueIndex;
use crate::engine::query::{RankedResult, StructuredQuery};
use crate::engine::scoring::match_score;
use crate::errors::AppError;

/// Ranking behaviour toggles surfaced through configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankerOptions {
    /// When true, items over `max_duration_minutes` are removed before
    /// scoring. When false (the default) duration is only a scored
    /// dimension and over-long items still appear, ranked lower.
    pub duration_hard_filter: bool,
}

/// Ranks the catalogue against a structured query. Excluded ids are dropped
/// before scoring, so they never consume a slot in the truncated output.
/// A malformed record aborts the whole ranking rather than being skipped.
pub fn rank(
    index: &CatalogueIndex,
    query: &StructuredQuery,
    options: RankerOptions,
) -> Result<Vec<RankedResult>, AppError> {
    if query.top_n == 0 {
        return Err(AppError::Validation(
            "top_n must be at least 1".to_string(),
        ));
    }

    let exclude: HashSet<&str> = query
        .exclude_ids
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .collect();

    let mut results = Vec::new();
    for item in index.all() {
        if exclude.contains(item.id.as_str()) {
            continue;
        }
        if options.duration_hard_filter {
            if let Some(max) = query.max_duration_minutes {
                if item.duration_minutes > max {
                    continue;
                }
            }
        }
        item.validate()?;
        results.push(RankedResult::from_match(item, match_score(query, item)));
    }

    // Stable sort: equal scores keep catalogue insertion order.
    results.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(query.top_n);
    Ok(results)
}
