#![allow(dead_code)]

//! Offline ranking-quality helpers: Recall@K over labeled queries.
//!
//! Recall@K for one query = (# relevant ids in the top K predictions) /
//! (total relevant ids). MeanRecall@K averages over all labeled queries.

use std::collections::HashSet;

use crate::engine::query::TextQuery;
use crate::engine::RecommendationEngine;
use crate::errors::AppError;

/// One labeled evaluation query: free text plus the ids judged relevant.
#[derive(Debug, Clone)]
pub struct LabeledQuery {
    pub text: String,
    pub relevant_ids: HashSet<String>,
}

/// Recall@K for a single query's predicted id list.
pub fn recall_at_k(predicted_ids: &[String], relevant_ids: &HashSet<String>, k: usize) -> f64 {
    if relevant_ids.is_empty() {
        return 0.0;
    }
    let hits = predicted_ids
        .iter()
        .take(k)
        .filter(|id| relevant_ids.contains(id.as_str()))
        .count();
    hits as f64 / relevant_ids.len() as f64
}

/// MeanRecall@K of the text ranker over a labeled query set.
pub fn mean_recall_at_k(
    engine: &RecommendationEngine,
    labeled: &[LabeledQuery],
    k: usize,
) -> Result<f64, AppError> {
    if labeled.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for query in labeled {
        let results = engine.recommend_from_text(&TextQuery {
            text: query.text.clone(),
            top_n: k,
        })?;
        let predicted: Vec<String> = results.into_iter().map(|r| r.id).collect();
        total += recall_at_k(&predicted, &query.relevant_ids, k);
    }
    Ok(total / labeled.len() as f64)
}
