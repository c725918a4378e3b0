// Recommendation engine: scoring, ranking, and text similarity over the
// immutable catalogue. The engine is read-only and per-request stateless;
// handlers share it behind an Arc without locking.

pub mod eval;
pub mod handlers;
pub mod query;
pub mod ranker;
pub mod scoring;
pub mod text_rank;

use crate::catalogue::index::CatalogueIndex;
use crate::catalogue::models::Assessment;
use crate::engine::query::{RankedResult, StructuredQuery, TextQuery};
use crate::engine::ranker::RankerOptions;
use crate::errors::AppError;

/// The core engine. Owns the catalogue index for the process lifetime and
/// exposes every operation the front ends need.
pub struct RecommendationEngine {
    catalogue: CatalogueIndex,
    options: RankerOptions,
}

impl RecommendationEngine {
    pub fn new(catalogue: CatalogueIndex, options: RankerOptions) -> Self {
        Self { catalogue, options }
    }

    pub fn list_all(&self) -> &[Assessment] {
        self.catalogue.all()
    }

    pub fn get_by_id(&self, id: &str) -> Result<&Assessment, AppError> {
        self.catalogue.get(id)
    }

    pub fn search(&self, term: &str) -> Vec<&Assessment> {
        self.catalogue.search(term)
    }

    pub fn recommend(&self, query: &StructuredQuery) -> Result<Vec<RankedResult>, AppError> {
        ranker::rank(&self.catalogue, query, self.options)
    }

    /// Text-based recommendation. The requested count is clamped into
    /// [5, 10] here, at the engine boundary, before ranking.
    pub fn recommend_from_text(&self, query: &TextQuery) -> Result<Vec<RankedResult>, AppError> {
        text_rank::rank_text(&self.catalogue, &query.text, query.clamped_top_n())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::models::tests::sample_assessment;

    fn engine_with(n: usize) -> RecommendationEngine {
        let items = (0..n).map(|i| sample_assessment(&format!("A{i}"))).collect();
        RecommendationEngine::new(
            CatalogueIndex::load(items).unwrap(),
            RankerOptions::default(),
        )
    }

    #[test]
    fn test_recommend_from_text_clamps_low_request_to_5() {
        let engine = engine_with(12);
        let results = engine
            .recommend_from_text(&TextQuery {
                text: "sample assessment".to_string(),
                top_n: 2,
            })
            .unwrap();
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_recommend_from_text_clamps_high_request_to_10() {
        let engine = engine_with(12);
        let results = engine
            .recommend_from_text(&TextQuery {
                text: "sample assessment".to_string(),
                top_n: 50,
            })
            .unwrap();
        assert_eq!(results.len(), 10);
    }

    #[test]
    fn test_engine_surface_delegates() {
        let engine = engine_with(3);
        assert_eq!(engine.list_all().len(), 3);
        assert_eq!(engine.get_by_id("A1").unwrap().id, "A1");
        assert!(engine.get_by_id("missing").is_err());
        assert!(engine.search("").is_empty());
        assert_eq!(engine.search("sample").len(), 3);
    }

    #[test]
    fn test_mean_recall_over_engine() {
        let engine = engine_with(6);
        let labeled = vec![eval::LabeledQuery {
            text: "sample assessment".to_string(),
            relevant_ids: ["A0".to_string()].into_iter().collect(),
        }];
        // A0 is always within the top 5 of a 6-item catalogue
        let recall = eval::mean_recall_at_k(&engine, &labeled, 5).unwrap();
        assert_eq!(recall, 1.0);
    }
}
