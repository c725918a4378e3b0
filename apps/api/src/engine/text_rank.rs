//! Text-similarity ranking: term-frequency vectors over lowercase
//! alphanumeric tokens, compared with cosine similarity.
//!
//! The representation is deliberately simple and fully deterministic:
//! identical inputs always produce identical rankings, which the API's
//! idempotence guarantee relies on.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::catalogue::index::{tokenize, CatalogueIndex};
use crate::engine::query::RankedResult;
use crate::errors::AppError;

/// Ranks the catalogue against free text. `top_n` arrives already clamped
/// into [5, 10] by the caller. Fails with `EmptyQuery` if the text trims
/// to nothing.
pub fn rank_text(
    index: &CatalogueIndex,
    text: &str,
    top_n: usize,
) -> Result<Vec<RankedResult>, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyQuery);
    }

    let query_tf = term_frequencies(&tokenize(text));

    let mut results: Vec<RankedResult> = index
        .all()
        .iter()
        .map(|item| {
            let item_tf = term_frequencies(&tokenize(&item.combined_text()));
            RankedResult::from_similarity(item, cosine_similarity(&query_tf, &item_tf))
        })
        .collect();

    // Stable sort: equal similarities keep catalogue insertion order.
    results.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(top_n);
    Ok(results)
}

fn term_frequencies(tokens: &[String]) -> HashMap<String, f64> {
    let mut tf = HashMap::new();
    for token in tokens {
        *tf.entry(token.clone()).or_insert(0.0) += 1.0;
    }
    tf
}

/// Cosine similarity between two term-frequency vectors, in [0, 1].
/// Zero vectors compare as 0 rather than dividing by zero.
fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(token, weight)| b.get(token).map(|w| weight * w))
        .sum();
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::models::tests::sample_assessment;
    use crate::catalogue::models::Assessment;

    fn catalogue() -> CatalogueIndex {
        let mut sales = sample_assessment("SALES");
        sales.name = "Sales Aptitude Test".to_string();
        sales.description = "Measures persuasion and negotiation skills for sales roles".to_string();
        sales.competencies = vec!["persuasion".to_string(), "negotiation".to_string()];

        let mut cognitive = sample_assessment("COG");
        cognitive.name = "Numerical Reasoning".to_string();
        cognitive.description = "Numerical and logical reasoning under time pressure".to_string();
        cognitive.competencies = vec!["numerical reasoning".to_string()];

        let mut filler: Vec<Assessment> = (0..10)
            .map(|i| {
                let mut a = sample_assessment(&format!("F{i}"));
                a.description = "General workplace behaviour questionnaire".to_string();
                a
            })
            .collect();

        let mut items = vec![sales, cognitive];
        items.append(&mut filler);
        CatalogueIndex::load(items).unwrap()
    }

    #[test]
    fn test_empty_text_is_an_error() {
        let index = catalogue();
        assert!(matches!(
            rank_text(&index, "   \n\t ", 5),
            Err(AppError::EmptyQuery)
        ));
    }

    #[test]
    fn test_most_similar_item_ranks_first() {
        let index = catalogue();
        let results =
            rank_text(&index, "hiring for sales, need persuasion and negotiation", 5).unwrap();
        assert_eq!(results[0].id, "SALES");
        assert!(results[0].similarity.unwrap() > results[1].similarity.unwrap());
    }

    #[test]
    fn test_similarity_within_unit_interval() {
        let index = catalogue();
        let results = rank_text(&index, "numerical reasoning test", 10).unwrap();
        for r in &results {
            let s = r.similarity.unwrap();
            assert!((0.0..=1.0).contains(&s), "similarity {s} out of range");
        }
    }

    #[test]
    fn test_rank_text_is_deterministic() {
        let index = catalogue();
        let text = "looking for a leadership assessment for managers";
        let first = rank_text(&index, text, 8).unwrap();
        let second = rank_text(&index, text, 8).unwrap();
        let ids = |rs: &[RankedResult]| rs.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_truncates_to_top_n() {
        let index = catalogue();
        assert_eq!(rank_text(&index, "assessment", 5).unwrap().len(), 5);
        assert_eq!(rank_text(&index, "assessment", 10).unwrap().len(), 10);
    }

    #[test]
    fn test_ties_keep_catalogue_order() {
        let index = catalogue();
        // matches the identical filler descriptions equally
        let results = rank_text(&index, "general workplace behaviour questionnaire", 10).unwrap();
        let filler_ids: Vec<&str> = results
            .iter()
            .filter(|r| r.id.starts_with('F'))
            .map(|r| r.id.as_str())
            .collect();
        let mut sorted = filler_ids.clone();
        sorted.sort_by_key(|id| id[1..].parse::<u32>().unwrap());
        assert_eq!(filler_ids, sorted);
    }

    #[test]
    fn test_identical_text_scores_full_similarity() {
        let index = catalogue();
        let item_text = index.get("COG").unwrap().combined_text();
        let results = rank_text(&index, &item_text, 5).unwrap();
        assert_eq!(results[0].id, "COG");
        assert!((results[0].similarity.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let empty = HashMap::new();
        let mut some = HashMap::new();
        some.insert("sales".to_string(), 2.0);
        assert_eq!(cosine_similarity(&empty, &some), 0.0);
    }
}
