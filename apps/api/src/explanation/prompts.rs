//! Prompt building for the explanation provider. The prompt is fully
//! deterministic for a given query and ranked list.

use crate::engine::query::RankedResult;

const PROMPT_HEADER: &str = "You are an assistant that explains assessment recommendations.";

const PROMPT_INSTRUCTION: &str = "Explain in 3-5 concise bullet points why these assessments \
    are a good fit for this query. Focus on skills, competencies, and use cases.";

/// Builds the explanation prompt: the query text followed by each ranked
/// item's name, score, url, and description, numbered in rank order.
pub fn build_explanation_prompt(query_text: &str, results: &[RankedResult]) -> String {
    let mut lines = Vec::new();
    lines.push(PROMPT_HEADER.to_string());
    lines.push("User query or job description:".to_string());
    lines.push(query_text.trim().to_string());
    lines.push(String::new());
    lines.push("Recommended assessments:".to_string());

    for (idx, result) in results.iter().enumerate() {
        lines.push(format!("{}. {}", idx + 1, result.name));
        if result.similarity.is_some() {
            lines.push(format!("   Similarity: {:.2}", result.score()));
        } else if result.match_score.is_some() {
            lines.push(format!("   Match score: {:.2}", result.score()));
        }
        if let Some(url) = &result.url {
            lines.push(format!("   URL: {url}"));
        }
        if !result.description.is_empty() {
            lines.push(format!("   Description: {}", result.description));
        }
    }

    lines.push(String::new());
    lines.push(PROMPT_INSTRUCTION.to_string());
    lines.join("\n")
}
