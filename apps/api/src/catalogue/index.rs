//! In-memory catalogue index: id lookup, insertion order, and a lowercase
//! token index over each item's descriptive text.
//!
//! Insertion order is the canonical order for every downstream tie-break,
//! so `all()` must always return items exactly as the catalogue listed them.

use std::collections::HashMap;

use crate::catalogue::models::Assessment;
use crate::errors::AppError;

#[derive(Debug)]
pub struct CatalogueIndex {
    items: Vec<Assessment>,
    by_id: HashMap<String, usize>,
    /// lowercase token -> positions of items containing it
    tokens: HashMap<String, Vec<usize>>,
}

impl CatalogueIndex {
    /// Builds the index from the raw catalogue sequence. Fails on duplicate
    /// ids or malformed records — the engine must not serve with a partially
    /// loaded catalogue.
    pub fn load(items: Vec<Assessment>) -> Result<Self, AppError> {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut tokens: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, item) in items.iter().enumerate() {
            item.validate()?;
            if by_id.insert(item.id.clone(), pos).is_some() {
                return Err(AppError::DuplicateId(item.id.clone()));
            }
            for token in tokenize(&item.combined_text()) {
                let positions = tokens.entry(token).or_default();
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
        }

        Ok(Self {
            items,
            by_id,
            tokens,
        })
    }

    pub fn get(&self, id: &str) -> Result<&Assessment, AppError> {
        self.by_id
            .get(id)
            .map(|&pos| &self.items[pos])
            .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))
    }

    /// Full catalogue in insertion order.
    pub fn all(&self) -> &[Assessment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive search over name/description substrings and the
    /// token index. An empty term yields no results, never a full dump.
    /// Output follows catalogue insertion order.
    pub fn search(&self, term: &str) -> Vec<&Assessment> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        let mut matched = vec![false; self.items.len()];
        for (pos, item) in self.items.iter().enumerate() {
            if item.name.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term)
            {
                matched[pos] = true;
            }
        }
        if let Some(positions) = self.tokens.get(&term) {
            for &pos in positions {
                matched[pos] = true;
            }
        }

        self.items
            .iter()
            .enumerate()
            .filter(|(pos, _)| matched[*pos])
            .map(|(_, item)| item)
            .collect()
    }
}

/// Splits text into lowercase alphanumeric tokens. Shared with the
/// text-similarity ranker so both sides tokenize identically.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}
