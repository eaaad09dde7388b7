use std::collections::HashMap;

use serde::Serialize;
use snipvault_core::models::snippet::Snippet;
use ts_rs::TS;

/// Number of snippets carrying one language tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

/// Per-language snippet counts, most used first. Ties are ordered by name
/// ignoring case, then by exact name.
pub fn language_stats(snippets: &[Snippet]) -> Vec<LanguageCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for language in snippets.iter().filter_map(Snippet::language) {
        *counts.entry(language).or_default() += 1;
    }

    let mut stats: Vec<LanguageCount> = counts
        .into_iter()
        .map(|(language, count)| LanguageCount {
            language: language.to_string(),
            count,
        })
        .collect();
    stats.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.language.to_lowercase().cmp(&b.language.to_lowercase()))
            .then_with(|| a.language.cmp(&b.language))
    });
    stats
}
