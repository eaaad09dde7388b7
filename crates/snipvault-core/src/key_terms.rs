/// Split a comma-separated tag string into unique, trimmed terms.
///
/// Empty terms are dropped. Duplicates are matched exactly (case-sensitive)
/// and the first occurrence wins, so input order is preserved.
pub fn format_key_terms(raw: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !terms.iter().any(|existing| existing == term) {
            terms.push(term.to_string());
        }
    }
    terms
}
