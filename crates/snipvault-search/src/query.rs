use snipvault_core::models::snippet::Snippet;

/// Filter snippets by a search term and an optional language.
///
/// The term matches case-insensitively as a substring of the name, the
/// description or any key term; code is not searched. An empty term matches
/// everything. The language must match exactly; an empty language means no
/// filter. Both filters apply together and collection order is preserved.
pub fn search<'a>(snippets: &'a [Snippet], term: &str, language: Option<&str>) -> Vec<&'a Snippet> {
    let needle = term.to_lowercase();
    let language = language.filter(|lang| !lang.is_empty());
    snippets
        .iter()
        .filter(|s| needle.is_empty() || matches_term(s, &needle))
        .filter(|s| language.is_none_or(|lang| s.language() == Some(lang)))
        .collect()
}

fn matches_term(snippet: &Snippet, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(snippet.name())
        || snippet.description().is_some_and(contains)
        || snippet.key_terms().iter().any(|term| contains(term))
}

/// Distinct language tags in first-seen order. Untagged snippets are skipped.
pub fn all_languages(snippets: &[Snippet]) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for language in snippets.iter().filter_map(Snippet::language) {
        if !languages.iter().any(|seen| seen == language) {
            languages.push(language.to_string());
        }
    }
    languages
}
