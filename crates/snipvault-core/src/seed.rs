use crate::builder::{SnippetDraft, build};
use crate::models::snippet::Snippet;

const DEBOUNCE_HOOK: &str = r"import { useEffect, useState } from 'react';

export function useDebounce(value, delay = 250) {
  const [debounced, setDebounced] = useState(value);
  useEffect(() => {
    const t = setTimeout(() => setDebounced(value), delay);
    return () => clearTimeout(t);
  }, [value, delay]);
  return debounced;
}";

const SQL_UPSERT: &str = r"INSERT INTO table_name (id, value)
VALUES ($1, $2)
ON CONFLICT (id) DO UPDATE
SET value = EXCLUDED.value;";

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Starter collection for a store that holds nothing usable.
pub fn seed_snippets() -> Vec<Snippet> {
    vec![
        build(SnippetDraft {
            name: "React useDebounce Hook".to_string(),
            description: Some("Lightweight debounce for inputs".to_string()),
            code: DEBOUNCE_HOOK.to_string(),
            key_terms: terms(&["react", "hooks", "debounce"]),
            language: Some("JavaScript".to_string()),
        }),
        build(SnippetDraft {
            name: "SQL Upsert Template".to_string(),
            description: Some("Basic Postgres upsert statement".to_string()),
            code: SQL_UPSERT.to_string(),
            key_terms: terms(&["postgres", "sql", "upsert"]),
            language: Some("SQL".to_string()),
        }),
    ]
}
