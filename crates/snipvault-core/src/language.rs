//! Coarse language guessing from characteristic idioms.
//!
//! Best effort only. Rules are tried in order and the first match wins, so
//! text that is valid in several languages gets the earliest tag.

use std::sync::LazyLock;

use regex::Regex;

pub mod tag {
    pub const CPP: &str = "cpp";
    pub const JAVASCRIPT: &str = "javascript";
    pub const PYTHON: &str = "python";
    pub const JAVA: &str = "java";
    pub const SQL: &str = "sql";
    pub const RUST: &str = "rust";
}

const RULES: &[(&str, &str)] = &[
    // include-style header directive or scoped identifier
    (tag::CPP, r"(?m)^\s*#include\s+<.+?>|std::"),
    // function keyword, arrow functions, console printing
    (tag::JAVASCRIPT, r"function\s+\w+\(|=>|console\.log"),
    (tag::JAVASCRIPT, r"(?i)import\s+react"),
    // def keyword or self reference
    (tag::PYTHON, r"def\s+\w+\(|\bself\b"),
    (tag::JAVA, r"package\s+\w+;|public\s+class"),
    (tag::SQL, r"SELECT\s+.+FROM"),
    // fn keyword or mutable binding
    (tag::RUST, r"fn\s+\w+\(|let\s+mut"),
];

/// Compiled [`RULES`], in check order.
///
/// # Panics
///
/// Panics on first use if a rule pattern fails to compile. The patterns are
/// compile-time constants, so a panic indicates a bug in the rule table.
static COMPILED: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|&(tag, pattern)| {
            let re = Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid language pattern '{pattern}': {e}"));
            (tag, re)
        })
        .collect()
});

/// Guess a language tag for normalized code, or `None` if no idiom matches.
///
/// Only consulted when the caller did not name a language.
pub fn detect_language(code: &str) -> Option<&'static str> {
    COMPILED
        .iter()
        .find(|(_, re)| re.is_match(code))
        .map(|&(tag, _)| tag)
}
