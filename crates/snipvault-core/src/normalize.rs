/// Canonicalize code text for display and comparison.
///
/// Trims the whole text, strips trailing whitespace from every line while
/// keeping indentation, drops blank lines at either end, and joins with
/// `\n`. Whitespace-only input yields `""`, which callers treat as "no code".
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = trimmed.split('\n').map(str::trim_end).collect();
    let start = lines.iter().position(|line| !line.is_empty()).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(start, |last| last + 1);

    lines[start..end].join("\n")
}
