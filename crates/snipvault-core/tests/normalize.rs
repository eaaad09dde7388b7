use snipvault_core::normalize::normalize;

#[test]
fn trims_outer_whitespace_and_trailing_spaces() {
    assert_eq!(normalize("\n  const x = 1;   \n\n"), "const x = 1;");
}

#[test]
fn whitespace_only_is_empty() {
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("\n\t \r\n"), "");
    assert_eq!(normalize(""), "");
}

#[test]
fn keeps_indentation_of_inner_lines() {
    let raw = "fn main() {   \n    let x = 1;\t\n}\n";
    assert_eq!(normalize(raw), "fn main() {\n    let x = 1;\n}");
}

#[test]
fn keeps_inner_blank_lines() {
    let raw = "a\n\n   \nb";
    assert_eq!(normalize(raw), "a\n\n\nb");
}

#[test]
fn strips_carriage_returns_at_line_ends() {
    assert_eq!(normalize("a\r\nb\r\n"), "a\nb");
}

#[test]
fn is_idempotent() {
    let inputs = [
        "",
        "   ",
        "x",
        "\n\n  indented  \n\n",
        "a  \n  b\t\n\n  c \r\n",
        "  def foo():\n      return 1   \n",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input: {input:?}");
    }
}
