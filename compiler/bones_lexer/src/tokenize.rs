//! Whitespace-run tokenization of a single statement.

/// Split one statement's text into whitespace-delimited tokens.
///
/// Leading and trailing whitespace is ignored and any run of whitespace
/// separates two tokens. All-whitespace input yields no tokens, which the
/// dispatcher treats as a no-op statement.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
