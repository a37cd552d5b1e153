//! Query Normalization
//!
//! Comment stripping and whitespace collapsing ahead of tokenization.
//! Comment markers inside string literals are not recognised: `'--'` in a
//! literal still starts a line comment.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    static ref LINE_COMMENT: Regex = Regex::new(r"(?m)--.*?$").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Remove `/* ... */` block comments (may span lines) and `-- ...` line comments.
///
/// Block comments go first, so a `--` inside a block comment never eats
/// the rest of the line that follows the closing `*/`.
pub fn strip_comments(sql: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(sql, "");
    LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}

/// Collapse every whitespace run (newlines included) into a single space.
pub fn collapse_whitespace(sql: &str) -> String {
    WHITESPACE_RUN.replace_all(sql, " ").into_owned()
}

pub fn normalize(sql: &str) -> String {
    collapse_whitespace(&strip_comments(sql))
}

/// Split normalized text into whitespace-separated tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
