//! Table Reference Extractor
//!
//! Lexical scan for table names following `FROM` and `JOIN`. There is no
//! SQL parser behind this: only the token immediately after each clause
//! keyword is considered, so aliases, comma-separated lists after a single
//! `FROM`, and quoted identifiers containing spaces are not reassembled.

use crate::normalize::{normalize, tokenize};
use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, trace};

/// Words that, right after `FROM`/`JOIN`, mean the next token is not a table.
pub const STOP_KEYWORDS: [&str; 23] = [
    "select", "where", "group", "order", "having", "limit", "offset",
    "on", "and", "or", "as", "case", "when", "then", "else", "end",
    "left", "right", "inner", "outer", "full", "cross", "union",
];

lazy_static! {
    static ref DEFAULT_EXTRACTOR: TableExtractor = TableExtractor::default();
}

/// Extract the sorted, deduplicated table names referenced by `sql`.
pub fn find_tables(sql: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(sql)
}

/// Strip the trailing run of `,` and `;` from a candidate token.
///
/// Interior punctuation is kept: `a,b` stays `a,b`, not `ab`.
pub fn clean_table_name(token: &str) -> &str {
    token.trim_end_matches(|c: char| c == ',' || c == ';')
}

#[derive(Debug, Clone)]
pub struct TableExtractor {
    /// Lowercase words that disqualify the token after `FROM`/`JOIN`
    pub stop_keywords: HashSet<String>,
}

impl Default for TableExtractor {
    fn default() -> Self {
        Self::with_stop_keywords(STOP_KEYWORDS)
    }
}

impl TableExtractor {
    /// Build an extractor with a custom stop-keyword set.
    ///
    /// Keywords are lowercased on the way in; matching is case-insensitive.
    pub fn with_stop_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True for `FROM` / `JOIN` in any casing.
    pub fn is_clause_keyword(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        lower == "from" || lower == "join"
    }

    pub fn is_stop_keyword(&self, token: &str) -> bool {
        self.stop_keywords.contains(&token.to_lowercase())
    }

    /// Judge the token following a clause keyword.
    ///
    /// Returns the cleaned table name, or `None` when the token is a stop
    /// keyword or opens a subquery. A token made only of `,`/`;` yields `""`.
    fn candidate<'a>(&self, token: &'a str) -> Option<&'a str> {
        if self.is_stop_keyword(token) {
            trace!("Skipping stop keyword after clause: {}", token);
            return None;
        }
        if token.starts_with('(') {
            trace!("Skipping subquery opener: {}", token);
            return None;
        }
        Some(clean_table_name(token))
    }

    /// Run the full scan: strip comments, normalize, tokenize, look ahead.
    pub fn extract(&self, sql: &str) -> Vec<String> {
        let normalized = normalize(sql);
        let tokens = tokenize(&normalized);

        let mut tables: BTreeSet<String> = BTreeSet::new();
        for pair in tokens.windows(2) {
            let (keyword, next) = (pair[0], pair[1]);
            if !self.is_clause_keyword(keyword) {
                continue;
            }
            if let Some(table) = self.candidate(next) {
                trace!("Table candidate after {}: {}", keyword, table);
                tables.insert(table.to_string());
            }
        }

        debug!(
            "Scanned {} tokens, found {} distinct tables",
            tokens.len(),
            tables.len()
        );
        tables.into_iter().collect()
    }
}
