//! Query Sources
//!
//! Where the SQL text comes from: an inline string, a file, or stdin.

use crate::error::{Result, ScanError};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl QuerySource {
    /// Short label used in report headers
    pub fn label(&self) -> Option<String> {
        match self {
            QuerySource::Inline(_) => None,
            QuerySource::File(path) => Some(path.display().to_string()),
            QuerySource::Stdin => Some("<stdin>".to_string()),
        }
    }

    /// Load the raw query text. Empty input is returned as an empty string.
    pub fn read(&self) -> Result<String> {
        match self {
            QuerySource::Inline(sql) => Ok(sql.clone()),
            QuerySource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| ScanError::Io {
                    path: path.clone(),
                    source,
                })
            }
            QuerySource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(ScanError::Stdin)?;
                Ok(buffer)
            }
        }
    }
}

/// Inline query first, then files in order; stdin when neither is given.
pub fn collect_sources(files: Vec<PathBuf>, query: Option<String>) -> Vec<QuerySource> {
    let mut sources: Vec<QuerySource> = query.into_iter().map(QuerySource::Inline).collect();
    sources.extend(files.into_iter().map(QuerySource::File));
    if sources.is_empty() {
        sources.push(QuerySource::Stdin);
    }
    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_sources_falls_back_to_stdin() {
        assert_eq!(collect_sources(Vec::new(), None), vec![QuerySource::Stdin]);
    }

    #[test]
    fn test_collect_sources_query_before_files() {
        let sources = collect_sources(
            vec![PathBuf::from("a.sql"), PathBuf::from("b.sql")],
            Some("SELECT 1".to_string()),
        );
        assert_eq!(
            sources,
            vec![
                QuerySource::Inline("SELECT 1".to_string()),
                QuerySource::File(PathBuf::from("a.sql")),
                QuerySource::File(PathBuf::from("b.sql")),
            ]
        );
    }

    #[test]
    fn test_inline_source() {
        let source = QuerySource::Inline("SELECT 1".to_string());
        assert_eq!(source.label(), None);
        assert_eq!(source.read().unwrap(), "SELECT 1");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let source = QuerySource::File(PathBuf::from("/nonexistent/query.sql"));
        let err = source.read().unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/query.sql"));
    }
}
