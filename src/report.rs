//! Table Reports
//!
//! Presentation of extraction results as plain text or JSON.

use crate::error::Result;
use crate::extractor::find_tables;
use crate::source::QuerySource;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReport {
    #[serde(default)]
    pub source: Option<String>,
    pub tables: Vec<String>,
}

impl TableReport {
    pub fn from_sql(source: Option<String>, sql: &str) -> Self {
        Self {
            source,
            tables: find_tables(sql),
        }
    }

    /// Read the query behind `source` and extract its tables.
    pub fn from_source(source: &QuerySource) -> Result<Self> {
        let sql = source.read()?;
        Ok(Self::from_sql(source.label(), &sql))
    }

    pub fn count(&self) -> usize {
        self.tables.len()
    }

    /// `Tables found:` header followed by one `- name` line per table
    pub fn render_text(&self) -> String {
        let mut out = match &self.source {
            Some(source) => format!("Tables found in {}:\n", source),
            None => "Tables found:\n".to_string(),
        };
        for table in &self.tables {
            out.push_str("- ");
            out.push_str(table);
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Union of several reports; the merged report carries no source label.
pub fn merge(reports: &[TableReport]) -> TableReport {
    let tables: BTreeSet<&String> = reports.iter().flat_map(|r| r.tables.iter()).collect();
    TableReport {
        source: None,
        tables: tables.into_iter().cloned().collect(),
    }
}

/// Render the reports for several sources.
///
/// A single report, or any set with `merge_all`, prints as one report. Otherwise
/// text reports are concatenated and JSON becomes an array of reports.
pub fn render_reports(
    mut reports: Vec<TableReport>,
    format: OutputFormat,
    merge_all: bool,
) -> Result<String> {
    if merge_all || reports.len() == 1 {
        let combined = if merge_all { merge(&reports) } else { reports.remove(0) };
        return match format {
            OutputFormat::Text => Ok(combined.render_text()),
            OutputFormat::Json => Ok(format!("{}\n", combined.render_json()?)),
        };
    }

    match format {
        OutputFormat::Text => Ok(reports.iter().map(TableReport::render_text).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&reports)?)),
    }
}
