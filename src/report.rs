use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

/// Converted steps of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    // position in the documents array
    pub index: usize,
    pub code: Option<String>,
    pub steps: Vec<String>,
}

/// Outcome of one conversion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub documents_seen: usize,
    pub converted_steps: usize,
    pub documents: Vec<DocumentReport>,
}

impl ConversionReport {
    /// Adds a document's converted step ids; documents with none are not listed.
    pub fn record(&mut self, index: usize, code: Option<String>, steps: Vec<String>) {
        if steps.is_empty() {
            return;
        }
        self.converted_steps += steps.len();
        self.documents.push(DocumentReport { index, code, steps });
    }

    pub fn documents_modified(&self) -> usize {
        self.documents.len()
    }

    /// Totals plus the first `limit` modified documents, to the run log.
    pub fn log_summary(&self, limit: usize) {
        info!("=== SUMMARY ===");
        info!("Documents seen: {}", self.documents_seen);
        info!("Total steps converted: {}", self.converted_steps);
        info!("Documents modified: {}", self.documents_modified());

        for doc in self.documents.iter().take(limit) {
            let label = doc
                .code
                .clone()
                .unwrap_or_else(|| format!("#{}", doc.index));
            info!("  {label}: {} steps ({})", doc.steps.len(), doc.steps.join(", "));
        }
        if self.documents.len() > limit {
            info!("  ... and {} more documents", self.documents.len() - limit);
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let pretty = serde_json::to_string_pretty(self)?;
        fs::write(path, pretty).with_context(|| format!("writing report {}", path.display()))
    }
}
