use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::document::Document;

/// Where the documents live relative to the project root.
pub const DEFAULT_DOCUMENTS_PATH: &str = "src/data/documents.json";

// Top level must be an array of objects; anything else is a parse error.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let docs: Vec<Document> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {} as a JSON array of documents", path.display()))?;
    info!("Loaded {} documents from {}", docs.len(), path.display());
    Ok(docs)
}

/// Overwrites `path` with the documents, two-space indented, non-ASCII left unescaped.
///
/// Not atomic: a failure midway leaves a truncated file behind.
pub fn save_documents(path: &Path, docs: &[Document]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, docs)
        .with_context(|| format!("writing {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    info!("Saved {} documents to {}", docs.len(), path.display());
    Ok(())
}
