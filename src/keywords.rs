use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Title fragments of steps that collect a person's data
/// (principal, attorney, spouse, spouse (f), applicant).
pub const PERSONAL_TITLES: [&str; 5] = ["Доверитель", "Поверенный", "Супруг", "Супруга", "Заявитель"];

/// Field-name fragments that mark identity data.
pub const PERSONAL_FIELDS: [&str; 6] = ["full_name", "iin", "iin_bin", "birth_date", "address", "document"];

/// Keyword lists behind the personal-data heuristic.
///
/// Can be overridden from a JSON file such as `{"titles": ["Заявитель"]}`; a section
/// missing from the file keeps its built-in list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keywords {
    pub titles: Vec<String>,
    pub fields: Vec<String>,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            titles: PERSONAL_TITLES.iter().map(|s| s.to_string()).collect(),
            fields: PERSONAL_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Keywords {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading keywords {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing keywords {}", path.display()))
    }

    // case-sensitive substring match
    pub fn matches_title(&self, title: &str) -> bool {
        self.titles.iter().any(|t| title.contains(t.as_str()))
    }

    /// Lower-cases `name` and looks for any field keyword inside it.
    pub fn matches_field_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.fields.iter().any(|f| name.contains(f.as_str()))
    }
}
