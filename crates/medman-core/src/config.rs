//! Application configuration: the closed unit set, the all-units sentinel,
//! and the name validation policy. Stored as YAML next to the data file;
//! a missing config file means defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Closed set of accepted unit labels. Product configuration, not logic.
    pub units: Vec<String>,
    /// Sentinel value of the unit filter that matches every unit.
    pub all_units_label: String,
    pub name_policy: NamePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            units: ["cm", "mm", "m", "in", "kg"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            all_units_label: "Todas".to_string(),
            name_policy: NamePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamePolicy {
    pub min_chars: usize,
    pub max_chars: usize,
    /// Restrict names to letters (ASCII plus accented Latin) and spaces.
    pub letters_and_spaces_only: bool,
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            min_chars: 1,
            max_chars: 15,
            letters_and_spaces_only: true,
        }
    }
}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    /// An unreadable or malformed config file is an error: silently
    /// ignoring it would change which units are accepted.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
