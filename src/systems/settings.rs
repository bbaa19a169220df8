use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, ToolSetError};

// ============================================================
// TOOL SETTINGS — Immutable snapshot of the relevant toggles
// ============================================================

/// Block sets hold block ids (see `Block::block_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub use_mending: bool,
    pub use_mending_on: HashSet<String>,
    pub use_silk_touch: bool,
    pub use_silk_touch_on: HashSet<String>,
    pub use_fortune: bool,
    pub use_fortune_on: HashSet<String>,
    /// Prefer the least enchanted of equally good tools
    pub eco: bool,
    pub blocks_to_avoid_breaking: HashSet<String>,
    pub consider_potion_effects: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            use_mending: false,
            use_mending_on: HashSet::new(),
            use_silk_touch: false,
            use_silk_touch_on: HashSet::new(),
            use_fortune: false,
            use_fortune_on: HashSet::new(),
            eco: false,
            blocks_to_avoid_breaking: HashSet::new(),
            consider_potion_effects: true,
        }
    }
}

impl ToolSettings {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| ToolSetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ToolSetError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load from disk, falling back to defaults when missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("[SETTINGS] {} not found, using defaults", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(settings) => {
                tracing::debug!("[SETTINGS] Loaded {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("[SETTINGS] {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn avoidance_multiplier(&self, block_id: &str) -> f64 {
        if self.blocks_to_avoid_breaking.contains(block_id) {
            0.1
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: ToolSettings =
            serde_json::from_str(r#"{ "use_silk_touch": true, "use_silk_touch_on": ["glass"] }"#)
                .unwrap();
        assert!(settings.use_silk_touch);
        assert!(settings.use_silk_touch_on.contains("glass"));
        assert!(!settings.eco);
        assert!(settings.consider_potion_effects);
    }

    #[test]
    fn test_avoidance_multiplier() {
        let mut settings = ToolSettings::default();
        settings.blocks_to_avoid_breaking.insert("chest".into());
        assert_eq!(settings.avoidance_multiplier("chest"), 0.1);
        assert_eq!(settings.avoidance_multiplier("stone"), 1.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("baritone_tools_missing_settings.json");
        let _ = fs::remove_file(&path);
        assert_eq!(ToolSettings::load_or_default(&path), ToolSettings::default());
    }

    #[test]
    fn test_broken_file_reports_path() {
        let path = std::env::temp_dir().join("baritone_tools_broken_settings.json");
        fs::write(&path, "{ not json").unwrap();
        let err = ToolSettings::from_file(&path).unwrap_err();
        assert!(matches!(err, ToolSetError::Json { .. }));
        assert_eq!(ToolSettings::load_or_default(&path), ToolSettings::default());
        let _ = fs::remove_file(&path);
    }
}
