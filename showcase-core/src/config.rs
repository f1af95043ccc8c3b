use std::collections::BTreeMap;

use serde::Deserialize;

use crate::constants::DEFAULT_LINK_LABEL;
use crate::error::{Result, ShowcaseError};

/// Runtime settings a host page may inject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// Category tag to badge label. Categories without a label get no badge.
    pub category_labels: BTreeMap<String, String>,
    pub default_link_label: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        let category_labels = [
            ("web", "Web Platform"),
            ("design", "Design"),
            ("3d", "3D & Motion"),
            ("game", "Game Assets"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        ShowcaseConfig {
            category_labels,
            default_link_label: DEFAULT_LINK_LABEL.to_string(),
        }
    }
}

// Host overrides; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Overrides {
    category_labels: BTreeMap<String, String>,
    default_link_label: Option<String>,
}

impl ShowcaseConfig {
    /// Parse host overrides and layer them over the defaults.
    ///
    /// Labels merge with the built-in table, so a host can add a category
    /// or blank out an existing one with an empty string.
    pub fn from_json(text: &str) -> Result<Self> {
        let overrides: Overrides =
            serde_json::from_str(text).map_err(|e| ShowcaseError::Config(e.to_string()))?;
        let mut config = ShowcaseConfig::default();
        config.category_labels.extend(overrides.category_labels);
        if let Some(label) = overrides.default_link_label.filter(|l| !l.trim().is_empty()) {
            config.default_link_label = label;
        }
        Ok(config)
    }

    pub fn category_label(&self, category: &str) -> Option<&str> {
        self.category_labels
            .get(category)
            .map(String::as_str)
            .filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_labels() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.category_label("3d"), Some("3D & Motion"));
        assert_eq!(config.category_label("music"), None);
    }

    #[test]
    fn overrides_merge_with_defaults() {
        let config = ShowcaseConfig::from_json(
            r#"{"category_labels": {"music": "Sound", "design": ""}, "default_link_label": "Open"}"#,
        )
        .unwrap();
        assert_eq!(config.category_label("music"), Some("Sound"));
        assert_eq!(config.category_label("design"), None);
        assert_eq!(config.category_label("web"), Some("Web Platform"));
        assert_eq!(config.default_link_label, "Open");
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(matches!(
            ShowcaseConfig::from_json("{not json"),
            Err(ShowcaseError::Config(_))
        ));
        assert_eq!(ShowcaseConfig::from_json("{}").unwrap(), ShowcaseConfig::default());
    }
}
