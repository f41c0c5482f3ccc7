//! Formatter configuration.
//!
//! Covers the knobs that are presentation policy rather than per-print
//! state: whether escape codes are emitted, progress-bar geometry, and
//! separator defaults. Configs can be built programmatically or loaded
//! from YAML; every field defaults, so partial documents work.
//!
//! # Example
//!
//! ```rust
//! use scrawl::{ScrawlConfig, StylingChoice};
//!
//! let config = ScrawlConfig::from_yaml(r#"
//! styling: never
//! bar:
//!   width: 20
//! "#).unwrap();
//!
//! assert_eq!(config.styling, StylingChoice::Never);
//! assert_eq!(config.bar.width, 20);
//! assert_eq!(config.rule.width, 25);
//! ```

use serde::{Deserialize, Serialize};

use scrawl_render::StylingChoice;

use crate::error::{Result, ScrawlError};

/// Formatter-wide presentation policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrawlConfig {
    /// When escape codes are emitted. Defaults to `Always`, matching a
    /// formatter that never validates stream capabilities.
    pub styling: StylingChoice,
    pub bar: BarStyle,
    pub rule: RuleStyle,
}

/// Progress-bar geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// Total cells in the bar.
    pub width: usize,
    /// Glyph for a filled cell.
    pub fill: char,
    /// Glyph for an unfilled cell.
    pub empty: char,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            width: 50,
            fill: '█',
            empty: '-',
        }
    }
}

/// Separator-line defaults, used when `sep` is given no count or glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleStyle {
    pub width: usize,
    pub glyph: String,
}

impl Default for RuleStyle {
    fn default() -> Self {
        Self {
            width: 25,
            glyph: "-".to_string(),
        }
    }
}

impl ScrawlConfig {
    /// Loads a config from a YAML document. Missing fields default.
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).map_err(|err| ScrawlError::Config(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_builtin_geometry() {
        let config = ScrawlConfig::default();
        assert_eq!(config.styling, StylingChoice::Always);
        assert_eq!(config.bar.width, 50);
        assert_eq!(config.bar.fill, '█');
        assert_eq!(config.bar.empty, '-');
        assert_eq!(config.rule.width, 25);
        assert_eq!(config.rule.glyph, "-");
    }

    #[test]
    fn from_yaml_partial_document_keeps_defaults() {
        let config = ScrawlConfig::from_yaml("styling: never\n").unwrap();
        assert_eq!(config.styling, StylingChoice::Never);
        assert_eq!(config.bar.width, 50);
        assert_eq!(config.rule.glyph, "-");
    }

    #[test]
    fn from_yaml_nested_overrides() {
        let config = ScrawlConfig::from_yaml(
            "bar:\n  width: 10\n  fill: '#'\nrule:\n  glyph: '='\n",
        )
        .unwrap();
        assert_eq!(config.bar.width, 10);
        assert_eq!(config.bar.fill, '#');
        assert_eq!(config.bar.empty, '-');
        assert_eq!(config.rule.glyph, "=");
        assert_eq!(config.rule.width, 25);
    }

    #[test]
    fn from_yaml_rejects_malformed_documents() {
        let err = ScrawlConfig::from_yaml("styling: [").unwrap_err();
        assert!(err.to_string().contains("config error"));
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let config = ScrawlConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ScrawlConfig::default());
    }
}
