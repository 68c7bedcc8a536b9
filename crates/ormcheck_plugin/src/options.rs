//! Plugin options.
//!
//! Options arrive as a JSON blob from the host's configuration file.
//! Parsing is best-effort in the same spirit as the hooks: an unreadable
//! blob yields `None` and the caller keeps the defaults.

use ormcheck_module::MODELS_SUBMODULE;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PluginOptions {
    /// Submodule searched when resolving `"app.Model"` references.
    pub models_submodule: String,
    /// Treat foreign keys as nullable even without an explicit
    /// `null=True` at the call site.
    pub implicit_nullable_relations: bool,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            models_submodule: MODELS_SUBMODULE.to_string(),
            implicit_nullable_relations: false,
        }
    }
}

impl PluginOptions {
    /// Parse options from a JSON string.
    pub fn from_json(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PluginOptions::default();
        assert_eq!(options.models_submodule, "models");
        assert!(!options.implicit_nullable_relations);
    }

    #[test]
    fn test_from_json_partial() {
        let options = PluginOptions::from_json(r#"{"models_submodule": "entities"}"#).unwrap();
        assert_eq!(options.models_submodule, "entities");
        assert!(!options.implicit_nullable_relations);
    }

    #[test]
    fn test_from_json_invalid_is_none() {
        assert!(PluginOptions::from_json("not json").is_none());
        assert!(PluginOptions::from_json(r#"{"models_submodule": 3}"#).is_none());
    }
}
