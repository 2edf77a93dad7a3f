//! `[define]` section configuration.
//!
//! Compile-time constants handed to the bundler.
//!
//! # Example
//!
//! ```toml
//! [define]
//! process_env = true          # expose the build environment as `process.env`
//! values = { __APP_VERSION__ = "\"1.0.0\"" }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefineConfig {
    /// Pass the process environment through verbatim as `process.env`.
    pub process_env: bool,

    /// Extra replacements; values are emitted as-is (JSON expressions).
    pub values: BTreeMap<String, String>,
}

impl Default for DefineConfig {
    fn default() -> Self {
        Self {
            process_env: true,
            values: BTreeMap::new(),
        }
    }
}

impl DefineConfig {
    /// Assemble the define table from `env`.
    ///
    /// `env` is injected so callers decide what the ambient environment is.
    pub fn resolve(&self, env: impl IntoIterator<Item = (String, String)>) -> BTreeMap<String, Value> {
        let mut table: BTreeMap<String, Value> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        if self.process_env {
            let env: serde_json::Map<String, Value> = env
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            table.insert("process.env".into(), Value::Object(env));
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.define.process_env);
        assert!(config.define.values.is_empty());
    }

    #[test]
    fn test_resolve_with_env() {
        let define = DefineConfig::default();
        let table = define.resolve([("NODE_ENV".to_string(), "development".to_string())]);
        assert_eq!(table["process.env"], json!({ "NODE_ENV": "development" }));
    }

    #[test]
    fn test_resolve_without_env() {
        let config = test_parse_config(
            "[define]\nprocess_env = false\nvalues = { __DEV__ = \"true\" }",
        );
        let table = config.define.resolve([("HOME".to_string(), "/root".to_string())]);
        assert!(!table.contains_key("process.env"));
        assert_eq!(table["__DEV__"], json!("true"));
    }
}
