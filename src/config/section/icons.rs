//! `[icons]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [icons]
//! prefix = ""                         # Class prefix for icon utilities
//!
//! [icons.collections.test]
//! kind = "manifest"                   # Single IconifyJSON / name→svg file
//! path = "src/assets/svg/test.json"
//!
//! [icons.collections.my-icons]
//! kind = "directory"                  # Directory of .svg files
//! path = "src/assets/svg"
//! prefix = "svg"
//! ```
//!
//! Declaring any collection replaces the built-in table entirely.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::icons::Loader;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Prepended to every icon utility class (`{prefix}{collection}-{icon}`).
    pub prefix: String,

    /// Collection key → loader.
    pub collections: BTreeMap<String, Loader>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            collections: BTreeMap::from([
                (
                    "test".to_string(),
                    Loader::manifest("src/assets/svg/test.json"),
                ),
                (
                    "my-icons".to_string(),
                    Loader::directory("src/assets/svg", "svg"),
                ),
            ]),
        }
    }
}

impl IconsConfig {
    const PREFIX: FieldPath = FieldPath::new("icons.prefix");
    const COLLECTIONS: FieldPath = FieldPath::new("icons.collections");

    /// Resolve collection paths against `root`.
    pub fn normalize(&mut self, root: &Path) {
        for loader in self.collections.values_mut() {
            let path = loader.path_mut();
            *path = crate::utils::path::resolve_from(root, path);
        }
    }

    /// Validate icons configuration.
    ///
    /// # Checks
    /// - `prefix` may only contain `[a-z0-9-]`
    /// - collection keys and directory prefixes must be valid keys
    /// - manifest paths should end in `.json` (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.prefix.chars().all(is_key_char) {
            diag.error_with_hint(
                Self::PREFIX,
                format!("invalid class prefix `{}`", self.prefix),
                "use lowercase letters, digits and `-`",
            );
        }

        for (key, loader) in &self.collections {
            let field = Self::COLLECTIONS.join(key);
            if !is_valid_key(key) {
                diag.error_with_hint(
                    field.clone(),
                    format!("invalid collection name `{key}`"),
                    "use lowercase letters, digits and `-`",
                );
            }

            match loader {
                Loader::Manifest { path } => {
                    let is_json = path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                    if !is_json {
                        diag.warn(
                            field.join("path"),
                            format!("manifest `{}` is not a .json file", path.display()),
                        );
                    }
                }
                Loader::Directory { prefix, .. } => {
                    if !is_valid_key(prefix) {
                        diag.error_with_hint(
                            field.join("prefix"),
                            format!("invalid icon set prefix `{prefix}`"),
                            "use lowercase letters, digits and `-`",
                        );
                    }
                }
            }
        }
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Collection keys and icon set prefixes: non-empty `[a-z0-9-]`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_key_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let icons = &config.icons;
        assert_eq!(icons.prefix, "");
        assert_eq!(
            icons.collections.get("test"),
            Some(&Loader::manifest("src/assets/svg/test.json"))
        );
        assert_eq!(
            icons.collections.get("my-icons"),
            Some(&Loader::directory("src/assets/svg", "svg"))
        );
    }

    #[test]
    fn test_collections_replace_defaults() {
        let config = test_parse_config(
            r#"
[icons.collections.brand]
kind = "manifest"
path = "icons/brand.json"
"#,
        );
        assert_eq!(config.icons.collections.len(), 1);
        assert_eq!(
            config.icons.collections["brand"].path(),
            Path::new("icons/brand.json")
        );
    }

    #[test]
    fn test_validate() {
        let config = test_parse_config(
            r#"
[icons]
prefix = "I_"

[icons.collections.Bad_Name]
kind = "directory"
path = "svg"
prefix = ""

[icons.collections.data]
kind = "manifest"
path = "data.yaml"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.icons.validate(&mut diag);
        assert_eq!(diag.len(), 3);
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(
            diag.warnings()[0].field.as_str(),
            "icons.collections.data.path"
        );
    }

    #[test]
    fn test_is_valid_key() {
        assert!(is_valid_key("my-icons"));
        assert!(is_valid_key("svg2"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("My"));
        assert!(!is_valid_key("a:b"));
    }
}
