//! `[css]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [css]
//! out_file = "dist/assets/css/uno.css"
//! patterns = ["src/**/*.html", "index.html"]   # empty = emit every utility
//! minify = false
//!
//! [[css.rules]]
//! name = "icon16"
//! declarations = [["font-size", "16px"], ["line-height", "1em"]]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::css::compile_pattern;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CssConfig {
    /// Generated stylesheet path.
    pub out_file: PathBuf,

    /// Source globs scanned for used utility classes.
    pub patterns: Vec<String>,

    pub minify: bool,

    /// Static utility rules, emitted in order.
    pub rules: Vec<CssRule>,
}

/// A named utility class with literal declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssRule {
    pub name: String,
    /// `(property, value)` pairs, in output order.
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(name: &str, declarations: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            declarations: declarations
                .iter()
                .map(|(p, v)| (p.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            out_file: "dist/assets/css/uno.css".into(),
            patterns: vec!["src/**/*.html".into(), "index.html".into()],
            minify: false,
            rules: default_rules(),
        }
    }
}

/// Fixed-size icon utilities.
fn default_rules() -> Vec<CssRule> {
    vec![
        CssRule::new("inline-icon", &[("vertical-align", "-0.125em")]),
        CssRule::new("icon16", &[("font-size", "16px"), ("line-height", "1em")]),
        CssRule::new("icon24", &[("font-size", "24px"), ("line-height", "1em")]),
        CssRule::new(
            "icon48",
            &[("font-size", "48px"), ("line-height", "5em"), ("width", "3em")],
        ),
        CssRule::new("icon96", &[("font-size", "96px"), ("line-height", "10em")]),
    ]
}

impl CssConfig {
    const OUT_FILE: FieldPath = FieldPath::new("css.out_file");
    const PATTERNS: FieldPath = FieldPath::new("css.patterns");
    const RULES: FieldPath = FieldPath::new("css.rules");

    /// Validate CSS configuration.
    ///
    /// # Checks
    /// - `out_file` must not be empty
    /// - every pattern must be a valid glob
    /// - rule names must be non-empty and unique
    /// - rules must declare at least one property
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.out_file.as_os_str().is_empty() {
            diag.error(Self::OUT_FILE, format!("{} must not be empty", Self::OUT_FILE));
        }

        for pattern in &self.patterns {
            if let Err(err) = compile_pattern(pattern) {
                diag.error(
                    Self::PATTERNS,
                    format!("invalid pattern `{pattern}`: {err}"),
                );
            }
        }

        let mut seen = FxHashSet::default();
        for (i, rule) in self.rules.iter().enumerate() {
            let field = Self::RULES.join(&i.to_string());
            if rule.name.trim().is_empty() {
                diag.error(field.join("name"), "rule name must not be empty");
                continue;
            }
            if !seen.insert(rule.name.as_str()) {
                diag.error_with_hint(
                    field.join("name"),
                    format!("duplicate rule `{}`", rule.name),
                    "merge the declarations into one rule",
                );
            }
            if rule.declarations.is_empty() {
                diag.error(
                    field.join("declarations"),
                    format!("rule `{}` has no declarations", rule.name),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let css = &config.css;
        assert_eq!(css.out_file, PathBuf::from("dist/assets/css/uno.css"));
        assert_eq!(css.patterns, vec!["src/**/*.html", "index.html"]);
        assert!(!css.minify);

        let names: Vec<_> = css.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["inline-icon", "icon16", "icon24", "icon48", "icon96"]);
        assert_eq!(
            css.rules[3].declarations,
            vec![
                ("font-size".to_string(), "48px".to_string()),
                ("line-height".to_string(), "5em".to_string()),
                ("width".to_string(), "3em".to_string()),
            ]
        );
    }

    #[test]
    fn test_rules_parsing() {
        let config = test_parse_config(
            r#"
[[css.rules]]
name = "icon32"
declarations = [["font-size", "32px"]]
"#,
        );
        assert_eq!(
            config.css.rules,
            vec![CssRule::new("icon32", &[("font-size", "32px")])]
        );
    }

    #[test]
    fn test_validate_duplicates_and_empty() {
        let config = test_parse_config(
            r#"
[[css.rules]]
name = "a"
declarations = [["color", "red"]]

[[css.rules]]
name = "a"
declarations = []
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.css.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "css.rules.1.name");
    }

    #[test]
    fn test_validate_defaults_ok() {
        let mut diag = ConfigDiagnostics::new();
        CssConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }
}
