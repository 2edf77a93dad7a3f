//! `[build]` section configuration.
//!
//! Bundler-facing settings: output directory, library entries and the
//! asset file naming templates.
//!
//! # Example
//!
//! ```toml
//! [build]
//! out_dir = "dist"            # Output directory (relative to config file)
//! empty_out_dir = false       # Keep files written by the CSS step
//! mode = "development"        # development | production
//!
//! [build.lib]
//! entry = { main = "src/main.js" }
//! formats = ["es"]            # es | cjs | umd | iife
//!
//! [build.assets]
//! css = "assets/css/output[extname]"
//! other = "assets/[ext]/[name]-[hash][extname]"
//! images = "png|jpe?g|svg|gif|tiff|bmp|ico"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Build output directory.
    pub out_dir: PathBuf,

    /// Remove existing files in `out_dir` before building.
    pub empty_out_dir: bool,

    pub mode: BuildMode,

    pub lib: LibConfig,

    pub assets: AssetsConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            out_dir: "dist".into(),
            empty_out_dir: false,
            mode: BuildMode::Development,
            lib: LibConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

/// Library mode entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibConfig {
    /// Entry name → entry module.
    pub entry: BTreeMap<String, PathBuf>,
    pub formats: Vec<LibFormat>,
}

impl Default for LibConfig {
    fn default() -> Self {
        Self {
            entry: BTreeMap::from([("main".to_string(), PathBuf::from("src/main.js"))]),
            formats: vec![LibFormat::Es],
        }
    }
}

/// Library output module format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibFormat {
    Es,
    Cjs,
    Umd,
    Iife,
}

impl LibFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::Cjs => "cjs",
            Self::Umd => "umd",
            Self::Iife => "iife",
        }
    }
}

impl fmt::Display for LibFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asset output naming templates.
///
/// Placeholders: `[name]`, `[hash]`, `[extname]`, `[ext]` (asset type).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Template for stylesheets.
    pub css: String,
    /// Template for everything else (scripts, images, fonts).
    pub other: String,
    /// Case-insensitive pattern; matching types are grouped as `img`.
    pub images: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            css: "assets/css/output[extname]".into(),
            other: "assets/[ext]/[name]-[hash][extname]".into(),
            images: "png|jpe?g|svg|gif|tiff|bmp|ico".into(),
        }
    }
}

impl AssetsConfig {
    /// Compile `images` as a case-insensitive pattern.
    pub fn images_regex(&self) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&self.images).case_insensitive(true).build()
    }
}

impl BuildSectionConfig {
    const OUT_DIR: FieldPath = FieldPath::new("build.out_dir");
    const LIB_ENTRY: FieldPath = FieldPath::new("build.lib.entry");
    const LIB_FORMATS: FieldPath = FieldPath::new("build.lib.formats");
    const ASSETS_IMAGES: FieldPath = FieldPath::new("build.assets.images");
    const ASSETS_OTHER: FieldPath = FieldPath::new("build.assets.other");

    /// Validate build configuration.
    ///
    /// # Checks
    /// - `out_dir` must not be empty
    /// - `lib.entry` and `lib.formats` must not be empty
    /// - `assets.images` must be a valid regex
    /// - `assets.other` should contain `[name]` (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.out_dir.as_os_str().is_empty() {
            diag.error(Self::OUT_DIR, format!("{} must not be empty", Self::OUT_DIR));
        }

        if self.lib.entry.is_empty() {
            diag.error_with_hint(
                Self::LIB_ENTRY,
                format!("{} has no entries", Self::LIB_ENTRY),
                "add e.g. `entry = { main = \"src/main.js\" }`",
            );
        }

        if self.lib.formats.is_empty() {
            diag.error_with_hint(
                Self::LIB_FORMATS,
                format!("{} must not be empty", Self::LIB_FORMATS),
                "use one or more of: es, cjs, umd, iife",
            );
        }

        if let Err(err) = self.assets.images_regex() {
            diag.error(
                Self::ASSETS_IMAGES,
                format!("{} is not a valid pattern: {err}", Self::ASSETS_IMAGES),
            );
        }

        if !self.assets.other.contains("[name]") {
            diag.warn(
                Self::ASSETS_OTHER,
                "template has no `[name]`, assets of the same type will collide",
            );
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
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert!(!config.build.empty_out_dir);
        assert_eq!(config.build.mode, BuildMode::Development);
        assert_eq!(config.build.lib.formats, vec![LibFormat::Es]);
        assert_eq!(
            config.build.lib.entry.get("main"),
            Some(&PathBuf::from("src/main.js"))
        );
    }

    #[test]
    fn test_lib_parsing() {
        let config = test_parse_config(
            r#"
[build.lib]
entry = { index = "lib/index.js" }
formats = ["es", "cjs"]
"#,
        );
        assert_eq!(config.build.lib.formats, vec![LibFormat::Es, LibFormat::Cjs]);
        assert!(config.build.lib.entry.contains_key("index"));
    }

    #[test]
    fn test_validate_rejects_empty_formats_and_bad_pattern() {
        let config = test_parse_config(
            "[build.lib]\nformats = []\n[build.assets]\nimages = \"png|(\"\nother = \"x\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_validate_defaults_ok() {
        let mut diag = ConfigDiagnostics::new();
        BuildSectionConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_images_pattern_ignores_case() {
        let images = AssetsConfig::default().images_regex().unwrap();
        assert!(images.is_match("png"));
        assert!(images.is_match("JPEG"));
        assert!(images.is_match("Svg"));
        assert!(!images.is_match("js"));
    }
}
