//! Build configuration management for `iconpress.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build] output dir, lib entries, asset names
//! │   ├── css        # [css] utility output and static rules
//! │   ├── define     # [define] bundler constants
//! │   └── icons      # [icons] collections
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # BuildConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `[build]`  | Output directory, library entries, asset naming    |
//! | `[define]` | Constants and environment passthrough              |
//! | `[alias]`  | Import aliases (`"@" = "src"`)                     |
//! | `[css]`    | Generated stylesheet, scan patterns, static rules  |
//! | `[icons]`  | Icon class prefix and collection loaders           |
//!
//! Every section has built-in defaults, so an empty (or missing)
//! config file yields a working setup.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AssetsConfig, BuildMode, BuildSectionConfig, CssConfig, CssRule, DefineConfig, IconsConfig,
    LibConfig, LibFormat,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, CssArgs},
    debug, log,
    utils::path::{normalize_path, resolve_from},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing iconpress.toml
///
/// Built once per invocation and treated as immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub define: DefineConfig,

    /// Import alias → directory.
    #[serde(default = "default_alias")]
    pub alias: BTreeMap<String, PathBuf>,

    #[serde(default)]
    pub css: CssConfig,

    #[serde(default)]
    pub icons: IconsConfig,
}

fn default_alias() -> BTreeMap<String, PathBuf> {
    BTreeMap::from([("@".to_string(), PathBuf::from("src"))])
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            build: BuildSectionConfig::default(),
            define: DefineConfig::default(),
            alias: default_alias(),
            css: CssConfig::default(),
            icons: IconsConfig::default(),
        }
    }
}

impl BuildConfig {
    const ALIAS: FieldPath = FieldPath::new("alias");

    /// Load configuration for a CLI invocation.
    ///
    /// The config file is searched upward from the current directory. If
    /// the default file name is not found, built-in defaults rooted at the
    /// current directory are used; an explicitly named file must exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = normalize_path(&path);
                config
            }
            None if cli.is_default_config() => {
                debug!("config"; "{} not found, using built-in defaults", cli.config.display());
                let mut config = Self::default();
                config.config_path = cwd.join(&cli.config);
                config
            }
            None => {
                let err = io::Error::new(io::ErrorKind::NotFound, "config file not found");
                return Err(ConfigError::Io(cli.config.clone(), err).into());
            }
        };

        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd);
        config.finalize(&root);
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Path relative to the root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> String {
        crate::utils::path::display_relative(&self.root, path.as_ref())
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve every configured path against the root directory.
    fn finalize(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.root = root.clone();

        self.build.out_dir = resolve_from(&root, &self.build.out_dir);
        for entry in self.build.lib.entry.values_mut() {
            *entry = resolve_from(&root, entry);
        }
        for dir in self.alias.values_mut() {
            *dir = resolve_from(&root, dir);
        }
        self.css.out_file = resolve_from(&root, &self.css.out_file);
        self.icons.normalize(&root);
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Css { args } = &cli.command {
            self.apply_css_args(args);
        }
    }

    fn apply_css_args(&mut self, args: &CssArgs) {
        Self::update_option(&mut self.css.minify, args.minify.as_ref());
        if let Some(output) = &args.output {
            self.css.out_file = normalize_path(output);
        }
        if args.all {
            self.css.patterns.clear();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section.
    ///
    /// Collects all errors and returns them at once; warnings are printed.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|diag| ConfigError::Diagnostics(diag).into())
    }

    fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.build.validate(&mut diag);
        self.css.validate(&mut diag);
        self.icons.validate(&mut diag);

        for alias in self.alias.keys() {
            if alias.trim().is_empty() {
                diag.error(Self::ALIAS, "alias name must not be empty");
            }
        }

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BuildConfig {
    let (parsed, ignored) = BuildConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_toml() {
        assert!(BuildConfig::parse_with_ignored("[build\nout_dir = \"dist\"").is_err());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = test_parse_config("");
        assert_eq!(config.alias.get("@"), Some(&PathBuf::from("src")));
        assert_eq!(config.icons.collections.len(), 2);
        assert_eq!(config.css.rules.len(), 5);
        assert!(config.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let (config, ignored) =
            BuildConfig::parse_with_ignored("[css]\nminify = true\nunknown_field = 1").unwrap();
        assert!(config.css.minify);
        assert!(ignored.iter().any(|f| f.contains("unknown_field")));
    }

    #[test]
    fn test_finalize_resolves_paths() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.finalize(dir.path());

        let root = config.root.clone();
        assert_eq!(config.build.out_dir, root.join("dist"));
        assert_eq!(config.css.out_file, root.join("dist/assets/css/uno.css"));
        assert_eq!(config.alias["@"], root.join("src"));
        assert_eq!(
            config.icons.collections["test"].path(),
            root.join("src/assets/svg/test.json")
        );
        assert_eq!(config.root_relative(&config.build.out_dir), "dist");
    }

    #[test]
    fn test_apply_css_args() {
        let cli = Cli::try_parse_from(["iconpress", "css", "--minify", "--all"]).unwrap();
        let mut config = test_parse_config("");
        config.apply_command_options(&cli);
        assert!(config.css.minify);
        assert!(config.css.patterns.is_empty());
    }

    #[test]
    fn test_validation_collects_all_sections() {
        let config = test_parse_config(
            "[build.lib]\nformats = []\n[icons]\nprefix = \"X\"\n[alias]\n\" \" = \"src\"",
        );
        let diag = config.diagnostics();
        assert_eq!(diag.len(), 3);
    }
}
