//! Source scanning for used utility classes.
//!
//! ```text
//! patterns ──GlobSetBuilder──► GlobSet ──┐
//!                                        ├──► matched files ──tokens──► used set
//! root ──jwalk (skip hidden, deps)───────┘
//! ```

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;

/// Directories never descended into.
const SKIP_DIRS: &[&str] = &["node_modules", "target"];

/// Compile one glob over `/`-separated root-relative paths.
///
/// `*` stays within one segment, `**` crosses segments.
pub fn compile_pattern(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

/// Compile every pattern into a single matcher.
pub fn compile_patterns(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_pattern(pattern)?);
    }
    builder.build()
}

/// Files under `root` whose relative path matches any pattern.
pub fn matching_files(root: &Path, patterns: &GlobSet) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .sort(true)
        .skip_hidden(true)
        .process_read_dir(|_, _, _, children| {
            children.retain(|entry| {
                entry.as_ref().map_or(true, |e| {
                    !(e.file_type().is_dir()
                        && SKIP_DIRS.iter().any(|skip| e.file_name() == *skip))
                })
            });
        });

    walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| {
            let Ok(rel) = path.strip_prefix(root) else {
                return false;
            };
            let rel = rel.to_string_lossy().replace('\\', "/");
            patterns.is_match(rel.as_str())
        })
        .collect()
}

/// Class-like tokens in `source`.
pub fn tokens(source: &str) -> impl Iterator<Item = &str> {
    source
        .split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')))
        .filter(|token| !token.is_empty())
}

/// Collect every token appearing in files matched by `patterns`.
///
/// Unreadable files are skipped.
pub fn scan_used(root: &Path, patterns: &[String]) -> Result<FxHashSet<String>, globset::Error> {
    let patterns = compile_patterns(patterns)?;

    let files = matching_files(root, &patterns);
    debug!("css"; "scanning {} files", files.len());

    let used = files
        .par_iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .map(|source| tokens(&source).map(str::to_string).collect::<FxHashSet<_>>())
        .reduce(FxHashSet::default, |mut acc, set| {
            acc.extend(set);
            acc
        });

    Ok(used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn matches(pattern: &str, path: &str) -> bool {
        compile_pattern(pattern).unwrap().compile_matcher().is_match(path)
    }

    #[test]
    fn test_compile_pattern() {
        assert!(matches("src/**/*.html", "src/index.html"));
        assert!(matches("src/**/*.html", "src/pages/deep/a.html"));
        assert!(!matches("src/**/*.html", "src/a.htm"));
        assert!(!matches("src/**/*.html", "other/a.html"));

        assert!(matches("index.html", "index.html"));
        assert!(!matches("index.html", "indexxhtml"));
        assert!(!matches("index.html", "src/index.html"));

        assert!(matches("src/*.{js,ts}", "src/a.ts"));
        assert!(!matches("src/*.{js,ts}", "src/lib/a.ts"));

        assert!(matches("?.[!x]s", "a.js"));
        assert!(!matches("?.[!x]s", "a.xs"));
    }

    #[test]
    fn test_character_class_range() {
        assert!(matches("icons/[a-c].svg", "icons/b.svg"));
        assert!(!matches("icons/[a-c].svg", "icons/-.svg"));
        assert!(!matches("icons/[a-c].svg", "icons/d.svg"));
    }

    #[test]
    fn test_compile_pattern_invalid() {
        assert!(compile_pattern("src/{a,b").is_err());
        assert!(compile_pattern("src/[ab").is_err());
        assert!(compile_patterns(&["ok/*.html".into(), "src/[ab".into()]).is_err());
    }

    #[test]
    fn test_tokens() {
        let found: Vec<_> = tokens(r#"<i class="svg-home icon24"></i>"#).collect();
        assert_eq!(found, vec!["i", "class", "svg-home", "icon24", "i"]);
    }

    #[test]
    fn test_scan_used() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/pages")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg/src")).unwrap();
        fs::write(dir.path().join("index.html"), r#"<i class="test-a"></i>"#).unwrap();
        fs::write(dir.path().join("src/pages/p.html"), "<b class='icon16'>").unwrap();
        fs::write(dir.path().join("src/pages/p.txt"), "ignored-token").unwrap();
        fs::write(dir.path().join("node_modules/pkg/src/x.html"), "dep-token").unwrap();

        let patterns = vec!["src/**/*.html".to_string(), "index.html".to_string()];
        let used = scan_used(dir.path(), &patterns).unwrap();
        assert!(used.contains("test-a"));
        assert!(used.contains("icon16"));
        assert!(!used.contains("ignored-token"));

        let everywhere = scan_used(dir.path(), &["**/*.html".to_string()]).unwrap();
        assert!(everywhere.contains("test-a"));
        assert!(!everywhere.contains("dep-token"));
    }
}
