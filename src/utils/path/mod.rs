//! Path helpers for config-relative paths.

use std::path::{Path, PathBuf};

/// Absolute form of `path`: canonical if it exists, otherwise joined
/// onto the current directory.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Resolve a config path against `root`, expanding a leading `~`.
pub fn resolve_from(root: &Path, path: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    };
    if expanded.is_absolute() {
        normalize_path(&expanded)
    } else {
        normalize_path(&root.join(expanded))
    }
}

/// `path` relative to `root` for display; unchanged if outside `root`.
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_from_relative() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        let resolved = resolve_from(&root, Path::new("src/assets/svg"));
        assert_eq!(resolved, root.join("src/assets/svg"));
    }

    #[test]
    fn test_resolve_from_absolute() {
        let dir = TempDir::new().unwrap();
        let abs = normalize_path(dir.path());
        assert_eq!(resolve_from(Path::new("/elsewhere"), &abs), abs);
    }

    #[test]
    fn test_display_relative() {
        let root = Path::new("/site");
        assert_eq!(display_relative(root, Path::new("/site/dist/a.css")), "dist/a.css");
        assert_eq!(display_relative(root, Path::new("/other/b.css")), "/other/b.css");
    }
}
