//! Collection loaders.
//!
//! A [`Loader`] is the configured strategy for one collection. It is
//! declared in `[icons.collections.<key>]` and materializes a fresh
//! [`IconSet`] on every [`Loader::load`] call.

use jwalk::WalkDir;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use super::error::IconError;
use super::set::{DEFAULT_ICON_SIZE, IconSet, IconifyIcon, IconifyJson, dimension};
use super::svg::parse_svg;
use crate::{debug, log};

/// How a collection is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Loader {
    /// A single JSON file holding the whole collection.
    Manifest { path: PathBuf },
    /// A directory of `.svg` files exported under `prefix`.
    Directory { path: PathBuf, prefix: String },
}

impl Loader {
    pub fn manifest(path: impl Into<PathBuf>) -> Self {
        Self::Manifest { path: path.into() }
    }

    pub fn directory(path: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self::Directory {
            path: path.into(),
            prefix: prefix.into(),
        }
    }

    /// Load the collection.
    pub async fn load(&self) -> Result<IconSet, IconError> {
        match self {
            Self::Manifest { path } => load_manifest(path).await,
            Self::Directory { path, prefix } => import_directory(path, prefix).await,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Manifest { .. } => "manifest",
            Self::Directory { .. } => "directory",
        }
    }

    /// Backing file or directory.
    pub fn path(&self) -> &Path {
        match self {
            Self::Manifest { path } | Self::Directory { path, .. } => path,
        }
    }

    pub(crate) fn path_mut(&mut self) -> &mut PathBuf {
        match self {
            Self::Manifest { path } | Self::Directory { path, .. } => path,
        }
    }
}

// ============================================================================
// Manifest
// ============================================================================

/// Read and decode a JSON manifest.
///
/// The file handle lives only inside the read block, so it is closed
/// before decoding starts and on every error path.
pub async fn load_manifest(path: &Path) -> Result<IconSet, IconError> {
    let read_error = |source| IconError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let content = {
        let mut file = tokio::fs::File::open(path).await.map_err(read_error)?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .await
            .map_err(read_error)?;
        content
    };

    let set = serde_json::from_str(&content).map_err(|source| IconError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("icons"; "loaded manifest {}", path.display());
    Ok(set)
}

// ============================================================================
// Directory
// ============================================================================

/// Import every `.svg` file under `dir` into an IconifyJSON set.
///
/// Subdirectories are included; `sub/arrow.svg` becomes `sub-arrow`.
/// Files that cannot be read or parsed are skipped with a warning.
pub async fn import_directory(dir: &Path, prefix: &str) -> Result<IconSet, IconError> {
    match tokio::fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(IconError::DirectoryNotFound(dir.to_path_buf())),
    }

    let root = dir.to_path_buf();
    let prefix = prefix.to_string();
    let set = tokio::task::spawn_blocking(move || import_directory_blocking(&root, &prefix))
        .await
        .map_err(|err| IconError::FileRead {
            path: dir.to_path_buf(),
            source: io::Error::other(err),
        })?;

    Ok(IconSet::Iconify(set))
}

fn import_directory_blocking(root: &Path, prefix: &str) -> IconifyJson {
    let (files, _) = svg_files(root);

    // par_iter + collect keeps walk order, so duplicate names resolve
    // deterministically (last file wins).
    let icons: Vec<(String, IconifyIcon)> = files
        .par_iter()
        .filter_map(|path| read_icon(root, path))
        .collect();

    let mut set = IconifyJson::new(prefix);
    for (name, icon) in icons {
        if set.icons.insert(name.clone(), icon).is_some() {
            debug!("icons"; "duplicate icon name `{}` in {}", name, root.display());
        }
    }

    debug!("icons"; "imported {} icons from {}", set.icons.len(), root.display());
    set
}

/// Every `.svg` file under `root` in walk order, plus the number of
/// entries that could not be read.
fn svg_files(root: &Path) -> (Vec<PathBuf>, usize) {
    let mut files = Vec::new();
    let mut unreadable = 0;
    for entry in WalkDir::new(root).sort(true) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                let path = entry.path();
                if is_svg_file(&path) {
                    files.push(path);
                }
            }
            Ok(_) => {}
            Err(err) => {
                unreadable += 1;
                let path = err.path().unwrap_or(root);
                log!("warning"; "skipping {}: {}", path.display(), err);
            }
        }
    }
    (files, unreadable)
}

fn is_svg_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn read_icon(root: &Path, path: &Path) -> Option<(String, IconifyIcon)> {
    let name = icon_name(root, path)?;

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            log!("warning"; "skipping {}: {}", path.display(), err);
            return None;
        }
    };

    let parsed = match parse_svg(&source) {
        Ok(parsed) => parsed,
        Err(err) => {
            log!("warning"; "skipping {}: {}", path.display(), err);
            return None;
        }
    };

    let viewport = parsed.viewport;
    let default_size = DEFAULT_ICON_SIZE as f64;
    let mut icon = IconifyIcon::new(parsed.body);
    let unless = |value: f64, default: f64| {
        (value != default).then(|| dimension(value)).flatten()
    };
    icon.left = unless(viewport.left, 0.0).map(Some);
    icon.top = unless(viewport.top, 0.0).map(Some);
    icon.width = unless(viewport.width, default_size).map(Some);
    icon.height = unless(viewport.height, default_size).map(Some);

    Some((name, icon))
}

/// Derive an icon name from a path relative to the import root.
fn icon_name(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).unwrap_or(path).with_extension("");
    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("-");
    let name = normalize_icon_name(&joined);
    (!name.is_empty()).then_some(name)
}

/// Lowercase, map everything outside `[a-z0-9-]` to `-`, collapse and trim dashes.
pub fn normalize_icon_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len());
    for c in raw.chars().flat_map(char::to_lowercase) {
        let c = if c.is_ascii_lowercase() || c.is_ascii_digit() {
            c
        } else {
            '-'
        };
        if c == '-' && (name.is_empty() || name.ends_with('-')) {
            continue;
        }
        name.push(c);
    }
    while name.ends_with('-') {
        name.pop();
    }
    name
}
