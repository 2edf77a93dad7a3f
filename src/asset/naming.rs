//! Output file names for bundled assets and library entries.
//!
//! ```text
//! logo.png   ──type "png" → img──►  assets/img/logo-1a2b3c4d.png
//! style.css  ──type "css"────────►  assets/css/output.css
//! app.js     ──type "js"─────────►  assets/js/app-5e6f7a8b.js
//! ```

use regex::Regex;
use std::path::Path;

use crate::config::{AssetsConfig, LibFormat};

/// Asset type for file names without any dot.
const FALLBACK_TYPE: &str = "asset";

/// Type name shared by every image format.
const IMAGE_TYPE: &str = "img";

/// Renders asset output paths from `[build.assets]` templates.
#[derive(Debug, Clone)]
pub struct AssetNamer {
    css: String,
    other: String,
    images: Regex,
}

impl AssetNamer {
    pub fn new(config: &AssetsConfig) -> Result<Self, regex::Error> {
        let images = config.images_regex()?;
        Ok(Self {
            css: config.css.clone(),
            other: config.other.clone(),
            images,
        })
    }

    /// Type of an asset: the second dot-separated segment of its file
    /// name (`a.b.c` → `b`), with image formats grouped as `img`.
    pub fn asset_type(&self, file_name: &str) -> String {
        let Some(ext) = file_name.split('.').nth(1) else {
            return FALLBACK_TYPE.to_string();
        };
        if self.images.is_match(ext) {
            IMAGE_TYPE.to_string()
        } else {
            ext.to_string()
        }
    }

    /// Output path (relative to the output directory) for an asset.
    pub fn file_name(&self, file_name: &str, content: &[u8]) -> String {
        let ty = self.asset_type(file_name);
        let template = if ty == "css" { &self.css } else { &self.other };

        let path = Path::new(file_name);
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        let extname = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let mut out = template
            .replace("[name]", &name)
            .replace("[extname]", &extname)
            .replace("[ext]", &ty);
        if out.contains("[hash]") {
            out = out.replace("[hash]", &content_hash(content));
        }
        out
    }
}

/// First 8 hex chars of the blake3 hash of `content`.
pub fn content_hash(content: &[u8]) -> String {
    let hash = blake3::hash(content);
    hash.to_hex()[..8].to_string()
}

/// Library output file for an entry: `cjs` gets `.cjs`, every other
/// format `.js`.
pub fn lib_file_name(entry: &str, format: LibFormat) -> String {
    match format {
        LibFormat::Cjs => format!("{entry}.cjs"),
        LibFormat::Es | LibFormat::Umd | LibFormat::Iife => format!("{entry}.js"),
    }
}
