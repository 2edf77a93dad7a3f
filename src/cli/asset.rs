//! `asset-name` command: show where assets land in the output directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::asset::AssetNamer;
use crate::config::BuildConfig;

/// Print `source -> output` for every file.
pub fn print_asset_names(config: &BuildConfig, files: &[PathBuf]) -> Result<()> {
    let namer = AssetNamer::new(&config.build.assets).context("invalid build.assets.images")?;
    for file in files {
        let output = asset_output(config, &namer, file)?;
        println!("{} -> {}", file.display(), config.root_relative(output));
    }
    Ok(())
}

/// Output path of `file` under `build.out_dir`.
fn asset_output(config: &BuildConfig, namer: &AssetNamer, file: &Path) -> Result<PathBuf> {
    let content = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let name = file
        .file_name()
        .with_context(|| format!("not a file: {}", file.display()))?
        .to_string_lossy();
    Ok(config.build.out_dir.join(namer.file_name(&name, &content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::content_hash;
    use tempfile::TempDir;

    #[test]
    fn test_asset_output() {
        let dir = TempDir::new().unwrap();
        let logo = dir.path().join("logo.png");
        fs::write(&logo, b"png").unwrap();

        let mut config = BuildConfig::default();
        config.build.out_dir = dir.path().join("dist");
        let namer = AssetNamer::new(&config.build.assets).unwrap();

        let output = asset_output(&config, &namer, &logo).unwrap();
        assert_eq!(
            output,
            dir.path()
                .join(format!("dist/assets/img/logo-{}.png", content_hash(b"png")))
        );
    }

    #[test]
    fn test_asset_output_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::default();
        let namer = AssetNamer::new(&config.build.assets).unwrap();
        assert!(asset_output(&config, &namer, &dir.path().join("nope.js")).is_err());
    }
}
