//! `css` command: load every collection and write the utility stylesheet.

use anyhow::{Context, Result, anyhow, bail};
use std::path::PathBuf;

use super::common::write_output;
use crate::config::BuildConfig;
use crate::css::{Stylesheet, generate, minify, scan_used};
use crate::icons::CollectionResolver;
use crate::logger::ProgressLine;
use crate::utils::plural_count;
use crate::{debug, log};

/// Generate the stylesheet and write it to `css.out_file`.
///
/// Collections that fail to load are reported and skipped; the command
/// fails only when every configured collection failed.
pub async fn build_css(config: &BuildConfig) -> Result<()> {
    let resolver = CollectionResolver::from_config(&config.icons);
    if resolver.is_empty() {
        log!("warning"; "no icon collections configured");
    }

    // Scan sources while collections load
    let scan = (!config.css.patterns.is_empty()).then(|| {
        let root: PathBuf = config.root.clone();
        let patterns = config.css.patterns.clone();
        tokio::task::spawn_blocking(move || scan_used(&root, &patterns))
    });

    let progress = ProgressLine::new("icons", resolver.len());
    let results = resolver.load_all_with(|_, _| progress.inc()).await;
    progress.finish();

    let total = results.len();
    let mut sets = Vec::with_capacity(total);
    for (key, result) in results {
        match result {
            Ok(set) => {
                debug!("icons"; "{}: {}", key, plural_count(set.len(), "icon"));
                sets.push((key, set));
            }
            Err(err) => {
                let kind = err.kind();
                log!("error"; "collection `{}` ({}): {:#}", key, kind, anyhow!(err));
            }
        }
    }
    if total > 0 && sets.is_empty() {
        bail!("every icon collection failed to load");
    }

    let used = match scan {
        Some(handle) => Some(
            handle
                .await
                .context("source scan task failed")?
                .context("invalid css.patterns")?,
        ),
        None => None,
    };

    let mut sheet = generate(&config.css, &config.icons, &sets, used.as_ref());
    let css = if config.css.minify {
        minify(&sheet.css).map_err(|e| anyhow!("failed to minify css: {e}"))?
    } else {
        std::mem::take(&mut sheet.css)
    };

    write_output(Some(&config.css.out_file), &css).await?;
    log!("css"; "{}", summary(&sheet, &config.root_relative(&config.css.out_file)));
    Ok(())
}

fn summary(sheet: &Stylesheet, out_file: &str) -> String {
    format!(
        "wrote {} and {} to {}",
        plural_count(sheet.rules, "rule"),
        plural_count(sheet.icons, "icon"),
        out_file
    )
}
