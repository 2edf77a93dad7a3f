//! `list` command: show configured collections.

use owo_colors::{OwoColorize, Stream};

use crate::config::BuildConfig;
use crate::icons::{CollectionResolver, Loader};

/// Print one line per collection: key, loader kind, path (and prefix).
pub fn list_collections(config: &BuildConfig) {
    let resolver = CollectionResolver::from_config(&config.icons);
    let width = resolver
        .collections()
        .iter()
        .map(|key| key.len())
        .max()
        .unwrap_or(0);

    for key in resolver.collections() {
        let Ok(loader) = resolver.resolve(key) else {
            continue;
        };
        println!("{}", format_entry(config, key, loader, width));
    }
}

fn format_entry(config: &BuildConfig, key: &str, loader: &Loader, width: usize) -> String {
    let path = config.root_relative(loader.path());
    let line = format!(
        "{:<width$}  {:<9}  {}",
        key.if_supports_color(Stream::Stdout, |k| k.bold()),
        loader.kind().if_supports_color(Stream::Stdout, |k| k.dimmed()),
        path
    );
    match loader {
        Loader::Directory { prefix, .. } => format!("{line}  (prefix: {prefix})"),
        Loader::Manifest { .. } => line,
    }
}
