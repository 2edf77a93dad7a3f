//! Helpers shared by the subcommands.

use anyhow::{Context, Result};
use std::path::Path;

/// Write `content` to `output`, or print it to stdout.
///
/// Parent directories of `output` are created as needed. Reporting the
/// write is left to the caller.
pub async fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = output else {
        println!("{content}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Pretty or compact JSON.
pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
