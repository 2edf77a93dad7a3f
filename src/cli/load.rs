//! `load` command: materialize one collection as JSON.

use anyhow::{Result, bail};
use std::path::Path;

use super::common::write_output;
use crate::config::BuildConfig;
use crate::icons::{CollectionResolver, IconError};
use crate::utils::plural_count;
use crate::{debug, log};

/// Load `collection` and print (or write) its IconSet JSON.
pub async fn load_collection(
    config: &BuildConfig,
    collection: &str,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let resolver = CollectionResolver::from_config(&config.icons);

    let set = match resolver.load(collection).await {
        Ok(set) => set,
        Err(IconError::UnknownCollection(key)) => {
            bail!(
                "unknown collection `{key}` (known: {})",
                resolver.collections().join(", ")
            );
        }
        Err(err) => return Err(err.into()),
    };

    debug!(
        "icons";
        "{}: {} (prefix: {})",
        collection,
        plural_count(set.len(), "icon"),
        set.prefix().unwrap_or("none")
    );
    if set.is_empty() {
        log!("warning"; "collection `{}` has no icons", collection);
    }

    write_output(output, &set.to_json(pretty)?).await?;
    if let Some(path) = output {
        log!("icons"; "wrote {}", config.root_relative(path));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Loader;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> BuildConfig {
        let mut config = BuildConfig::default();
        config.icons.collections = BTreeMap::from([(
            "test".to_string(),
            Loader::manifest(dir.path().join("test.json")),
        )]);
        config
    }

    #[tokio::test]
    async fn test_load_writes_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("test.json"), r#"{"a":"<svg/>"}"#).unwrap();
        let out = dir.path().join("out/test.json");

        load_collection(&config(&dir), "test", false, Some(&out))
            .await
            .unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), r#"{"a":"<svg/>"}"#);
    }

    #[tokio::test]
    async fn test_load_unknown_lists_known() {
        let dir = TempDir::new().unwrap();
        let err = load_collection(&config(&dir), "other", false, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown collection `other` (known: test)");
    }

    #[tokio::test]
    async fn test_load_propagates_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("test.json"), r#"{"a":"#).unwrap();
        let err = load_collection(&config(&dir), "test", false, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IconError>(),
            Some(IconError::Parse { .. })
        ));
    }
}
