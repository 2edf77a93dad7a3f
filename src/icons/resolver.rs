//! Collection key → loader registry.

use rustc_hash::FxHashMap;
use std::io;

use super::error::IconError;
use super::loader::Loader;
use super::set::IconSet;
use crate::config::IconsConfig;

/// Maps collection keys to their loaders.
///
/// Built once from configuration and read-only afterwards. Lookups are
/// constant time; every load produces a fresh [`IconSet`].
#[derive(Debug, Clone, Default)]
pub struct CollectionResolver {
    loaders: FxHashMap<String, Loader>,
}

impl CollectionResolver {
    pub fn new(loaders: impl IntoIterator<Item = (String, Loader)>) -> Self {
        Self {
            loaders: loaders.into_iter().collect(),
        }
    }

    /// Build the registry from `[icons.collections]`.
    pub fn from_config(config: &IconsConfig) -> Self {
        Self::new(
            config
                .collections
                .iter()
                .map(|(key, loader)| (key.clone(), loader.clone())),
        )
    }

    /// Look up the loader registered for `key`.
    pub fn resolve(&self, key: &str) -> Result<&Loader, IconError> {
        self.loaders
            .get(key)
            .ok_or_else(|| IconError::UnknownCollection(key.to_string()))
    }

    /// Registered collection keys, sorted.
    pub fn collections(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.loaders.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Resolve and load a single collection.
    pub async fn load(&self, key: &str) -> Result<IconSet, IconError> {
        self.resolve(key)?.load().await
    }

    /// Load every collection concurrently, one task per collection.
    ///
    /// Results are returned in key order. A failure in one collection
    /// does not affect the others.
    pub async fn load_all(&self) -> Vec<(String, Result<IconSet, IconError>)> {
        self.load_all_with(|_, _| {}).await
    }

    /// [`load_all`](Self::load_all), calling `on_loaded` as each result
    /// is collected.
    pub async fn load_all_with(
        &self,
        mut on_loaded: impl FnMut(&str, &Result<IconSet, IconError>),
    ) -> Vec<(String, Result<IconSet, IconError>)> {
        let mut tasks = Vec::with_capacity(self.loaders.len());
        for key in self.collections() {
            let loader = self.loaders[key].clone();
            let handle = tokio::spawn(async move { loader.load().await });
            tasks.push((key.to_string(), handle));
        }

        let mut results = Vec::with_capacity(tasks.len());
        for (key, handle) in tasks {
            let result = match handle.await {
                Ok(result) => result,
                Err(err) => Err(IconError::FileRead {
                    path: self.loaders[&key].path().to_path_buf(),
                    source: io::Error::other(err),
                }),
            };
            on_loaded(&key, &result);
            results.push((key, result));
        }
        results
    }
}
