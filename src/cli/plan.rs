//! `plan` command: the assembled bundler configuration as JSON.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use super::common::to_json;
use crate::asset::lib_file_name;
use crate::config::{AssetsConfig, BuildConfig, BuildMode};

/// Everything the bundler is handed.
#[derive(Debug, Serialize)]
pub struct BundlePlan<'a> {
    pub out_dir: &'a PathBuf,
    pub empty_out_dir: bool,
    pub mode: BuildMode,
    pub lib: Vec<LibEntryPlan<'a>>,
    pub assets: &'a AssetsConfig,
    pub define: BTreeMap<String, Value>,
    pub alias: &'a BTreeMap<String, PathBuf>,
    pub css: &'a PathBuf,
}

/// One library entry and its file name per output format.
#[derive(Debug, Serialize)]
pub struct LibEntryPlan<'a> {
    pub name: &'a str,
    pub entry: &'a PathBuf,
    /// format → output file name
    pub files: BTreeMap<&'static str, String>,
}

impl<'a> BundlePlan<'a> {
    /// Assemble the plan; `env` becomes `process.env` when enabled.
    pub fn new(config: &'a BuildConfig, env: impl IntoIterator<Item = (String, String)>) -> Self {
        let build = &config.build;
        let lib = build
            .lib
            .entry
            .iter()
            .map(|(name, entry)| LibEntryPlan {
                name,
                entry,
                files: build
                    .lib
                    .formats
                    .iter()
                    .map(|&format| (format.as_str(), lib_file_name(name, format)))
                    .collect(),
            })
            .collect();

        Self {
            out_dir: &build.out_dir,
            empty_out_dir: build.empty_out_dir,
            mode: build.mode,
            lib,
            assets: &build.assets,
            define: config.define.resolve(env),
            alias: &config.alias,
            css: &config.css.out_file,
        }
    }
}

/// Environment pairs as strings; non-UTF-8 bytes become U+FFFD.
fn lossy_env(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> impl Iterator<Item = (String, String)> {
    vars.into_iter().map(|(key, value)| {
        (
            key.to_string_lossy().into_owned(),
            value.to_string_lossy().into_owned(),
        )
    })
}

/// Print the plan built from the current process environment.
pub fn print_plan(config: &BuildConfig, pretty: bool) -> Result<()> {
    let plan = BundlePlan::new(config, lossy_env(std::env::vars_os()));
    println!("{}", to_json(&plan, pretty)?);
    Ok(())
}
