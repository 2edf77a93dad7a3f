//! Command-line interface module.

mod args;
pub mod asset;
mod common;
pub mod css;
pub mod list;
pub mod load;
pub mod plan;

pub use args::{Cli, Commands, CssArgs};
