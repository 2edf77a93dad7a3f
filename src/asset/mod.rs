//! Asset and library output naming.

mod naming;

pub use naming::{AssetNamer, content_hash, lib_file_name};
