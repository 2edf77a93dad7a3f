//! Icon collection resolution.
//!
//! # Module Structure
//!
//! ```text
//! icons/
//! ├── error      # IconError
//! ├── loader     # Loader (manifest | directory) and their load routines
//! ├── resolver   # CollectionResolver: key → loader
//! ├── set        # IconSet / IconifyJSON model
//! └── svg        # SVG viewport + body extraction
//! ```
//!
//! # Flow
//!
//! ```text
//! [icons.collections] ──► CollectionResolver ──resolve(key)──► Loader
//!                                                                │
//!                                            load().await ◄──────┘
//!                                                │
//!                                                ▼
//!                                             IconSet
//! ```

mod error;
mod loader;
mod resolver;
mod set;
mod svg;

pub use error::IconError;
pub use loader::Loader;
pub use resolver::CollectionResolver;
pub use set::IconSet;
