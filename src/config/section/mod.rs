//! Configuration section definitions.
//!
//! Each module corresponds to a section in `iconpress.toml`:
//!
//! | Module   | TOML Section   | Purpose                                  |
//! |----------|----------------|------------------------------------------|
//! | `build`  | `[build]`      | Output dir, library entries, asset names |
//! | `css`    | `[css]`        | Utility CSS output, scan patterns, rules |
//! | `define` | `[define]`     | Bundler constants, env passthrough       |
//! | `icons`  | `[icons]`      | Icon collections                         |

mod build;
mod css;
mod define;
mod icons;

pub use build::{AssetsConfig, BuildMode, BuildSectionConfig, LibConfig, LibFormat};
pub use css::{CssConfig, CssRule};
pub use define::DefineConfig;
pub use icons::IconsConfig;
