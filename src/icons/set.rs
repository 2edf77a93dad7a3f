//! Icon set data model.
//!
//! An [`IconSet`] is either a plain `name → svg` map or an IconifyJSON
//! export. Both shapes deserialize from the same manifest format and
//! serialize back to a structure deep-equal to their input, so unknown
//! IconifyJSON fields are carried through in `extra` and an explicit
//! `null` is kept apart from an absent field.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Default icon width/height when neither the icon nor the set specifies one.
pub const DEFAULT_ICON_SIZE: u64 = 16;

/// Max alias hops followed when resolving an alias to its parent icon.
const MAX_ALIAS_DEPTH: usize = 36;

/// Optional IconifyJSON field: `None` when absent, `Some(None)` for `null`.
pub type Nullable<T> = Option<Option<T>>;

fn nullable<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Value of a [`Nullable`] field, if it holds one.
fn present<T>(field: &Nullable<T>) -> Option<&T> {
    field.as_ref().and_then(Option::as_ref)
}

/// A materialized icon collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconSet {
    /// IconifyJSON export (`prefix` + `icons` dictionary).
    Iconify(IconifyJson),
    /// Icon name → raw SVG markup.
    Svgs(BTreeMap<String, String>),
}

/// IconifyJSON icon set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconifyJson {
    pub prefix: String,

    pub icons: BTreeMap<String, IconifyIcon>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub aliases: Nullable<BTreeMap<String, IconifyAlias>>,

    /// Default width for icons in this set.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub width: Nullable<Number>,

    /// Default height for icons in this set.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub height: Nullable<Number>,

    /// Fields this crate does not interpret (`info`, `lastModified`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single IconifyJSON icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconifyIcon {
    /// Inner SVG markup (everything between `<svg>` and `</svg>`).
    pub body: String,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub left: Nullable<Number>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub top: Nullable<Number>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub width: Nullable<Number>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub height: Nullable<Number>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// IconifyJSON alias pointing at another icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconifyAlias {
    pub parent: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IconifyJson {
    /// Create an empty set with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            icons: BTreeMap::new(),
            aliases: None,
            width: None,
            height: None,
            extra: Map::new(),
        }
    }

    /// Look up an icon by name, following aliases.
    pub fn icon(&self, name: &str) -> Option<&IconifyIcon> {
        let mut name = name;
        for _ in 0..MAX_ALIAS_DEPTH {
            if let Some(icon) = self.icons.get(name) {
                return Some(icon);
            }
            name = &present(&self.aliases)?.get(name)?.parent;
        }
        None
    }

    /// Render a standalone `<svg>` document for an icon.
    pub fn to_svg(&self, name: &str) -> Option<String> {
        let icon = self.icon(name)?;
        let default_size = Number::from(DEFAULT_ICON_SIZE);
        let zero = Number::from(0);
        let width = present(&icon.width)
            .or(present(&self.width))
            .unwrap_or(&default_size);
        let height = present(&icon.height)
            .or(present(&self.height))
            .unwrap_or(&default_size);
        let left = present(&icon.left).unwrap_or(&zero);
        let top = present(&icon.top).unwrap_or(&zero);

        Some(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="{left} {top} {width} {height}">{}</svg>"#,
            icon.body
        ))
    }
}

impl IconifyIcon {
    /// Create an icon with only a body (all dimensions inherited).
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            left: None,
            top: None,
            width: None,
            height: None,
            extra: Map::new(),
        }
    }
}

impl IconSet {
    /// Icon names in this set, sorted.
    ///
    /// Aliases are not included; they resolve through [`IconSet::svg`].
    pub fn icon_names(&self) -> Vec<&str> {
        match self {
            Self::Iconify(set) => set.icons.keys().map(String::as_str).collect(),
            Self::Svgs(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// Number of icons (aliases excluded).
    pub fn len(&self) -> usize {
        match self {
            Self::Iconify(set) => set.icons.len(),
            Self::Svgs(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// IconifyJSON prefix, if this is an exported set.
    pub fn prefix(&self) -> Option<&str> {
        match self {
            Self::Iconify(set) => Some(&set.prefix),
            Self::Svgs(_) => None,
        }
    }

    /// Full SVG markup for an icon.
    pub fn svg(&self, name: &str) -> Option<String> {
        match self {
            Self::Iconify(set) => set.to_svg(name),
            Self::Svgs(map) => map.get(name).cloned(),
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Convert a measured dimension into a JSON number.
///
/// Whole values become integers so `24` stays `24` rather than `24.0`.
pub fn dimension(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 {
        Some(Number::from(value as u64))
    } else if value.fract() == 0.0 && value < 0.0 && value >= i32::MIN as f64 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}
