//! Utility CSS generation.
//!
//! # Module Structure
//!
//! ```text
//! css/
//! ├── render   # rule / icon class rendering, SVG data URLs
//! ├── scan     # glob patterns, used-class scanning
//! └── mod.rs   # generate + minify (this file)
//! ```
//!
//! Output order is static rules first (config order), then icons
//! sorted by collection key and icon name.

mod render;
mod scan;

pub use render::{IconMode, icon_class, render_icon, render_rule};
pub use scan::{compile_pattern, scan_used};

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use rustc_hash::FxHashSet;

use crate::config::{CssConfig, IconsConfig};
use crate::icons::IconSet;

/// Generated stylesheet with counts of what went into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub css: String,
    pub rules: usize,
    pub icons: usize,
}

/// Render rules and icon utilities.
///
/// `sets` must be ordered by collection key. With `used = Some(..)` only
/// classes present in the set are emitted.
pub fn generate(
    css: &CssConfig,
    icons: &IconsConfig,
    sets: &[(String, IconSet)],
    used: Option<&FxHashSet<String>>,
) -> Stylesheet {
    let wanted = |class: &str| used.is_none_or(|used| used.contains(class));
    let mut sheet = Stylesheet::default();

    for rule in css.rules.iter().filter(|rule| wanted(&rule.name)) {
        sheet.css.push_str(&render_rule(rule));
        sheet.rules += 1;
    }

    for (collection, set) in sets {
        for name in set.icon_names() {
            let class = icon_class(&icons.prefix, collection, name);
            if !wanted(&class) {
                continue;
            }
            let Some(svg) = set.svg(name) else {
                continue;
            };
            sheet
                .css
                .push_str(&render_icon(&class, &svg, IconMode::detect(&svg)));
            sheet.icons += 1;
        }
    }

    sheet
}

/// Minify CSS source code.
pub fn minify(source: &str) -> Result<String, String> {
    let stylesheet =
        StyleSheet::parse(source, ParserOptions::default()).map_err(|e| e.to_string())?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| e.to_string())?;
    Ok(result.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CssRule;
    use std::collections::BTreeMap;

    fn sets() -> Vec<(String, IconSet)> {
        let svgs = BTreeMap::from([
            ("b".to_string(), r#"<svg fill="currentColor"/>"#.to_string()),
            ("a".to_string(), "<svg/>".to_string()),
        ]);
        vec![("test".to_string(), IconSet::Svgs(svgs))]
    }

    #[test]
    fn test_generate_order() {
        let css = CssConfig::default();
        let icons = IconsConfig::default();
        let sheet = generate(&css, &icons, &sets(), None);

        assert_eq!(sheet.rules, 5);
        assert_eq!(sheet.icons, 2);
        let inline = sheet.css.find(".inline-icon {").unwrap();
        let icon96 = sheet.css.find(".icon96 {").unwrap();
        let a = sheet.css.find(".test-a {").unwrap();
        let b = sheet.css.find(".test-b {").unwrap();
        assert!(inline < icon96 && icon96 < a && a < b);
    }

    #[test]
    fn test_generate_filters_used() {
        let css = CssConfig {
            rules: vec![
                CssRule::new("icon16", &[("font-size", "16px")]),
                CssRule::new("icon24", &[("font-size", "24px")]),
            ],
            ..CssConfig::default()
        };
        let icons = IconsConfig {
            prefix: "i-".into(),
            ..IconsConfig::default()
        };
        let used = FxHashSet::from_iter(["icon24".to_string(), "i-test-b".to_string()]);
        let sheet = generate(&css, &icons, &sets(), Some(&used));

        assert_eq!((sheet.rules, sheet.icons), (1, 1));
        assert!(sheet.css.contains(".icon24 {"));
        assert!(sheet.css.contains(".i-test-b {"));
        assert!(!sheet.css.contains(".i-test-a {"));
    }

    #[test]
    fn test_minify() {
        let out = minify(".icon16 {\n  font-size: 16px;\n  line-height: 1em;\n}\n").unwrap();
        assert_eq!(out, ".icon16{font-size:16px;line-height:1em}");
    }
}
