//! Utility class rendering.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::fmt::Write;

use crate::config::CssRule;

/// Bytes escaped in SVG data URLs (non-ASCII is always escaped).
const SVG_URL: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'%')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'{')
    .add(b'}')
    .add(b'"');

/// How an icon is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    /// Monochrome: the SVG is a mask over `currentColor`.
    Mask,
    /// Multicolor: the SVG is the background image.
    Bg,
}

impl IconMode {
    /// `Mask` when the markup paints with `currentColor`.
    pub fn detect(svg: &str) -> Self {
        if svg.contains("currentColor") {
            Self::Mask
        } else {
            Self::Bg
        }
    }
}

/// Class name for an icon utility: `{prefix}{collection}-{icon}`.
pub fn icon_class(prefix: &str, collection: &str, icon: &str) -> String {
    format!("{prefix}{collection}-{icon}")
}

/// `data:image/svg+xml` URL for SVG markup.
///
/// Double quotes become single quotes so the URL can sit inside `url("…")`.
pub fn svg_data_url(svg: &str) -> String {
    let collapsed = svg
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('"', "'");
    format!(
        "data:image/svg+xml;utf8,{}",
        utf8_percent_encode(&collapsed, SVG_URL)
    )
}

/// Escape a class name for use in a selector.
pub fn escape_class(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        match c {
            '0'..='9' if i == 0 => {
                let _ = write!(out, "\\3{c} ");
            }
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() => {
                out.push(c)
            }
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }
    out
}

/// Render a static rule.
pub fn render_rule(rule: &CssRule) -> String {
    let declarations: Vec<_> = rule
        .declarations
        .iter()
        .map(|(property, value)| (property.as_str(), value.as_str()))
        .collect();
    block(&rule.name, &declarations)
}

/// Render an icon utility, sized `1em × 1em`.
pub fn render_icon(class: &str, svg: &str, mode: IconMode) -> String {
    let url = format!("url(\"{}\")", svg_data_url(svg));
    match mode {
        IconMode::Mask => block(
            class,
            &[
                ("--un-icon", url.as_str()),
                ("-webkit-mask", "var(--un-icon) no-repeat"),
                ("mask", "var(--un-icon) no-repeat"),
                ("-webkit-mask-size", "100% 100%"),
                ("mask-size", "100% 100%"),
                ("background-color", "currentColor"),
                ("color", "inherit"),
                ("width", "1em"),
                ("height", "1em"),
            ],
        ),
        IconMode::Bg => {
            let background = format!("{url} no-repeat");
            block(
                class,
                &[
                    ("background", background.as_str()),
                    ("background-size", "100% 100%"),
                    ("background-color", "transparent"),
                    ("width", "1em"),
                    ("height", "1em"),
                ],
            )
        }
    }
}

fn block(class: &str, declarations: &[(&str, &str)]) -> String {
    let mut out = format!(".{} {{\n", escape_class(class));
    for (property, value) in declarations {
        let _ = writeln!(out, "  {property}: {value};");
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rule() {
        let rule = CssRule::new("icon16", &[("font-size", "16px"), ("line-height", "1em")]);
        assert_eq!(
            render_rule(&rule),
            ".icon16 {\n  font-size: 16px;\n  line-height: 1em;\n}\n"
        );
    }

    #[test]
    fn test_mode_detection() {
        assert_eq!(
            IconMode::detect(r#"<svg><path fill="currentColor"/></svg>"#),
            IconMode::Mask
        );
        assert_eq!(IconMode::detect(r##"<svg><path fill="#f00"/></svg>"##), IconMode::Bg);
    }

    #[test]
    fn test_svg_data_url() {
        let url = svg_data_url(r##"<svg  fill="#f00">
  <g/></svg>"##);
        assert_eq!(
            url,
            "data:image/svg+xml;utf8,%3Csvg%20fill='%23f00'%3E%20%3Cg/%3E%3C/svg%3E"
        );
    }

    #[test]
    fn test_render_icon_modes() {
        let mask = render_icon("svg-a", r#"<svg fill="currentColor"/>"#, IconMode::Mask);
        assert!(mask.starts_with(".svg-a {\n  --un-icon: url(\"data:image/svg+xml;utf8,"));
        assert!(mask.contains("  mask: var(--un-icon) no-repeat;\n"));
        assert!(mask.contains("  width: 1em;\n  height: 1em;\n"));

        let bg = render_icon("svg-b", "<svg/>", IconMode::Bg);
        assert!(bg.contains("  background: url(\"data:image/svg+xml;utf8,%3Csvg/%3E\") no-repeat;\n"));
        assert!(!bg.contains("mask"));
    }

    #[test]
    fn test_escape_class() {
        assert_eq!(escape_class("my-icons-arrow"), "my-icons-arrow");
        assert_eq!(escape_class("i:home"), "i\\:home");
        assert_eq!(escape_class("2x"), "\\32 x");
        assert_eq!(icon_class("i-", "test", "home"), "i-test-home");
    }
}
