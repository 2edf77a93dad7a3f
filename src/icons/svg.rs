//! SVG source parsing for directory imports.
//!
//! Extracts the root viewport and inner body of an SVG file so it can be
//! stored as an IconifyJSON icon.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

use super::set::DEFAULT_ICON_SIZE;

#[derive(Debug, Error)]
pub enum SvgParseError {
    #[error("malformed svg")]
    Xml(#[from] quick_xml::Error),

    #[error("no root <svg> element")]
    MissingRoot,

    #[error("unterminated <svg> element")]
    Unterminated,
}

/// Viewport of an icon in user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: DEFAULT_ICON_SIZE as f64,
            height: DEFAULT_ICON_SIZE as f64,
        }
    }
}

/// A parsed SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSvg {
    pub viewport: Viewport,
    /// Inner markup of the root element, trimmed.
    pub body: String,
}

/// Parse an SVG document.
///
/// The root element must be `<svg>`; XML declarations, comments and
/// doctypes before it are skipped.
pub fn parse_svg(source: &str) -> Result<ParsedSvg, SvgParseError> {
    let mut reader = Reader::from_str(source);
    let mut root: Option<(Viewport, usize)> = None;
    let mut depth = 0usize;

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) => {
                if root.is_some() {
                    depth += 1;
                } else if is_svg(&e) {
                    root = Some((read_viewport(&e), reader.buffer_position() as usize));
                } else {
                    return Err(SvgParseError::MissingRoot);
                }
            }
            Event::Empty(e) if root.is_none() => {
                if !is_svg(&e) {
                    return Err(SvgParseError::MissingRoot);
                }
                return Ok(ParsedSvg {
                    viewport: read_viewport(&e),
                    body: String::new(),
                });
            }
            Event::End(_) => {
                if let Some((viewport, start)) = root {
                    if depth == 0 {
                        return Ok(ParsedSvg {
                            viewport,
                            body: source[start..before].trim().to_string(),
                        });
                    }
                    depth -= 1;
                }
            }
            Event::Eof => {
                return Err(if root.is_some() {
                    SvgParseError::Unterminated
                } else {
                    SvgParseError::MissingRoot
                });
            }
            _ => {}
        }
    }
}

fn is_svg(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == b"svg"
}

/// Read `viewBox`, falling back to `width`/`height` attributes.
fn read_viewport(e: &BytesStart<'_>) -> Viewport {
    let mut view_box = None;
    let mut width = None;
    let mut height = None;

    for attr in e.attributes().flatten() {
        let value = String::from_utf8_lossy(&attr.value);
        match attr.key.local_name().as_ref() {
            b"viewBox" => view_box = parse_view_box(&value),
            b"width" => width = parse_length(&value),
            b"height" => height = parse_length(&value),
            _ => {}
        }
    }

    if let Some(viewport) = view_box {
        return viewport;
    }

    let default = Viewport::default();
    Viewport {
        width: width.unwrap_or(default.width),
        height: height.unwrap_or(default.height),
        ..default
    }
}

/// Parse `"minx miny width height"` (whitespace and/or comma separated).
fn parse_view_box(value: &str) -> Option<Viewport> {
    let parts: Vec<f64> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        &[left, top, width, height] if width > 0.0 && height > 0.0 => Some(Viewport {
            left,
            top,
            width,
            height,
        }),
        _ => None,
    }
}

/// Parse a length attribute in user units or `px`.
fn parse_length(value: &str) -> Option<f64> {
    let n: f64 = value.trim().trim_end_matches("px").trim().parse().ok()?;
    (n > 0.0).then_some(n)
}
