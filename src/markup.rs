//! Inline markup for display lines.
//!
//! Content store lines carry lightweight tags instead of raw escape codes so
//! that sinks can decide how to render them: the ANSI terminal turns them
//! into crossterm styling, the in-memory test sink keeps them verbatim.
//!
//! Grammar:
//! - named colors: `<white>…</white>`, `<yellow>`, `<green>`, `<blue>`,
//!   `<cyan>`, `<red>`, `<magenta>`
//! - bold: `<b>…</b>`
//! - 24-bit color: `<rgb:00ff88>…</>`
//! - hyperlink: `<a href="https://…">label</a>`
//!
//! Any closing tag pops the innermost open tag. Unrecognized or malformed
//! tags are kept as literal text; parsing never fails.

use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};

use crate::models::Rgb;

/// A run of text with one resolved style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct StyleState {
    color: Option<Color>,
    bold: bool,
    link: Option<String>,
}

fn named_color(name: &str) -> Option<Color> {
    match name {
        "white" => Some(Color::White),
        "yellow" => Some(Color::Yellow),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "cyan" => Some(Color::Cyan),
        "red" => Some(Color::Red),
        "magenta" => Some(Color::Magenta),
        _ => None,
    }
}

fn rgb_color(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

/// Extract the URL from an anchor tag body like `a href="https://example.com"`.
fn href_url(tag: &str) -> Option<String> {
    let rest = tag.strip_prefix("a ")?.trim_start();
    let rest = rest.strip_prefix("href=")?;
    let rest = rest.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

/// Parse a markup line into styled spans.
pub fn parse(line: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut stack: Vec<StyleState> = Vec::new();
    let mut current = String::new();

    let flush = |spans: &mut Vec<Span>, stack: &[StyleState], text: &mut String| {
        if text.is_empty() {
            return;
        }
        let state = stack.last().cloned().unwrap_or_default();
        spans.push(Span {
            text: std::mem::take(text),
            color: state.color,
            bold: state.bold,
            link: state.link,
        });
    };

    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '<' {
            current.push(c);
            continue;
        }
        // Find the matching '>' without consuming the iterator on failure.
        let close = line[i + 1..].find('>').map(|off| i + 1 + off);
        let Some(close) = close else {
            current.push('<');
            continue;
        };
        let tag = &line[i + 1..close];

        let action = if let Some(rest) = tag.strip_prefix('/') {
            // Any closing tag pops, but only if something is open and the
            // name is plausible (letters only, or empty for `</>`).
            if !stack.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()) {
                Some(TagAction::Pop)
            } else {
                None
            }
        } else if tag == "b" {
            Some(TagAction::Push(StyleState {
                bold: true,
                ..stack.last().cloned().unwrap_or_default()
            }))
        } else if let Some(color) = named_color(tag) {
            Some(TagAction::Push(StyleState {
                color: Some(color),
                ..stack.last().cloned().unwrap_or_default()
            }))
        } else if let Some(hex) = tag.strip_prefix("rgb:") {
            rgb_color(hex).map(|color| {
                TagAction::Push(StyleState {
                    color: Some(color),
                    ..stack.last().cloned().unwrap_or_default()
                })
            })
        } else if let Some(url) = href_url(tag) {
            Some(TagAction::Push(StyleState {
                color: Some(Color::Cyan),
                link: Some(url),
                ..stack.last().cloned().unwrap_or_default()
            }))
        } else {
            None
        };

        match action {
            Some(act) => {
                flush(&mut spans, &stack, &mut current);
                match act {
                    TagAction::Push(state) => stack.push(state),
                    TagAction::Pop => {
                        stack.pop();
                    }
                }
                // Skip past the tag body.
                while let Some(&(j, _)) = chars.peek() {
                    if j > close {
                        break;
                    }
                    chars.next();
                }
            }
            None => current.push('<'),
        }
    }
    flush(&mut spans, &stack, &mut current);
    spans
}

enum TagAction {
    Push(StyleState),
    Pop,
}

/// Plain text with all markup removed.
pub fn strip(line: &str) -> String {
    parse(line).into_iter().map(|s| s.text).collect()
}

/// Render a markup line to an ANSI escape string.
///
/// Hyperlinks use OSC 8; terminals without support show the label text
/// unchanged.
pub fn to_ansi(line: &str) -> String {
    let mut out = String::new();
    for span in parse(line) {
        let styled = span.color.is_some() || span.bold;
        if let Some(color) = span.color {
            out.push_str(&SetForegroundColor(color).to_string());
        }
        if span.bold {
            out.push_str(&SetAttribute(Attribute::Bold).to_string());
        }
        match span.link {
            Some(url) => {
                out.push_str(&format!(
                    "\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\",
                    url, span.text
                ));
            }
            None => out.push_str(&span.text),
        }
        if styled {
            out.push_str(&SetAttribute(Attribute::Reset).to_string());
        }
    }
    out
}

/// Convert an HSV color (h in degrees, s and v in 0-1) to RGB.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Re-tag every visible character of `text` with a hue-stepped `<rgb:…>` tag.
///
/// This is the banner rainbow: the hue advances per column and per line, so
/// multi-line input gets a diagonal sweep. Whitespace is left untagged.
pub fn rainbow(text: &str) -> String {
    let mut out = String::new();
    for (row, line) in text.lines().enumerate() {
        if row > 0 {
            out.push('\n');
        }
        for (col, c) in line.chars().enumerate() {
            if c.is_whitespace() {
                out.push(c);
                continue;
            }
            let hue = (col as f64 * 4.0 + row as f64 * 12.0) % 360.0;
            let rgb = hsv_to_rgb(hue, 1.0, 1.0);
            out.push_str(&format!("<rgb:{}>{}</>", &rgb.to_hex()[1..], c));
        }
    }
    out
}
