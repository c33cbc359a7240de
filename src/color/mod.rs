//! Color resolution: spec parsing, capability-aware escapes, and styling that
//! survives resets already embedded in the text.

mod mode;
mod parse;

use std::sync::Arc;

use crate::error::BoxError;

pub use mode::{rgb_to_256, rgb_to_ansi16, ColorMode};
pub use parse::parse_color;

/// SGR reset emitted after every styled span.
pub const RESET: &str = "\x1b[0m";

const RESET_SEQUENCES: [&str; 2] = ["\x1b[0m", "\x1b[m"];

/// Caller-supplied text transform used in place of a named color.
pub type ColorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Resolved foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    ansi_index: Option<u8>,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            ansi_index: None,
        }
    }

    /// One of the 16 palette colors; `index` is used verbatim on 16/256 color terminals.
    pub fn named(r: u8, g: u8, b: u8, index: u8) -> Self {
        Self {
            r,
            g,
            b,
            ansi_index: Some(index),
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn ansi_index(&self) -> Option<u8> {
        self.ansi_index
    }
}

/// Color `text` with `spec`. An empty spec returns the text untouched.
pub fn apply_color(text: &str, spec: &str, mode: ColorMode) -> Result<String, BoxError> {
    if spec.is_empty() {
        return Ok(text.to_string());
    }
    let color = parse_color(spec)?;
    Ok(apply_resolved(text, color, mode))
}

/// Color `text` with an already parsed color, line by line.
pub fn apply_resolved(text: &str, color: Color, mode: ColorMode) -> String {
    let Some(prefix) = mode.foreground(color) else {
        return text.to_string();
    };
    text.split('\n')
        .map(|line| style_preserving_resets(line, |span| format!("{prefix}{span}{RESET}")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply `style` to every span between embedded resets, dropping the resets
/// themselves so the outer style is re-established after each one.
pub fn style_preserving_resets(text: &str, style: impl Fn(&str) -> String) -> String {
    if !RESET_SEQUENCES.iter().any(|reset| text.contains(reset)) {
        return if text.is_empty() {
            String::new()
        } else {
            style(text)
        };
    }

    let mut out = String::with_capacity(text.len() * 2);
    let mut rest = text;
    loop {
        let next = RESET_SEQUENCES
            .iter()
            .filter_map(|reset| rest.find(reset).map(|idx| (idx, reset.len())))
            .min_by_key(|&(idx, _)| idx);
        let Some((idx, len)) = next else {
            if !rest.is_empty() {
                out.push_str(&style(rest));
            }
            break;
        };
        if idx > 0 {
            out.push_str(&style(&rest[..idx]));
        }
        rest = &rest[idx + len..];
    }
    out
}

/// Apply a transform function if present, otherwise a named color.
pub fn apply_color_fn(
    text: &str,
    func: Option<&ColorFn>,
    spec: &str,
    mode: ColorMode,
) -> Result<String, BoxError> {
    match func {
        Some(func) => Ok(func(text)),
        None => apply_color(text, spec, mode),
    }
}

/// Per-character sine gradient, usable as a title or content transform.
pub fn rainbow(text: &str) -> String {
    let mut output = String::with_capacity(text.len() * 20);
    let mut freq = 0.1f64;
    for ch in text.chars() {
        if ch.is_whitespace() {
            output.push(ch);
        } else {
            let channel = |phase: f64| ((freq + phase).sin() * 127.0 + 128.0) as u8;
            let (r, g, b) = (channel(0.0), channel(2.0), channel(4.0));
            output.push_str(&format!("\x1b[38;2;{r};{g};{b}m{ch}{RESET}"));
        }
        freq += 0.1;
    }
    output
}

#[cfg(test)]
mod tests;
