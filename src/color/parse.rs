use crate::error::BoxError;

use super::Color;

/// Basic and bright ANSI color names with their reference RGB values.
const NAMED_COLORS: &[(&str, (u8, u8, u8), u8)] = &[
    ("Black", (0x00, 0x00, 0x00), 0),
    ("Red", (0x80, 0x00, 0x00), 1),
    ("Green", (0x00, 0x80, 0x00), 2),
    ("Yellow", (0x80, 0x80, 0x00), 3),
    ("Blue", (0x00, 0x00, 0x80), 4),
    ("Magenta", (0x80, 0x00, 0x80), 5),
    ("Cyan", (0x00, 0x80, 0x80), 6),
    ("White", (0xc0, 0xc0, 0xc0), 7),
    ("BrightBlack", (0x80, 0x80, 0x80), 8),
    ("BrightRed", (0xff, 0x00, 0x00), 9),
    ("BrightGreen", (0x00, 0xff, 0x00), 10),
    ("BrightYellow", (0xff, 0xff, 0x00), 11),
    ("BrightBlue", (0x00, 0x00, 0xff), 12),
    ("BrightMagenta", (0xff, 0x00, 0xff), 13),
    ("BrightCyan", (0x00, 0xff, 0xff), 14),
    ("BrightWhite", (0xff, 0xff, 0xff), 15),
];

/// Parse a color name, `#RGB`, `#RRGGBB`, `rgb:R/G/B` or `rgba:R/G/B/A` spec.
pub fn parse_color(spec: &str) -> Result<Color, BoxError> {
    let trimmed = spec.trim();
    let invalid = || BoxError::InvalidColor(spec.to_string());

    if let Some(color) = named_color(trimmed) {
        return Ok(color);
    }
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }
    if let Some(channels) = trimmed.strip_prefix("rgba:") {
        return parse_channels(channels, 4).ok_or_else(invalid);
    }
    if let Some(channels) = trimmed.strip_prefix("rgb:") {
        return parse_channels(channels, 3).ok_or_else(invalid);
    }
    Err(invalid())
}

fn named_color(name: &str) -> Option<Color> {
    // `HiRed` and friends are aliases for the bright variants.
    let canonical = match name.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("hi") && name.len() > 2 => {
            format!("Bright{}", &name[2..])
        }
        _ => name.to_string(),
    };
    NAMED_COLORS
        .iter()
        .find(|(known, _, _)| known.eq_ignore_ascii_case(&canonical))
        .map(|&(_, (r, g, b), index)| Color::named(r, g, b, index))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::from_rgb(
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
        )),
        6 => Some(Color::from_rgb(pair(0)?, pair(2)?, pair(4)?)),
        _ => None,
    }
}

/// X11 style channels: 1-4 hex digits each, scaled to 8 bits. Alpha is ignored.
fn parse_channels(channels: &str, expected: usize) -> Option<Color> {
    let parts: Vec<&str> = channels.split('/').collect();
    if parts.len() != expected {
        return None;
    }
    let mut scaled = [0u8; 3];
    for (i, part) in parts.iter().enumerate() {
        let value = scale_channel(part)?;
        if i < 3 {
            scaled[i] = value;
        }
    }
    Some(Color::from_rgb(scaled[0], scaled[1], scaled[2]))
}

fn scale_channel(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 4 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(part, 16).ok()?;
    let max = (1u32 << (4 * part.len())) - 1;
    Some(((value * 255 + max / 2) / max) as u8)
}
