use std::fmt;
use std::str::FromStr;

use crate::error::BoxError;

/// Horizontal placement of content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for ContentAlign {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(BoxError::InvalidAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for ContentAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
        };
        f.write_str(label)
    }
}

/// Lay out one body line between two (pre-colored) vertical borders.
///
/// `content_width` is the widest line in the block; `line_width` is the
/// visible width of `line`. With centering, an odd leftover column goes next
/// to the trailing border.
pub(crate) fn format_line(
    line: &str,
    line_width: usize,
    content_width: usize,
    align: ContentAlign,
    side_margin: &str,
    vertical: &str,
) -> String {
    let diff = content_width.saturating_sub(line_width);
    let (before, after) = match align {
        ContentAlign::Left => (0, diff),
        ContentAlign::Right => (diff, 0),
        ContentAlign::Center => (diff / 2, diff / 2 + diff % 2),
    };
    format!(
        "{vertical}{side_margin}{}{line}{}{side_margin}{vertical}",
        " ".repeat(before),
        " ".repeat(after)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_pads_after_text() {
        assert_eq!(format_line("hi", 2, 2, ContentAlign::Left, " ", "|"), "| hi |");
        assert_eq!(format_line("hi", 2, 5, ContentAlign::Left, " ", "|"), "| hi    |");
    }

    #[test]
    fn right_pads_before_text() {
        assert_eq!(format_line("hi", 2, 5, ContentAlign::Right, "", "|"), "|   hi|");
    }

    #[test]
    fn center_puts_odd_column_before_trailing_border() {
        assert_eq!(format_line("hi", 2, 5, ContentAlign::Center, " ", "|"), "|  hi   |");
        assert_eq!(format_line("hi", 2, 6, ContentAlign::Center, "", "|"), "|  hi  |");
    }

    #[test]
    fn colored_separator_is_used_verbatim() {
        let sep = "\x1b[31m│\x1b[0m";
        let line = format_line("x", 1, 1, ContentAlign::Left, "", sep);
        assert!(line.starts_with(sep) && line.ends_with(sep));
    }

    #[test]
    fn parses_alignment_names() {
        assert_eq!("".parse::<ContentAlign>(), Ok(ContentAlign::Left));
        assert_eq!("Center".parse::<ContentAlign>(), Ok(ContentAlign::Center));
        assert_eq!("RIGHT".parse::<ContentAlign>(), Ok(ContentAlign::Right));
        assert_eq!(
            "Weird".parse::<ContentAlign>(),
            Err(BoxError::InvalidAlignment("Weird".to_string()))
        );
    }
}
