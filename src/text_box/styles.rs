use std::fmt;
use std::str::FromStr;

use crate::error::BoxError;

/// Border glyph set for one of the built-in styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

/// Standard single-line borders
pub const BORDER_SINGLE: BorderSet = BorderSet {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal: "─",
    vertical: "│",
};

/// Double-line borders
pub const BORDER_DOUBLE: BorderSet = BorderSet {
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
    horizontal: "═",
    vertical: "║",
};

/// Rounded corners
pub const BORDER_ROUND: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal: "─",
    vertical: "│",
};

/// Heavy/bold borders
pub const BORDER_BOLD: BorderSet = BorderSet {
    top_left: "┏",
    top_right: "┓",
    bottom_left: "┗",
    bottom_right: "┛",
    horizontal: "━",
    vertical: "┃",
};

/// Single horizontal, double vertical
pub const BORDER_SINGLE_DOUBLE: BorderSet = BorderSet {
    top_left: "╓",
    top_right: "╖",
    bottom_left: "╙",
    bottom_right: "╜",
    horizontal: "─",
    vertical: "║",
};

/// Double horizontal, single vertical
pub const BORDER_DOUBLE_SINGLE: BorderSet = BorderSet {
    top_left: "╒",
    top_right: "╕",
    bottom_left: "╘",
    bottom_right: "╛",
    horizontal: "═",
    vertical: "│",
};

/// Plain ASCII
pub const BORDER_CLASSIC: BorderSet = BorderSet {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
};

/// Corners only; edges are spaces
pub const BORDER_HIDDEN: BorderSet = BorderSet {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: " ",
    vertical: " ",
};

pub const BORDER_BLOCK: BorderSet = BorderSet {
    top_left: "█",
    top_right: "█",
    bottom_left: "█",
    bottom_right: "█",
    horizontal: "█",
    vertical: "█",
};

/// Built-in border styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxStyle {
    #[default]
    Single,
    Double,
    Round,
    Bold,
    SingleDouble,
    DoubleSingle,
    Classic,
    Hidden,
    Block,
}

impl BoxStyle {
    pub const ALL: [BoxStyle; 9] = [
        Self::Single,
        Self::Double,
        Self::Round,
        Self::Bold,
        Self::SingleDouble,
        Self::DoubleSingle,
        Self::Classic,
        Self::Hidden,
        Self::Block,
    ];

    pub fn border_set(self) -> BorderSet {
        match self {
            Self::Single => BORDER_SINGLE,
            Self::Double => BORDER_DOUBLE,
            Self::Round => BORDER_ROUND,
            Self::Bold => BORDER_BOLD,
            Self::SingleDouble => BORDER_SINGLE_DOUBLE,
            Self::DoubleSingle => BORDER_DOUBLE_SINGLE,
            Self::Classic => BORDER_CLASSIC,
            Self::Hidden => BORDER_HIDDEN,
            Self::Block => BORDER_BLOCK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Round => "Round",
            Self::Bold => "Bold",
            Self::SingleDouble => "SingleDouble",
            Self::DoubleSingle => "DoubleSingle",
            Self::Classic => "Classic",
            Self::Hidden => "Hidden",
            Self::Block => "Block",
        }
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoxStyle {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoxError::InvalidStyle(s.to_string()))
    }
}

/// The six glyphs a box is drawn with. Each may be any string, including
/// multi-column emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub horizontal: String,
    pub vertical: String,
}

impl From<BorderSet> for BorderGlyphs {
    fn from(set: BorderSet) -> Self {
        Self {
            top_left: set.top_left.to_string(),
            top_right: set.top_right.to_string(),
            bottom_left: set.bottom_left.to_string(),
            bottom_right: set.bottom_right.to_string(),
            horizontal: set.horizontal.to_string(),
            vertical: set.vertical.to_string(),
        }
    }
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        BORDER_SINGLE.into()
    }
}
