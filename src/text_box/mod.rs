//! The box engine: a fluent configuration value and the renderer that turns a
//! title and content string into a rectangular bordered block.
//!
//! ```
//! use boxmaker::{BoxStyle, TextBox, TitlePosition};
//!
//! let rendered = TextBox::new()
//!     .style(BoxStyle::Round)
//!     .padding(2, 1)
//!     .title_position(TitlePosition::Top)
//!     .render("Box CLI Maker", "Highly Customizable Terminal Box Maker")
//!     .unwrap();
//! assert!(rendered.starts_with("╭ Box CLI Maker "));
//! ```

mod align;
mod bars;
mod render;
mod styles;

use std::fmt;
use std::io;
use std::str::FromStr;
use std::sync::Arc;

use crate::color::{ColorFn, ColorMode};
use crate::error::BoxError;
use crate::terminal::terminal_columns;

pub use align::ContentAlign;
pub use styles::{
    BorderGlyphs, BorderSet, BoxStyle, BORDER_BLOCK, BORDER_BOLD, BORDER_CLASSIC, BORDER_DOUBLE,
    BORDER_DOUBLE_SINGLE, BORDER_HIDDEN, BORDER_ROUND, BORDER_SINGLE, BORDER_SINGLE_DOUBLE,
};

/// Where the title is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitlePosition {
    /// First lines of the body, centered, followed by a blank line
    #[default]
    Inside,
    /// Embedded in the top bar
    Top,
    /// Embedded in the bottom bar
    Bottom,
}

impl FromStr for TitlePosition {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "inside" => Ok(Self::Inside),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(BoxError::InvalidTitlePosition(s.to_string())),
        }
    }
}

impl fmt::Display for TitlePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Inside => "Inside",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        };
        f.write_str(label)
    }
}

/// A setting that was either recognised or recorded verbatim so that
/// [`TextBox::render`] can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Known(T),
    Unknown(String),
}

impl<T: Copy> Choice<T> {
    pub(crate) fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unknown(_) => None,
        }
    }
}

macro_rules! choice_conversions {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for Choice<$ty> {
            fn from(value: $ty) -> Self {
                Choice::Known(value)
            }
        }

        impl From<&str> for Choice<$ty> {
            fn from(name: &str) -> Self {
                name.parse::<$ty>()
                    .map(Choice::Known)
                    .unwrap_or_else(|_| Choice::Unknown(name.to_string()))
            }
        }

        impl From<String> for Choice<$ty> {
            fn from(name: String) -> Self {
                Choice::from(name.as_str())
            }
        }
    )+};
}

choice_conversions!(BoxStyle, ContentAlign, TitlePosition);

/// Source of the terminal column count, consulted when wrapping without an
/// explicit limit.
pub type TerminalWidthFn = fn() -> io::Result<u16>;

/// Box configuration. Setters consume and return the value so calls chain;
/// [`TextBox::render`] only reads it.
#[derive(Clone)]
pub struct TextBox {
    glyphs: BorderGlyphs,
    style: Option<Choice<BoxStyle>>,
    px: i32,
    py: i32,
    content_align: Choice<ContentAlign>,
    title_pos: Choice<TitlePosition>,
    title_color: String,
    content_color: String,
    color: String,
    title_color_fn: Option<ColorFn>,
    content_color_fn: Option<ColorFn>,
    allow_wrapping: bool,
    wrap_limit: i32,
    color_mode: ColorMode,
    terminal_width: TerminalWidthFn,
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBox")
            .field("glyphs", &self.glyphs)
            .field("style", &self.style)
            .field("px", &self.px)
            .field("py", &self.py)
            .field("content_align", &self.content_align)
            .field("title_pos", &self.title_pos)
            .field("title_color", &self.title_color)
            .field("content_color", &self.content_color)
            .field("color", &self.color)
            .field("title_color_fn", &self.title_color_fn.is_some())
            .field("content_color_fn", &self.content_color_fn.is_some())
            .field("allow_wrapping", &self.allow_wrapping)
            .field("wrap_limit", &self.wrap_limit)
            .field("color_mode", &self.color_mode)
            .finish_non_exhaustive()
    }
}

impl TextBox {
    /// Single style, title inside, left aligned, no padding, truecolor output.
    pub fn new() -> Self {
        Self {
            glyphs: BorderGlyphs::default(),
            style: None,
            px: 0,
            py: 0,
            content_align: Choice::Known(ContentAlign::Left),
            title_pos: Choice::Known(TitlePosition::Inside),
            title_color: String::new(),
            content_color: String::new(),
            color: String::new(),
            title_color_fn: None,
            content_color_fn: None,
            allow_wrapping: false,
            wrap_limit: 0,
            color_mode: ColorMode::TrueColor,
            terminal_width: terminal_columns,
        }
    }

    /// Independent copy; later setters on either value do not affect the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Select a built-in style and load its six glyphs. Unknown names are kept
    /// and rejected by `render`; glyphs then fall back to Single.
    pub fn style(mut self, style: impl Into<Choice<BoxStyle>>) -> Self {
        let style = style.into();
        self.glyphs = style.known().unwrap_or_default().border_set().into();
        self.style = Some(style);
        self
    }

    pub fn padding(mut self, px: i32, py: i32) -> Self {
        self.px = px;
        self.py = py;
        self
    }

    /// Horizontal padding in columns.
    pub fn h_padding(mut self, px: i32) -> Self {
        self.px = px;
        self
    }

    /// Vertical padding in lines.
    pub fn v_padding(mut self, py: i32) -> Self {
        self.py = py;
        self
    }

    pub fn content_align(mut self, align: impl Into<Choice<ContentAlign>>) -> Self {
        self.content_align = align.into();
        self
    }

    pub fn title_position(mut self, position: impl Into<Choice<TitlePosition>>) -> Self {
        self.title_pos = position.into();
        self
    }

    /// Border color; empty disables styling.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn title_color(mut self, color: impl Into<String>) -> Self {
        self.title_color = color.into();
        self
    }

    pub fn content_color(mut self, color: impl Into<String>) -> Self {
        self.content_color = color.into();
        self
    }

    /// Transform applied to each title line. Takes precedence over `title_color`.
    pub fn title_color_fn<F>(mut self, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.title_color_fn = Some(Arc::new(func));
        self
    }

    /// Transform applied to each content line. Takes precedence over `content_color`.
    pub fn content_color_fn<F>(mut self, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.content_color_fn = Some(Arc::new(func));
        self
    }

    pub fn wrap_content(mut self, allow: bool) -> Self {
        self.allow_wrapping = allow;
        self
    }

    /// Wrap width in columns; 0 derives it from the terminal width.
    pub fn wrap_limit(mut self, limit: i32) -> Self {
        self.wrap_limit = limit;
        self
    }

    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Replace the terminal width query used for implicit wrapping.
    pub fn terminal_width(mut self, query: TerminalWidthFn) -> Self {
        self.terminal_width = query;
        self
    }

    pub fn top_left(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.top_left = glyph.into();
        self
    }

    pub fn top_right(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.top_right = glyph.into();
        self
    }

    pub fn bottom_left(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.bottom_left = glyph.into();
        self
    }

    pub fn bottom_right(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.bottom_right = glyph.into();
        self
    }

    pub fn horizontal(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.horizontal = glyph.into();
        self
    }

    pub fn vertical(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.vertical = glyph.into();
        self
    }

    /// Set all six glyphs at once.
    pub fn glyphs(mut self, glyphs: impl Into<BorderGlyphs>) -> Self {
        self.glyphs = glyphs.into();
        self
    }

    pub fn border_glyphs(&self) -> &BorderGlyphs {
        &self.glyphs
    }
}
