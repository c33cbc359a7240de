//! Rectangular, bordered text boxes for the terminal.
//!
//! [`TextBox`] holds the configuration; [`TextBox::render`] measures the title
//! and content in terminal columns (ignoring escape sequences, counting wide
//! glyphs as two) and lays them out inside a border of the chosen style.

pub mod color;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod terminal;
pub mod text_box;
pub mod width;

pub use color::ColorMode;
pub use error::{BoxError, PaddingAxis};
pub use text_box::{
    BorderGlyphs, BorderSet, BoxStyle, Choice, ContentAlign, TerminalWidthFn, TextBox,
    TitlePosition,
};
