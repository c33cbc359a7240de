//! Command-line parsing, YAML profiles, and validation helpers.

mod profile;
mod validation;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::color::ColorMode;
use crate::text_box::TextBox;

pub use profile::{BoxProfile, GlyphOverrides};

/// CLI options for the boxmaker binary. Flags override values loaded from `--profile`.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boxmaker",
    about = "Boxmaker: draw bordered text boxes in the terminal",
    author,
    version,
    allow_negative_numbers = true
)]
pub struct CliConfig {
    /// Box title; newlines are allowed when the title is inside the box
    #[arg(value_name = "TITLE", default_value = "")]
    pub title: String,

    /// Box content; `-` or omitted reads standard input
    #[arg(value_name = "CONTENT")]
    pub content: Option<String>,

    /// Border style (Single, Double, Round, Bold, SingleDouble, DoubleSingle, Classic, Hidden, Block)
    #[arg(long)]
    pub style: Option<String>,

    /// Horizontal padding in columns
    #[arg(long)]
    pub px: Option<i32>,

    /// Vertical padding in lines
    #[arg(long)]
    pub py: Option<i32>,

    /// Title position (Inside, Top, Bottom)
    #[arg(long = "title-pos")]
    pub title_pos: Option<String>,

    /// Content alignment (Left, Center, Right)
    #[arg(long)]
    pub align: Option<String>,

    /// Border color: a color name, #RGB, #RRGGBB, rgb:R/G/B or rgba:R/G/B/A
    #[arg(long)]
    pub color: Option<String>,

    /// Title color
    #[arg(long = "title-color")]
    pub title_color: Option<String>,

    /// Content color
    #[arg(long = "content-color")]
    pub content_color: Option<String>,

    /// Wrap content to the wrap limit (two thirds of the terminal when unset)
    #[arg(long, default_value_t = false)]
    pub wrap: bool,

    /// Wrap width in columns (requires --wrap)
    #[arg(long = "wrap-limit")]
    pub wrap_limit: Option<i32>,

    /// Top-left corner glyph
    #[arg(long = "top-left")]
    pub top_left: Option<String>,

    /// Top-right corner glyph
    #[arg(long = "top-right")]
    pub top_right: Option<String>,

    /// Bottom-left corner glyph
    #[arg(long = "bottom-left")]
    pub bottom_left: Option<String>,

    /// Bottom-right corner glyph
    #[arg(long = "bottom-right")]
    pub bottom_right: Option<String>,

    /// Horizontal edge glyph
    #[arg(long)]
    pub horizontal: Option<String>,

    /// Vertical edge glyph
    #[arg(long)]
    pub vertical: Option<String>,

    /// YAML profile with default box settings
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Disable colored output (NO_COLOR is honoured as well)
    #[arg(long = "no-color", default_value_t = false)]
    pub no_color: bool,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "BOXMAKER_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "BOXMAKER_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,
}

impl CliConfig {
    /// True when the content should come from standard input.
    pub fn reads_stdin(&self) -> bool {
        matches!(self.content.as_deref(), None | Some("-"))
    }

    /// Color mode for this run: disabled by `--no-color`, detected otherwise.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color {
            ColorMode::None
        } else {
            ColorMode::detect()
        }
    }

    /// Settings given on the command line, as a profile layer.
    pub fn overrides(&self) -> BoxProfile {
        BoxProfile {
            style: self.style.clone(),
            px: self.px,
            py: self.py,
            title_position: self.title_pos.clone(),
            content_align: self.align.clone(),
            color: self.color.clone(),
            title_color: self.title_color.clone(),
            content_color: self.content_color.clone(),
            wrap: self.wrap.then_some(true),
            wrap_limit: self.wrap_limit,
            glyphs: GlyphOverrides {
                top_left: self.top_left.clone(),
                top_right: self.top_right.clone(),
                bottom_left: self.bottom_left.clone(),
                bottom_right: self.bottom_right.clone(),
                horizontal: self.horizontal.clone(),
                vertical: self.vertical.clone(),
            },
        }
    }

    /// Build the configured box: profile first, then command-line flags.
    pub fn to_text_box(&self, mode: ColorMode) -> Result<TextBox> {
        let base = self.load_profile()?.unwrap_or_default();
        let settings = base.overlay(self.overrides());
        Ok(settings.apply(TextBox::new().color_mode(mode)))
    }
}
