//! Errors returned by [`TextBox::render`](crate::TextBox::render).

use std::fmt;

/// Which padding axis failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingAxis {
    Horizontal,
    Vertical,
}

impl fmt::Display for PaddingAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Validation and capability failures. None of these are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoxError {
    #[error("invalid Box style: {0}")]
    InvalidStyle(String),

    #[error("invalid TitlePosition: {0}")]
    InvalidTitlePosition(String),

    #[error("invalid Content Alignment: {0}")]
    InvalidAlignment(String),

    #[error("unable to parse color: {0}")]
    InvalidColor(String),

    #[error("{axis} padding cannot be negative: {value}")]
    NegativePadding { axis: PaddingAxis, value: i32 },

    #[error("wrapping limit cannot be negative: {0}")]
    NegativeWrapLimit(i32),

    #[error("cannot determine terminal width: {0}")]
    CannotDetermineWidth(String),

    #[error("multiline titles are only supported with the Inside title position")]
    MultilineTitleNotInside,
}
