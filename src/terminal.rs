//! Terminal size lookup used for implicit wrap widths.

use std::io::{self, IsTerminal};

use crossterm::terminal::size as terminal_size;

/// Column count of the terminal attached to stdout.
///
/// Fails when stdout is not a terminal so callers never wrap against a guessed width.
pub fn terminal_columns() -> io::Result<u16> {
    if !io::stdout().is_terminal() {
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "stdout is not a terminal",
        ));
    }
    match terminal_size()? {
        (0, _) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero columns",
        )),
        (cols, _) => Ok(cols),
    }
}

/// Wrap width derived from the terminal: two thirds of the columns, at least 20.
pub fn implicit_wrap_width(columns: u16) -> usize {
    (2 * usize::from(columns) / 3).max(20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_wrap_width_uses_two_thirds() {
        assert_eq!(implicit_wrap_width(120), 80);
        assert_eq!(implicit_wrap_width(100), 66);
    }

    #[test]
    fn implicit_wrap_width_has_a_floor() {
        assert_eq!(implicit_wrap_width(0), 20);
        assert_eq!(implicit_wrap_width(24), 20);
    }
}
