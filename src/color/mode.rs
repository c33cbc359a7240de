//! Terminal color-capability profile so named colors degrade to what the host supports.

use std::env;

use super::Color;

/// Color mode capabilities of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 24-bit true color (16 million colors)
    #[default]
    TrueColor,
    /// 256 color mode
    Color256,
    /// Basic 16 ANSI colors
    Ansi16,
    /// No color support
    None,
}

impl ColorMode {
    /// Detect the terminal's color capabilities from environment variables.
    pub fn detect() -> Self {
        // https://no-color.org/
        if env::var("NO_COLOR").is_ok() {
            return Self::None;
        }

        if let Ok(colorterm) = env::var("COLORTERM") {
            if colorterm == "truecolor" || colorterm == "24bit" {
                return Self::TrueColor;
            }
        }

        // Some terminals support truecolor but do not set COLORTERM.
        if env_supports_truecolor_without_colorterm() {
            return Self::TrueColor;
        }

        if let Ok(term) = env::var("TERM") {
            if term.contains("256color") || term.contains("256-color") {
                return Self::Color256;
            }
            if term.contains("color") || term.contains("xterm") || term.contains("screen") {
                return Self::Ansi16;
            }
            if term == "dumb" {
                return Self::None;
            }
        }

        Self::Ansi16
    }

    /// Check if colors are supported at all.
    pub fn supports_color(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Foreground SGR sequence for `color` in this mode, or `None` when color is disabled.
    pub fn foreground(&self, color: Color) -> Option<String> {
        let (r, g, b) = color.rgb();
        match self {
            Self::TrueColor => Some(format!("\x1b[38;2;{r};{g};{b}m")),
            Self::Color256 => {
                let index = color.ansi_index().unwrap_or_else(|| rgb_to_256(r, g, b));
                Some(format!("\x1b[38;5;{index}m"))
            }
            Self::Ansi16 => {
                let index = color.ansi_index().unwrap_or_else(|| rgb_to_ansi16(r, g, b));
                let code = if index < 8 {
                    30 + u16::from(index)
                } else {
                    90 + u16::from(index - 8)
                };
                Some(format!("\x1b[{code}m"))
            }
            Self::None => None,
        }
    }
}

fn env_supports_truecolor_without_colorterm() -> bool {
    if let Ok(term_program) = env::var("TERM_PROGRAM") {
        let program = term_program.to_lowercase();
        if matches!(
            program.as_str(),
            "vscode" | "wezterm" | "iterm.app" | "warpterminal" | "ghostty"
        ) || program.contains("jetbrains")
        {
            return true;
        }
    }

    if let Ok(terminal_emulator) = env::var("TERMINAL_EMULATOR") {
        if terminal_emulator.to_lowercase().contains("jetbrains") {
            return true;
        }
    }

    false
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueColor => write!(f, "truecolor"),
            Self::Color256 => write!(f, "256"),
            Self::Ansi16 => write!(f, "ansi"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Convert a 24-bit RGB color to the closest ANSI 256 color.
pub fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return ((r as u16 - 8) / 10 + 232) as u8;
    }

    // 6x6x6 color cube
    let r_idx = (r as u16 * 5 / 255) as u8;
    let g_idx = (g as u16 * 5 / 255) as u8;
    let b_idx = (b as u16 * 5 / 255) as u8;

    16 + 36 * r_idx + 6 * g_idx + b_idx
}

/// Convert a 24-bit RGB color to the closest ANSI 16 color.
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let brightness = (r as u16 + g as u16 + b as u16) / 3;
    let is_bright = brightness > 127;

    let max = r.max(g).max(b);
    let base = if max == 0 {
        0 // Black
    } else if r == max && g == max && b == max {
        7 // White/gray
    } else if r == max && g >= b {
        if g > r / 2 {
            3 // Yellow
        } else {
            1 // Red
        }
    } else if g == max {
        if b > g / 2 {
            6 // Cyan
        } else {
            2 // Green
        }
    } else if r > b / 2 {
        5 // Magenta
    } else {
        4 // Blue
    };

    if is_bright {
        base + 8
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn with_env_lock<T>(f: impl FnOnce() -> T) -> T {
        static ENV_GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        let _guard = ENV_GUARD
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        f()
    }

    #[test]
    fn color_mode_supports_color() {
        assert!(ColorMode::TrueColor.supports_color());
        assert!(ColorMode::Color256.supports_color());
        assert!(ColorMode::Ansi16.supports_color());
        assert!(!ColorMode::None.supports_color());
    }

    #[test]
    fn color_mode_display() {
        assert_eq!(format!("{}", ColorMode::TrueColor), "truecolor");
        assert_eq!(format!("{}", ColorMode::None), "none");
    }

    #[test]
    fn foreground_per_mode() {
        let teal = Color::from_rgb(0, 128, 128);
        assert_eq!(
            ColorMode::TrueColor.foreground(teal).as_deref(),
            Some("\x1b[38;2;0;128;128m")
        );
        assert!(ColorMode::Color256
            .foreground(teal)
            .is_some_and(|seq| seq.starts_with("\x1b[38;5;")));
        assert_eq!(ColorMode::None.foreground(teal), None);
    }

    #[test]
    fn ansi16_prefers_named_index() {
        let bright_red = Color::named(255, 0, 0, 9);
        assert_eq!(
            ColorMode::Ansi16.foreground(bright_red).as_deref(),
            Some("\x1b[91m")
        );
        let green = Color::named(0, 128, 0, 2);
        assert_eq!(ColorMode::Ansi16.foreground(green).as_deref(), Some("\x1b[32m"));
    }

    #[test]
    fn rgb_to_256_grayscale() {
        assert_eq!(rgb_to_256(0, 0, 0), 16);
        assert_eq!(rgb_to_256(255, 255, 255), 231);
    }

    #[test]
    fn rgb_to_256_colors() {
        let red = rgb_to_256(255, 0, 0);
        assert!((16..232).contains(&red));
    }

    #[test]
    fn rgb_to_ansi16_basic() {
        assert_eq!(rgb_to_ansi16(0, 0, 0), 0);
        assert_eq!(rgb_to_ansi16(255, 255, 255), 15);
        assert_eq!(rgb_to_ansi16(128, 0, 0), 1);
    }

    #[test]
    fn detect_honors_no_color() {
        with_env_lock(|| {
            let prev_no_color = std::env::var("NO_COLOR").ok();
            std::env::set_var("NO_COLOR", "1");

            assert_eq!(ColorMode::detect(), ColorMode::None);

            match prev_no_color {
                Some(v) => std::env::set_var("NO_COLOR", v),
                None => std::env::remove_var("NO_COLOR"),
            }
        });
    }

    #[test]
    fn detect_truecolor_from_colorterm() {
        with_env_lock(|| {
            let prev_colorterm = std::env::var("COLORTERM").ok();
            let prev_no_color = std::env::var("NO_COLOR").ok();

            std::env::set_var("COLORTERM", "truecolor");
            std::env::remove_var("NO_COLOR");

            assert_eq!(ColorMode::detect(), ColorMode::TrueColor);

            match prev_colorterm {
                Some(v) => std::env::set_var("COLORTERM", v),
                None => std::env::remove_var("COLORTERM"),
            }
            match prev_no_color {
                Some(v) => std::env::set_var("NO_COLOR", v),
                None => std::env::remove_var("NO_COLOR"),
            }
        });
    }
}
