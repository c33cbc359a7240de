//! Horizontal border bars built to an exact visible width.

use crate::width::{expand_tabs, visible_width};

/// `width` columns of `fill`, padded with spaces when `width` is not a
/// multiple of `fill_width`.
pub(crate) fn build_segment(fill: &str, width: usize, fill_width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let fill_width = fill_width.max(1);
    let count = width / fill_width;
    let mut segment = fill.repeat(count);
    segment.push_str(&" ".repeat(width - count * fill_width));
    segment
}

/// Bar without a title: `left + fill... + right`, `line_width` columns wide.
pub(crate) fn build_plain_bar(
    left: &str,
    fill: &str,
    right: &str,
    left_width: usize,
    right_width: usize,
    line_width: usize,
    fill_width: usize,
) -> String {
    let inner = line_width.saturating_sub(left_width + right_width);
    format!("{left}{}{right}", build_segment(fill, inner, fill_width))
}

/// Bar with a left-anchored title: `left + " " + title + " " + gap + fill... + right`.
///
/// Leftover columns that do not fit a whole fill glyph go into the gap after
/// the title so the glyph run ends flush against the right corner.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_titled_bar(
    left: &str,
    fill: &str,
    right: &str,
    left_width: usize,
    right_width: usize,
    line_width: usize,
    fill_width: usize,
    title: &str,
) -> String {
    if title.is_empty() {
        return build_plain_bar(
            left,
            fill,
            right,
            left_width,
            right_width,
            line_width,
            fill_width,
        );
    }

    let (title, _) = expand_tabs(title);
    let title_segment = visible_width(&title) + 2;
    let inner = line_width
        .saturating_sub(left_width + right_width)
        .max(title_segment);
    let remaining = inner - title_segment;

    let (gap, fill_run) = if fill_width > 1 {
        (remaining % fill_width, remaining - remaining % fill_width)
    } else {
        (0, remaining)
    };

    format!(
        "{left} {title} {}{}{right}",
        " ".repeat(gap),
        build_segment(fill, fill_run, fill_width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::glyph_width;

    const PACKAGE: &str = "📦";

    #[test]
    fn segment_matches_requested_width() {
        let hw = glyph_width(PACKAGE);
        assert_eq!(visible_width(&build_segment(PACKAGE, hw * 3, hw)), hw * 3);
        let odd = build_segment(PACKAGE, hw * 3 + 1, hw);
        assert_eq!(visible_width(&odd), hw * 3 + 1);
        assert!(odd.ends_with(' '));
        assert_eq!(build_segment("-", 0, 1), "");
    }

    #[test]
    fn plain_bar_is_exact_width() {
        let hw = glyph_width(PACKAGE);
        let line_width = hw * 10 + 2 * hw;
        let bar = build_plain_bar(PACKAGE, PACKAGE, PACKAGE, hw, hw, line_width, hw);
        assert_eq!(visible_width(&bar), line_width);
        assert!(bar.starts_with(PACKAGE) && bar.ends_with(PACKAGE));
    }

    #[test]
    fn plain_bar_single_width_glyphs() {
        assert_eq!(build_plain_bar("┌", "─", "┐", 1, 1, 6, 1), "┌────┐");
    }

    #[test]
    fn titled_bar_anchors_title_left() {
        let bar = build_titled_bar("+", "-", "+", 1, 1, 19, 1, "TITLE");
        assert_eq!(bar, "+ TITLE ----------+");
    }

    #[test]
    fn titled_bar_with_emoji_fill() {
        let hw = glyph_width(PACKAGE);
        let title = "Box CLI Maker";
        let line_width = hw * 20 + 2 * hw;

        let bar = build_titled_bar(PACKAGE, PACKAGE, PACKAGE, hw, hw, line_width, hw, title);
        assert_eq!(visible_width(&bar), line_width);
        assert!(bar.contains(&format!(" {title} ")));
        assert!(bar.starts_with(&format!("{PACKAGE} ")));
        assert!(bar.ends_with(&format!("{PACKAGE}{PACKAGE}")));
    }

    #[test]
    fn titled_bar_gap_sits_after_title() {
        // 13 + 2 = 15 title columns, 5 left over: one space then two glyphs
        let bar = build_titled_bar("[", PACKAGE, "]", 1, 1, 22, 2, "Box CLI Maker");
        assert_eq!(bar, format!("[ Box CLI Maker  {PACKAGE}{PACKAGE}]"));
        assert_eq!(visible_width(&bar), 22);
    }

    #[test]
    fn titled_bar_grows_to_fit_title() {
        let bar = build_titled_bar("+", "-", "+", 1, 1, 4, 1, "long title");
        assert_eq!(bar, "+ long title +");
    }

    #[test]
    fn empty_title_degenerates_to_plain_bar() {
        assert_eq!(
            build_titled_bar("+", "-", "+", 1, 1, 5, 1, ""),
            build_plain_bar("+", "-", "+", 1, 1, 5, 1)
        );
    }

    #[test]
    fn titled_bar_expands_tabs() {
        let bar = build_titled_bar("+", "-", "+", 1, 1, 13, 1, "a\tb");
        assert_eq!(bar, format!("+ a{}b +", " ".repeat(7)));
    }
}
