use super::*;
use crate::width::{strip_ansi, visible_width};

#[test]
fn empty_spec_is_a_no_op() {
    let text = "hello \x1b[1mworld\x1b[0m";
    assert_eq!(apply_color(text, "", ColorMode::TrueColor).unwrap(), text);
}

#[test]
fn named_color_wraps_text() {
    let colored = apply_color("hello", "Green", ColorMode::TrueColor).unwrap();
    assert_eq!(colored, "\x1b[38;2;0;128;0mhello\x1b[0m");
    assert_eq!(strip_ansi(&colored), "hello");
}

#[test]
fn unknown_color_is_an_error() {
    assert_eq!(
        apply_color("hello", "NotAColor", ColorMode::TrueColor),
        Err(BoxError::InvalidColor("NotAColor".to_string()))
    );
}

#[test]
fn disabled_mode_still_validates() {
    assert!(apply_color("x", "NotAColor", ColorMode::None).is_err());
    assert_eq!(apply_color("x", "Red", ColorMode::None).unwrap(), "x");
}

#[test]
fn style_preserving_resets_without_reset() {
    assert_eq!(style_preserving_resets("foo", |s| s.to_uppercase()), "FOO");
    assert_eq!(style_preserving_resets("", |s| format!("[{s}]")), "");
}

#[test]
fn style_preserving_resets_restyles_each_span() {
    let got = style_preserving_resets("foo\x1b[0mbar\x1b[mbaz", |s| format!("[{s}]"));
    assert_eq!(got, "[foo][bar][baz]");
}

#[test]
fn embedded_styling_survives_outer_color() {
    let text = "plain \x1b[1mbold\x1b[0m tail";
    let colored = apply_color(text, "Cyan", ColorMode::TrueColor).unwrap();
    assert!(colored.contains("\x1b[1mbold"));
    // outer color is re-applied after the embedded reset
    assert!(colored.contains("\x1b[38;2;0;128;128m tail"));
    assert_eq!(strip_ansi(&colored), "plain bold tail");
}

#[test]
fn multi_line_text_keeps_newlines_outside_escapes() {
    let colored = apply_color("line1\nline2", "Red", ColorMode::Ansi16).unwrap();
    assert_eq!(colored, "\x1b[31mline1\x1b[0m\n\x1b[31mline2\x1b[0m");
}

#[test]
fn color_fn_takes_precedence_over_named_color() {
    let func: ColorFn = Arc::new(|s: &str| format!("<<{s}>>"));
    let got = apply_color_fn("Title", Some(&func), "Red", ColorMode::TrueColor).unwrap();
    assert_eq!(got, "<<Title>>");

    let got = apply_color_fn("Title", None, "", ColorMode::TrueColor).unwrap();
    assert_eq!(got, "Title");
}

#[test]
fn rainbow_colors_each_character_without_changing_width() {
    let text = "Box CLI";
    let colored = rainbow(text);
    assert_eq!(strip_ansi(&colored), text);
    assert_eq!(visible_width(&colored), visible_width(text));
    assert_eq!(colored.matches("\x1b[38;2;").count(), 6);
}
