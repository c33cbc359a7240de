//! Column accounting for terminal text that may carry ANSI styling.
//!
//! Every width here is measured in terminal cells: escape sequences count as
//! zero, wide glyphs (CJK, most emoji) count as two.

use std::mem;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vte::{Parser as VteParser, Perform};

/// Tab stops used when expanding `\t`.
pub const TAB_STOP: usize = 8;

/// A tab-expanded line together with its visible width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedLine {
    pub line: String,
    pub width: usize,
}

/// Piece of a string as seen by a terminal: raw escape sequence or printable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Escape(&'a str),
    Text(&'a str),
}

/// Remove escape sequences (CSI, OSC, ...) while keeping printable text,
/// newlines, carriage returns and tabs.
pub fn strip_ansi(s: &str) -> String {
    struct ControlStripper {
        output: Vec<u8>,
    }

    impl Perform for ControlStripper {
        fn print(&mut self, c: char) {
            let mut buf = [0u8; 4];
            let encoded = c.encode_utf8(&mut buf);
            self.output.extend_from_slice(encoded.as_bytes());
        }

        fn execute(&mut self, byte: u8) {
            match byte {
                b'\n' | b'\r' | b'\t' => self.output.push(byte),
                _ => {}
            }
        }
    }

    if !s.contains('\x1b') {
        return s.to_string();
    }

    let mut parser = VteParser::new();
    let mut stripper = ControlStripper {
        output: Vec::with_capacity(s.len()),
    };
    parser.advance(&mut stripper, s.as_bytes());
    String::from_utf8_lossy(&stripper.output).into_owned()
}

/// Number of terminal columns `s` occupies.
#[inline]
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Width of a border glyph. Zero-width glyphs count as one column so that bar
/// construction always advances.
#[inline]
pub fn glyph_width(s: &str) -> usize {
    visible_width(s).max(1)
}

/// Replace each tab with spaces up to the next multiple of [`TAB_STOP`],
/// counting only visible columns. Returns the expanded text and its width.
pub fn expand_tabs(s: &str) -> (String, usize) {
    let mut expanded = String::with_capacity(s.len());
    let mut column = 0usize;

    for segment in ansi_segments(s) {
        match segment {
            Segment::Escape(seq) => expanded.push_str(seq),
            Segment::Text(text) => {
                for ch in text.chars() {
                    if ch == '\t' {
                        let advance = TAB_STOP - (column % TAB_STOP);
                        expanded.extend(std::iter::repeat(' ').take(advance));
                        column += advance;
                    } else {
                        expanded.push(ch);
                        column += UnicodeWidthChar::width(ch).unwrap_or(0);
                    }
                }
            }
        }
    }

    (expanded, column)
}

/// Expand tabs on every line and report the widest visible width.
pub fn longest_visible_width<S: AsRef<str>>(lines: &[S]) -> (usize, Vec<ExpandedLine>) {
    let mut longest = 0usize;
    let mut expanded = Vec::with_capacity(lines.len());

    for line in lines {
        let (line, width) = expand_tabs(line.as_ref());
        longest = longest.max(width);
        expanded.push(ExpandedLine { line, width });
    }

    (longest, expanded)
}

/// Greedy word wrap to at most `limit` visible columns per line.
///
/// Breaks on spaces and keeps escape sequences attached to their words.
/// A single word wider than `limit` is split at character boundaries.
pub fn wrap(text: &str, limit: usize) -> String {
    if limit == 0 {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| wrap_line(line, limit))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, limit: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut width = 0usize;
    let mut started = false;

    for word in line.split(' ') {
        let word_width = visible_width(word);

        if started && width + 1 + word_width <= limit {
            current.push(' ');
            current.push_str(word);
            width += 1 + word_width;
            continue;
        }

        if started {
            lines.push(mem::take(&mut current));
            width = 0;
            started = false;
            if word_width == 0 {
                // collapsed space at a break; keep any styling it carries
                current.push_str(word);
                continue;
            }
        }

        if word_width <= limit {
            current.push_str(word);
            width = word_width;
        } else {
            let mut chunks = break_word(word, limit);
            let last = chunks.pop().unwrap_or_default();
            for chunk in chunks {
                current.push_str(&chunk);
                lines.push(mem::take(&mut current));
            }
            width = visible_width(&last);
            current.push_str(&last);
        }
        started = true;
    }

    lines.push(current);
    lines.join("\n")
}

fn break_word(word: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0usize;

    for segment in ansi_segments(word) {
        match segment {
            Segment::Escape(seq) => chunk.push_str(seq),
            Segment::Text(text) => {
                for ch in text.chars() {
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                    if chunk_width > 0 && chunk_width + ch_width > limit {
                        chunks.push(mem::take(&mut chunk));
                        chunk_width = 0;
                    }
                    chunk.push(ch);
                    chunk_width += ch_width;
                }
            }
        }
    }
    chunks.push(chunk);
    chunks
}

/// Split `s` into escape sequences and printable runs.
///
/// Classification comes from the same `vte` state machine as [`strip_ansi`], so
/// every byte counted here as text is a byte the stripper keeps. Controls other
/// than tab, newline and carriage return land in escape runs.
pub(crate) fn ansi_segments(s: &str) -> impl Iterator<Item = Segment<'_>> {
    #[derive(Default)]
    struct TextTracker {
        printed: Option<usize>,
    }

    impl Perform for TextTracker {
        fn print(&mut self, c: char) {
            self.printed = Some(c.len_utf8());
        }

        fn execute(&mut self, byte: u8) {
            if matches!(byte, b'\n' | b'\r' | b'\t') {
                self.printed = Some(1);
            }
        }
    }

    let mut segments = Vec::new();
    if !s.contains('\x1b') {
        if !s.is_empty() {
            segments.push(Segment::Text(s));
        }
        return segments.into_iter();
    }

    let bytes = s.as_bytes();
    let mut is_text = vec![false; bytes.len()];
    let mut parser = VteParser::new();
    let mut tracker = TextTracker::default();
    for (i, byte) in bytes.iter().enumerate() {
        parser.advance(&mut tracker, std::slice::from_ref(byte));
        if let Some(len) = tracker.printed.take() {
            let end = i + 1;
            let start = end.saturating_sub(len);
            if s.is_char_boundary(start) && s.is_char_boundary(end) {
                is_text[start..end].fill(true);
            }
        }
    }

    let mut run_start = 0usize;
    for i in 1..=bytes.len() {
        if i == bytes.len() || is_text[i] != is_text[run_start] {
            let run = &s[run_start..i];
            segments.push(if is_text[run_start] {
                Segment::Text(run)
            } else {
                Segment::Escape(run)
            });
            run_start = i;
        }
    }
    segments.into_iter()
}
