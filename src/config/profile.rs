use serde::Deserialize;

use crate::text_box::TextBox;

/// Box settings stored in a YAML profile. Every key is optional.
///
/// ```yaml
/// style: Round
/// px: 2
/// title_position: Top
/// color: Cyan
/// glyphs:
///   horizontal: "="
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxProfile {
    pub style: Option<String>,
    pub px: Option<i32>,
    pub py: Option<i32>,
    pub title_position: Option<String>,
    pub content_align: Option<String>,
    pub color: Option<String>,
    pub title_color: Option<String>,
    pub content_color: Option<String>,
    pub wrap: Option<bool>,
    pub wrap_limit: Option<i32>,
    pub glyphs: GlyphOverrides,
}

/// Individual glyph replacements applied after the style preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphOverrides {
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub bottom_left: Option<String>,
    pub bottom_right: Option<String>,
    pub horizontal: Option<String>,
    pub vertical: Option<String>,
}

impl BoxProfile {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Layer `top` over `self`; keys set in `top` win.
    pub fn overlay(self, top: BoxProfile) -> BoxProfile {
        BoxProfile {
            style: top.style.or(self.style),
            px: top.px.or(self.px),
            py: top.py.or(self.py),
            title_position: top.title_position.or(self.title_position),
            content_align: top.content_align.or(self.content_align),
            color: top.color.or(self.color),
            title_color: top.title_color.or(self.title_color),
            content_color: top.content_color.or(self.content_color),
            wrap: top.wrap.or(self.wrap),
            wrap_limit: top.wrap_limit.or(self.wrap_limit),
            glyphs: self.glyphs.overlay(top.glyphs),
        }
    }

    /// Apply the profile to `text_box`. The style goes first so glyph
    /// overrides land on top of its preset.
    pub fn apply(&self, mut text_box: TextBox) -> TextBox {
        if let Some(style) = &self.style {
            text_box = text_box.style(style.as_str());
        }
        if let Some(px) = self.px {
            text_box = text_box.h_padding(px);
        }
        if let Some(py) = self.py {
            text_box = text_box.v_padding(py);
        }
        if let Some(position) = &self.title_position {
            text_box = text_box.title_position(position.as_str());
        }
        if let Some(align) = &self.content_align {
            text_box = text_box.content_align(align.as_str());
        }
        if let Some(color) = &self.color {
            text_box = text_box.color(color.as_str());
        }
        if let Some(color) = &self.title_color {
            text_box = text_box.title_color(color.as_str());
        }
        if let Some(color) = &self.content_color {
            text_box = text_box.content_color(color.as_str());
        }
        if let Some(wrap) = self.wrap {
            text_box = text_box.wrap_content(wrap);
        }
        if let Some(limit) = self.wrap_limit {
            text_box = text_box.wrap_limit(limit);
        }
        self.glyphs.apply(text_box)
    }
}

impl GlyphOverrides {
    fn overlay(self, top: GlyphOverrides) -> GlyphOverrides {
        GlyphOverrides {
            top_left: top.top_left.or(self.top_left),
            top_right: top.top_right.or(self.top_right),
            bottom_left: top.bottom_left.or(self.bottom_left),
            bottom_right: top.bottom_right.or(self.bottom_right),
            horizontal: top.horizontal.or(self.horizontal),
            vertical: top.vertical.or(self.vertical),
        }
    }

    fn apply(&self, mut text_box: TextBox) -> TextBox {
        if let Some(glyph) = &self.top_left {
            text_box = text_box.top_left(glyph.as_str());
        }
        if let Some(glyph) = &self.top_right {
            text_box = text_box.top_right(glyph.as_str());
        }
        if let Some(glyph) = &self.bottom_left {
            text_box = text_box.bottom_left(glyph.as_str());
        }
        if let Some(glyph) = &self.bottom_right {
            text_box = text_box.bottom_right(glyph.as_str());
        }
        if let Some(glyph) = &self.horizontal {
            text_box = text_box.horizontal(glyph.as_str());
        }
        if let Some(glyph) = &self.vertical {
            text_box = text_box.vertical(glyph.as_str());
        }
        text_box
    }
}
