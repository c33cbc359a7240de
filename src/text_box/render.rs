use std::iter;

use tracing::{debug, trace};

use crate::color::{apply_color_fn, apply_resolved, parse_color, Color, ColorFn};
use crate::error::{BoxError, PaddingAxis};
use crate::terminal::implicit_wrap_width;
use crate::width::{
    expand_tabs, glyph_width, longest_visible_width, strip_ansi, visible_width, wrap, ExpandedLine,
};

use super::align::{format_line, ContentAlign};
use super::bars::{build_plain_bar, build_titled_bar};
use super::{Choice, TextBox, TitlePosition};

/// Sizes shared by every line of one rendered box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
    /// Width available to text between the side margins.
    pub(crate) content_width: usize,
    /// Columns between the two vertical borders.
    pub(crate) inner_width: usize,
    /// Visible width of every output line, bars included.
    pub(crate) line_width: usize,
}

impl TextBox {
    /// Render `title` and `content` into a newline-terminated box.
    ///
    /// Either the whole box is returned or nothing is: every validation
    /// failure surfaces as a [`BoxError`].
    pub fn render(&self, title: &str, content: &str) -> Result<String, BoxError> {
        match self.render_box(title, content) {
            Ok(rendered) => Ok(rendered),
            Err(err) => {
                debug!(error = %err, "box render rejected");
                Err(err)
            }
        }
    }

    /// Like [`TextBox::render`] but panics on error, for call sites whose
    /// configuration is known to be valid.
    pub fn must_render(&self, title: &str, content: &str) -> String {
        self.render(title, content)
            .unwrap_or_else(|err| panic!("box render failed: {err}"))
    }

    fn render_box(&self, title: &str, content: &str) -> Result<String, BoxError> {
        self.validate()?;
        let content = self.wrapped_content(content)?;

        let inside = self.title_pos == Choice::Known(TitlePosition::Inside);
        if !inside && title.contains('\n') {
            return Err(BoxError::MultilineTitleNotInside);
        }

        let title_lines = if title.is_empty() {
            Vec::new()
        } else {
            self.style_lines(title, self.title_color_fn.as_ref(), &self.title_color)?
        };

        let mut block = Vec::new();
        let mut title_len = 0;
        let mut bar_title = String::new();
        if inside {
            if !title_lines.is_empty() {
                title_len = title_lines.len();
                block.extend(title_lines);
                block.push(String::new());
            }
        } else if let Some(first) = title_lines.into_iter().next() {
            bar_title = expand_tabs(&first).0;
        }
        block.extend(self.style_lines(
            &content,
            self.content_color_fn.as_ref(),
            &self.content_color,
        )?);

        let (longest, lines) = longest_visible_width(&block);
        let geometry = self.reconcile(longest, &bar_title);
        debug!(
            content_width = geometry.content_width,
            inner_width = geometry.inner_width,
            line_width = geometry.line_width,
            lines = lines.len(),
            "box geometry"
        );

        let (top, bottom) = self.build_bars(&geometry, &bar_title)?;
        let border = self.border_color()?;
        let (top, bottom) = self.color_bars(top, bottom, &bar_title, border);
        let body = self.build_body(&lines, title_len, &geometry, border)?;

        let mut rendered = String::with_capacity((body.len() + 2) * (geometry.line_width + 1));
        rendered.push_str(&top);
        rendered.push('\n');
        rendered.push_str(&body.join("\n"));
        rendered.push('\n');
        rendered.push_str(&bottom);
        rendered.push('\n');
        Ok(rendered)
    }

    fn validate(&self) -> Result<(), BoxError> {
        if let Some(Choice::Unknown(name)) = &self.style {
            return Err(BoxError::InvalidStyle(name.clone()));
        }
        if self.px < 0 {
            return Err(BoxError::NegativePadding {
                axis: PaddingAxis::Horizontal,
                value: self.px,
            });
        }
        if self.py < 0 {
            return Err(BoxError::NegativePadding {
                axis: PaddingAxis::Vertical,
                value: self.py,
            });
        }
        if self.allow_wrapping && self.wrap_limit < 0 {
            return Err(BoxError::NegativeWrapLimit(self.wrap_limit));
        }
        for spec in [&self.color, &self.title_color, &self.content_color] {
            if !spec.is_empty() {
                parse_color(spec)?;
            }
        }
        Ok(())
    }

    fn wrapped_content(&self, content: &str) -> Result<String, BoxError> {
        if !self.allow_wrapping {
            return Ok(content.to_string());
        }
        let limit = if self.wrap_limit > 0 {
            self.wrap_limit as usize
        } else {
            let columns = (self.terminal_width)()
                .map_err(|err| BoxError::CannotDetermineWidth(err.to_string()))?;
            implicit_wrap_width(columns)
        };
        trace!(limit, "wrapping content");

        let expanded: Vec<String> = content
            .split('\n')
            .map(|line| expand_tabs(line).0)
            .collect();
        Ok(wrap(&expanded.join("\n"), limit))
    }

    /// Style each line with its transform or named color. Runs before
    /// measurement so transforms that change the visible width stay rectangular.
    fn style_lines(
        &self,
        text: &str,
        func: Option<&ColorFn>,
        spec: &str,
    ) -> Result<Vec<String>, BoxError> {
        text.split('\n')
            .map(|line| apply_color_fn(line, func, spec, self.color_mode))
            .collect()
    }

    /// Grow the measured width until the title fits on its bar, both bars fit
    /// their corners, and the horizontal glyph tiles the inner width exactly.
    pub(crate) fn reconcile(&self, longest: usize, bar_title: &str) -> Geometry {
        let glyphs = &self.glyphs;
        let margins = 2 * self.px.max(0) as usize;
        let vertical_width = glyph_width(&glyphs.vertical);
        let horizontal_width = glyph_width(&glyphs.horizontal);

        let corner_excess = |left: &str, right: &str| {
            (glyph_width(left) + glyph_width(right)).saturating_sub(2 * vertical_width)
        };
        let top_excess = corner_excess(&glyphs.top_left, &glyphs.top_right);
        let bottom_excess = corner_excess(&glyphs.bottom_left, &glyphs.bottom_right);

        let mut minimum = top_excess.max(bottom_excess);
        if !bar_title.is_empty() {
            let excess = match self.title_pos.known() {
                Some(TitlePosition::Top) => top_excess,
                Some(TitlePosition::Bottom) => bottom_excess,
                _ => 0,
            };
            minimum = minimum.max(visible_width(bar_title) + 2 + excess);
        }

        let mut content_width = longest;
        let mut inner_width = longest + margins;
        if minimum > inner_width {
            inner_width = minimum;
            content_width = inner_width.saturating_sub(margins);
        }
        if horizontal_width > 1 && inner_width % horizontal_width != 0 {
            inner_width = inner_width.div_ceil(horizontal_width) * horizontal_width;
            content_width = inner_width.saturating_sub(margins);
        }

        Geometry {
            content_width,
            inner_width,
            line_width: inner_width + 2 * vertical_width,
        }
    }

    fn build_bars(&self, geometry: &Geometry, bar_title: &str) -> Result<(String, String), BoxError> {
        let glyphs = &self.glyphs;
        let fill = glyphs.horizontal.as_str();
        let fill_width = glyph_width(fill);
        let plain = |left: &str, right: &str| {
            build_plain_bar(
                left,
                fill,
                right,
                glyph_width(left),
                glyph_width(right),
                geometry.line_width,
                fill_width,
            )
        };
        let titled = |left: &str, right: &str| {
            build_titled_bar(
                left,
                fill,
                right,
                glyph_width(left),
                glyph_width(right),
                geometry.line_width,
                fill_width,
                bar_title,
            )
        };

        match &self.title_pos {
            Choice::Known(TitlePosition::Inside) => Ok((
                plain(&glyphs.top_left, &glyphs.top_right),
                plain(&glyphs.bottom_left, &glyphs.bottom_right),
            )),
            Choice::Known(TitlePosition::Top) => Ok((
                titled(&glyphs.top_left, &glyphs.top_right),
                plain(&glyphs.bottom_left, &glyphs.bottom_right),
            )),
            Choice::Known(TitlePosition::Bottom) => Ok((
                plain(&glyphs.top_left, &glyphs.top_right),
                titled(&glyphs.bottom_left, &glyphs.bottom_right),
            )),
            Choice::Unknown(name) => Err(BoxError::InvalidTitlePosition(name.clone())),
        }
    }

    /// Parsed border color, or `None` when unset or the color mode has no color.
    fn border_color(&self) -> Result<Option<Color>, BoxError> {
        if self.color.is_empty() {
            return Ok(None);
        }
        let color = parse_color(&self.color)?;
        Ok(self.color_mode.supports_color().then_some(color))
    }

    fn paint(&self, text: &str, border: Option<Color>) -> String {
        match border {
            Some(color) => apply_resolved(text, color, self.color_mode),
            None => text.to_string(),
        }
    }

    fn color_bars(
        &self,
        top: String,
        bottom: String,
        bar_title: &str,
        border: Option<Color>,
    ) -> (String, String) {
        let split_title = !bar_title.is_empty()
            && (!self.title_color.is_empty() || self.title_color_fn.is_some());
        let position = self.title_pos.known();

        let top = if split_title && position == Some(TitlePosition::Top) {
            self.recolor_titled_bar(&top, &self.glyphs.top_left, bar_title, border)
        } else {
            self.paint(&top, border)
        };
        let bottom = if split_title && position == Some(TitlePosition::Bottom) {
            self.recolor_titled_bar(&bottom, &self.glyphs.bottom_left, bar_title, border)
        } else {
            self.paint(&bottom, border)
        };
        (top, bottom)
    }

    /// Color the border spans around the already styled title separately so
    /// neither color leaks into the other.
    fn recolor_titled_bar(
        &self,
        bar: &str,
        left: &str,
        title: &str,
        border: Option<Color>,
    ) -> String {
        let plain_bar = strip_ansi(bar);
        let plain_title = strip_ansi(title);
        let offset = strip_ansi(left).len();
        let found = plain_bar
            .get(offset..)
            .and_then(|rest| rest.find(&plain_title))
            .map(|idx| idx + offset);
        let Some(idx) = found else {
            return self.paint(bar, border);
        };

        let before = &plain_bar[..idx];
        let after = &plain_bar[idx + plain_title.len()..];
        format!(
            "{}{title}{}",
            self.paint(before, border),
            self.paint(after, border)
        )
    }

    fn build_body(
        &self,
        lines: &[ExpandedLine],
        title_len: usize,
        geometry: &Geometry,
        border: Option<Color>,
    ) -> Result<Vec<String>, BoxError> {
        let vertical = self.paint(&self.glyphs.vertical, border);
        let side_margin = " ".repeat(self.px.max(0) as usize);
        let padding_line = format!("{vertical}{}{vertical}", " ".repeat(geometry.inner_width));
        let py = self.py.max(0) as usize;

        let mut body = Vec::with_capacity(lines.len() + 2 * py);
        body.extend(iter::repeat(padding_line.clone()).take(py));
        for (i, line) in lines.iter().enumerate() {
            let align = if i < title_len {
                ContentAlign::Center
            } else {
                self.alignment()?
            };
            body.push(format_line(
                &line.line,
                line.width,
                geometry.content_width,
                align,
                &side_margin,
                &vertical,
            ));
        }
        body.extend(iter::repeat(padding_line).take(py));
        Ok(body)
    }

    fn alignment(&self) -> Result<ContentAlign, BoxError> {
        match &self.content_align {
            Choice::Known(align) => Ok(*align),
            Choice::Unknown(name) => Err(BoxError::InvalidAlignment(name.clone())),
        }
    }
}
