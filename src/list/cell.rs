//! Row cells for [`GenericList`](super::GenericList).
//!
//! A cell exposes one mutable slot for the item it shows. The list fills the
//! slot when it binds a row and clears it when the cell goes back to the
//! reuse pool, so a pooled cell never holds an item the list no longer has.

use std::fmt::Display;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthChar;

/// Layout flavour requested when the list constructs a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    #[default]
    Default,
    /// Title line followed by dimmed detail lines
    Subtitle,
    /// Title on the left, value on the right
    Value1,
    /// Value on the left, title on the right
    Value2,
}

/// A row view bound to at most one item.
pub trait ListCell<T> {
    /// The bound item, if any.
    fn item(&self) -> Option<&T>;

    /// Replace the bound item.
    fn set_item(&mut self, item: Option<T>);

    /// Paint the row. `highlighted` marks the focused or pressed row.
    fn render(&self, area: Rect, buf: &mut Buffer, highlighted: bool);
}

/// Cell that prints its item's `Display` text.
///
/// Text is split on newlines; with [`CellStyle::Subtitle`] every line after
/// the first is dimmed. Lines are cut to the row width.
#[derive(Debug, Clone)]
pub struct TextCell<T> {
    item: Option<T>,
    style: CellStyle,
    reuse_identifier: String,
}

impl<T> TextCell<T> {
    pub fn new(style: CellStyle, reuse_identifier: &str) -> Self {
        Self {
            item: None,
            style,
            reuse_identifier: reuse_identifier.to_string(),
        }
    }

    pub fn style(&self) -> CellStyle {
        self.style
    }

    pub fn reuse_identifier(&self) -> &str {
        &self.reuse_identifier
    }
}

impl<T: Display> ListCell<T> for TextCell<T> {
    fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    fn set_item(&mut self, item: Option<T>) {
        self.item = item;
    }

    fn render(&self, area: Rect, buf: &mut Buffer, highlighted: bool) {
        if area.is_empty() {
            return;
        }
        let base = if highlighted {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        buf.set_style(area, base);

        let Some(item) = self.item.as_ref() else {
            return;
        };
        let text = item.to_string();
        for (i, line) in text.lines().take(area.height as usize).enumerate() {
            let style = if i > 0 && self.style == CellStyle::Subtitle {
                base.fg(Color::DarkGray)
            } else {
                base
            };
            let line = truncate_to_width(line, area.width as usize);
            buf.set_string(area.x, area.y + i as u16, line, style);
        }
    }
}

/// Cut `s` to at most `width` display columns.
pub fn truncate_to_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &s[..idx];
        }
        used += w;
    }
    s
}
