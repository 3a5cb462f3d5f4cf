//! Dot page indicator drawn over the carousel's bottom edge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use crate::config::IndicatorPosition;

/// Columns kept free between the indicator and a side edge.
pub const INDICATOR_INSET: u16 = 2;

const DOT_CURRENT: &str = "●";
const DOT_OTHER: &str = "○";

/// Page indicator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIndicator {
    number_of_pages: usize,
    current_page: usize,
    position: IndicatorPosition,
    current_style: Style,
    other_style: Style,
}

impl Default for PageIndicator {
    fn default() -> Self {
        Self::new(IndicatorPosition::Center)
    }
}

impl PageIndicator {
    pub fn new(position: IndicatorPosition) -> Self {
        Self {
            number_of_pages: 0,
            current_page: 0,
            position,
            current_style: Style::default().fg(Color::White),
            other_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn position(&self) -> IndicatorPosition {
        self.position
    }

    pub fn set_position(&mut self, position: IndicatorPosition) {
        self.position = position;
    }

    /// Set the page count, clamping the current page into range.
    pub fn set_number_of_pages(&mut self, pages: usize) {
        self.number_of_pages = pages;
        self.current_page = self.current_page.min(pages.saturating_sub(1));
    }

    /// Move to `page`. Returns true if the page changed.
    pub fn set_current_page(&mut self, page: usize) -> bool {
        let page = page.min(self.number_of_pages.saturating_sub(1));
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Width in columns: one dot per page with single spaces between.
    pub fn width(&self) -> u16 {
        let dots = self.number_of_pages.min(u16::MAX as usize / 2) as u16;
        (dots * 2).saturating_sub(1)
    }

    /// Rect the dots occupy inside `area`, or None if they do not fit.
    pub fn layout(&self, area: Rect) -> Option<Rect> {
        let width = self.width();
        if width == 0 || area.height == 0 || width > area.width {
            return None;
        }
        // One row up from the bottom edge when there is room
        let y = if area.height >= 3 {
            area.bottom() - 2
        } else {
            area.bottom() - 1
        };
        let x = match self.position {
            IndicatorPosition::Left => {
                area.x + INDICATOR_INSET.min(area.width - width)
            }
            IndicatorPosition::Right => {
                area.right() - width - INDICATOR_INSET.min(area.width - width)
            }
            IndicatorPosition::Center => area.x + (area.width - width) / 2,
        };
        Some(Rect::new(x, y, width, 1))
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let Some(rect) = self.layout(area) else {
            return;
        };
        for page in 0..self.number_of_pages {
            let (symbol, style) = if page == self.current_page {
                (DOT_CURRENT, self.current_style)
            } else {
                (DOT_OTHER, self.other_style)
            };
            buf.set_string(rect.x + (page as u16) * 2, rect.y, symbol, style);
        }
    }
}
