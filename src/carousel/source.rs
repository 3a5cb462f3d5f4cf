//! Data source, delegate and slide view contracts for the carousel.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Something that can paint one slide.
pub trait SlideView {
    fn render(&self, area: Rect, buf: &mut Buffer);
}

impl SlideView for Paragraph<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        Widget::render(self, area, buf);
    }
}

/// Supplies slide count and slide views.
///
/// The carousel holds a non-owning handle; a source that has been dropped
/// reads as zero slides.
pub trait BannerDataSource<V> {
    fn number_of_banners(&self) -> usize;

    /// Produce the view for a logical slide.
    ///
    /// `convert_view` is the view this slot showed before, if any, and may be
    /// updated and returned instead of building a new one.
    fn view_for_banner(&mut self, index: usize, convert_view: Option<V>) -> V;
}

/// Receives user interaction from the carousel.
pub trait BannerDelegate {
    /// A slide was tapped.
    fn did_select_banner(&mut self, index: usize);

    /// The page indicator moved to a different logical slide.
    fn did_change_page(&mut self, index: usize);
}

/// Centered text slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSlide {
    pub title: String,
    pub style: Style,
}

impl TextSlide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl SlideView for TextSlide {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.style);
        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        let title = Paragraph::new(Line::from(self.title.as_str()))
            .style(self.style)
            .alignment(Alignment::Center);
        Widget::render(title, middle, buf);
    }
}
