//! Pull-to-refresh header and pull-to-load-more footer affordances.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

/// Which edge of the list the control sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    Header,
    Footer,
}

/// Visual state of a refresh control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Refreshing,
    /// Footer only: the delegate reported there is nothing left to load
    NoMoreData,
}

/// A header or footer refresh affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshControl {
    kind: RefreshKind,
    state: RefreshState,
    /// Identifies the refresh in flight; completions for any other are stale
    generation: u64,
}

impl RefreshControl {
    pub fn new(kind: RefreshKind) -> Self {
        Self {
            kind,
            state: RefreshState::Idle,
            generation: 0,
        }
    }

    pub fn header() -> Self {
        Self::new(RefreshKind::Header)
    }

    pub fn footer() -> Self {
        Self::new(RefreshKind::Footer)
    }

    pub fn kind(&self) -> RefreshKind {
        self.kind
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn is_refreshing(&self) -> bool {
        self.state == RefreshState::Refreshing
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a completion tagged `generation` belongs to the running
    /// refresh.
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_refreshing() && self.generation == generation
    }

    /// Whether a pull gesture may start a refresh now.
    pub fn can_begin(&self) -> bool {
        self.state == RefreshState::Idle
    }

    /// Start refreshing under `generation`, which the owner keeps unique
    /// across every control it ever attaches.
    pub fn begin_refreshing(&mut self, generation: u64) {
        self.state = RefreshState::Refreshing;
        self.generation = generation;
    }

    pub fn end_refreshing(&mut self) {
        self.state = RefreshState::Idle;
    }

    /// Mark the footer exhausted. Headers just end refreshing.
    pub fn end_refreshing_with_no_more_data(&mut self) {
        self.state = match self.kind {
            RefreshKind::Footer => RefreshState::NoMoreData,
            RefreshKind::Header => RefreshState::Idle,
        };
    }

    /// Re-arm an exhausted footer.
    pub fn reset_no_more_data(&mut self) {
        if self.state == RefreshState::NoMoreData {
            self.state = RefreshState::Idle;
        }
    }

    /// One-line status shown for the current state.
    pub fn status_text(&self) -> &'static str {
        match (self.kind, self.state) {
            (RefreshKind::Header, RefreshState::Refreshing) => "refreshing...",
            (RefreshKind::Header, _) => "pull down to refresh",
            (RefreshKind::Footer, RefreshState::Refreshing) => "loading more...",
            (RefreshKind::Footer, RefreshState::NoMoreData) => "no more data",
            (RefreshKind::Footer, RefreshState::Idle) => "pull up to load more",
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let color = if self.is_refreshing() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        Paragraph::new(self.status_text())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
