//! The generic data-backed list widget.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::cell::{CellStyle, ListCell, TextCell};
use super::delegate::{ListDelegate, ListEvent, LoadMoreCompletion, RefreshCompletion};
use super::pool::CellPool;
use super::refresh::{RefreshControl, RefreshState};
use crate::config::ListConfig;

/// Reuse identifier of list row cells.
pub const LIST_CELL_ID: &str = "cellId";

/// Builds a fresh cell for a style and reuse identifier.
pub type CellFactory<C> = Box<dyn Fn(CellStyle, &str) -> C>;

/// Scrollable list of `T` rendered through cells of type `C`.
///
/// The list owns the items, a reuse pool of cells and the header/footer
/// refresh affordances. It never owns its delegate.
pub struct GenericList<T, C> {
    items: Vec<T>,
    row_height: u16,
    header: Option<RefreshControl>,
    footer: Option<RefreshControl>,
    delegate: Option<Weak<RefCell<dyn ListDelegate<T>>>>,
    factory: CellFactory<C>,
    pool: CellPool<C>,
    /// Cells currently bound to a row, by row index
    bound: Vec<(usize, C)>,
    /// Keyboard focus row
    cursor: Option<usize>,
    /// Row under a mouse press, highlighted until selection completes
    pressed: Option<usize>,
    /// First visible row
    offset: usize,
    /// Scroll the cursor into view on the next render
    follow_cursor: bool,
    /// Rows that fit in the last rendered area
    viewport_rows: usize,
    /// Where rows were last drawn, for mouse hit testing
    rows_area: Rect,
    /// Last generation handed to a header or footer refresh
    refresh_generation: u64,
    events_tx: UnboundedSender<ListEvent>,
    events_rx: UnboundedReceiver<ListEvent>,
}

impl<T: Clone + std::fmt::Display + 'static> GenericList<T, TextCell<T>> {
    /// List rendering items through their `Display` text.
    pub fn with_text_cells(config: ListConfig) -> Self {
        Self::new(config, |style, id| TextCell::new(style, id))
    }
}

impl<T: Clone + 'static, C: ListCell<T>> GenericList<T, C> {
    pub fn new<F>(config: ListConfig, factory: F) -> Self
    where
        F: Fn(CellStyle, &str) -> C + 'static,
    {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut list = Self {
            items: Vec::new(),
            row_height: config.row_height.max(1),
            header: None,
            footer: None,
            delegate: None,
            factory: Box::new(factory),
            pool: CellPool::new(),
            bound: Vec::new(),
            cursor: None,
            pressed: None,
            offset: 0,
            follow_cursor: false,
            viewport_rows: 0,
            rows_area: Rect::default(),
            refresh_generation: 0,
            events_tx,
            events_rx,
        };
        list.enable_header_refresh(config.header_refresh);
        list.enable_footer_load_more(config.footer_load_more);
        list
    }

    // ========== Data ==========

    /// Replace the backing items and reload every row.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.reload();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn row_count(&self) -> usize {
        self.items.len()
    }

    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    /// Set the uniform row height (at least one line).
    pub fn set_row_height(&mut self, height: u16) {
        self.row_height = height.max(1);
    }

    /// Drop every row binding. Bound cells go back to the pool with their
    /// item slot cleared.
    pub fn reload(&mut self) {
        self.recycle_all();
        let rows = self.items.len();
        self.cursor = self.cursor.filter(|_| rows > 0).map(|c| c.min(rows - 1));
        self.pressed = None;
        self.offset = self.offset.min(rows.saturating_sub(1));
        tracing::debug!("List reloaded with {} rows", rows);
    }

    /// Bind row `index` to a cell and return it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= row_count()`.
    pub fn render_row(&mut self, index: usize) -> &mut C {
        assert!(
            index < self.items.len(),
            "row index {} out of range for {} rows",
            index,
            self.items.len()
        );
        if let Some(slot) = self.bound.iter().position(|(row, _)| *row == index) {
            let (_, cell) = self.bound.swap_remove(slot);
            self.recycle(cell);
        }

        let mut cell = match self.pool.dequeue(LIST_CELL_ID) {
            Some(cell) => cell,
            None => (self.factory)(CellStyle::Subtitle, LIST_CELL_ID),
        };
        cell.set_item(Some(self.items[index].clone()));

        let slot = self.bound.len();
        self.bound.push((index, cell));
        &mut self.bound[slot].1
    }

    /// Cells bound to rows, with their row index.
    pub fn bound_cells(&self) -> impl Iterator<Item = (usize, &C)> {
        self.bound.iter().map(|(row, cell)| (*row, cell))
    }

    /// Cells idle in the reuse pool.
    pub fn pooled_cells(&self) -> impl Iterator<Item = &C> {
        self.pool.iter()
    }

    // ========== Selection ==========

    pub fn set_delegate<D>(&mut self, delegate: &Rc<RefCell<D>>)
    where
        D: ListDelegate<T> + 'static,
    {
        let delegate: Rc<RefCell<dyn ListDelegate<T>>> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Keyboard focus row.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: Option<usize>) {
        self.cursor = row.filter(|r| *r < self.items.len());
        self.follow_cursor = true;
    }

    /// Deselect the row and hand its item to the delegate.
    ///
    /// # Panics
    ///
    /// Panics if `index >= row_count()`.
    pub fn on_row_selected(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "row index {} out of range for {} rows",
            index,
            self.items.len()
        );
        self.pressed = None;
        tracing::debug!("Row {} selected", index);
        if let Some(delegate) = self.delegate() {
            delegate.borrow_mut().did_select_item(&self.items[index]);
        }
    }

    // ========== Refresh affordances ==========

    /// Attach or detach the pull-to-refresh header.
    pub fn enable_header_refresh(&mut self, enabled: bool) {
        match (enabled, self.header.is_some()) {
            (true, false) => self.header = Some(RefreshControl::header()),
            (false, true) => self.header = None,
            _ => {}
        }
    }

    /// Attach or detach the pull-to-load-more footer.
    pub fn enable_footer_load_more(&mut self, enabled: bool) {
        match (enabled, self.footer.is_some()) {
            (true, false) => self.footer = Some(RefreshControl::footer()),
            (false, true) => self.footer = None,
            _ => {}
        }
    }

    pub fn header(&self) -> Option<&RefreshControl> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&RefreshControl> {
        self.footer.as_ref()
    }

    /// Pull-to-refresh gesture. Returns true if a refresh was started.
    ///
    /// Ignored without a header, while one is running, or without a delegate
    /// to do the refreshing.
    pub fn pull_header(&mut self) -> bool {
        let Some(delegate) = self.delegate() else {
            return false;
        };
        let Some(header) = self.header.as_mut() else {
            return false;
        };
        if !header.can_begin() {
            return false;
        }
        self.refresh_generation += 1;
        header.begin_refreshing(self.refresh_generation);
        tracing::debug!("Header refresh {} started", self.refresh_generation);

        let done = RefreshCompletion::new(self.events_tx.clone(), self.refresh_generation);
        delegate.borrow_mut().pull_header_to_refresh(done);
        true
    }

    /// Pull-to-load-more gesture. Returns true if a load was started.
    ///
    /// Ignored without a footer, while one is running, once exhausted, or
    /// without a delegate.
    pub fn pull_footer(&mut self) -> bool {
        let Some(delegate) = self.delegate() else {
            return false;
        };
        let Some(footer) = self.footer.as_mut() else {
            return false;
        };
        if !footer.can_begin() {
            return false;
        }
        self.refresh_generation += 1;
        footer.begin_refreshing(self.refresh_generation);
        tracing::debug!("Footer load-more {} started", self.refresh_generation);

        let done = LoadMoreCompletion::new(self.events_tx.clone(), self.refresh_generation);
        delegate.borrow_mut().pull_footer_to_load_more(done);
        true
    }

    /// Apply completions posted since the last call. Returns how many.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Apply one completion.
    ///
    /// Completions issued for a control that has since been detached, or for
    /// a refresh that is no longer running, are dropped.
    pub fn handle_event(&mut self, event: ListEvent) {
        match event {
            ListEvent::RefreshFinished { generation } => {
                let Some(header) = self.header.as_mut().filter(|h| h.accepts(generation)) else {
                    tracing::debug!("Dropping stale header completion {}", generation);
                    return;
                };
                header.end_refreshing();
                self.reload();
                // Fresh data may have more pages again
                if let Some(footer) = self.footer.as_mut() {
                    footer.reset_no_more_data();
                }
                tracing::debug!("Header refresh finished");
            }
            ListEvent::LoadMoreFinished {
                generation,
                has_more,
            } => {
                let Some(footer) = self.footer.as_mut().filter(|f| f.accepts(generation)) else {
                    tracing::debug!("Dropping stale footer completion {}", generation);
                    return;
                };
                if has_more {
                    footer.end_refreshing();
                } else {
                    footer.end_refreshing_with_no_more_data();
                }
                self.reload();
                tracing::debug!("Footer load-more finished (has_more={})", has_more);
            }
        }
    }

    // ========== Input ==========

    /// Keyboard navigation. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let rows = self.items.len();
        let page = self.viewport_rows.max(1);
        let cursor = self.cursor;
        match key.code {
            KeyCode::Up => match self.cursor {
                Some(0) | None => {
                    self.pull_header();
                }
                Some(row) => self.cursor = Some(row - 1),
            },
            KeyCode::Down => match self.cursor {
                Some(row) if row + 1 < rows => self.cursor = Some(row + 1),
                None if rows > 0 => self.cursor = Some(0),
                _ => {
                    self.pull_footer();
                }
            },
            KeyCode::PageUp if rows > 0 => {
                self.cursor = Some(self.cursor.unwrap_or(0).saturating_sub(page));
            }
            KeyCode::PageDown if rows > 0 => {
                self.cursor = Some((self.cursor.unwrap_or(0) + page).min(rows - 1));
            }
            KeyCode::Home if rows > 0 => self.cursor = Some(0),
            KeyCode::End if rows > 0 => self.cursor = Some(rows - 1),
            KeyCode::Enter => match self.cursor {
                Some(row) => self.on_row_selected(row),
                None => return false,
            },
            _ => return false,
        }
        if self.cursor != cursor {
            self.follow_cursor = true;
        }
        true
    }

    /// Mouse wheel scrolling and click selection. Returns true if consumed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let rows = self.items.len();
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.follow_cursor = false;
                if self.offset == 0 {
                    self.pull_header();
                } else {
                    self.offset -= 1;
                }
                true
            }
            MouseEventKind::ScrollDown => {
                self.follow_cursor = false;
                // Before the first render the viewport is unknown; count it as one row
                let max_offset = rows.saturating_sub(self.viewport_rows.max(1));
                if self.offset >= max_offset {
                    self.pull_footer();
                } else {
                    self.offset += 1;
                }
                true
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = self.row_at(mouse.column, mouse.row);
                if self.pressed.is_some() {
                    self.cursor = self.pressed;
                }
                self.pressed.is_some()
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(pressed) = self.pressed.take() else {
                    return false;
                };
                if self.row_at(mouse.column, mouse.row) == Some(pressed) {
                    self.on_row_selected(pressed);
                }
                true
            }
            _ => false,
        }
    }

    /// Row drawn at a screen position in the last frame.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.rows_area.contains((column, row).into()) {
            return None;
        }
        let index = self.offset + ((row - self.rows_area.y) / self.row_height) as usize;
        (index < self.items.len()).then_some(index)
    }

    // ========== Internals ==========

    fn delegate(&self) -> Option<Rc<RefCell<dyn ListDelegate<T>>>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    fn recycle(&mut self, mut cell: C) {
        cell.set_item(None);
        self.pool.enqueue(LIST_CELL_ID, cell);
    }

    fn recycle_all(&mut self) {
        for (_, cell) in std::mem::take(&mut self.bound) {
            self.recycle(cell);
        }
    }

    /// Scroll so the cursor row is inside the viewport.
    fn scroll_to_cursor(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        if cursor < self.offset {
            self.offset = cursor;
        } else if self.viewport_rows > 0 && cursor >= self.offset + self.viewport_rows {
            self.offset = cursor + 1 - self.viewport_rows;
        }
    }
}

impl<T, C> std::fmt::Debug for GenericList<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericList")
            .field("rows", &self.items.len())
            .field("row_height", &self.row_height)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("bound", &self.bound.len())
            .field("cursor", &self.cursor)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<T: Clone + 'static, C: ListCell<T>> Widget for &mut GenericList<T, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let show_header = self
            .header
            .as_ref()
            .is_some_and(|h| h.state() != RefreshState::Idle);
        let show_footer = self.footer.is_some() && !self.items.is_empty();

        let [header_area, rows_area, footer_area] = Layout::vertical([
            Constraint::Length(u16::from(show_header)),
            Constraint::Min(0),
            Constraint::Length(u16::from(show_footer)),
        ])
        .areas(area);

        self.rows_area = rows_area;
        self.viewport_rows = (rows_area.height / self.row_height) as usize;
        if std::mem::take(&mut self.follow_cursor) {
            self.scroll_to_cursor();
        }
        self.offset = self
            .offset
            .min(self.items.len().saturating_sub(self.viewport_rows));

        self.recycle_all();
        let end = (self.offset + self.viewport_rows).min(self.items.len());
        for index in self.offset..end {
            self.render_row(index);
        }

        for (index, cell) in &self.bound {
            let y = rows_area.y + ((*index - self.offset) as u16) * self.row_height;
            let row_area = Rect::new(rows_area.x, y, rows_area.width, self.row_height);
            let highlighted = self.cursor == Some(*index) || self.pressed == Some(*index);
            cell.render(row_area, buf, highlighted);
        }

        if let Some(header) = self.header.as_ref().filter(|_| show_header) {
            header.render(header_area, buf);
        }
        if let Some(footer) = self.footer.as_ref().filter(|_| show_footer) {
            footer.render(footer_area, buf);
        }
    }
}
