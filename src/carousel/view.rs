//! The banner carousel widget.
//!
//! Owns the paging strip, the page indicator and the single autoplay timer.
//! Slide count and slide views come from a [`BannerDataSource`]; taps and page
//! changes go to an optional [`BannerDelegate`]. Both are held weakly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::autoplay::{Autoplay, AutoplayState};
use super::events::CarouselEvent;
use super::indicator::PageIndicator;
use super::page_map::PageMap;
use super::scroll::PageScroller;
use super::source::{BannerDataSource, BannerDelegate, SlideView};
use crate::config::{CarouselConfig, IndicatorPosition};
use crate::list::CellPool;
use crate::traits::Scheduler;

/// Reuse identifier of slide cells.
const BANNER_CELL_ID: &str = "bannerViewCellId";

/// A recyclable slide cell.
///
/// `content` is the tagged slot holding whatever view the data source
/// returned; it is handed back as `convert_view` when the cell is reused.
struct SlideCell<V> {
    content: Option<V>,
}

impl<V> SlideCell<V> {
    fn new() -> Self {
        Self { content: None }
    }
}

/// In-progress mouse press on the carousel.
#[derive(Debug, Clone, Copy)]
struct Press {
    column: u16,
    moved: bool,
}

/// Horizontally paged banner strip with infinite wraparound and autoplay.
///
/// # Example
///
/// ```ignore
/// let source = Rc::new(RefCell::new(MyBanners::new()));
/// let mut carousel = Carousel::new(&source, CarouselConfig::default(), Box::new(TokioScheduler));
/// carousel.set_attached(true);
///
/// // UI loop
/// carousel.process_pending();
/// carousel.advance_animation(frame_time);
/// frame.render_widget(&mut carousel, area);
/// ```
pub struct Carousel<V> {
    data_source: Weak<RefCell<dyn BannerDataSource<V>>>,
    delegate: Option<Weak<RefCell<dyn BannerDelegate>>>,
    map: PageMap,
    infinite: bool,
    auto_scroll_interval_secs: i64,
    scroller: PageScroller,
    indicator: PageIndicator,
    autoplay: Autoplay,
    events: UnboundedReceiver<CarouselEvent>,
    cells: HashMap<usize, SlideCell<V>>,
    pool: CellPool<SlideCell<V>>,
    attached: bool,
    press: Option<Press>,
    last_width: u16,
}

impl<V: SlideView + 'static> Carousel<V> {
    /// Build a carousel over `data_source` and start autoplay if the
    /// configuration allows it.
    pub fn new<S>(
        data_source: &Rc<RefCell<S>>,
        config: CarouselConfig,
        scheduler: Box<dyn Scheduler>,
    ) -> Self
    where
        S: BannerDataSource<V> + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut carousel = Self {
            data_source: downgrade_source(data_source),
            delegate: None,
            map: PageMap::new(0, config.infinite),
            infinite: config.infinite,
            auto_scroll_interval_secs: config.auto_scroll_interval_secs,
            scroller: PageScroller::new(Duration::from_millis(config.animation_millis)),
            indicator: PageIndicator::new(config.indicator_position),
            autoplay: Autoplay::new(scheduler, tx),
            events: rx,
            cells: HashMap::new(),
            pool: CellPool::new(),
            attached: false,
            press: None,
            last_width: 0,
        };
        carousel.reload_data();
        carousel
    }

    // ========== Configuration ==========

    /// Replace the data source and reload.
    pub fn set_data_source<S>(&mut self, data_source: &Rc<RefCell<S>>)
    where
        S: BannerDataSource<V> + 'static,
    {
        self.data_source = downgrade_source(data_source);
        self.reload_data();
    }

    pub fn set_delegate<D>(&mut self, delegate: &Rc<RefCell<D>>)
    where
        D: BannerDelegate + 'static,
    {
        let delegate: Rc<RefCell<dyn BannerDelegate>> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// Toggle wraparound. Changing it rebuilds the strip.
    pub fn set_infinite(&mut self, infinite: bool) {
        if self.infinite == infinite {
            return;
        }
        self.infinite = infinite;
        self.reload_data();
    }

    pub fn auto_scroll_interval(&self) -> i64 {
        self.auto_scroll_interval_secs
    }

    /// Set the autoplay period. Any running timer is cancelled first and a
    /// fresh one started when `secs > 0`.
    pub fn set_auto_scroll_interval(&mut self, secs: i64) {
        self.auto_scroll_interval_secs = secs;
        self.autoplay.stop();
        if secs > 0 {
            self.start_auto_scroll();
        }
    }

    pub fn indicator_position(&self) -> IndicatorPosition {
        self.indicator.position()
    }

    pub fn set_indicator_position(&mut self, position: IndicatorPosition) {
        self.indicator.set_position(position);
    }

    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.scroller.set_duration(duration);
    }

    /// Host signal: the carousel became (in)visible. Autoplay advances are
    /// skipped while detached.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ========== Queries ==========

    pub fn slide_count(&self) -> usize {
        self.map.slide_count()
    }

    pub fn renderable_count(&self) -> usize {
        self.map.renderable_count()
    }

    /// Renderable position the strip rests nearest to.
    pub fn current_render_index(&self) -> usize {
        self.map.clamp(self.scroller.current_page())
    }

    /// Logical slide currently shown, or None with no slides.
    pub fn current_logical_index(&self) -> Option<usize> {
        if self.map.slide_count() == 0 {
            return None;
        }
        Some(self.map.logical_index(self.current_render_index()))
    }

    /// Logical index for a renderable position.
    pub fn logical_index(&self, position: usize) -> usize {
        self.map.logical_index(position)
    }

    pub fn indicator(&self) -> &PageIndicator {
        &self.indicator
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.scroller.is_dragging()
    }

    /// Number of slide cells currently bound to a strip position.
    pub fn visible_cell_count(&self) -> usize {
        self.cells.len()
    }

    // ========== Data ==========

    /// Re-query the slide count, rebuild the strip and return to the first
    /// slide.
    pub fn reload_data(&mut self) {
        let count = self
            .data_source
            .upgrade()
            .map(|source| source.borrow().number_of_banners())
            .unwrap_or(0);

        self.map = PageMap::new(count, self.infinite);
        self.recycle_cells(|_| false);
        self.indicator.set_number_of_pages(count);
        self.indicator.set_current_page(0);
        self.scroller.jump_to(self.map.home_position());

        tracing::debug!(
            "Carousel reloaded: {} slides, {} pages, infinite={}",
            count,
            self.map.renderable_count(),
            self.infinite
        );

        if count == 0 {
            self.autoplay.stop();
        } else {
            self.start_auto_scroll();
        }
    }

    // ========== Autoplay ==========

    /// Start the timer if the interval is positive, there is something to
    /// show and no timer is running. Returns true if a timer was started.
    pub fn start_auto_scroll(&mut self) -> bool {
        if self.map.slide_count() == 0 {
            return false;
        }
        self.autoplay.start(self.auto_scroll_interval_secs)
    }

    /// Stop the timer. Idempotent.
    pub fn stop_auto_scroll(&mut self) -> bool {
        self.autoplay.stop()
    }

    /// Stop autoplay and release the timer.
    pub fn teardown(&mut self) {
        self.autoplay.stop();
        self.attached = false;
    }

    /// Drain queued events. Returns how many were handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Apply one event. Returns true if it moved the strip.
    pub fn handle_event(&mut self, event: CarouselEvent) -> bool {
        match event {
            CarouselEvent::AutoplayTick { generation } => {
                if !self.autoplay.accepts(generation) {
                    tracing::trace!("Dropping stale autoplay tick {}", generation);
                    return false;
                }
                self.flip_next()
            }
        }
    }

    /// Advance one page forward, as a timer fire does.
    ///
    /// Skipped when detached, dragging, or with fewer than two slides.
    pub fn flip_next(&mut self) -> bool {
        if !self.attached || self.scroller.is_dragging() || self.map.slide_count() <= 1 {
            return false;
        }

        // An unfinished animation may still be heading for an edge clone
        self.finish_scroll_animation();

        let current = self.current_render_index();
        let next = self.map.next_position(current);
        tracing::trace!("Autoplay flip {} -> {}", current, next);

        self.update_page(self.map.logical_index(next));
        self.scroll_to(next, true);
        true
    }

    // ========== Scrolling ==========

    /// Scroll to a renderable position.
    pub fn scroll_to(&mut self, position: usize, animated: bool) {
        if self.map.renderable_count() == 0 {
            return;
        }
        let position = self.map.clamp(position);
        if !(animated && self.scroller.animate_to(position)) {
            self.scroll_did_settle();
        }
    }

    /// Scroll to the interior page of a logical slide.
    pub fn scroll_to_slide(&mut self, logical: usize, animated: bool) {
        if logical >= self.map.slide_count() {
            return;
        }
        self.scroll_to(self.map.position_of(logical), animated);
    }

    /// Step the running animation. Returns true if a redraw is needed.
    pub fn advance_animation(&mut self, elapsed: Duration) -> bool {
        if !self.scroller.is_animating() {
            return false;
        }
        if self.scroller.advance(elapsed).is_some() {
            self.scroll_did_settle();
        }
        true
    }

    /// Jump to the end of the running animation. Returns true if one was
    /// running.
    pub fn finish_scroll_animation(&mut self) -> bool {
        if self.scroller.finish().is_some() {
            self.scroll_did_settle();
            true
        } else {
            false
        }
    }

    /// Scrolling came to rest: hide the clone seam, then sync the indicator.
    fn scroll_did_settle(&mut self) {
        let current = self.scroller.current_page();
        if let Some(target) = self.map.snap_target(current) {
            tracing::debug!("Snap-back {} -> {}", current, target);
            self.scroller.jump_to(target);
        }
        self.sync_indicator();
    }

    // ========== Gestures ==========

    /// User started dragging: stop autoplay and make sure the strip is not
    /// resting on an edge clone.
    pub fn begin_drag(&mut self) {
        self.stop_auto_scroll();
        if !self.finish_scroll_animation() {
            self.scroll_did_settle();
        }
        self.scroller.begin_drag();
    }

    /// Displace the strip by `pages` relative to where the drag began.
    pub fn drag(&mut self, pages: f32) {
        if !self.scroller.is_dragging() {
            return;
        }
        let max_page = self.map.renderable_count().saturating_sub(1);
        self.scroller.drag(pages, max_page);
        self.sync_indicator();
    }

    /// User let go: page to the nearest slide and restart autoplay.
    pub fn end_drag(&mut self) {
        let Some(target) = self.scroller.end_drag() else {
            return;
        };
        self.scroll_to(target, true);
        self.start_auto_scroll();
    }

    /// Tap on the visible slide.
    pub fn select_current(&mut self) {
        let Some(logical) = self.current_logical_index() else {
            return;
        };
        tracing::debug!("Banner {} selected", logical);
        if let Some(delegate) = self.delegate() {
            delegate.borrow_mut().did_select_banner(logical);
        }
    }

    /// Keyboard paging. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Left => self.step(-1.0),
            KeyCode::Right => self.step(1.0),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_current(),
            _ => return false,
        }
        true
    }

    /// Mouse drag and tap. Returns true if the event was consumed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !area.contains((mouse.column, mouse.row).into()) {
                    return false;
                }
                self.last_width = area.width;
                self.press = Some(Press {
                    column: mouse.column,
                    moved: false,
                });
                self.begin_drag();
                true
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(press) = self.press.as_mut() else {
                    return false;
                };
                press.moved |= mouse.column != press.column;
                // Content follows the pointer, so dragging left pages forward
                let delta = press.column as f32 - mouse.column as f32;
                let width = self.last_width.max(1) as f32;
                self.drag(delta / width);
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(press) = self.press.take() else {
                    return false;
                };
                self.end_drag();
                if !press.moved {
                    self.select_current();
                }
                true
            }
            _ => false,
        }
    }

    fn step(&mut self, pages: f32) {
        self.begin_drag();
        self.drag(pages);
        self.end_drag();
    }

    // ========== Internals ==========

    fn delegate(&self) -> Option<Rc<RefCell<dyn BannerDelegate>>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    fn sync_indicator(&mut self) {
        if let Some(logical) = self.current_logical_index() {
            self.update_page(logical);
        }
    }

    fn update_page(&mut self, logical: usize) {
        if self.indicator.set_current_page(logical) {
            if let Some(delegate) = self.delegate() {
                delegate.borrow_mut().did_change_page(logical);
            }
        }
    }

    /// Return bound cells to the pool, keeping those `keep` accepts.
    fn recycle_cells(&mut self, keep: impl Fn(usize) -> bool) {
        let stale: Vec<usize> = self.cells.keys().copied().filter(|p| !keep(*p)).collect();
        for position in stale {
            if let Some(cell) = self.cells.remove(&position) {
                self.pool.enqueue(BANNER_CELL_ID, cell);
            }
        }
    }

    /// Make sure `position` has a bound cell, asking the data source for a
    /// view only when the cell was not already showing that position.
    fn bind_cell(&mut self, position: usize) {
        if self.cells.contains_key(&position) {
            return;
        }
        let Some(source) = self.data_source.upgrade() else {
            return;
        };
        let mut cell = self
            .pool
            .dequeue(BANNER_CELL_ID)
            .unwrap_or_else(SlideCell::new);
        let logical = self.map.logical_index(position);
        let convert_view = cell.content.take();
        cell.content = Some(source.borrow_mut().view_for_banner(logical, convert_view));
        self.cells.insert(position, cell);
    }

    fn render_slide(&self, position: usize, x_origin: i32, area: Rect, buf: &mut Buffer) {
        let Some(view) = self.cells.get(&position).and_then(|c| c.content.as_ref()) else {
            return;
        };
        let scratch_area = Rect::new(0, 0, area.width, area.height);
        let mut scratch = Buffer::empty(scratch_area);
        view.render(scratch_area, &mut scratch);

        for y in 0..area.height {
            for x in 0..area.width {
                let dest = x_origin + x as i32;
                if dest < 0 || dest >= area.width as i32 {
                    continue;
                }
                if let (Some(src), Some(dst)) = (
                    scratch.cell((x, y)),
                    buf.cell_mut((area.x + dest as u16, area.y + y)),
                ) {
                    *dst = src.clone();
                }
            }
        }
    }
}

impl<V> std::fmt::Debug for Carousel<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("map", &self.map)
            .field("offset", &self.scroller.offset())
            .field("indicator", &self.indicator)
            .field("autoplay", &self.autoplay)
            .field("attached", &self.attached)
            .finish()
    }
}

impl<V: SlideView + 'static> Widget for &mut Carousel<V> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.last_width = area.width;
        if area.is_empty() || self.map.renderable_count() == 0 {
            self.recycle_cells(|_| false);
            return;
        }

        let offset = self.scroller.offset();
        let first = self.map.clamp(offset.floor().max(0.0) as usize);
        let fraction = (offset - first as f32).clamp(0.0, 1.0);
        let shift = (fraction * area.width as f32).round() as i32;

        let mut visible = vec![(first, -shift)];
        if shift > 0 && first + 1 < self.map.renderable_count() {
            visible.push((first + 1, area.width as i32 - shift));
        }

        self.recycle_cells(|p| visible.iter().any(|(v, _)| *v == p));
        for &(position, x_origin) in &visible {
            self.bind_cell(position);
            self.render_slide(position, x_origin, area, buf);
        }

        self.indicator.render(area, buf);
    }
}

fn downgrade_source<V, S>(source: &Rc<RefCell<S>>) -> Weak<RefCell<dyn BannerDataSource<V>>>
where
    S: BannerDataSource<V> + 'static,
{
    let source: Rc<RefCell<dyn BannerDataSource<V>>> = source.clone();
    Rc::downgrade(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockScheduler;
    use crate::carousel::TextSlide;
    use crossterm::event::KeyModifiers;

    struct Banners {
        titles: Vec<String>,
        built: usize,
    }

    impl Banners {
        fn new(count: usize) -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                titles: (0..count).map(|i| format!("slide {}", i)).collect(),
                built: 0,
            }))
        }
    }

    impl BannerDataSource<TextSlide> for Banners {
        fn number_of_banners(&self) -> usize {
            self.titles.len()
        }

        fn view_for_banner(&mut self, index: usize, convert_view: Option<TextSlide>) -> TextSlide {
            match convert_view {
                Some(mut view) => {
                    view.title = self.titles[index].clone();
                    view
                }
                None => {
                    self.built += 1;
                    TextSlide::new(self.titles[index].clone())
                }
            }
        }
    }

    #[derive(Default)]
    struct Recorder {
        selected: Vec<usize>,
        pages: Vec<usize>,
    }

    impl BannerDelegate for Recorder {
        fn did_select_banner(&mut self, index: usize) {
            self.selected.push(index);
        }

        fn did_change_page(&mut self, index: usize) {
            self.pages.push(index);
        }
    }

    fn carousel(count: usize, config: CarouselConfig) -> (Carousel<TextSlide>, Rc<RefCell<Banners>>, MockScheduler) {
        let source = Banners::new(count);
        let scheduler = MockScheduler::new();
        let mut carousel = Carousel::new(&source, config, Box::new(scheduler.clone()));
        carousel.set_attached(true);
        (carousel, source, scheduler)
    }

    fn instant() -> CarouselConfig {
        CarouselConfig::default().with_animation_millis(0)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_on_first_interior_page() {
        let (carousel, _source, scheduler) = carousel(5, instant());
        assert_eq!(carousel.renderable_count(), 7);
        assert_eq!(carousel.current_render_index(), 1);
        assert_eq!(carousel.current_logical_index(), Some(0));
        assert_eq!(carousel.autoplay_state(), AutoplayState::Running);
        assert_eq!(scheduler.active_timers(), 1);
    }

    #[test]
    fn test_finite_mode_starts_at_zero() {
        let (carousel, _source, _scheduler) = carousel(3, instant().with_infinite(false));
        assert_eq!(carousel.renderable_count(), 3);
        assert_eq!(carousel.current_render_index(), 0);
    }

    #[test]
    fn test_finite_autoplay_wraps_to_zero() {
        let (mut carousel, _source, _scheduler) = carousel(3, instant().with_infinite(false));
        carousel.flip_next();
        carousel.flip_next();
        assert_eq!(carousel.current_render_index(), 2);
        carousel.flip_next();
        assert_eq!(carousel.current_render_index(), 0);
        assert_eq!(carousel.indicator().current_page(), 0);
    }

    #[test]
    fn test_flip_skipped_when_detached() {
        let (mut carousel, _source, _scheduler) = carousel(3, instant());
        carousel.set_attached(false);
        assert!(!carousel.flip_next());
        assert_eq!(carousel.current_render_index(), 1);
    }

    #[test]
    fn test_animated_flip_settles_then_snaps() {
        let config = CarouselConfig::default().with_animation_millis(200);
        let (mut carousel, _source, _scheduler) = carousel(2, config);

        carousel.flip_next();
        assert!(carousel.is_animating());
        assert_eq!(carousel.indicator().current_page(), 1);

        // 2 -> 3 (clone of slide 0)
        carousel.advance_animation(Duration::from_millis(250));
        carousel.flip_next();
        assert!(carousel.advance_animation(Duration::from_millis(250)));
        assert!(!carousel.is_animating());
        assert_eq!(carousel.current_render_index(), 1);
        assert_eq!(carousel.current_logical_index(), Some(0));
    }

    #[test]
    fn test_flip_mid_animation_finishes_first() {
        let config = CarouselConfig::default().with_animation_millis(200);
        let (mut carousel, _source, _scheduler) = carousel(3, config);

        carousel.flip_next(); // 1 -> 2, still animating
        carousel.flip_next(); // finishes at 2, then 2 -> 3
        carousel.finish_scroll_animation();
        assert_eq!(carousel.current_render_index(), 3);
    }

    #[test]
    fn test_snap_back_does_not_notify() {
        let (mut carousel, _source, _scheduler) = carousel(3, instant());
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        carousel.set_delegate(&recorder);

        carousel.flip_next(); // logical 1
        carousel.flip_next(); // logical 2
        carousel.flip_next(); // clone of 0, snapped to 1
        assert_eq!(carousel.current_render_index(), 1);
        assert_eq!(recorder.borrow().pages, vec![1, 2, 0]);
    }

    #[test]
    fn test_key_left_from_first_snaps_to_last() {
        let (mut carousel, _source, _scheduler) = carousel(4, instant());
        assert!(carousel.handle_key(key(KeyCode::Left)));
        assert_eq!(carousel.current_render_index(), 4);
        assert_eq!(carousel.current_logical_index(), Some(3));
        assert_eq!(carousel.autoplay_state(), AutoplayState::Running);
    }

    #[test]
    fn test_enter_selects_logical_index() {
        let (mut carousel, _source, _scheduler) = carousel(4, instant());
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        carousel.set_delegate(&recorder);

        carousel.handle_key(key(KeyCode::Right));
        carousel.handle_key(key(KeyCode::Enter));
        assert_eq!(recorder.borrow().selected, vec![1]);
    }

    #[test]
    fn test_select_without_delegate_is_noop() {
        let (mut carousel, _source, _scheduler) = carousel(2, instant());
        carousel.select_current();

        let recorder = Rc::new(RefCell::new(Recorder::default()));
        carousel.set_delegate(&recorder);
        drop(recorder);
        carousel.select_current();
    }

    #[test]
    fn test_mouse_tap_selects_and_drag_pages() {
        let (mut carousel, _source, _scheduler) = carousel(3, instant());
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        carousel.set_delegate(&recorder);
        let area = Rect::new(0, 0, 20, 5);
        let mouse = |kind, column| MouseEvent {
            kind,
            column,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };

        carousel.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10), area);
        carousel.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10), area);
        assert_eq!(recorder.borrow().selected, vec![0]);

        carousel.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 15), area);
        carousel.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 2), area);
        carousel.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2), area);
        assert_eq!(carousel.current_logical_index(), Some(1));
        assert_eq!(recorder.borrow().selected, vec![0]);
    }

    #[test]
    fn test_dropped_source_reads_as_empty() {
        let (mut carousel, source, scheduler) = carousel(3, instant());
        drop(source);
        carousel.reload_data();
        assert_eq!(carousel.slide_count(), 0);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_set_infinite_rebuilds_strip() {
        let (mut carousel, _source, _scheduler) = carousel(3, instant());
        carousel.set_infinite(false);
        assert_eq!(carousel.renderable_count(), 3);
        assert_eq!(carousel.current_render_index(), 0);
        carousel.set_infinite(true);
        assert_eq!(carousel.renderable_count(), 5);
        assert_eq!(carousel.current_render_index(), 1);
    }

    #[test]
    fn test_render_reuses_convert_view() {
        let (mut carousel, source, _scheduler) = carousel(3, instant());
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);

        Widget::render(&mut carousel, area, &mut buf);
        assert_eq!(source.borrow().built, 1);
        assert_eq!(carousel.visible_cell_count(), 1);

        carousel.flip_next();
        Widget::render(&mut carousel, area, &mut buf);
        // The cell for page 1 went back to the pool and was handed back
        assert_eq!(source.borrow().built, 1);

        let row: String = (0..20u16)
            .map(|x| buf.cell((x, 2u16)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert!(row.contains("slide 1"));
    }

    #[test]
    fn test_render_mid_animation_shows_two_slides() {
        let config = CarouselConfig::default().with_animation_millis(100);
        let (mut carousel, _source, _scheduler) = carousel(3, config);
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);

        carousel.flip_next();
        carousel.advance_animation(Duration::from_millis(40));
        Widget::render(&mut carousel, area, &mut buf);
        assert_eq!(carousel.visible_cell_count(), 2);
    }
}
