//! swipekit demo: a banner carousel above a refreshable feed.
//!
//! Keys: Tab switches focus, Left/Right page the carousel, Up/Down/Enter
//! drive the list (Up at the top refreshes, Down at the bottom loads more),
//! `i` toggles infinite looping, `a` toggles autoplay, `q` quits.
//!
//! An optional first argument names a JSON file with carousel settings.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use swipekit::adapters::TokioScheduler;
use swipekit::carousel::{BannerDataSource, BannerDelegate, Carousel, TextSlide};
use swipekit::config::{CarouselConfig, ListConfig, DEFAULT_AUTO_SCROLL_INTERVAL_SECS};
use swipekit::list::{GenericList, ListDelegate, LoadMoreCompletion, RefreshCompletion, TextCell};
use swipekit::terminal::{install_panic_hook, DemoTerminal, TerminalSession};

/// ~60fps for scroll animation
const FRAME: Duration = Duration::from_millis(16);
/// Simulated network latency for refresh and load-more
const FAKE_LATENCY: Duration = Duration::from_millis(800);
const PAGE_SIZE: usize = 8;
const MAX_PAGES: usize = 3;

const HEADLINES: [(&str, Color); 5] = [
    ("Spring sale: 30% off", Color::LightRed),
    ("New arrivals this week", Color::LightGreen),
    ("Free shipping over $50", Color::LightBlue),
    ("Members get early access", Color::LightYellow),
    ("Gift cards now available", Color::LightMagenta),
];

type Status = Rc<RefCell<String>>;

/// Results of the simulated background fetches.
enum FeedMessage {
    Refreshed(RefreshCompletion),
    LoadedMore(LoadMoreCompletion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Carousel,
    List,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Carousel => Focus::List,
            Focus::List => Focus::Carousel,
        }
    }
}

struct Headlines;

impl BannerDataSource<TextSlide> for Headlines {
    fn number_of_banners(&self) -> usize {
        HEADLINES.len()
    }

    fn view_for_banner(&mut self, index: usize, convert_view: Option<TextSlide>) -> TextSlide {
        let (title, color) = HEADLINES[index];
        let mut slide = convert_view.unwrap_or_default();
        slide.title = title.to_string();
        slide.style = Style::default().fg(Color::Black).bg(color);
        slide
    }
}

struct BannerStatus {
    status: Status,
}

impl BannerDelegate for BannerStatus {
    fn did_select_banner(&mut self, index: usize) {
        *self.status.borrow_mut() = format!("Opened banner: {}", HEADLINES[index].0);
    }

    fn did_change_page(&mut self, index: usize) {
        tracing::debug!("Banner page {}", index);
    }
}

/// List delegate that fakes fetches with delayed messages.
struct Feed {
    tx: UnboundedSender<FeedMessage>,
    status: Status,
}

impl ListDelegate<String> for Feed {
    fn did_select_item(&mut self, item: &String) {
        let title = item.lines().next().unwrap_or_default();
        *self.status.borrow_mut() = format!("Opened: {}", title);
    }

    fn pull_header_to_refresh(&mut self, done: RefreshCompletion) {
        *self.status.borrow_mut() = "Refreshing...".to_string();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(FAKE_LATENCY).await;
            let _ = tx.send(FeedMessage::Refreshed(done));
        });
    }

    fn pull_footer_to_load_more(&mut self, done: LoadMoreCompletion) {
        *self.status.borrow_mut() = "Loading more...".to_string();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(FAKE_LATENCY).await;
            let _ = tx.send(FeedMessage::LoadedMore(done));
        });
    }
}

fn feed_page(page: usize, generation: usize) -> Vec<String> {
    (0..PAGE_SIZE)
        .map(|i| {
            let n = page * PAGE_SIZE + i + 1;
            format!("Article {} (batch {})\n  Summary line for article {}", n, generation, n)
        })
        .collect()
}

struct Demo {
    carousel: Carousel<TextSlide>,
    list: GenericList<String, TextCell<String>>,
    focus: Focus,
    status: Status,
    interval_secs: i64,
    pages_loaded: usize,
    refreshes: usize,
    carousel_area: Rect,
    // Delegates are held weakly by the widgets
    _headlines: Rc<RefCell<Headlines>>,
    _banner_status: Rc<RefCell<BannerStatus>>,
    _feed: Rc<RefCell<Feed>>,
}

impl Demo {
    fn new(config: CarouselConfig, tx: UnboundedSender<FeedMessage>) -> Self {
        let status: Status = Rc::new(RefCell::new("Tab switches focus, q quits".to_string()));
        let interval_secs = if config.auto_scroll_interval_secs > 0 {
            config.auto_scroll_interval_secs
        } else {
            DEFAULT_AUTO_SCROLL_INTERVAL_SECS
        };

        let headlines = Rc::new(RefCell::new(Headlines));
        let banner_status = Rc::new(RefCell::new(BannerStatus {
            status: status.clone(),
        }));
        let mut carousel = Carousel::new(&headlines, config, Box::new(TokioScheduler::new()));
        carousel.set_delegate(&banner_status);
        carousel.set_attached(true);

        let feed = Rc::new(RefCell::new(Feed {
            tx,
            status: status.clone(),
        }));
        let list_config = ListConfig::new()
            .with_row_height(2)
            .with_header_refresh(true)
            .with_footer_load_more(true);
        let mut list = GenericList::with_text_cells(list_config);
        list.set_delegate(&feed);
        list.set_items(feed_page(0, 0));

        Self {
            carousel,
            list,
            focus: Focus::List,
            status,
            interval_secs,
            pages_loaded: 1,
            refreshes: 0,
            carousel_area: Rect::default(),
            _headlines: headlines,
            _banner_status: banner_status,
            _feed: feed,
        }
    }

    fn apply(&mut self, message: FeedMessage) {
        match message {
            FeedMessage::Refreshed(done) => {
                self.refreshes += 1;
                self.pages_loaded = 1;
                self.list.set_items(feed_page(0, self.refreshes));
                done.finish();
                *self.status.borrow_mut() = "Feed refreshed".to_string();
            }
            FeedMessage::LoadedMore(done) => {
                let mut items = self.list.items().to_vec();
                items.extend(feed_page(self.pages_loaded, self.refreshes));
                self.pages_loaded += 1;
                self.list.set_items(items);
                if self.pages_loaded >= MAX_PAGES {
                    done.no_more_data();
                    *self.status.borrow_mut() = "Reached the end of the feed".to_string();
                } else {
                    done.finish();
                    *self.status.borrow_mut() = format!("{} articles", self.list.row_count());
                }
            }
        }
    }

    /// Returns false when the demo should exit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return false,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return false
                }
                KeyCode::Tab => self.focus = self.focus.toggle(),
                KeyCode::Char('i') => {
                    let infinite = !self.carousel.is_infinite();
                    self.carousel.set_infinite(infinite);
                    *self.status.borrow_mut() = format!("Infinite looping: {}", infinite);
                }
                KeyCode::Char('a') => {
                    let interval = if self.carousel.auto_scroll_interval() > 0 {
                        0
                    } else {
                        self.interval_secs
                    };
                    self.carousel.set_auto_scroll_interval(interval);
                    *self.status.borrow_mut() = format!("Autoplay interval: {}s", interval);
                }
                _ => {
                    match self.focus {
                        Focus::Carousel => self.carousel.handle_key(key),
                        Focus::List => self.list.handle_key(key),
                    };
                }
            },
            Event::Mouse(mouse) => {
                if !self.carousel.handle_mouse(mouse, self.carousel_area) {
                    self.list.handle_mouse(mouse);
                }
            }
            _ => {}
        }
        true
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [top, middle, bottom] = Layout::vertical([
            Constraint::Length(9),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let carousel_block = self.focus_block(" Banners ", Focus::Carousel);
        self.carousel_area = carousel_block.inner(top);
        frame.render_widget(carousel_block, top);
        frame.render_widget(&mut self.carousel, self.carousel_area);

        let list_block = self.focus_block(" Feed ", Focus::List);
        let list_area = list_block.inner(middle);
        frame.render_widget(list_block, middle);
        frame.render_widget(&mut self.list, list_area);

        let status = Paragraph::new(self.status.borrow().clone())
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status, bottom);
    }

    fn focus_block(&self, title: &'static str, focus: Focus) -> Block<'static> {
        let color = if self.focus == focus {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        Block::bordered()
            .title(title)
            .border_style(Style::default().fg(color))
    }
}

/// Log to a file so output does not tear the alternate screen.
fn init_logging() -> Result<()> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("swipekit");
    std::fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("demo.log"))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swipekit=info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

async fn run(
    terminal: &mut DemoTerminal,
    demo: &mut Demo,
    mut feed_rx: UnboundedReceiver<FeedMessage>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| demo.draw(frame))?;

        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                demo.carousel.advance_animation(now - last_frame);
                last_frame = now;
                demo.carousel.process_pending();
                demo.list.process_pending();
            }

            Some(message) = feed_rx.recv() => {
                demo.apply(message);
            }

            event = events.next() => match event {
                Some(Ok(event)) => {
                    if !demo.handle_event(event) {
                        return Ok(());
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    install_panic_hook();
    init_logging()?;

    let config = match std::env::args_os().nth(1) {
        Some(path) => CarouselConfig::from_json_file(PathBuf::from(path))?,
        None => CarouselConfig::default(),
    };
    tracing::info!("Starting demo with {:?}", config);

    let (feed_tx, feed_rx) = mpsc::unbounded_channel();
    let mut demo = Demo::new(config, feed_tx);

    let mut session = TerminalSession::new()?;
    let result = run(session.terminal(), &mut demo, feed_rx).await;
    demo.carousel.teardown();
    session.restore();
    result
}
