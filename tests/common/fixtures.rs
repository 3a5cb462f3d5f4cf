//! Data sources and delegates shared by the integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use swipekit::adapters::MockScheduler;
use swipekit::carousel::{BannerDataSource, BannerDelegate, Carousel, TextSlide};
use swipekit::config::{CarouselConfig, ListConfig};
use swipekit::list::{
    GenericList, ListDelegate, LoadMoreCompletion, RefreshCompletion, TextCell,
};

/// Banner source that counts how many views it had to build from scratch.
pub struct Banners {
    pub titles: Vec<String>,
    pub built: usize,
    pub recycled: usize,
}

impl Banners {
    pub fn shared(count: usize) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            titles: (0..count).map(|i| format!("banner {}", i)).collect(),
            built: 0,
            recycled: 0,
        }))
    }
}

impl BannerDataSource<TextSlide> for Banners {
    fn number_of_banners(&self) -> usize {
        self.titles.len()
    }

    fn view_for_banner(&mut self, index: usize, convert_view: Option<TextSlide>) -> TextSlide {
        let mut view = match convert_view {
            Some(view) => {
                self.recycled += 1;
                view
            }
            None => {
                self.built += 1;
                TextSlide::default()
            }
        };
        view.title = self.titles[index].clone();
        view
    }
}

#[derive(Debug, Default)]
pub struct BannerRecorder {
    pub selected: Vec<usize>,
    pub pages: Vec<usize>,
}

impl BannerDelegate for BannerRecorder {
    fn did_select_banner(&mut self, index: usize) {
        self.selected.push(index);
    }

    fn did_change_page(&mut self, index: usize) {
        self.pages.push(index);
    }
}

/// An attached carousel on a mock clock.
pub struct CarouselFixture {
    pub carousel: Carousel<TextSlide>,
    pub source: Rc<RefCell<Banners>>,
    pub delegate: Rc<RefCell<BannerRecorder>>,
    pub scheduler: MockScheduler,
}

impl CarouselFixture {
    pub fn new(count: usize, config: CarouselConfig) -> Self {
        let source = Banners::shared(count);
        let delegate = Rc::new(RefCell::new(BannerRecorder::default()));
        let scheduler = MockScheduler::new();
        let mut carousel = Carousel::new(&source, config, Box::new(scheduler.clone()));
        carousel.set_delegate(&delegate);
        carousel.set_attached(true);
        Self {
            carousel,
            source,
            delegate,
            scheduler,
        }
    }

    /// Fire the timer and let the carousel react to it.
    pub fn tick(&mut self) -> usize {
        self.scheduler.fire();
        self.carousel.process_pending()
    }
}

/// Carousel settings with instant page changes.
pub fn instant_config() -> CarouselConfig {
    CarouselConfig::default().with_animation_millis(0)
}

/// List delegate that parks completions for the test to finish.
#[derive(Default)]
pub struct FeedRecorder {
    pub selected: Vec<String>,
    pub refresh: Option<RefreshCompletion>,
    pub load_more: Option<LoadMoreCompletion>,
    pub refresh_requests: usize,
    pub load_more_requests: usize,
}

impl ListDelegate<String> for FeedRecorder {
    fn did_select_item(&mut self, item: &String) {
        self.selected.push(item.clone());
    }

    fn pull_header_to_refresh(&mut self, done: RefreshCompletion) {
        self.refresh_requests += 1;
        self.refresh = Some(done);
    }

    fn pull_footer_to_load_more(&mut self, done: LoadMoreCompletion) {
        self.load_more_requests += 1;
        self.load_more = Some(done);
    }
}

pub fn strings(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("row {}", i)).collect()
}

/// A text list with both refresh affordances and a recording delegate.
pub fn feed_list(
    rows: usize,
) -> (GenericList<String, TextCell<String>>, Rc<RefCell<FeedRecorder>>) {
    let config = ListConfig::new()
        .with_header_refresh(true)
        .with_footer_load_more(true);
    let mut list = GenericList::with_text_cells(config);
    let delegate = Rc::new(RefCell::new(FeedRecorder::default()));
    list.set_delegate(&delegate);
    list.set_items(strings(rows));
    (list, delegate)
}
