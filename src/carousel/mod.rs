//! Auto-scrolling banner carousel.
//!
//! - [`page_map`] - Logical slide index <-> renderable position mapping
//! - [`scroll`] - Paged scroll offset, animation and drag tracking
//! - [`autoplay`] - The Stopped/Running timer state machine
//! - [`indicator`] - Dot page indicator
//! - [`source`] - Data source, delegate and slide view traits
//! - [`view`] - The [`Carousel`] widget tying them together

pub mod autoplay;
pub mod events;
pub mod indicator;
pub mod page_map;
pub mod scroll;
pub mod source;
pub mod view;

pub use autoplay::{Autoplay, AutoplayState};
pub use events::CarouselEvent;
pub use indicator::PageIndicator;
pub use page_map::PageMap;
pub use scroll::PageScroller;
pub use source::{BannerDataSource, BannerDelegate, SlideView, TextSlide};
pub use view::Carousel;
