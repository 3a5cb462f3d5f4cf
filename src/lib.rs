//! swipekit - list and banner carousel widgets for ratatui
//!
//! Two reusable widgets:
//!
//! - [`list::GenericList`]: a list over any item type with a reusable cell
//!   pool, pull-to-refresh header and pull-to-load-more footer.
//! - [`carousel::Carousel`]: a paging banner carousel with infinite looping,
//!   a page indicator and timer-driven autoplay.
//!
//! Both are rendered as `&mut` ratatui widgets and fed crossterm events by
//! the host. Timers go through the [`traits::Scheduler`] seam so autoplay can
//! be driven by tokio or by a test clock.

pub mod adapters;
pub mod carousel;
pub mod config;
pub mod error;
pub mod list;
pub mod terminal;
pub mod traits;

pub use error::{KitError, KitResult};
