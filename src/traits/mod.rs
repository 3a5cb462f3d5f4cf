//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`Scheduler`] - Repeating timers for carousel autoplay
//! - [`TimerHandle`] - Cancellation handle for a scheduled timer

pub mod scheduler;

pub use scheduler::{Scheduler, TimerHandle};
