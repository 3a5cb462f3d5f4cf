//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`TokioScheduler`] - Autoplay timers on the tokio runtime
//!
//! # Mock Implementations
//!
//! - [`mock::MockScheduler`] - Deterministic timers for tests

pub mod mock;
pub mod tokio_scheduler;

pub use mock::MockScheduler;
pub use tokio_scheduler::TokioScheduler;
