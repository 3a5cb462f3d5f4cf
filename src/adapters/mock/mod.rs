//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockScheduler`] - Timers that fire only on demand

pub mod scheduler;

pub use scheduler::MockScheduler;
