//! Error handling for swipekit.
//!
//! The widgets follow a two-tier policy:
//!
//! | Condition | Handling |
//! |-----------|----------|
//! | Zero items, zero slides, detached affordance | Valid state, empty/no-op result |
//! | Row index out of range, missing collaborator contract | Panic (caller bug) |
//! | Config parsing, timer scheduling, terminal IO | [`KitError`] |

mod kit_error;
mod result;

pub use kit_error::KitError;
pub use result::KitResult;
