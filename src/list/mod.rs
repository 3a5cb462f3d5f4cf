//! Generic list widget with cell reuse and pull-to-refresh.
//!
//! [`GenericList`] keeps the items, binds visible rows to cells taken from a
//! [`CellPool`] and forwards selection and refresh gestures to a
//! [`ListDelegate`].

mod cell;
mod delegate;
mod pool;
mod refresh;
mod view;

pub use cell::{truncate_to_width, CellStyle, ListCell, TextCell};
pub use delegate::{ListDelegate, ListEvent, LoadMoreCompletion, RefreshCompletion};
pub use pool::CellPool;
pub use refresh::{RefreshControl, RefreshKind, RefreshState};
pub use view::{CellFactory, GenericList, LIST_CELL_ID};
