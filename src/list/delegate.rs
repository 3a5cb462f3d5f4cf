//! List delegate and the completion handles given to it.
//!
//! Refresh and load-more are fire-and-forget: the list hands the delegate a
//! completion handle and forgets about it. The handle is `Send`, so the
//! delegate may finish from a background task; finishing posts a
//! [`ListEvent`] that the list applies on its next
//! [`process_pending`](super::GenericList::process_pending). There is no
//! timeout: a handle dropped without being finished leaves the affordance
//! spinning.

use tokio::sync::mpsc::UnboundedSender;

/// Receives selection and refresh requests from a list.
pub trait ListDelegate<T> {
    /// A row was selected.
    fn did_select_item(&mut self, item: &T);

    /// The header was pulled. Call `done.finish()` once new data is in.
    fn pull_header_to_refresh(&mut self, done: RefreshCompletion);

    /// The footer was pulled. Call `done.finish()` when more rows were added
    /// or `done.no_more_data()` when the end was reached.
    fn pull_footer_to_load_more(&mut self, done: LoadMoreCompletion);
}

/// Messages posted by completion handles.
///
/// `generation` names the refresh the handle was issued for; the list drops
/// events whose refresh is no longer the one running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    RefreshFinished { generation: u64 },
    LoadMoreFinished { generation: u64, has_more: bool },
}

/// One-shot completion for a header refresh.
#[derive(Debug)]
#[must_use = "the header keeps refreshing until the completion is finished"]
pub struct RefreshCompletion {
    tx: UnboundedSender<ListEvent>,
    generation: u64,
}

impl RefreshCompletion {
    pub(crate) fn new(tx: UnboundedSender<ListEvent>, generation: u64) -> Self {
        Self { tx, generation }
    }

    /// Reload the list and end the header's refreshing state.
    pub fn finish(self) {
        let event = ListEvent::RefreshFinished {
            generation: self.generation,
        };
        if self.tx.send(event).is_err() {
            tracing::debug!("Refresh finished after the list was dropped");
        }
    }
}

/// One-shot completion for a footer load-more.
#[derive(Debug)]
#[must_use = "the footer keeps loading until the completion is finished"]
pub struct LoadMoreCompletion {
    tx: UnboundedSender<ListEvent>,
    generation: u64,
}

impl LoadMoreCompletion {
    pub(crate) fn new(tx: UnboundedSender<ListEvent>, generation: u64) -> Self {
        Self { tx, generation }
    }

    /// More rows are available: reload and re-arm the footer.
    pub fn finish(self) {
        self.send(true);
    }

    /// Nothing left to load: reload and mark the footer exhausted.
    pub fn no_more_data(self) {
        self.send(false);
    }

    fn send(self, has_more: bool) {
        let event = ListEvent::LoadMoreFinished {
            generation: self.generation,
            has_more,
        };
        if self.tx.send(event).is_err() {
            tracing::debug!("Load-more finished after the list was dropped");
        }
    }
}
