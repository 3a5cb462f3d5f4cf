//! Panic hook that gives the terminal back before the report is printed.

use std::panic;

use super::setup::emergency_restore;

/// Chain terminal restoration in front of the current panic hook.
///
/// Install after `color_eyre::install()` so its report hook is the one
/// being wrapped.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}
