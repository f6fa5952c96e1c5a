//! Interval polling tied to component lifetime.

use std::time::Duration;

use leptos::{on_cleanup, set_interval_with_handle};

/// Run `tick` every `period` until the calling component is unmounted.
///
/// The interval is cancelled on cleanup, so navigating away from a polling
/// page stops its requests instead of leaking them.
pub fn use_polling(period: Duration, tick: impl Fn() + 'static) {
    match set_interval_with_handle(tick, period) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => tracing::error!(?err, "failed to install polling interval"),
    }
}
