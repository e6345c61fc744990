//! Series fetching
//!
//! Each view issues its own fetches at mount. A fetch that resolves after the
//! view is gone is discarded.

use std::cell::Cell;
use std::rc::Rc;

use courtside::slot::Slot;
use courtside::view::Series;
use leptos::*;

use crate::api;

/// Fetch `series` in the background and store the outcome in `slot`.
///
/// Must be called inside a reactive owner; the fetch is cancelled when that
/// owner is cleaned up.
pub fn spawn_series_fetch(api_base: String, series: Series, slot: RwSignal<Slot>) {
    let cancelled = Rc::new(Cell::new(false));

    let flag = cancelled.clone();
    on_cleanup(move || flag.set(true));

    spawn_local(async move {
        let result = api::fetch_series(&api_base, series).await;
        if cancelled.get() {
            return;
        }

        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Failed to fetch {}: {}", series, e).into());
        }
        slot.set(Slot::from_result(result));
    });
}
