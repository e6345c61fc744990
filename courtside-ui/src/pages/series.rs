//! Series Pages
//!
//! Route views that fetch a single series and chart it directly.

use courtside::chart::ChartOptions;
use courtside::slot::Slot;
use courtside::view::Series;
use leptos::*;

use crate::components::{Chart, Loading};
use crate::state::{spawn_series_fetch, GlobalState};

/// Single-series page
#[component]
pub fn SeriesPage(series: Series) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let slot = create_rw_signal(Slot::Pending);

    spawn_series_fetch(state.api_base.get_untracked(), series, slot);

    let options = match series {
        Series::Predictions => ChartOptions::default(),
        Series::Actual => ChartOptions::default().with_title("NBA 2018-19 SEASON RESULTS"),
    };

    create_effect(move |_| {
        if let Slot::Failed(e) = slot.get() {
            state.show_error(&format!("Could not load {}: {}", series.label(), e));
        }
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{series.label()}</h1>

            <section class="bg-gray-800 rounded-xl p-6">
                {move || match slot.get() {
                    Slot::Pending => view! { <Loading /> }.into_view(),
                    Slot::Loaded(matrix) => view! {
                        <Chart matrix=matrix options=options.clone() />
                    }.into_view(),
                    Slot::Failed(e) => view! {
                        <p class="text-center text-red-400 py-12">{e.to_string()}</p>
                    }.into_view(),
                }}
            </section>
        </div>
    }
}

#[component]
pub fn PredictionsPage() -> impl IntoView {
    view! { <SeriesPage series=Series::Predictions /> }
}

#[component]
pub fn ActualPage() -> impl IntoView {
    view! { <SeriesPage series=Series::Actual /> }
}
