//! Home Page
//!
//! Fetches both series at mount and shows at most one chart, chosen with the
//! "Predictions" and "Real" toggles.

use courtside::slot::Slot;
use courtside::view::{Render, Series, ViewMode};
use leptos::*;

use crate::components::{Chart, Loading};
use crate::state::{spawn_series_fetch, GlobalState};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let mode = create_rw_signal(ViewMode::Idle);
    let predictions = create_rw_signal(Slot::Pending);
    let actual = create_rw_signal(Slot::Pending);

    // Both fetches start at mount, whatever is visible
    let api_base = state.api_base.get_untracked();
    spawn_series_fetch(api_base.clone(), Series::Predictions, predictions);
    spawn_series_fetch(api_base, Series::Actual, actual);

    let slot_for = move |series: Series| match series {
        Series::Predictions => predictions,
        Series::Actual => actual,
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Match Outcome Predictor"</h1>
                <div class="text-gray-400 mt-3 space-y-2">
                    <p>
                        "Predicted match outcomes for the "
                        <b>"2018-19"</b>
                        " NBA season, with "
                        <span class="text-green-400">"63-67% accuracy"</span>
                        "."
                    </p>
                    <p>
                        "Each team's win ratio is recomputed after every game day \
                         across all 1230 games and plotted day by day."
                    </p>
                    <p>
                        <u>"Predictions"</u>
                        " shows the predicted outcomes and "
                        <u>"Real"</u>
                        " shows the actual outcomes."
                    </p>
                </div>
            </div>

            <div class="flex justify-center space-x-4">
                <ToggleButton series=Series::Predictions mode=mode />
                <ToggleButton series=Series::Actual mode=mode />
            </div>

            <section class="bg-gray-800 rounded-xl p-6 min-h-[8rem]">
                {move || {
                    let visible = mode.get().visible();
                    let slot = match visible {
                        Some(series) => slot_for(series).get(),
                        None => Slot::Pending,
                    };

                    match Render::for_slot(visible, &slot) {
                        Render::Nothing => view! {
                            <p class="text-center text-gray-500 py-12">
                                "Pick a series to chart."
                            </p>
                        }.into_view(),
                        Render::Loading(_) => view! { <Loading /> }.into_view(),
                        Render::Chart(_, matrix) => view! {
                            <Chart matrix=matrix.clone() />
                        }.into_view(),
                        Render::Failed(series, e) => view! {
                            <div class="text-center py-12">
                                <p class="text-red-400 font-medium">
                                    {format!("Could not load {}", series.label())}
                                </p>
                                <p class="text-sm text-gray-400 mt-1">{e.to_string()}</p>
                            </div>
                        }.into_view(),
                    }
                }}
            </section>
        </div>
    }
}

/// Toggle for one series; pressing the active one hides it
#[component]
fn ToggleButton(series: Series, mode: RwSignal<ViewMode>) -> impl IntoView {
    let is_active = create_memo(move |_| mode.get().is_showing(series));

    let on_click = move |_| mode.update(|m| *m = m.toggle(series));

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-6 py-2 rounded-lg font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {series.label()}
        </button>
    }
}
