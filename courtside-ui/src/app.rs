//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{ActualPage, Home, PredictionsPage};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/predictions" view=PredictionsPage />
                        <Route path="/actual" view=ActualPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing which data service the charts come from
#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let (editing, set_editing) = create_signal(false);
    let (draft, set_draft) = create_signal(String::new());

    let state_for_save = state.clone();
    let on_save = move |_| {
        state_for_save.set_api_base(&draft.get());
        state_for_save.show_success("Data service updated. Reload to refetch.");
        set_editing.set(false);
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"Data: basketball-reference.com game results"</span>

                {move || {
                    if editing.get() {
                        view! {
                            <div class="flex items-center space-x-2">
                                <input
                                    type="text"
                                    class="bg-gray-700 rounded px-2 py-1 text-white"
                                    prop:value=move || draft.get()
                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                />
                                <button
                                    class="px-3 py-1 bg-primary-600 hover:bg-primary-700 rounded text-white"
                                    on:click=on_save.clone()
                                >
                                    "Save"
                                </button>
                            </div>
                        }.into_view()
                    } else {
                        let current = state.api_base.get();
                        view! {
                            <button
                                class="hover:text-white transition-colors"
                                on:click=move |_| {
                                    set_draft.set(current.clone());
                                    set_editing.set(true);
                                }
                            >
                                {format!("API: {}", state.api_base.get())}
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🏀"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
