//! Toast Notification Component
//!
//! One notice at a time, pinned above the footer. A failed series fetch
//! outranks a confirmation and can be dismissed by hand.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Saved,
    FetchFailed,
}

/// Pick the notice to show; errors win over confirmations
fn current_notice(
    error: Option<String>,
    success: Option<String>,
) -> Option<(NoticeKind, String)> {
    error
        .map(|msg| (NoticeKind::FetchFailed, msg))
        .or_else(|| success.map(|msg| (NoticeKind::Saved, msg)))
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let error = state.error;
    let success = state.success;

    let notice = create_memo(move |_| current_notice(error.get(), success.get()));

    view! {
        <div class="fixed bottom-20 right-4 z-50 max-w-sm">
            {move || notice.get().map(|(kind, message)| {
                let (icon, bg_class) = match kind {
                    NoticeKind::Saved => ("✓", "bg-green-600"),
                    NoticeKind::FetchFailed => ("🏀", "bg-red-600"),
                };

                view! {
                    <div class=format!(
                        "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
                        bg_class
                    )>
                        <span class="text-lg">{icon}</span>
                        <span class="text-sm font-medium flex-1">{message}</span>
                        {(kind == NoticeKind::FetchFailed).then(|| view! {
                            <button
                                class="text-white/70 hover:text-white"
                                title="Dismiss"
                                on:click=move |_| error.set(None)
                            >
                                "✕"
                            </button>
                        })}
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_outranks_success() {
        let notice = current_notice(Some("HTTP 503".into()), Some("Saved".into()));
        assert_eq!(notice, Some((NoticeKind::FetchFailed, "HTTP 503".to_string())));

        let notice = current_notice(None, Some("Saved".into()));
        assert_eq!(notice, Some((NoticeKind::Saved, "Saved".to_string())));

        assert_eq!(current_notice(None, None), None);
    }
}
