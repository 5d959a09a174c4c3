//! Transient toast notification rendered once at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages raise toasts through [`show_toast`]; the message lives in the shared
//! `UiState`, so a toast raised right before navigation shows on the next page.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Show `message` and schedule its automatic dismissal.
pub fn show_toast(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let mut seq = 0;
    ui.update(|u| seq = u.push_toast(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_DURATION).await;
        ui.update(|u| u.expire_toast(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.get().toast.map(|toast| {
            view! {
                <div class=format!("toast {}", toast.kind.css_modifier()) role="alert">
                    <span class="toast__message">{toast.message}</span>
                    <button
                        class="toast__close"
                        title="Dismiss"
                        aria-label="Dismiss"
                        on:click=move |_| ui.update(UiState::dismiss_toast)
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
