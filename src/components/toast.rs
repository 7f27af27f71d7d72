//! Transient upload notification.
//!
//! DESIGN
//! ======
//! The owning form passes its `RwSignal<ToastState>` straight in; this
//! component only mirrors that state and runs the auto-hide countdown.
//! Each countdown captures the message version it was started for, so a
//! newer message supersedes a pending countdown instead of being cut short
//! by it.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// How long a toast stays visible before hiding itself.
pub const AUTO_HIDE: Duration = Duration::from_secs(3);

/// Auto-dismissing notification fed by the upload form.
#[component]
pub fn Toast(state: RwSignal<ToastState>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // One countdown per message version; stale countdowns expire harmlessly.
    Effect::new(move || {
        let current = state.get();
        if !current.visible {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let seq = current.seq;
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(AUTO_HIDE).await;
                // The toast may have been torn down while the countdown ran.
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                state.update(|toast| toast.expire(seq));
            });
        }
    });

    view! {
        <Show when=move || state.get().visible>
            <div class="toast">
                <div class="toast__header">
                    <strong class="toast__title">"File Upload"</strong>
                    <button
                        class="toast__close"
                        title="Close"
                        on:click=move |_| state.update(|toast| toast.dismiss())
                    >
                        "×"
                    </button>
                </div>
                <div class="toast__body">{move || state.get().message}</div>
            </div>
        </Show>
    }
}
