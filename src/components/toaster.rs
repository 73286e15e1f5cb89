//! Transient notice stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `SessionContext::notices`. Every new notice gets one dismiss timer
//! in the browser; clicking a notice dismisses it early.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use leptos::prelude::*;

use crate::config::client_config;
use crate::state::notices::Notice;
use crate::util::session::SessionContext;

#[component]
pub fn Toaster() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let timeout_ms = client_config().notice_timeout_ms;
    // Highest notice id that already has a timer.
    let scheduled = StoredValue::new(0_u64);

    Effect::new(move || {
        let fresh = session.notices.with(|n| unscheduled_ids(&n.items, scheduled.get_value()));
        if let Some(max) = fresh.iter().copied().max() {
            scheduled.set_value(max);
        }
        for id in fresh {
            schedule_dismiss(session, id, timeout_ms);
        }
    });

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                session
                    .notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div
                                class=format!("notice {}", notice.level.css_modifier())
                                on:click=move |_| session.dismiss(id)
                            >
                                {notice.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Ids newer than `last_scheduled`, oldest first.
fn unscheduled_ids(items: &[Notice], last_scheduled: u64) -> Vec<u64> {
    items.iter().map(|n| n.id).filter(|id| *id > last_scheduled).collect()
}

fn schedule_dismiss(session: SessionContext, id: u64, timeout_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(timeout_ms, move || session.dismiss(id)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, timeout_ms);
    }
}
