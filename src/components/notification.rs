//! Notification Component
//!
//! Shows the transient confirmation message while it is visible.

use leptos::*;

use crate::state::AppState;

/// Notification banner; renders nothing while no message is visible
#[component]
pub fn Notification() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || {
            let notification = state.notification.get();
            if !notification.visible {
                return None;
            }

            let dismiss = state.clone();
            Some(view! {
                <div>
                    <span>{notification.message}</span>
                    <button on:click=move |_| dismiss.clear_notification()>"close"</button>
                </div>
            })
        }}
    }
}
