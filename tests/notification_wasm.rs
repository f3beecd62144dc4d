//! Browser-side tests for the notification expiry timer.

#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::create_runtime;
use wasm_bindgen_test::*;

use anecdotes_ui::state::{AppState, Notification};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn notification_expires_after_the_delay() {
    let runtime = create_runtime();
    let state = AppState::new();

    state.notify("hello");
    assert_eq!(
        state.notification.get_untracked(),
        Notification {
            message: "hello".to_string(),
            visible: true,
        }
    );

    sleep(Duration::from_millis(5200)).await;

    assert_eq!(state.notification.get_untracked(), Notification::cleared());

    runtime.dispose();
}

#[wasm_bindgen_test]
async fn a_new_notification_cancels_the_pending_expiry() {
    let runtime = create_runtime();
    let state = AppState::new();

    state.notify("first");
    sleep(Duration::from_millis(3000)).await;
    state.notify("second");

    // Past the first notification's would-be expiry; the second must
    // still be up because scheduling it cancelled the first timer.
    sleep(Duration::from_millis(3000)).await;
    let notification = state.notification.get_untracked();
    assert!(notification.visible);
    assert_eq!(notification.message, "second");

    // And the second expires on its own schedule.
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(state.notification.get_untracked(), Notification::cleared());

    runtime.dispose();
}
