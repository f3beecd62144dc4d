//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Menu, Notification};
use crate::pages::{About, AnecdoteDetail, AnecdoteList, CreateAnecdote};
use crate::route::Route;
use crate::state::provide_app_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    view! {
        <Router>
            <div>
                <h1>"Software anecdotes"</h1>

                // Navigation menu
                <Menu />

                // Transient notification
                <Notification />

                // The view selected by the current path
                <main>
                    <SelectedView />
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Renders the page matching the current path. Unmatched paths render
/// nothing; menu and footer stay up.
#[component]
fn SelectedView() -> impl IntoView {
    let location = use_location();

    move || match Route::from_path(&location.pathname.get()) {
        Route::List => view! { <AnecdoteList /> }.into_view(),
        Route::Detail(id) => view! { <AnecdoteDetail id=id /> }.into_view(),
        Route::About => view! { <About /> }.into_view(),
        Route::Create => view! { <CreateAnecdote /> }.into_view(),
        Route::Unmatched => view! {}.into_view(),
    }
}

/// Footer with attribution
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer style="margin-top: 16px">
            "Anecdote app for "
            <a href="https://fullstackopen.com/">"Full Stack Open"</a>
            ". See "
            <a href="https://github.com/fullstack-hy2020/routed-anecdotes/blob/master/src/App.js">
                "the original source"
            </a>
            " for the inspiration."
        </footer>
    }
}
