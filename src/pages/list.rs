//! List Page
//!
//! All anecdotes, each linking to its detail route.

use leptos::*;
use leptos_router::*;

use crate::state::AppState;

/// Anecdote list page
#[component]
pub fn AnecdoteList() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div>
            <h2>"Anecdotes"</h2>
            <ul>
                {move || {
                    state
                        .anecdotes
                        .get()
                        .into_iter()
                        .map(|anecdote| {
                            view! {
                                <li>
                                    <A href=format!("/anecdote/{}", anecdote.id)>
                                        {anecdote.content}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
