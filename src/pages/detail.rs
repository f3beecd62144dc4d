//! Detail Page
//!
//! One anecdote resolved by id. An id with no matching anecdote renders a
//! placeholder; a stale or typed-in URL is a normal outcome, not an error.

use leptos::*;

use crate::state::AppState;

/// Single-anecdote page
#[component]
pub fn AnecdoteDetail(id: u32) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || match state.find_by_id(id) {
            Some(anecdote) => {
                let voter = state.clone();
                view! {
                    <div>
                        <h3>{anecdote.content} " by " {anecdote.author}</h3>
                        <div>
                            "has " {anecdote.votes} " votes "
                            <button on:click=move |_| voter.vote(id)>"vote"</button>
                        </div>
                        <div>
                            "for more info see "
                            <a href=anecdote.info.clone()>{anecdote.info}</a>
                        </div>
                    </div>
                }
                .into_view()
            }
            None => view! {
                <div>
                    <h3>"anecdote not found"</h3>
                </div>
            }
            .into_view(),
        }}
    }
}
