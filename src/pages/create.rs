//! Create Page
//!
//! Form for adding a new anecdote.

use leptos::*;

use crate::state::{AnecdoteDraft, AppState};

/// New-anecdote form page
#[component]
pub fn CreateAnecdote() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (content, set_content) = create_signal(String::new());
    let (author, set_author) = create_signal(String::new());
    let (info, set_info) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = AnecdoteDraft {
            content: content.get(),
            author: author.get(),
            info: info.get(),
        };

        let message = format!(
            "The anecdote {} has been added to the anecdote list",
            draft.content
        );
        state.add_anecdote(draft);
        state.notify(&message);
        // Fields are left as typed; they reset when routing unmounts the page.
    };

    view! {
        <div>
            <h2>"create a new anecdote"</h2>
            <form on:submit=on_submit>
                <div>
                    "content "
                    <input
                        name="content"
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    "author "
                    <input
                        name="author"
                        prop:value=move || author.get()
                        on:input=move |ev| set_author.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    "url for more info "
                    <input
                        name="info"
                        prop:value=move || info.get()
                        on:input=move |ev| set_info.set(event_target_value(&ev))
                    />
                </div>
                <button>"create"</button>
            </form>
        </div>
    }
}
