//! Navigation Component
//!
//! Menu bar with links to every view.

use leptos::*;
use leptos_router::*;

/// Navigation menu component
#[component]
pub fn Menu() -> impl IntoView {
    view! {
        <nav>
            <MenuLink href="/" label="anecdotes" />
            <MenuLink href="/create" label="create new" />
            <MenuLink href="/about" label="about" />
        </nav>
    }
}

/// Individual menu link
#[component]
fn MenuLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <span style="padding-right: 5px">
            <A href=href>{label}</A>
        </span>
    }
}
