//! Route Matching
//!
//! Pure mapping from the location pathname to the active view. Recomputed on
//! every render, never cached.

/// The active view, derived from the current path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/` — all anecdotes
    List,
    /// `/anecdote/{id}` — one anecdote by id
    Detail(u32),
    /// `/about` — static info page
    About,
    /// `/create` — the new-anecdote form
    Create,
    /// Anything else; no page renders, the outer chrome still does
    Unmatched,
}

impl Route {
    /// Match a pathname. A detail path whose id segment is not an integer
    /// does not match the detail route and falls through to `Unmatched`.
    pub fn from_path(path: &str) -> Self {
        let path = path
            .strip_suffix('/')
            .filter(|stripped| !stripped.is_empty())
            .unwrap_or(path);

        match path {
            "" | "/" => Route::List,
            "/about" => Route::About,
            "/create" => Route::Create,
            _ => match path.strip_prefix("/anecdote/") {
                Some(id) => id.parse().map(Route::Detail).unwrap_or(Route::Unmatched),
                None => Route::Unmatched,
            },
        }
    }
}
