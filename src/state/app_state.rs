//! Application State
//!
//! Reactive state management using Leptos signals. `AppState` owns the
//! anecdote collection and the transient notification; all mutation goes
//! through its methods.

use leptos::*;

/// How long a notification stays visible before it expires, in milliseconds.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// The anecdote collection, in insertion order
    pub anecdotes: RwSignal<Vec<Anecdote>>,
    /// Transient advisory message shown after an action
    pub notification: RwSignal<Notification>,
    /// Handle to the pending notification expiry, if any
    #[cfg(target_arch = "wasm32")]
    expiry: StoredValue<Option<gloo_timers::callback::Timeout>>,
}

/// One stored anecdote
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anecdote {
    pub id: u32,
    pub content: String,
    pub author: String,
    pub info: String,
    pub votes: u32,
}

/// Caller-supplied fields for a new anecdote; `id` and `votes` are assigned
/// by the store.
#[derive(Clone, Debug, Default)]
pub struct AnecdoteDraft {
    pub content: String,
    pub author: String,
    pub info: String,
}

/// Transient notification state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notification {
    pub message: String,
    pub visible: bool,
}

impl Notification {
    pub fn shown(message: &str) -> Self {
        Self {
            message: message.to_string(),
            visible: true,
        }
    }

    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    provide_context(AppState::new());
}

impl AppState {
    /// Create a state holder seeded with the two starter anecdotes
    pub fn new() -> Self {
        Self {
            anecdotes: create_rw_signal(seed_anecdotes()),
            notification: create_rw_signal(Notification::default()),
            #[cfg(target_arch = "wasm32")]
            expiry: store_value(None),
        }
    }

    #[cfg(test)]
    fn with_anecdotes(anecdotes: Vec<Anecdote>) -> Self {
        let state = Self::new();
        state.anecdotes.set(anecdotes);
        state
    }

    /// Add a new anecdote with a freshly assigned id and zero votes.
    /// Returns the assigned id.
    pub fn add_anecdote(&self, draft: AnecdoteDraft) -> u32 {
        let id = random_id();
        self.anecdotes.update(|list| {
            list.push(Anecdote {
                id,
                content: draft.content,
                author: draft.author,
                info: draft.info,
                votes: 0,
            });
        });
        logging::log!("added anecdote {id}");
        id
    }

    /// Increment the vote count of the anecdote with the given id.
    /// An unknown id is a silent no-op.
    pub fn vote(&self, id: u32) {
        self.anecdotes.update(|list| {
            if let Some(anecdote) = list.iter_mut().find(|a| a.id == id) {
                anecdote.votes += 1;
            }
        });
    }

    /// Look up an anecdote by id. `None` is a normal outcome, not an error.
    pub fn find_by_id(&self, id: u32) -> Option<Anecdote> {
        self.anecdotes
            .with(|list| list.iter().find(|a| a.id == id).cloned())
    }

    /// Show a notification and schedule its expiry. A pending expiry from an
    /// earlier notification is cancelled before the new one is scheduled.
    pub fn notify(&self, message: &str) {
        self.notification.set(Notification::shown(message));

        #[cfg(target_arch = "wasm32")]
        {
            let notification = self.notification;
            let handle = gloo_timers::callback::Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
                notification.set(Notification::cleared());
            });
            // Replacing the stored handle drops the previous timeout,
            // which cancels it.
            self.expiry.set_value(Some(handle));
        }
    }

    /// Clear the notification immediately. Idempotent.
    pub fn clear_notification(&self) {
        self.notification.set(Notification::cleared());

        #[cfg(target_arch = "wasm32")]
        self.expiry.set_value(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The two anecdotes every fresh page load starts with
fn seed_anecdotes() -> Vec<Anecdote> {
    vec![
        Anecdote {
            id: 1,
            content: "If it hurts, do it more often".to_string(),
            author: "Jez Humble".to_string(),
            info: "https://martinfowler.com/bliki/FrequencyReducesDifficulty.html".to_string(),
            votes: 0,
        },
        Anecdote {
            id: 2,
            content: "Premature optimization is the root of all evil".to_string(),
            author: "Donald Knuth".to_string(),
            info: "http://wiki.c2.com/?PrematureOptimization".to_string(),
            votes: 0,
        },
    ]
}

/// Assign an id from the 32-bit range; no uniqueness check is performed,
/// collision is negligible for a session's lifetime.
#[cfg(target_arch = "wasm32")]
fn random_id() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

/// Native fallback so unit tests observe deterministic, unique ids.
#[cfg(not(target_arch = "wasm32"))]
fn random_id() -> u32 {
    use std::sync::atomic::{AtomicU32, Ordering};
    // Starts above the seed ids.
    static NEXT: AtomicU32 = AtomicU32::new(1000);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    fn draft(content: &str, author: &str, info: &str) -> AnecdoteDraft {
        AnecdoteDraft {
            content: content.to_string(),
            author: author.to_string(),
            info: info.to_string(),
        }
    }

    #[test]
    fn add_appends_and_assigns_unique_ids() {
        let runtime = create_runtime();
        let state = AppState::with_anecdotes(Vec::new());

        for i in 0..5 {
            state.add_anecdote(draft(&format!("anecdote {i}"), "", ""));
        }

        let list = state.anecdotes.get_untracked();
        assert_eq!(list.len(), 5);

        let mut ids: Vec<u32> = list.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);

        // Insertion order is preserved
        assert_eq!(list[0].content, "anecdote 0");
        assert_eq!(list[4].content, "anecdote 4");

        runtime.dispose();
    }

    #[test]
    fn find_by_id_returns_the_added_fields() {
        let runtime = create_runtime();
        let state = AppState::with_anecdotes(Vec::new());

        let id = state.add_anecdote(draft("X", "A", "I"));

        let found = state.find_by_id(id).unwrap();
        assert_eq!(found.content, "X");
        assert_eq!(found.author, "A");
        assert_eq!(found.info, "I");
        assert_eq!(found.votes, 0);

        runtime.dispose();
    }

    #[test]
    fn vote_increments_only_the_target() {
        let runtime = create_runtime();
        let state = AppState::new();
        let before = state.anecdotes.get_untracked();

        state.vote(1);

        let after = state.anecdotes.get_untracked();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0].votes, 1);
        assert_eq!(after[0].content, before[0].content);
        assert_eq!(after[0].author, before[0].author);
        assert_eq!(after[0].info, before[0].info);
        assert_eq!(after[0].id, before[0].id);
        assert_eq!(after[1], before[1]);

        runtime.dispose();
    }

    #[test]
    fn vote_on_unknown_id_is_a_no_op() {
        let runtime = create_runtime();
        let state = AppState::new();
        let before = state.anecdotes.get_untracked();

        state.vote(999);

        assert_eq!(state.anecdotes.get_untracked(), before);

        runtime.dispose();
    }

    #[test]
    fn voting_twice_on_seeded_collection() {
        let runtime = create_runtime();
        let state = AppState::new();

        state.vote(1);
        state.vote(1);

        assert_eq!(state.find_by_id(1).map(|a| a.votes), Some(2));
        assert_eq!(state.find_by_id(2).map(|a| a.votes), Some(0));

        runtime.dispose();
    }

    #[test]
    fn notify_shows_and_clear_resets() {
        let runtime = create_runtime();
        let state = AppState::with_anecdotes(Vec::new());

        state.notify("hello");
        assert_eq!(
            state.notification.get_untracked(),
            Notification {
                message: "hello".to_string(),
                visible: true,
            }
        );

        state.clear_notification();
        assert_eq!(state.notification.get_untracked(), Notification::cleared());

        // Clearing again is harmless
        state.clear_notification();
        assert_eq!(state.notification.get_untracked(), Notification::cleared());

        runtime.dispose();
    }

    #[test]
    fn detail_route_resolves_against_the_collection() {
        let runtime = create_runtime();
        let state = AppState::new();

        match Route::from_path("/anecdote/2") {
            Route::Detail(id) => {
                let found = state.find_by_id(id).unwrap();
                assert_eq!(found.id, 2);
                assert_eq!(found.author, "Donald Knuth");
            }
            other => panic!("expected detail route, got {other:?}"),
        }

        match Route::from_path("/anecdote/999") {
            Route::Detail(id) => assert_eq!(state.find_by_id(id), None),
            other => panic!("expected detail route, got {other:?}"),
        }

        runtime.dispose();
    }
}
