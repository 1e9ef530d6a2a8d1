//! Per-page view state.
//!
//! A page's state is a plain value advanced by [`ViewState::apply`]. Every
//! transition a page can make is a [`StoreEvent`], so the rules below hold
//! for all pages:
//!
//! - at most one request is in flight per page ([`Activity`]);
//! - starting an action clears the previous feedback message;
//! - concluding an action sets exactly one feedback message;
//! - the entity list is replaced wholesale, never patched.

use std::mem;

/// What the page is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    /// A read is in flight.
    Loading,
    /// A create, update or delete is in flight.
    Submitting,
}

/// Whether the form creates a new entity or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode<Id> {
    Creating,
    Editing(Id),
}

impl<Id> Default for EditMode<Id> {
    fn default() -> Self {
        Self::Creating
    }
}

impl<Id> EditMode<Id> {
    /// The id under edit, if any.
    #[must_use]
    pub const fn id(&self) -> Option<&Id> {
        match self {
            Self::Creating => None,
            Self::Editing(id) => Some(id),
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// A state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent<T, Id> {
    /// A read request was sent.
    LoadStarted,
    /// A mutating request was sent.
    SubmitStarted,
    /// A list arrived; it replaces the current one.
    Loaded { items: Vec<T>, message: String },
    /// A request succeeded without producing a new list.
    Succeeded(String),
    /// A request failed.
    Failed { message: String, clear_items: bool },
    /// Input was rejected before any request was sent.
    Rejected(String),
    EditStarted(Id),
    EditFinished,
    /// Drop the list and any feedback.
    Cleared,
    FeedbackDismissed,
}

/// State of one admin page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<T, Id> {
    items: Vec<T>,
    activity: Activity,
    feedback: Option<String>,
    edit_mode: EditMode<Id>,
}

impl<T, Id> Default for ViewState<T, Id> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            activity: Activity::Idle,
            feedback: None,
            edit_mode: EditMode::Creating,
        }
    }
}

impl<T, Id> ViewState<T, Id> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state by one event.
    #[must_use]
    pub fn apply(mut self, event: StoreEvent<T, Id>) -> Self {
        match event {
            StoreEvent::LoadStarted => {
                self.activity = Activity::Loading;
                self.feedback = None;
            }
            StoreEvent::SubmitStarted => {
                self.activity = Activity::Submitting;
                self.feedback = None;
            }
            StoreEvent::Loaded { items, message } => {
                self.items = items;
                self.activity = Activity::Idle;
                self.feedback = Some(message);
            }
            StoreEvent::Succeeded(message) => {
                self.activity = Activity::Idle;
                self.feedback = Some(message);
            }
            StoreEvent::Failed {
                message,
                clear_items,
            } => {
                if clear_items {
                    self.items.clear();
                }
                self.activity = Activity::Idle;
                self.feedback = Some(message);
            }
            StoreEvent::Rejected(message) => {
                self.activity = Activity::Idle;
                self.feedback = Some(message);
            }
            StoreEvent::EditStarted(id) => {
                self.edit_mode = EditMode::Editing(id);
                self.feedback = None;
            }
            StoreEvent::EditFinished => self.edit_mode = EditMode::Creating,
            StoreEvent::Cleared => {
                self.items.clear();
                self.activity = Activity::Idle;
                self.feedback = None;
            }
            StoreEvent::FeedbackDismissed => self.feedback = None,
        }
        self
    }

    /// [`apply`](Self::apply) in place.
    pub fn dispatch(&mut self, event: StoreEvent<T, Id>) {
        *self = mem::take(self).apply(event);
    }

    /// Current entity list.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub const fn activity(&self) -> Activity {
        self.activity
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.activity, Activity::Loading)
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.activity, Activity::Submitting)
    }

    /// The message produced by the last concluded action.
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    #[must_use]
    pub const fn edit_mode(&self) -> &EditMode<Id> {
        &self.edit_mode
    }

    #[must_use]
    pub const fn editing_id(&self) -> Option<&Id> {
        self.edit_mode.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = ViewState<&'static str, u32>;

    fn loaded(items: Vec<&'static str>) -> State {
        State::new().apply(StoreEvent::Loaded {
            items,
            message: "loaded".to_string(),
        })
    }

    #[test]
    fn test_default_is_idle_creating() {
        let state = State::new();
        assert!(state.items().is_empty());
        assert_eq!(state.activity(), Activity::Idle);
        assert_eq!(state.feedback(), None);
        assert_eq!(state.edit_mode(), &EditMode::Creating);
    }

    #[test]
    fn test_start_clears_feedback_and_sets_activity() {
        let state = loaded(vec!["a"]).apply(StoreEvent::LoadStarted);
        assert!(state.is_loading());
        assert!(!state.is_submitting());
        assert_eq!(state.feedback(), None);
        assert_eq!(state.items(), ["a"]);

        let state = state.apply(StoreEvent::SubmitStarted);
        assert!(state.is_submitting());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_loaded_replaces_list() {
        let state = loaded(vec!["a", "b"])
            .apply(StoreEvent::LoadStarted)
            .apply(StoreEvent::Loaded {
                items: vec!["c"],
                message: "1 loaded".to_string(),
            });
        assert_eq!(state.items(), ["c"]);
        assert_eq!(state.activity(), Activity::Idle);
        assert_eq!(state.feedback(), Some("1 loaded"));
    }

    #[test]
    fn test_failed_optionally_clears_list() {
        let kept = loaded(vec!["a"]).apply(StoreEvent::Failed {
            message: "boom".to_string(),
            clear_items: false,
        });
        assert_eq!(kept.items(), ["a"]);
        assert_eq!(kept.feedback(), Some("boom"));

        let cleared = loaded(vec!["a"]).apply(StoreEvent::Failed {
            message: "boom".to_string(),
            clear_items: true,
        });
        assert!(cleared.items().is_empty());
    }

    #[test]
    fn test_rejected_keeps_list() {
        let state = loaded(vec!["a"]).apply(StoreEvent::Rejected("bad input".to_string()));
        assert_eq!(state.items(), ["a"]);
        assert_eq!(state.feedback(), Some("bad input"));
        assert_eq!(state.activity(), Activity::Idle);
    }

    #[test]
    fn test_edit_mode_transitions() {
        let mut state = State::new();
        state.dispatch(StoreEvent::EditStarted(7));
        assert_eq!(state.editing_id(), Some(&7));
        assert!(state.edit_mode().is_editing());

        state.dispatch(StoreEvent::EditFinished);
        assert_eq!(state.editing_id(), None);
    }

    #[test]
    fn test_cleared_and_dismissed() {
        let state = loaded(vec!["a"]).apply(StoreEvent::FeedbackDismissed);
        assert_eq!(state.feedback(), None);
        assert_eq!(state.items(), ["a"]);

        let state = state.apply(StoreEvent::Cleared);
        assert!(state.items().is_empty());
    }
}
