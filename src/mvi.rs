//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The payment flow keeps its state behind these traits so that every
//! transition goes through one pure function.

/// Marker trait for state snapshots handed to the view.
///
/// Snapshots are cloned out of their owner, compared to detect changes,
/// and start from a well-defined initial value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: outcomes of user actions or remote calls.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not perform I/O; callers own the side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
