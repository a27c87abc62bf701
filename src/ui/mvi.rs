//! Model-View-Intent primitives for the UI layer.
//!
//! State flows one way: input handling produces intents, a pure reducer
//! folds each intent into a new state value, and the view renders
//! whatever the current state says. Nothing else mutates UI state.

/// Marker trait for UI state objects.
///
/// A state value is a complete description of what the view shows.
/// Reducers consume the old value and hand back a new one, so states
/// must be cheap to clone and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and system events that can
/// change UI state.
pub trait Intent: Send + 'static {}

/// A pure state transition.
///
/// `reduce` is the only place state transitions happen, and it must not
/// perform side effects.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
