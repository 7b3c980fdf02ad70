//! Unidirectional state primitives.
//!
//! A key press or a finished request becomes an [`Intent`]. A [`Reducer`]
//! folds it into the next [`UiState`], and the screen is drawn from a
//! projection of that state. Reducers are pure: the caller compares the
//! state before and after a transition to decide whether a request must be
//! issued.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
