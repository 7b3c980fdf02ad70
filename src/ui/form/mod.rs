//! Seller analysis form.
//!
//! - `state.rs` - form state and phases
//! - `intent.rs` - user edits, submit, request completion
//! - `reducer.rs` - state transitions
//! - `view.rs` - projection into displayable text

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormState, Phase, RequestId};
pub use view::{FormView, IssueRow, ResultView};
