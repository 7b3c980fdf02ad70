/// Marker trait for intents.
///
/// Intents are either user actions (typing, submitting) or system events
/// (a request completing) and are consumed by a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
