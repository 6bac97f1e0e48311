//! Input coordination
//!
//! Tracks the set of held keys, evaluates hotkey matches on every
//! press/release event and drives the click loop.

mod machine;

pub use machine::{ClickPolicy, InputCoordinator, Outcome};
