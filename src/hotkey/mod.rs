//! Hotkey parsing and matching
//!
//! Turns combo strings like "ctrl+alt+p" into matchable expressions
//! over the set of currently pressed keys.

mod expr;
mod keys;

pub use expr::{Hotkey, HotkeyParseError};
pub use keys::{KeyId, NamedKey};
