//! OS input layer
//!
//! Global keyboard hook feeding key events into the coordinator, plus
//! the mouse backend used by the click loop. Everything rdev-specific
//! stays inside this module.

mod keymap;
mod listener;
mod simulate;

pub use listener::{KeyListener, ListenerError};
pub use simulate::SystemMouse;

use crate::hotkey::KeyId;

/// Key events delivered from the listener to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(KeyId),
    Released(KeyId),
}
