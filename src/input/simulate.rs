//! Synthetic mouse input via rdev

use rdev::{simulate, Button, EventType};

use crate::clicker::{ClickError, MouseBackend, MouseButton};

/// Click backend that injects real events through the OS, at the
/// current pointer position.
pub struct SystemMouse;

impl MouseBackend for SystemMouse {
    fn click(&self, button: MouseButton) -> Result<(), ClickError> {
        let button = match button {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
            MouseButton::Middle => Button::Middle,
        };

        simulate(&EventType::ButtonPress(button))
            .map_err(|e| ClickError::Inject(format!("{e:?}")))?;
        simulate(&EventType::ButtonRelease(button))
            .map_err(|e| ClickError::Inject(format!("{e:?}")))?;
        Ok(())
    }
}
