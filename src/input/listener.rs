//! Global key listener
//!
//! Runs the rdev hook on a dedicated thread and forwards mapped
//! press/release events to the coordinator over an mpsc channel.
//! Events are delivered sequentially; no two are processed at once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use rdev::EventType;
use tokio::sync::mpsc;
use tracing::{error, info, trace, warn};

use super::{keymap, KeyEvent};

/// Errors that can occur in the key listener.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("key listener is already running")]
    AlreadyRunning,

    #[error("failed to spawn listener thread: {0}")]
    ThreadSpawn(String),
}

/// Global keyboard listener on a dedicated thread.
///
/// rdev's hook cannot be torn down from outside, so `stop()` only
/// mutes event forwarding; the hook itself is released when the
/// process exits.
pub struct KeyListener {
    event_tx: mpsc::Sender<KeyEvent>,
    running: Arc<AtomicBool>,
}

impl KeyListener {
    pub fn new(event_tx: mpsc::Sender<KeyEvent>) -> Self {
        Self {
            event_tx,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start the listener thread. Fails if already running or if the
    /// thread cannot be spawned; hook errors are reported from the
    /// thread and close the event channel.
    pub fn start(&self) -> Result<(), ListenerError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(ListenerError::AlreadyRunning);
        }

        let event_tx = self.event_tx.clone();
        let running = Arc::clone(&self.running);

        thread::Builder::new()
            .name("key-listener".to_string())
            .spawn(move || {
                info!("key listener thread started");

                let result = rdev::listen(move |event: rdev::Event| {
                    if !running.load(Ordering::SeqCst) {
                        return;
                    }

                    let mapped = match event.event_type {
                        EventType::KeyPress(key) => {
                            keymap::key_id(key).map(KeyEvent::Pressed)
                        }
                        EventType::KeyRelease(key) => {
                            keymap::key_id(key).map(KeyEvent::Released)
                        }
                        _ => None,
                    };

                    if let Some(key_event) = mapped {
                        trace!(?key_event, "key event");
                        if event_tx.blocking_send(key_event).is_err() {
                            warn!("key event channel closed, muting listener");
                            running.store(false, Ordering::SeqCst);
                        }
                    }
                });

                if let Err(e) = result {
                    error!(?e, "keyboard hook failed");
                }

                info!("key listener thread stopped");
            })
            .map_err(|e| {
                self.running.store(false, Ordering::SeqCst);
                ListenerError::ThreadSpawn(e.to_string())
            })?;

        Ok(())
    }

    /// Stop forwarding events.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Check if the listener is currently forwarding events.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
