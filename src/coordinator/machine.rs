//! Core coordinator implementation
//!
//! Consumes key press/release events, keeps the pressed-key set and
//! per-hotkey activation latches, and starts or stops the click loop
//! when the configured combos match.

use std::collections::HashSet;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::clicker::ClickLoop;
use crate::hotkey::{Hotkey, KeyId};
use crate::input::KeyEvent;

/// How key presses stop an active clicking episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ClickPolicy {
    /// The toggle hotkey starts and stops clicking. A latch makes each
    /// hold of the combo count once; it re-arms only after the combo
    /// fully breaks.
    Latch,
    /// The toggle hotkey starts clicking; any key press outside the
    /// combo that started it stops clicking. Legacy behavior.
    AnyKeyStops,
}

/// What the caller should do after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Owns all mutable input state: the pressed-key set, the activation
/// latches and the click loop. Constructed once at startup; all events
/// arrive sequentially on the listener channel.
pub struct InputCoordinator {
    toggle: Hotkey,
    exit: Option<Hotkey>,
    policy: ClickPolicy,
    clicker: ClickLoop,
    pressed: HashSet<KeyId>,
    toggle_latched: bool,
    exit_latched: bool,
    /// Keys that were part of the combo which started the current
    /// episode; exempt from the any-key-stops rule so the combo's own
    /// key-downs don't immediately stop the loop.
    ignored: HashSet<KeyId>,
}

impl InputCoordinator {
    pub fn new(
        toggle: Hotkey,
        exit: Option<Hotkey>,
        policy: ClickPolicy,
        clicker: ClickLoop,
    ) -> Self {
        Self {
            toggle,
            exit,
            policy,
            clicker,
            pressed: HashSet::new(),
            toggle_latched: false,
            exit_latched: false,
            ignored: HashSet::new(),
        }
    }

    /// Whether the click loop is currently active.
    pub fn clicking(&self) -> bool {
        self.clicker.clicking()
    }

    /// Drain key events until the exit hotkey fires or the listener
    /// channel closes.
    pub async fn run(&mut self, mut key_rx: mpsc::Receiver<KeyEvent>) {
        info!(policy = ?self.policy, "coordinator started");

        while let Some(event) = key_rx.recv().await {
            match event {
                KeyEvent::Pressed(key) => {
                    if self.handle_press(key) == Outcome::Exit {
                        break;
                    }
                }
                KeyEvent::Released(key) => self.handle_release(key),
            }
        }

        info!("coordinator stopped");
    }

    /// Stop any active clicking. Safe to call on every exit path.
    pub fn shutdown(&mut self) {
        self.clicker.stop();
    }

    pub fn handle_press(&mut self, key: KeyId) -> Outcome {
        self.pressed.insert(key);

        if self.exit_matches() && !self.exit_latched {
            self.exit_latched = true;
            self.clicker.stop();
            println!("Exit hotkey pressed. Exiting.");
            return Outcome::Exit;
        }

        match self.policy {
            ClickPolicy::Latch => self.press_latch(),
            ClickPolicy::AnyKeyStops => self.press_any_key_stops(key),
        }

        Outcome::Continue
    }

    pub fn handle_release(&mut self, key: KeyId) {
        self.pressed.remove(&key);
        self.ignored.remove(&key);

        if self.toggle_latched && !self.toggle.matches(&self.pressed) {
            debug!("toggle latch re-armed");
            self.toggle_latched = false;
        }
        if self.exit_latched && !self.exit_matches() {
            self.exit_latched = false;
        }
    }

    fn press_latch(&mut self) {
        if !self.toggle.matches(&self.pressed) || self.toggle_latched {
            return;
        }
        self.toggle_latched = true;

        if self.clicker.clicking() {
            self.stop_clicking();
            println!(
                "Auto-clicking stopped. Press {} to start again.",
                self.toggle.describe()
            );
        } else {
            self.start_clicking();
            println!(
                "Auto-clicking started. Press {} to stop.",
                self.toggle.describe()
            );
        }
    }

    fn press_any_key_stops(&mut self, key: KeyId) {
        if !self.clicker.clicking() {
            if self.toggle.matches(&self.pressed) {
                // The combo's own keys must not count as stop presses.
                self.ignored = self.pressed.clone();
                self.start_clicking();
                println!("Auto-clicking started. Press any other key to stop.");
            }
        } else if !self.ignored.contains(&key) {
            self.stop_clicking();
            println!(
                "Auto-clicking stopped. Press {} to start again.",
                self.toggle.describe()
            );
        }
    }

    fn exit_matches(&self) -> bool {
        self.exit
            .as_ref()
            .is_some_and(|hotkey| hotkey.matches(&self.pressed))
    }

    fn start_clicking(&mut self) {
        info!("clicking started");
        if let Err(e) = self.clicker.start() {
            error!(?e, "failed to start click loop");
        }
    }

    fn stop_clicking(&mut self) {
        info!("clicking stopped");
        self.clicker.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clicker::{ClickError, MouseBackend, MouseButton};
    use crate::hotkey::NamedKey;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingMouse {
        clicks: AtomicUsize,
    }

    impl MouseBackend for CountingMouse {
        fn click(&self, _button: MouseButton) -> Result<(), ClickError> {
            self.clicks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn coordinator(toggle: &str, exit: Option<&str>, policy: ClickPolicy) -> InputCoordinator {
        let backend: Arc<dyn MouseBackend> = Arc::new(CountingMouse::default());
        InputCoordinator::new(
            Hotkey::parse(toggle).unwrap(),
            exit.map(|e| Hotkey::parse(e).unwrap()),
            policy,
            ClickLoop::new(backend),
        )
    }

    const CTRL: KeyId = KeyId::Named(NamedKey::ControlLeft);
    const ALT: KeyId = KeyId::Named(NamedKey::AltLeft);
    const P: KeyId = KeyId::Char('p');
    const Q: KeyId = KeyId::Char('q');
    const X: KeyId = KeyId::Char('x');

    #[test]
    fn test_toggle_starts_and_stops_clicking() {
        let mut coord = coordinator("ctrl+alt+p", None, ClickPolicy::Latch);

        assert_eq!(coord.handle_press(CTRL), Outcome::Continue);
        assert_eq!(coord.handle_press(ALT), Outcome::Continue);
        assert!(!coord.clicking());
        assert_eq!(coord.handle_press(P), Outcome::Continue);
        assert!(coord.clicking());

        // Release p: the combo breaks but clicking continues.
        coord.handle_release(P);
        assert!(coord.clicking());

        // Re-press p: the latch re-armed, so the toggle fires again.
        coord.handle_press(P);
        assert!(!coord.clicking());

        coord.shutdown();
    }

    #[test]
    fn test_latch_blocks_key_repeat() {
        let mut coord = coordinator("ctrl+alt+p", None, ClickPolicy::Latch);

        coord.handle_press(CTRL);
        coord.handle_press(ALT);
        coord.handle_press(P);
        assert!(coord.clicking());

        // Held keys deliver repeated press events; the latch holds.
        coord.handle_press(P);
        coord.handle_press(P);
        assert!(coord.clicking());

        coord.shutdown();
    }

    #[test]
    fn test_latch_rearms_only_after_combo_breaks() {
        let mut coord = coordinator("ctrl+alt+p", None, ClickPolicy::Latch);

        coord.handle_press(CTRL);
        coord.handle_press(ALT);
        coord.handle_press(P);
        assert!(coord.clicking());

        // Releasing a modifier breaks the combo and re-arms the latch;
        // while broken, nothing fires.
        coord.handle_release(CTRL);
        assert!(coord.clicking());

        // Re-pressing it completes the combo again and re-triggers.
        coord.handle_press(CTRL);
        assert!(!coord.clicking());

        coord.shutdown();
    }

    #[test]
    fn test_release_of_untracked_key_is_noop() {
        let mut coord = coordinator("ctrl+alt+p", None, ClickPolicy::Latch);

        coord.handle_release(X);
        coord.handle_press(CTRL);
        coord.handle_press(ALT);
        coord.handle_press(P);
        assert!(coord.clicking());

        coord.shutdown();
    }

    #[test]
    fn test_exit_hotkey_stops_and_exits() {
        let mut coord = coordinator("ctrl+alt+p", Some("ctrl+alt+q"), ClickPolicy::Latch);

        coord.handle_press(CTRL);
        coord.handle_press(ALT);
        coord.handle_press(P);
        assert!(coord.clicking());

        coord.handle_release(P);
        assert_eq!(coord.handle_press(Q), Outcome::Exit);
        assert!(!coord.clicking());
    }

    #[test]
    fn test_exit_takes_priority_over_toggle() {
        // Toggle is a subset of exit: the exit must consume the event.
        let mut coord = coordinator("ctrl+alt", Some("ctrl+alt+q"), ClickPolicy::Latch);

        coord.handle_press(CTRL);
        coord.handle_press(ALT);
        assert!(coord.clicking());

        assert_eq!(coord.handle_press(Q), Outcome::Exit);
        assert!(!coord.clicking());
    }

    #[test]
    fn test_any_key_stops_policy() {
        let mut coord = coordinator("ctrl+p", None, ClickPolicy::AnyKeyStops);

        coord.handle_press(CTRL);
        coord.handle_press(P);
        assert!(coord.clicking());

        // Repeats of the starting combo's keys are ignored.
        coord.handle_press(P);
        coord.handle_press(CTRL);
        assert!(coord.clicking());

        // Any other key stops.
        coord.handle_press(X);
        assert!(!coord.clicking());

        coord.shutdown();
    }

    #[test]
    fn test_any_key_stops_forgets_released_combo_keys() {
        let mut coord = coordinator("ctrl+p", None, ClickPolicy::AnyKeyStops);

        coord.handle_press(CTRL);
        coord.handle_press(P);
        assert!(coord.clicking());

        // Once released, p leaves the ignored set; its next press stops.
        coord.handle_release(P);
        coord.handle_press(P);
        assert!(!coord.clicking());

        coord.shutdown();
    }

    #[tokio::test]
    async fn test_run_drains_events_until_exit() {
        let mut coord = coordinator("ctrl+alt+p", Some("ctrl+alt+q"), ClickPolicy::Latch);
        let (tx, rx) = mpsc::channel(16);

        for event in [
            KeyEvent::Pressed(CTRL),
            KeyEvent::Pressed(ALT),
            KeyEvent::Pressed(P),
            KeyEvent::Released(P),
            KeyEvent::Pressed(Q),
        ] {
            tx.send(event).await.unwrap();
        }

        coord.run(rx).await;
        assert!(!coord.clicking());
    }

    #[tokio::test]
    async fn test_run_ends_when_channel_closes() {
        let mut coord = coordinator("ctrl+alt+p", None, ClickPolicy::Latch);
        let (tx, rx) = mpsc::channel(16);
        drop(tx);

        coord.run(rx).await;
        assert!(!coord.clicking());
    }
}
