//! Background click loop
//!
//! Owns a single worker thread that emits left clicks at randomized
//! short intervals until stopped. `stop()` joins the worker before
//! returning, so callers can rely on no click landing afterwards.

use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

/// Lower bound of the randomized delay between clicks, in seconds.
pub const CLICK_INTERVAL_MIN: f64 = 0.02;
/// Upper bound of the randomized delay between clicks, in seconds.
pub const CLICK_INTERVAL_MAX: f64 = 0.03;

/// Mouse buttons the backend can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Errors from the click loop and its backend.
#[derive(Debug, Error)]
pub enum ClickError {
    #[error("failed to inject mouse click: {0}")]
    Inject(String),

    #[error("failed to spawn click worker: {0}")]
    ThreadSpawn(String),
}

/// Something that can synthesize a mouse click at the current pointer
/// position. The loop never reads or moves the pointer itself.
pub trait MouseBackend: Send + Sync {
    fn click(&self, button: MouseButton) -> Result<(), ClickError>;
}

/// Cancellation signal with an interruptible timed wait.
///
/// Raised from the input-event context, observed by the worker. The
/// condvar wait replaces a busy poll: the worker sleeps the full
/// inter-click delay unless woken early by `raise()`.
#[derive(Clone, Default)]
struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn clear(&self) {
        let (lock, _) = &*self.inner;
        *lock.lock().expect("stop signal lock poisoned") = false;
    }

    fn raise(&self) {
        let (lock, cvar) = &*self.inner;
        *lock.lock().expect("stop signal lock poisoned") = true;
        cvar.notify_all();
    }

    fn is_raised(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().expect("stop signal lock poisoned")
    }

    /// Wait up to `timeout` for the signal. Returns true if raised.
    fn wait_timeout(&self, timeout: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let raised = lock.lock().expect("stop signal lock poisoned");
        let (raised, _) = cvar
            .wait_timeout_while(raised, timeout, |raised| !*raised)
            .expect("stop signal lock poisoned");
        *raised
    }
}

/// Handle for starting and stopping the randomized click loop.
///
/// At most one worker exists at a time: `start()` is a no-op while
/// running and `stop()` is a no-op while idle.
pub struct ClickLoop {
    backend: Arc<dyn MouseBackend>,
    stop: StopSignal,
    worker: Option<thread::JoinHandle<()>>,
}

impl ClickLoop {
    pub fn new(backend: Arc<dyn MouseBackend>) -> Self {
        Self {
            backend,
            stop: StopSignal::default(),
            worker: None,
        }
    }

    /// Whether the loop currently has an active worker.
    pub fn clicking(&self) -> bool {
        self.worker.is_some()
    }

    /// Launch the click worker. No-op if already clicking.
    pub fn start(&mut self) -> Result<(), ClickError> {
        if self.worker.is_some() {
            return Ok(());
        }

        self.stop.clear();

        let backend = Arc::clone(&self.backend);
        let stop = self.stop.clone();
        let handle = thread::Builder::new()
            .name("click-loop".to_string())
            .spawn(move || run_loop(backend, stop))
            .map_err(|e| ClickError::ThreadSpawn(e.to_string()))?;

        self.worker = Some(handle);
        debug!("click worker started");
        Ok(())
    }

    /// Stop the click worker and wait for it to exit. No-op if idle.
    ///
    /// Blocks until the worker has observed cancellation; no click is
    /// emitted after this returns. Shutdown latency is bounded by the
    /// inter-click delay.
    pub fn stop(&mut self) {
        let Some(handle) = self.worker.take() else {
            return;
        };

        self.stop.raise();
        if handle.join().is_err() {
            warn!("click worker panicked");
        }
        debug!("click worker stopped");
    }
}

impl Drop for ClickLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(backend: Arc<dyn MouseBackend>, stop: StopSignal) {
    let mut rng = rand::rng();

    loop {
        if stop.is_raised() {
            break;
        }

        if let Err(e) = backend.click(MouseButton::Left) {
            warn!(?e, "click injection failed");
        }

        let delay = rng.random_range(CLICK_INTERVAL_MIN..=CLICK_INTERVAL_MAX);
        if stop.wait_timeout(Duration::from_secs_f64(delay)) {
            break;
        }
    }
}
