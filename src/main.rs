//! hotclick: hotkey-driven auto clicker
//!
//! Listens for global keyboard events, toggles a background loop that
//! emits left clicks at randomized 20-30ms intervals when the toggle
//! hotkey fires, and exits on the exit hotkey or ctrl-c. Every exit
//! path stops the click worker before the process ends.

mod cli;
mod clicker;
mod coordinator;
mod hotkey;
mod input;
mod lifecycle;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Config};
use crate::clicker::ClickLoop;
use crate::coordinator::InputCoordinator;
use crate::input::{KeyListener, SystemMouse};
use crate::lifecycle::ShutdownSignal;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_args(&args);
    info!(toggle = %config.toggle.describe(), policy = ?config.policy, "configuration loaded");

    let shutdown = ShutdownSignal::new();

    // Key listener -> coordinator
    let (key_tx, key_rx) = mpsc::channel(64);

    let listener = KeyListener::new(key_tx);
    listener
        .start()
        .context("failed to start global key listener")?;

    let clicker = ClickLoop::new(Arc::new(SystemMouse));
    let mut coordinator = InputCoordinator::new(
        config.toggle.clone(),
        config.exit.clone(),
        config.policy,
        clicker,
    );

    println!(
        "Press {} to start or stop auto-clicking.",
        config.toggle.describe()
    );
    if let Some(exit) = &config.exit {
        println!("Press {} to exit the program.", exit.describe());
    }
    println!("Press CTRL+C in the terminal to exit as well.");

    tokio::select! {
        _ = coordinator.run(key_rx) => {
            info!("coordinator exited");
        }
        _ = shutdown.wait() => {
            info!("shutdown signal received");
        }
    }

    // Never leave a clicking worker behind, whichever path got us here.
    coordinator.shutdown();
    listener.stop();

    println!("Exiting.");
    Ok(())
}
