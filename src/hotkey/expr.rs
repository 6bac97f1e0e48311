//! Hotkey expression parsing and matching
//!
//! A hotkey is written as "+"-separated tokens ("ctrl+alt+p"). Each
//! token resolves to a group of acceptable key identities; the combo
//! matches when every group intersects the set of currently held keys.

use std::collections::HashSet;

use thiserror::Error;

use super::keys::{resolve_token, KeyGroup, KeyId};

/// Errors raised when a hotkey string cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyParseError {
    #[error("hotkey cannot be empty")]
    Empty,

    #[error("empty key token in hotkey")]
    EmptyToken,

    #[error("unknown key token: {0}")]
    UnknownToken(String),
}

/// A parsed hotkey combination.
///
/// Display parts are kept separately from the key groups: `describe()`
/// is cosmetic and plays no role in matching.
#[derive(Debug, Clone)]
pub struct Hotkey {
    groups: Vec<KeyGroup>,
    display: Vec<String>,
}

impl Hotkey {
    /// Parse a combo string like "ctrl+alt+p".
    ///
    /// Tokens are trimmed and case-insensitive. An empty combo or an
    /// empty token (as in "ctrl+" or "+") is rejected.
    pub fn parse(combo: &str) -> Result<Self, HotkeyParseError> {
        if combo.trim().is_empty() {
            return Err(HotkeyParseError::Empty);
        }

        let mut groups = Vec::new();
        let mut display = Vec::new();
        for part in combo.split('+').map(str::trim) {
            if part.is_empty() {
                return Err(HotkeyParseError::EmptyToken);
            }
            let group = resolve_token(part)
                .ok_or_else(|| HotkeyParseError::UnknownToken(part.to_string()))?;
            groups.push(group);
            display.push(part.to_uppercase());
        }

        Ok(Self { groups, display })
    }

    /// True when every token group has at least one key held.
    pub fn matches(&self, pressed: &HashSet<KeyId>) -> bool {
        self.groups.iter().all(|group| !group.is_disjoint(pressed))
    }

    /// Human-readable form, e.g. "CTRL + ALT + P". Display only.
    pub fn describe(&self) -> String {
        self.display.join(" + ")
    }

    /// Number of token groups in the combo.
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}
