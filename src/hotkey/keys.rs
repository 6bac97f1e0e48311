//! Key identity model and the hotkey alias table
//!
//! Keys are either named (modifiers, navigation, function keys) or a
//! printable character. Named modifiers keep generic plus left/right
//! variants so a combo written as "ctrl" matches whichever control key
//! the user actually holds.

use std::collections::HashSet;

/// A key with a fixed, non-character identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Control,
    ControlLeft,
    ControlRight,
    Alt,
    AltLeft,
    AltRight,
    Shift,
    ShiftLeft,
    ShiftRight,
    Meta,
    MetaLeft,
    MetaRight,
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Pause,
    CapsLock,
    ScrollLock,
    PrintScreen,
    Menu,
    Left,
    Right,
    Up,
    Down,
    /// Function key F1..=F24.
    F(u8),
}

/// Identity of one physical key as seen by matching.
///
/// Character keys carry the character they produce; everything else is
/// a [`NamedKey`]. Value equality and hashing make these usable as set
/// elements everywhere pressed-key state is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    Named(NamedKey),
    Char(char),
}

/// The set of key identities one hotkey token may match.
pub type KeyGroup = HashSet<KeyId>;

fn named(keys: &[NamedKey]) -> KeyGroup {
    keys.iter().copied().map(KeyId::Named).collect()
}

/// Group for a single printable character: its lower/upper pair,
/// collapsing to one element when the character has no case.
pub fn char_group(c: char) -> KeyGroup {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let upper = c.to_uppercase().next().unwrap_or(c);
    let mut group = KeyGroup::new();
    group.insert(KeyId::Char(lower));
    group.insert(KeyId::Char(upper));
    group
}

/// Resolve one hotkey token to the keys it accepts.
///
/// Returns `None` for tokens outside the alias table that are not a
/// function key or a single printable character.
pub fn resolve_token(token: &str) -> Option<KeyGroup> {
    use NamedKey::*;

    let name = token.to_lowercase();

    let group = match name.as_str() {
        "ctrl" | "control" => named(&[Control, ControlLeft, ControlRight]),
        "alt" | "option" => named(&[Alt, AltLeft, AltRight]),
        "shift" => named(&[Shift, ShiftLeft, ShiftRight]),
        "cmd" | "win" | "super" | "meta" => named(&[Meta, MetaLeft, MetaRight]),
        "space" | "spacebar" => named(&[Space]),
        "enter" | "return" => named(&[Enter]),
        "esc" | "escape" => named(&[Escape]),
        "tab" => named(&[Tab]),
        "backspace" => named(&[Backspace]),
        "delete" | "del" => named(&[Delete]),
        "home" => named(&[Home]),
        "end" => named(&[End]),
        "pageup" | "page_up" => named(&[PageUp]),
        "pagedown" | "page_down" => named(&[PageDown]),
        "insert" => named(&[Insert]),
        "pause" | "break" => named(&[Pause]),
        "capslock" | "caps_lock" => named(&[CapsLock]),
        "scrolllock" | "scroll_lock" => named(&[ScrollLock]),
        "printscreen" | "print_screen" => named(&[PrintScreen]),
        "menu" | "apps" => named(&[Menu]),
        "left" => named(&[Left]),
        "right" => named(&[Right]),
        "up" => named(&[Up]),
        "down" => named(&[Down]),
        _ => {
            if let Some(group) = function_key(&name) {
                group
            } else if name.chars().count() == 1 {
                char_group(name.chars().next()?)
            } else {
                return None;
            }
        }
    };

    Some(group)
}

/// Tokens of the form f1..f24.
fn function_key(name: &str) -> Option<KeyGroup> {
    let digits = name.strip_prefix('f')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let number: u8 = digits.parse().ok()?;
    if (1..=24).contains(&number) {
        Some(named(&[NamedKey::F(number)]))
    } else {
        None
    }
}
