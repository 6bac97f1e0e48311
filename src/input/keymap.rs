//! Mapping from rdev key codes to matchable key identities
//!
//! Letter, digit and punctuation keys map to lowercase `Char` ids so
//! press and release of the same physical key always agree, shift or
//! not. Keys rdev cannot name (`Unknown`, the Fn key) are dropped.

use rdev::Key;

use crate::hotkey::{KeyId, NamedKey};

/// Translate an rdev key into a key identity, if it has one.
pub fn key_id(key: Key) -> Option<KeyId> {
    use NamedKey::*;

    let id = match key {
        Key::ControlLeft => KeyId::Named(ControlLeft),
        Key::ControlRight => KeyId::Named(ControlRight),
        Key::Alt => KeyId::Named(AltLeft),
        Key::AltGr => KeyId::Named(AltRight),
        Key::ShiftLeft => KeyId::Named(ShiftLeft),
        Key::ShiftRight => KeyId::Named(ShiftRight),
        Key::MetaLeft => KeyId::Named(MetaLeft),
        Key::MetaRight => KeyId::Named(MetaRight),

        Key::Space => KeyId::Named(Space),
        Key::Return | Key::KpReturn => KeyId::Named(Enter),
        Key::Escape => KeyId::Named(Escape),
        Key::Tab => KeyId::Named(Tab),
        Key::Backspace => KeyId::Named(Backspace),
        Key::Delete | Key::KpDelete => KeyId::Named(Delete),
        Key::Home => KeyId::Named(Home),
        Key::End => KeyId::Named(End),
        Key::PageUp => KeyId::Named(PageUp),
        Key::PageDown => KeyId::Named(PageDown),
        Key::Insert => KeyId::Named(Insert),
        Key::Pause => KeyId::Named(Pause),
        Key::CapsLock => KeyId::Named(CapsLock),
        Key::ScrollLock => KeyId::Named(ScrollLock),
        Key::PrintScreen => KeyId::Named(PrintScreen),
        Key::LeftArrow => KeyId::Named(Left),
        Key::RightArrow => KeyId::Named(Right),
        Key::UpArrow => KeyId::Named(Up),
        Key::DownArrow => KeyId::Named(Down),

        Key::F1 => KeyId::Named(F(1)),
        Key::F2 => KeyId::Named(F(2)),
        Key::F3 => KeyId::Named(F(3)),
        Key::F4 => KeyId::Named(F(4)),
        Key::F5 => KeyId::Named(F(5)),
        Key::F6 => KeyId::Named(F(6)),
        Key::F7 => KeyId::Named(F(7)),
        Key::F8 => KeyId::Named(F(8)),
        Key::F9 => KeyId::Named(F(9)),
        Key::F10 => KeyId::Named(F(10)),
        Key::F11 => KeyId::Named(F(11)),
        Key::F12 => KeyId::Named(F(12)),

        Key::KeyA => KeyId::Char('a'),
        Key::KeyB => KeyId::Char('b'),
        Key::KeyC => KeyId::Char('c'),
        Key::KeyD => KeyId::Char('d'),
        Key::KeyE => KeyId::Char('e'),
        Key::KeyF => KeyId::Char('f'),
        Key::KeyG => KeyId::Char('g'),
        Key::KeyH => KeyId::Char('h'),
        Key::KeyI => KeyId::Char('i'),
        Key::KeyJ => KeyId::Char('j'),
        Key::KeyK => KeyId::Char('k'),
        Key::KeyL => KeyId::Char('l'),
        Key::KeyM => KeyId::Char('m'),
        Key::KeyN => KeyId::Char('n'),
        Key::KeyO => KeyId::Char('o'),
        Key::KeyP => KeyId::Char('p'),
        Key::KeyQ => KeyId::Char('q'),
        Key::KeyR => KeyId::Char('r'),
        Key::KeyS => KeyId::Char('s'),
        Key::KeyT => KeyId::Char('t'),
        Key::KeyU => KeyId::Char('u'),
        Key::KeyV => KeyId::Char('v'),
        Key::KeyW => KeyId::Char('w'),
        Key::KeyX => KeyId::Char('x'),
        Key::KeyY => KeyId::Char('y'),
        Key::KeyZ => KeyId::Char('z'),

        Key::Num0 | Key::Kp0 => KeyId::Char('0'),
        Key::Num1 | Key::Kp1 => KeyId::Char('1'),
        Key::Num2 | Key::Kp2 => KeyId::Char('2'),
        Key::Num3 | Key::Kp3 => KeyId::Char('3'),
        Key::Num4 | Key::Kp4 => KeyId::Char('4'),
        Key::Num5 | Key::Kp5 => KeyId::Char('5'),
        Key::Num6 | Key::Kp6 => KeyId::Char('6'),
        Key::Num7 | Key::Kp7 => KeyId::Char('7'),
        Key::Num8 | Key::Kp8 => KeyId::Char('8'),
        Key::Num9 | Key::Kp9 => KeyId::Char('9'),

        Key::Minus | Key::KpMinus => KeyId::Char('-'),
        Key::Equal => KeyId::Char('='),
        Key::KpPlus => KeyId::Char('+'),
        Key::KpMultiply => KeyId::Char('*'),
        Key::KpDivide | Key::Slash => KeyId::Char('/'),
        Key::LeftBracket => KeyId::Char('['),
        Key::RightBracket => KeyId::Char(']'),
        Key::SemiColon => KeyId::Char(';'),
        Key::Quote => KeyId::Char('\''),
        Key::BackQuote => KeyId::Char('`'),
        Key::BackSlash | Key::IntlBackslash => KeyId::Char('\\'),
        Key::Comma => KeyId::Char(','),
        Key::Dot => KeyId::Char('.'),

        // NumLock, the Fn key and unknown scan codes have no identity.
        _ => return None,
    };

    Some(id)
}
