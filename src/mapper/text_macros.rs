use crate::action::TextMacro;
use crate::keycodes::*;

/// One emission step of a text macro.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Step {
    /// Type an ascii character (shifted where needed).
    Ch(u8),
    /// Tap a raw key, e.g. enter or an arrow.
    Tap(u8),
}

use self::Step::{Ch, Tap};

pub(crate) fn steps(m: TextMacro) -> &'static [Step] {
    match m {
        TextMacro::Backticks => &[
            Ch(b'`'),
            Ch(b'`'),
            Ch(b'`'),
            Tap(KC_ENTER),
            Ch(b'`'),
            Ch(b'`'),
            Ch(b'`'),
            Tap(KC_LEFT),
            Tap(KC_LEFT),
            Tap(KC_LEFT),
        ],
        TextMacro::HomeDir => &[Ch(b'~'), Ch(b'/')],
        TextMacro::Parens => &[Ch(b'('), Ch(b')'), Tap(KC_LEFT)],
        TextMacro::Braces => &[Ch(b'{'), Ch(b'}'), Tap(KC_LEFT)],
        TextMacro::Brackets => &[Ch(b'['), Ch(b']'), Tap(KC_LEFT)],
    }
}

/// Key and shift flag for the ascii characters the macros emit (US layout).
pub(crate) fn ascii_key(ch: u8) -> Option<(u8, bool)> {
    Some(match ch {
        b'`' => (KC_GRAVE, false),
        b'~' => (KC_GRAVE, true),
        b'/' => (KC_SLASH, false),
        b'(' => (KC_9, true),
        b')' => (KC_0, true),
        b'{' => (KC_LBRACKET, true),
        b'}' => (KC_RBRACKET, true),
        b'[' => (KC_LBRACKET, false),
        b']' => (KC_RBRACKET, false),
        _ => return None,
    })
}
