//! The j-custom keymap for the Q11: base typing plus a thumb-driven layer
//! cluster. Holding the left space opens Nav; the left home row then
//! retargets the same hold at the app-launcher, window-management, Cursor
//! and lighting layers. Rows are left-packed into the 6x17 matrix, so short
//! physical rows end in dead cells.

use super::{EncoderPair, Keymap, TapDancePair, COLS, ENCODER_COUNT, ROWS, TAP_DANCE_COUNT};
use crate::action::{Action, KeyPlusMod, RgbCommand, TextMacro};
use crate::keycodes::*;
use crate::layout::{Layer, Layer::*, LAYER_COUNT};

type Grid = [[Action; COLS]; ROWS];

const __: Action = Action::Transparent;
const XX: Action = Action::No;

const fn k(key: u8) -> Action {
    Action::Key(key)
}
const fn s(key: u8, modifiers: u8) -> Action {
    Action::Shortcut(KeyPlusMod::new(key, modifiers))
}
const fn c(usage: u16) -> Action {
    Action::Consumer(usage)
}
const fn mo(layer: Layer) -> Action {
    Action::Momentary(layer)
}
const fn tg(layer: Layer) -> Action {
    Action::Toggle(layer)
}
const fn sel(target: Layer) -> Action {
    Action::Selector(target)
}
const fn rgb(command: RgbCommand) -> Action {
    Action::Rgb(command)
}

const SF: u8 = MOD_LSFT;
const LAG: u8 = MOD_LALT | MOD_LGUI;
const LCG: u8 = MOD_LCTL | MOD_LGUI;
const LCA: u8 = MOD_LCTL | MOD_LALT;
const LSCA: u8 = MOD_LSFT | MOD_LCTL | MOD_LALT;
const LCSG: u8 = MOD_LCTL | MOD_LSFT | MOD_LGUI;
const LSAG: u8 = MOD_LSFT | MOD_LALT | MOD_LGUI;
const LCAG: u8 = MOD_LCTL | MOD_LALT | MOD_LGUI;

// Encoder push switches.
const TD_ENC_L: Action = Action::TapDance(0);
const TD_ENC_R: Action = Action::TapDance(1);

// Thumb keys.
const NAV_SPACE: Action = Action::SpaceSelect;
const SYM_SPACE: Action = Action::LayerTap(Sym, KC_SPACE);
const IME_NEXT: Action = Action::ImeNext;

// App launchers; the chords are bound host-side.
const APP_CHATGPT: Action = s(KC_Z, LAG);
const APP_VSCODE: Action = s(KC_V, LAG);
const APP_CAL: Action = s(KC_C, LAG);
const APP_MAIL: Action = s(KC_E, LAG);
const APP_SLACK: Action = s(KC_S, LAG);
const APP_SLACK_ALT: Action = s(KC_6, LAG);
const APP_BGA: Action = s(KC_B, LAG);
const APP_WHATSAPP: Action = s(KC_1, LAG);
const APP_SIGNAL: Action = s(KC_2, LAG);
const APP_WECHAT: Action = s(KC_3, LAG);
const APP_TELEGRAM: Action = s(KC_4, LAG);
const APP_CALC: Action = s(KC_ESC, LAG);
const APP_MUSIC: Action = s(KC_GRAVE, LAG);
const APP_NOTION: Action = s(KC_N, LCSG);
const APP_OBSIDIAN: Action = s(KC_O, LAG);
const APP_FINDER: Action = s(KC_SPACE, LSAG);
const APP_VPN: Action = s(KC_Z, LCAG);

// Window management: halves/maximize, quarters and split view.
const WIN_MAX: Action = s(KC_F, LCSG);
const WIN_LEFT: Action = s(KC_LEFT, LCSG);
const WIN_RIGHT: Action = s(KC_RIGHT, LCSG);
const WIN_TOP: Action = s(KC_UP, LCSG);
const WIN_BOTTOM: Action = s(KC_DOWN, LCSG);
const WIN_TL: Action = s(KC_LEFT, LCA);
const WIN_TR: Action = s(KC_RIGHT, LCA);
const WIN_BL: Action = s(KC_LEFT, LSCA);
const WIN_BR: Action = s(KC_RIGHT, LSCA);
const WIN_SV_L: Action = s(KC_LEFT, LCAG);
const WIN_SV_R: Action = s(KC_RIGHT, LCAG);

// Windows-side shortcuts.
const TASK: Action = s(KC_TAB, MOD_LGUI);
const FLXP: Action = s(KC_E, MOD_LGUI);

const ZOOM_OUT: Action = s(KC_MINUS, MOD_LGUI);
const ZOOM_IN: Action = s(KC_EQUAL, MOD_LGUI);
const ZOOM_RESET: Action = s(KC_0, MOD_LGUI);
const LOCK_SCREEN: Action = s(KC_Q, LCG);

const RM_TOGG: Action = rgb(RgbCommand::Toggle);
const RM_NEXT: Action = rgb(RgbCommand::ModeNext);
const RM_PREV: Action = rgb(RgbCommand::ModePrev);
const RM_VALU: Action = rgb(RgbCommand::ValUp);
const RM_VALD: Action = rgb(RgbCommand::ValDown);
const RM_HUEU: Action = rgb(RgbCommand::HueUp);
const RM_HUED: Action = rgb(RgbCommand::HueDown);
const RM_SATU: Action = rgb(RgbCommand::SatUp);
const RM_SATD: Action = rgb(RgbCommand::SatDown);
const RM_SPDU: Action = rgb(RgbCommand::SpeedUp);
const RM_SPDD: Action = rgb(RgbCommand::SpeedDown);
const RM_FLGN: Action = rgb(RgbCommand::FlagNext);
const RM_FLGP: Action = rgb(RgbCommand::FlagPrev);
const NK_TOGG: Action = Action::NkroToggle;

const MC_BTICKS: Action = Action::Text(TextMacro::Backticks);
const MC_HOMEDIR: Action = Action::Text(TextMacro::HomeDir);
const MC_PARENS: Action = Action::Text(TextMacro::Parens);
const MC_BRACES: Action = Action::Text(TextMacro::Braces);
const MC_BRACKETS: Action = Action::Text(TextMacro::Brackets);

#[rustfmt::skip]
const MAC_BASE: Grid = [
    [TD_ENC_L, k(KC_ESC), c(CU_BRIGHTNESS_DOWN), c(CU_BRIGHTNESS_UP), c(CU_MISSION_CONTROL), c(CU_LAUNCHPAD),
     RM_VALD, RM_VALU, c(CU_PREV_TRACK), c(CU_PLAY_PAUSE), c(CU_NEXT_TRACK), c(CU_MUTE), c(CU_VOL_DOWN),
     c(CU_VOL_UP), k(KC_INSERT), k(KC_DELETE), TD_ENC_R],
    [APP_WHATSAPP, k(KC_GRAVE), k(KC_1), k(KC_2), k(KC_3), k(KC_4), k(KC_5), k(KC_6), k(KC_7), k(KC_8),
     k(KC_9), k(KC_0), k(KC_MINUS), k(KC_EQUAL), k(KC_BSPACE), k(KC_PGUP), XX],
    [APP_WECHAT, k(KC_TAB), k(KC_Q), k(KC_W), k(KC_E), k(KC_R), k(KC_T), k(KC_Y), k(KC_U), k(KC_I),
     k(KC_O), k(KC_P), k(KC_LBRACKET), k(KC_RBRACKET), k(KC_BSLASH), k(KC_PGDOWN), XX],
    [APP_SLACK_ALT, k(KC_CAPSLOCK), k(KC_A), k(KC_S), k(KC_D), k(KC_F), k(KC_G), k(KC_H), k(KC_J),
     k(KC_K), k(KC_L), k(KC_SCOLON), k(KC_QUOTE), k(KC_ENTER), k(KC_HOME), XX, XX],
    [APP_CHATGPT, k(KC_LSHIFT), k(KC_Z), k(KC_X), k(KC_C), k(KC_V), k(KC_B), k(KC_N), k(KC_M),
     k(KC_COMMA), k(KC_DOT), k(KC_SLASH), k(KC_RSHIFT), k(KC_UP), XX, XX, XX],
    [APP_VPN, IME_NEXT, k(KC_LCTRL), k(KC_LALT), k(KC_LGUI), NAV_SPACE, SYM_SPACE, k(KC_RGUI),
     k(KC_RCTRL), mo(MacFn), k(KC_LEFT), k(KC_DOWN), k(KC_RIGHT), XX, XX, XX, XX],
];

#[rustfmt::skip]
const NAV: Grid = [
    [__; COLS],
    [__; COLS],
    [__, __, tg(Win), tg(MacFn), tg(WinBase), tg(WinFn), __, __, __, __, __, __, __, __, __, __, XX],
    [__, __, sel(App), sel(Win), sel(App), sel(Cursor), sel(Lighting), tg(Numpad),
     __, __, __, __, __, __, __, XX, XX],
    [__; COLS],
    [__, __, __, __, mo(Nav), __, __, __, __, __, __, __, __, XX, XX, XX, XX],
];

#[rustfmt::skip]
const SYM: Grid = [
    [__; COLS],
    [__, __, s(KC_1, SF), s(KC_2, SF), s(KC_3, SF), s(KC_4, SF), s(KC_5, SF), s(KC_6, SF), s(KC_7, SF),
     s(KC_8, SF), s(KC_9, SF), s(KC_0, SF), s(KC_MINUS, SF), s(KC_EQUAL, SF), __, __, XX],
    [__, __, __, __, __, __, __, __, __, __, __, __,
     s(KC_LBRACKET, SF), s(KC_RBRACKET, SF), s(KC_BSLASH, SF), __, XX],
    [__, __, __, __, __, MC_HOMEDIR, __, MC_BTICKS, MC_PARENS, MC_BRACES, MC_BRACKETS,
     s(KC_SCOLON, SF), s(KC_QUOTE, SF), __, __, XX, XX],
    [__, __, __, __, __, __, __, __, __, s(KC_COMMA, SF), s(KC_DOT, SF), s(KC_SLASH, SF),
     __, __, XX, XX, XX],
    [__, __, __, __, __, __, __, mo(Sym), __, __, __, __, __, XX, XX, XX, XX],
];

#[rustfmt::skip]
const CURSOR: Grid = [
    [__; COLS],
    [__; COLS],
    [__, __, __, __, __, __, __, s(KC_B, MOD_LGUI), s(KC_T, MOD_LGUI), s(KC_I, MOD_LGUI),
     s(KC_DOT, MOD_LGUI), __, __, __, __, __, XX],
    [__; COLS],
    [__; COLS],
    [__, __, __, __, __, mo(Nav), __, __, __, __, __, __, __, XX, XX, XX, XX],
];

#[rustfmt::skip]
const APP: Grid = [
    [__, APP_CALC, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __],
    [__, APP_MUSIC, __, __, __, __, __, __, __, __, __, __, __, __, __, __, XX],
    [__, __, __, __, APP_MAIL, __, __, __, __, __, APP_OBSIDIAN, __, __, __, __, __, XX],
    [__, __, __, APP_SLACK, __, __, __, __, APP_WHATSAPP, APP_SIGNAL, APP_WECHAT, APP_TELEGRAM,
     __, __, __, XX, XX],
    [__, __, APP_CHATGPT, __, APP_CAL, APP_VSCODE, APP_BGA, APP_NOTION, __, __, __, __, __, __,
     XX, XX, XX],
    [__, __, __, __, __, mo(Nav), APP_FINDER, __, __, __, __, __, __, XX, XX, XX, XX],
];

#[rustfmt::skip]
const WIN: Grid = [
    [__; COLS],
    [__; COLS],
    [__, __, WIN_TL, WIN_TR, __, __, __, __, __, __, __, __, __, __, __, __, XX],
    [__, __, WIN_BL, WIN_BR, __, WIN_MAX, __, __, __, __, __, __, __, __, __, XX, XX],
    [__, __, WIN_SV_L, WIN_SV_R, __, __, __, __, __, __, __, __, __, WIN_TOP, XX, XX, XX],
    [__, __, __, __, __, mo(Nav), __, __, __, __, WIN_LEFT, WIN_BOTTOM, WIN_RIGHT, XX, XX, XX, XX],
];

#[rustfmt::skip]
const MAC_FN: Grid = [
    [TD_ENC_L, __, k(KC_F1), k(KC_F2), k(KC_F3), k(KC_F4), k(KC_F5), k(KC_F6), k(KC_F7), k(KC_F8),
     k(KC_F9), k(KC_F10), k(KC_F11), k(KC_F12), __, __, TD_ENC_R],
    [__; COLS],
    [__, RM_TOGG, RM_NEXT, RM_VALU, RM_HUEU, RM_SATU, RM_SPDU, __, __, __, __, __, __, __, __, __, XX],
    [__, __, RM_PREV, RM_VALD, RM_HUED, RM_SATD, RM_SPDD, __, __, __, __, __, __, __, __, XX, XX],
    [__, __, __, __, __, __, __, NK_TOGG, __, __, __, __, __, __, XX, XX, XX],
    [__, __, __, __, __, mo(Nav), __, __, __, __, __, __, __, XX, XX, XX, XX],
];

#[rustfmt::skip]
const WIN_BASE: Grid = [
    [TD_ENC_L, k(KC_ESC), k(KC_F1), k(KC_F2), k(KC_F3), k(KC_F4), k(KC_F5), k(KC_F6), k(KC_F7),
     k(KC_F8), k(KC_F9), k(KC_F10), k(KC_F11), k(KC_F12), k(KC_INSERT), k(KC_DELETE), TD_ENC_R],
    [__, k(KC_GRAVE), k(KC_1), k(KC_2), k(KC_3), k(KC_4), k(KC_5), k(KC_6), k(KC_7), k(KC_8),
     k(KC_9), k(KC_0), k(KC_MINUS), k(KC_EQUAL), k(KC_BSPACE), k(KC_PGUP), XX],
    [__, k(KC_TAB), k(KC_Q), k(KC_W), k(KC_E), k(KC_R), k(KC_T), k(KC_Y), k(KC_U), k(KC_I),
     k(KC_O), k(KC_P), k(KC_LBRACKET), k(KC_RBRACKET), k(KC_BSLASH), k(KC_PGDOWN), XX],
    [__, k(KC_CAPSLOCK), k(KC_A), k(KC_S), k(KC_D), k(KC_F), k(KC_G), k(KC_H), k(KC_J), k(KC_K),
     k(KC_L), k(KC_SCOLON), k(KC_QUOTE), k(KC_ENTER), k(KC_HOME), XX, XX],
    [__, k(KC_LSHIFT), k(KC_Z), k(KC_X), k(KC_C), k(KC_V), k(KC_B), k(KC_N), k(KC_M), k(KC_COMMA),
     k(KC_DOT), k(KC_SLASH), k(KC_RSHIFT), k(KC_UP), XX, XX, XX],
    [__, k(KC_LCTRL), k(KC_LGUI), k(KC_LALT), mo(WinFn), mo(Nav), k(KC_SPACE), k(KC_RALT),
     mo(WinFn), k(KC_RCTRL), k(KC_LEFT), k(KC_DOWN), k(KC_RIGHT), XX, XX, XX, XX],
];

#[rustfmt::skip]
const WIN_FN: Grid = [
    [TD_ENC_L, __, c(CU_BRIGHTNESS_DOWN), c(CU_BRIGHTNESS_UP), TASK, FLXP, RM_VALD, RM_VALU,
     c(CU_PREV_TRACK), c(CU_PLAY_PAUSE), c(CU_NEXT_TRACK), c(CU_MUTE), c(CU_VOL_DOWN),
     c(CU_VOL_UP), __, __, TD_ENC_R],
    [__; COLS],
    [__, RM_TOGG, RM_NEXT, RM_VALU, RM_HUEU, RM_SATU, RM_SPDU, __, __, __, __, __, __, __, __, __, XX],
    [__, __, RM_PREV, RM_VALD, RM_HUED, RM_SATD, RM_SPDD, __, __, __, __, __, __, __, __, XX, XX],
    [__, __, __, __, __, __, __, NK_TOGG, __, __, __, __, __, __, XX, XX, XX],
    [__, __, __, __, __, mo(Nav), __, __, __, __, __, __, __, XX, XX, XX, XX],
];

#[rustfmt::skip]
const LIGHTING: Grid = [
    [__; COLS],
    [__; COLS],
    [__, __, RM_TOGG, RM_NEXT, RM_PREV, __, __, __, __, __, __, __, __, __, __, __, XX],
    [__, __, RM_VALU, RM_VALD, RM_HUEU, RM_HUED, __, __, __, __, __, __, __, __, __, XX, XX],
    [__, __, RM_SATU, RM_SATD, RM_SPDU, RM_SPDD, RM_FLGN, RM_FLGP, __, __, __, __, __, __, XX, XX, XX],
    [__, __, __, __, __, mo(Nav), __, __, __, __, __, __, __, XX, XX, XX, XX],
];

#[rustfmt::skip]
const NUMPAD: Grid = [
    [TD_ENC_L, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, TD_ENC_R],
    [__, __, __, __, __, __, __, __, k(KC_KP_7), k(KC_KP_8), k(KC_KP_9), k(KC_KP_SLASH),
     __, __, __, __, XX],
    [__, __, __, __, __, __, __, __, k(KC_KP_4), k(KC_KP_5), k(KC_KP_6), k(KC_KP_ASTERISK),
     __, __, __, __, XX],
    [__, __, __, __, __, __, __, __, k(KC_KP_1), k(KC_KP_2), k(KC_KP_3), k(KC_KP_MINUS),
     __, __, __, XX, XX],
    [__, __, __, __, __, __, __, __, k(KC_KP_0), k(KC_KP_DOT), k(KC_KP_PLUS), k(KC_KP_ENTER),
     __, __, XX, XX, XX],
    [__, __, __, __, __, mo(Nav), k(KC_KP_ENTER), __, __, __, __, __, __, XX, XX, XX, XX],
];

// Volume on the left ring, zoom on the right, identical on every layer.
const ENC: [EncoderPair; ENCODER_COUNT] = [
    EncoderPair::new(c(CU_VOL_DOWN), c(CU_VOL_UP)),
    EncoderPair::new(ZOOM_OUT, ZOOM_IN),
];

const TAP_DANCES: [TapDancePair; TAP_DANCE_COUNT] = [
    // Left encoder press: mute, or return to base when doubled.
    TapDancePair { single: c(CU_MUTE), double: Action::ReturnToBase },
    // Right encoder press: zoom reset, or lock screen when doubled.
    TapDancePair { single: ZOOM_RESET, double: LOCK_SCREEN },
];

/// Primary variant: A and D both select the app layer.
pub static KEYMAP: Keymap<ROWS, COLS> = Keymap {
    layers: [
        MAC_BASE, NAV, SYM, CURSOR, APP, WIN, MAC_FN, WIN_BASE, WIN_FN, LIGHTING, NUMPAD,
    ],
    encoders: [ENC; LAYER_COUNT],
    tap_dances: TAP_DANCES,
};

const fn nav_alt() -> Grid {
    let mut grid = NAV;
    grid[3][2] = __;
    grid
}

/// Alternate variant: A stays a plain letter while Nav is held; only D
/// selects the app layer.
pub static KEYMAP_ALT: Keymap<ROWS, COLS> = Keymap {
    layers: [
        MAC_BASE, nav_alt(), SYM, CURSOR, APP, WIN, MAC_FN, WIN_BASE, WIN_FN, LIGHTING, NUMPAD,
    ],
    encoders: [ENC; LAYER_COUNT],
    tap_dances: TAP_DANCES,
};
