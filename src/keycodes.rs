//! HID usage ids and modifier masks used by the keymap tables.
//!
//! Basic keys are usages from the keyboard/keypad page (0x07), consumer
//! usages (`CU_*`) come from the consumer page (0x0C).

pub const KC_A: u8 = 0x04;
pub const KC_B: u8 = 0x05;
pub const KC_C: u8 = 0x06;
pub const KC_D: u8 = 0x07;
pub const KC_E: u8 = 0x08;
pub const KC_F: u8 = 0x09;
pub const KC_G: u8 = 0x0a;
pub const KC_H: u8 = 0x0b;
pub const KC_I: u8 = 0x0c;
pub const KC_J: u8 = 0x0d;
pub const KC_K: u8 = 0x0e;
pub const KC_L: u8 = 0x0f;
pub const KC_M: u8 = 0x10;
pub const KC_N: u8 = 0x11;
pub const KC_O: u8 = 0x12;
pub const KC_P: u8 = 0x13;
pub const KC_Q: u8 = 0x14;
pub const KC_R: u8 = 0x15;
pub const KC_S: u8 = 0x16;
pub const KC_T: u8 = 0x17;
pub const KC_U: u8 = 0x18;
pub const KC_V: u8 = 0x19;
pub const KC_W: u8 = 0x1a;
pub const KC_X: u8 = 0x1b;
pub const KC_Y: u8 = 0x1c;
pub const KC_Z: u8 = 0x1d;

pub const KC_1: u8 = 0x1e;
pub const KC_2: u8 = 0x1f;
pub const KC_3: u8 = 0x20;
pub const KC_4: u8 = 0x21;
pub const KC_5: u8 = 0x22;
pub const KC_6: u8 = 0x23;
pub const KC_7: u8 = 0x24;
pub const KC_8: u8 = 0x25;
pub const KC_9: u8 = 0x26;
pub const KC_0: u8 = 0x27;

pub const KC_ENTER: u8 = 0x28;
pub const KC_ESC: u8 = 0x29;
pub const KC_BSPACE: u8 = 0x2a;
pub const KC_TAB: u8 = 0x2b;
pub const KC_SPACE: u8 = 0x2c;
pub const KC_MINUS: u8 = 0x2d;
pub const KC_EQUAL: u8 = 0x2e;
pub const KC_LBRACKET: u8 = 0x2f;
pub const KC_RBRACKET: u8 = 0x30;
pub const KC_BSLASH: u8 = 0x31;
pub const KC_SCOLON: u8 = 0x33;
pub const KC_QUOTE: u8 = 0x34;
pub const KC_GRAVE: u8 = 0x35;
pub const KC_COMMA: u8 = 0x36;
pub const KC_DOT: u8 = 0x37;
pub const KC_SLASH: u8 = 0x38;
pub const KC_CAPSLOCK: u8 = 0x39;

pub const KC_F1: u8 = 0x3a;
pub const KC_F2: u8 = 0x3b;
pub const KC_F3: u8 = 0x3c;
pub const KC_F4: u8 = 0x3d;
pub const KC_F5: u8 = 0x3e;
pub const KC_F6: u8 = 0x3f;
pub const KC_F7: u8 = 0x40;
pub const KC_F8: u8 = 0x41;
pub const KC_F9: u8 = 0x42;
pub const KC_F10: u8 = 0x43;
pub const KC_F11: u8 = 0x44;
pub const KC_F12: u8 = 0x45;

pub const KC_INSERT: u8 = 0x49;
pub const KC_HOME: u8 = 0x4a;
pub const KC_PGUP: u8 = 0x4b;
pub const KC_DELETE: u8 = 0x4c;
pub const KC_END: u8 = 0x4d;
pub const KC_PGDOWN: u8 = 0x4e;
pub const KC_RIGHT: u8 = 0x4f;
pub const KC_LEFT: u8 = 0x50;
pub const KC_DOWN: u8 = 0x51;
pub const KC_UP: u8 = 0x52;

pub const KC_KP_SLASH: u8 = 0x54;
pub const KC_KP_ASTERISK: u8 = 0x55;
pub const KC_KP_MINUS: u8 = 0x56;
pub const KC_KP_PLUS: u8 = 0x57;
pub const KC_KP_ENTER: u8 = 0x58;
pub const KC_KP_1: u8 = 0x59;
pub const KC_KP_2: u8 = 0x5a;
pub const KC_KP_3: u8 = 0x5b;
pub const KC_KP_4: u8 = 0x5c;
pub const KC_KP_5: u8 = 0x5d;
pub const KC_KP_6: u8 = 0x5e;
pub const KC_KP_7: u8 = 0x5f;
pub const KC_KP_8: u8 = 0x60;
pub const KC_KP_9: u8 = 0x61;
pub const KC_KP_0: u8 = 0x62;
pub const KC_KP_DOT: u8 = 0x63;

/// Hangul/English toggle; macOS sends it for some locale-switch setups.
pub const KC_LANG1: u8 = 0x90;

pub const KC_LCTRL: u8 = 0xe0;
pub const KC_LSHIFT: u8 = 0xe1;
pub const KC_LALT: u8 = 0xe2;
pub const KC_LGUI: u8 = 0xe3;
pub const KC_RCTRL: u8 = 0xe4;
pub const KC_RSHIFT: u8 = 0xe5;
pub const KC_RALT: u8 = 0xe6;
pub const KC_RGUI: u8 = 0xe7;

/// Modifier masks matching the HID boot-report modifier byte.
pub const MOD_LCTL: u8 = 0x01;
pub const MOD_LSFT: u8 = 0x02;
pub const MOD_LALT: u8 = 0x04;
pub const MOD_LGUI: u8 = 0x08;
pub const MOD_RCTL: u8 = 0x10;
pub const MOD_RSFT: u8 = 0x20;
pub const MOD_RALT: u8 = 0x40;
pub const MOD_RGUI: u8 = 0x80;

pub const CU_BRIGHTNESS_UP: u16 = 0x6f;
pub const CU_BRIGHTNESS_DOWN: u16 = 0x70;
pub const CU_NEXT_TRACK: u16 = 0xb5;
pub const CU_PREV_TRACK: u16 = 0xb6;
pub const CU_PLAY_PAUSE: u16 = 0xcd;
pub const CU_MUTE: u16 = 0xe2;
pub const CU_VOL_UP: u16 = 0xe9;
pub const CU_VOL_DOWN: u16 = 0xea;
pub const CU_MISSION_CONTROL: u16 = 0x29f;
pub const CU_LAUNCHPAD: u16 = 0x2a0;
