use embassy_sync::blocking_mutex::raw::NoopRawMutex;

use super::*;
use crate::keymap::j_custom;

extern crate std;

macro_rules! setup {
    ($t:ident, $press:ident, $assert_read:ident, $x:block) => {
        setup!(KM & j_custom::KEYMAP, $t, $press, $assert_read, $x);
    };
    (KM $km:expr, $t:ident, $press:ident, $assert_read:ident, $x:block) => {{
        let mapper_channel = MapperChannel::default();
        let mut $t = Mapper::<6, 17, NoopRawMutex, 32>::new($km, &mapper_channel, Timing::default());

        macro_rules! $assert_read {
            (NONE) => {{
                if let Some(ans) = mapper_channel.try_receive() {
                    assert!(false, "Unexpected key event {:?}", ans);
                }
            }};
            (E $e:expr) => {{
                if let Some(ans) = mapper_channel.try_receive() {
                    assert_eq!(ans, $e);
                } else {
                    assert!(false, "Expected key event");
                }
            }};
        }
        macro_rules! $press {
            ($row_idx:expr, $column_idx:expr, TAP $at:expr) => {{
                $press!($row_idx, $column_idx, true, $at);
                $press!($row_idx, $column_idx, false, $at);
            }};
            ($row_idx:expr, $column_idx:expr, $is_down:expr, $at:expr) => {{
                let key = ScanKey::new($row_idx, $column_idx, $is_down);
                $t.key_switch(TimedScanKey(key, $at))
            }};
        }

        $x;
    }};
}

#[test]
fn plain_key_forwards() {
    setup!(t, press, assert_read, {
        assert!(press!(3, 2, true, 0));
        t.forward_key(ScanKey::new(3, 2, true));
        assert_read!(E KeyEvent::Basic(KC_A, true));

        assert!(press!(3, 2, false, 15));
        t.forward_key(ScanKey::new(3, 2, false));
        assert_read!(E KeyEvent::Basic(KC_A, false));
        assert_read!(NONE);
    });
}

#[test]
fn shortcut_forwards_as_modifiers_plus_key() {
    setup!(t, press, assert_read, {
        // ChatGPT launcher on the base layer's left column.
        assert!(press!(4, 0, true, 0));
        t.forward_key(ScanKey::new(4, 0, true));
        assert_read!(E KeyEvent::Modifiers(MOD_LALT | MOD_LGUI, true));
        assert_read!(E KeyEvent::Basic(KC_Z, true));

        assert!(press!(4, 0, false, 30));
        t.forward_key(ScanKey::new(4, 0, false));
        assert_read!(E KeyEvent::Basic(KC_Z, false));
        assert_read!(E KeyEvent::Modifiers(MOD_LALT | MOD_LGUI, false));
        assert_read!(NONE);
    });
}

#[test]
fn consumer_forwards_with_zero_release() {
    setup!(t, press, assert_read, {
        assert!(press!(0, 11, true, 0));
        t.forward_key(ScanKey::new(0, 11, true));
        assert_read!(E KeyEvent::Consumer(CU_MUTE));

        assert!(press!(0, 11, false, 20));
        t.forward_key(ScanKey::new(0, 11, false));
        assert_read!(E KeyEvent::Consumer(0));
        assert_read!(NONE);
    });
}

#[test]
fn space_tap_emits_space() {
    setup!(t, press, assert_read, {
        assert!(!press!(5, 5, true, 0));
        assert!(t.layout.is_active(Layer::Nav));
        assert_read!(NONE);

        assert!(!press!(5, 5, false, 120));
        assert!(!t.layout.is_active(Layer::Nav));
        assert_read!(E KeyEvent::Basic(KC_SPACE, true));
        assert_read!(E KeyEvent::Basic(KC_SPACE, false));
        assert_read!(NONE);
    });
}

#[test]
fn space_hold_emits_nothing() {
    setup!(t, press, assert_read, {
        press!(5, 5, true, 0);
        press!(5, 5, false, 250);
        assert!(!t.layout.is_active(Layer::Nav));
        assert_read!(NONE);
    });
}

#[test]
fn space_tap_survives_clock_wraparound() {
    setup!(t, press, assert_read, {
        press!(5, 5, true, 0xfff0);
        press!(5, 5, false, 0x0010);
        assert_read!(E KeyEvent::Basic(KC_SPACE, true));
        assert_read!(E KeyEvent::Basic(KC_SPACE, false));
    });
}

#[test]
fn selector_retargets_thumb_hold() {
    setup!(t, press, assert_read, {
        press!(5, 5, true, 0);
        assert!(t.layout.is_active(Layer::Nav));

        // D key selects the app layer while Nav is held.
        assert!(!press!(3, 4, true, 20));
        assert!(!t.layout.is_active(Layer::Nav));
        assert!(t.layout.is_active(Layer::App));
        assert_eq!(t.space.target(), Layer::App);
        press!(3, 4, false, 60);

        // App-layer binding now resolves under the same hold.
        assert!(press!(4, 5, true, 80));
        t.forward_key(ScanKey::new(4, 5, true));
        assert_read!(E KeyEvent::Modifiers(MOD_LALT | MOD_LGUI, true));
        assert_read!(E KeyEvent::Basic(KC_V, true));
        press!(4, 5, false, 110);

        // Held past the tapping term: no space, everything drops.
        press!(5, 5, false, 400);
        assert!(!t.layout.is_active(Layer::App));
        assert_eq!(t.space.target(), Layer::Nav);

        // The choice was one-shot; the next hold opens Nav again.
        press!(5, 5, true, 500);
        assert!(t.layout.is_active(Layer::Nav));
        assert!(!t.layout.is_active(Layer::App));
    });
}

#[test]
fn selector_only_works_while_nav_is_active() {
    setup!(t, press, assert_read, {
        press!(5, 5, true, 0);
        press!(3, 4, TAP 20); // Nav -> App

        // F falls through to the base letter now, not the Cursor selector.
        assert!(press!(3, 5, true, 50));
        assert_eq!(t.space.target(), Layer::App);
        assert!(!t.layout.is_active(Layer::Cursor));
        press!(3, 5, false, 80);
        press!(5, 5, false, 300);
        assert_read!(NONE);
    });
}

#[test]
fn numpad_toggle_outlives_the_thumb_hold() {
    setup!(t, press, assert_read, {
        press!(5, 5, true, 0);
        press!(3, 7, TAP 20); // H toggles the numpad
        press!(5, 5, false, 300);
        assert!(t.layout.is_active(Layer::Numpad));

        assert!(press!(1, 8, true, 400));
        t.forward_key(ScanKey::new(1, 8, true));
        assert_read!(E KeyEvent::Basic(KC_KP_7, true));
        press!(1, 8, false, 430);

        // A second pass through Nav+H turns it back off.
        press!(5, 5, true, 500);
        press!(3, 7, TAP 520);
        press!(5, 5, false, 800);
        assert!(!t.layout.is_active(Layer::Numpad));
    });
}

#[test]
fn window_layer_toggle_via_nav_q() {
    setup!(t, press, assert_read, {
        press!(5, 5, true, 0);
        press!(2, 2, TAP 20); // Q toggles the window layer above Nav
        assert!(t.layout.is_active(Layer::Win));

        // F is maximize while the overlay is up.
        assert!(press!(3, 5, true, 50));
        t.forward_key(ScanKey::new(3, 5, true));
        assert_read!(E KeyEvent::Modifiers(MOD_LCTL | MOD_LSFT | MOD_LGUI, true));
        assert_read!(E KeyEvent::Basic(KC_F, true));
        press!(3, 5, false, 80);

        // The thumb release clears the window layer along with Nav.
        press!(5, 5, false, 300);
        assert!(!t.layout.is_active(Layer::Win));
        assert!(!t.layout.is_active(Layer::Nav));
    });
}

#[test]
fn return_to_base_converges_from_any_state() {
    setup!(t, press, assert_read, {
        press!(5, 5, true, 0);
        press!(2, 2, TAP 10); // toggle Win
        press!(3, 7, TAP 20); // toggle Numpad
        press!(3, 6, true, 30); // G selects lighting
        assert!(t.layout.is_active(Layer::Lighting));

        t.return_to_base();

        for layer in [
            Layer::Nav,
            Layer::Sym,
            Layer::Cursor,
            Layer::App,
            Layer::Win,
            Layer::MacFn,
            Layer::WinBase,
            Layer::WinFn,
            Layer::Lighting,
            Layer::Numpad,
        ] {
            assert!(!t.layout.is_active(layer), "{:?} still active", layer);
        }
        assert!(t.layout.is_active(Layer::MacBase));
        assert_eq!(t.space.target(), Layer::Nav);
        assert_read!(NONE);
    });
}

#[test]
fn left_encoder_single_press_mutes_after_window() {
    setup!(t, press, assert_read, {
        press!(0, 0, TAP 0);
        assert_read!(NONE);

        t.check_time(100);
        assert_read!(NONE);

        t.check_time(210);
        assert_read!(E KeyEvent::Consumer(CU_MUTE));
        assert_read!(E KeyEvent::Consumer(0));
        assert_read!(NONE);
    });
}

#[test]
fn left_encoder_double_press_returns_to_base() {
    setup!(t, press, assert_read, {
        press!(5, 5, true, 0);
        press!(2, 3, TAP 10); // W toggles the fn layer, which outlives the hold
        press!(5, 5, false, 300);
        assert!(t.layout.is_active(Layer::MacFn));

        press!(0, 0, TAP 400);
        press!(0, 0, true, 460);
        assert!(!t.layout.is_active(Layer::MacFn));
        assert!(t.layout.is_active(Layer::MacBase));
        press!(0, 0, false, 490);

        // No single tap fires afterwards.
        t.check_time(900);
        assert_read!(NONE);
    });
}

#[test]
fn tap_dance_resolves_single_when_interrupted() {
    setup!(t, press, assert_read, {
        press!(0, 0, TAP 0);
        assert_read!(NONE);

        // A different key inside the window flushes the pending single.
        assert!(press!(0, 1, true, 50));
        assert_read!(E KeyEvent::Consumer(CU_MUTE));
        assert_read!(E KeyEvent::Consumer(0));
        t.forward_key(ScanKey::new(0, 1, true));
        assert_read!(E KeyEvent::Basic(KC_ESC, true));
        assert_read!(NONE);
    });
}

#[test]
fn right_encoder_single_press_resets_zoom() {
    setup!(t, press, assert_read, {
        press!(0, 16, TAP 0);
        t.check_time(250);
        assert_read!(E KeyEvent::Modifiers(MOD_LGUI, true));
        assert_read!(E KeyEvent::Basic(KC_0, true));
        assert_read!(E KeyEvent::Basic(KC_0, false));
        assert_read!(E KeyEvent::Modifiers(MOD_LGUI, false));
        assert_read!(NONE);
    });
}

#[test]
fn right_encoder_double_press_locks_screen() {
    setup!(t, press, assert_read, {
        press!(0, 16, TAP 0);
        press!(0, 16, true, 80);
        assert_read!(E KeyEvent::Modifiers(MOD_LCTL | MOD_LGUI, true));
        assert_read!(E KeyEvent::Basic(KC_Q, true));
        assert_read!(E KeyEvent::Basic(KC_Q, false));
        assert_read!(E KeyEvent::Modifiers(MOD_LCTL | MOD_LGUI, false));
        press!(0, 16, false, 120);
        assert_read!(NONE);
    });
}

#[test]
fn stored_lang1_on_left_gui_position_is_remapped() {
    setup!(t, press, assert_read, {
        t.set_override(Layer::MacBase, 5, 4, Action::Key(KC_LANG1));

        assert!(!press!(5, 4, true, 0));
        assert_read!(E KeyEvent::Basic(KC_LGUI, true));
        assert!(!press!(5, 4, false, 40));
        assert_read!(E KeyEvent::Basic(KC_LGUI, false));
        assert_read!(NONE);
    });
}

#[test]
fn stored_lang1_elsewhere_forwards_untouched() {
    setup!(t, press, assert_read, {
        t.set_override(Layer::MacBase, 5, 7, Action::Key(KC_LANG1));

        assert!(press!(5, 7, true, 0));
        t.forward_key(ScanKey::new(5, 7, true));
        assert_read!(E KeyEvent::Basic(KC_LANG1, true));
    });
}

#[test]
fn ime_next_taps_ctrl_space() {
    setup!(t, press, assert_read, {
        assert!(!press!(5, 1, true, 0));
        assert_read!(E KeyEvent::Modifiers(MOD_LCTL, true));
        assert_read!(E KeyEvent::Basic(KC_SPACE, true));
        assert_read!(E KeyEvent::Basic(KC_SPACE, false));
        assert_read!(E KeyEvent::Modifiers(MOD_LCTL, false));

        assert!(!press!(5, 1, false, 40));
        assert_read!(NONE);
    });
}

#[test]
fn right_space_holds_symbols_and_taps_space() {
    setup!(t, press, assert_read, {
        press!(5, 6, true, 0);
        assert!(t.layout.is_active(Layer::Sym));

        // J plays the parentheses macro while held.
        assert!(!press!(3, 8, true, 50));
        assert_read!(E KeyEvent::Modifiers(MOD_LSFT, true));
        assert_read!(E KeyEvent::Basic(KC_9, true));
        assert_read!(E KeyEvent::Basic(KC_9, false));
        assert_read!(E KeyEvent::Modifiers(MOD_LSFT, false));
        assert_read!(E KeyEvent::Modifiers(MOD_LSFT, true));
        assert_read!(E KeyEvent::Basic(KC_0, true));
        assert_read!(E KeyEvent::Basic(KC_0, false));
        assert_read!(E KeyEvent::Modifiers(MOD_LSFT, false));
        assert_read!(E KeyEvent::Basic(KC_LEFT, true));
        assert_read!(E KeyEvent::Basic(KC_LEFT, false));
        assert_read!(NONE);

        // Release does not replay it.
        assert!(!press!(3, 8, false, 90));
        assert_read!(NONE);

        // Long hold: layer drops, no space.
        press!(5, 6, false, 400);
        assert!(!t.layout.is_active(Layer::Sym));
        assert_read!(NONE);

        // Quick tap: space.
        press!(5, 6, true, 500);
        press!(5, 6, false, 560);
        assert_read!(E KeyEvent::Basic(KC_SPACE, true));
        assert_read!(E KeyEvent::Basic(KC_SPACE, false));
    });
}

#[test]
fn backticks_macro_plays_full_fence() {
    setup!(t, press, assert_read, {
        press!(5, 6, true, 0);
        press!(3, 7, true, 40); // H on the symbol layer

        for _ in 0..3 {
            assert_read!(E KeyEvent::Basic(KC_GRAVE, true));
            assert_read!(E KeyEvent::Basic(KC_GRAVE, false));
        }
        assert_read!(E KeyEvent::Basic(KC_ENTER, true));
        assert_read!(E KeyEvent::Basic(KC_ENTER, false));
        for _ in 0..3 {
            assert_read!(E KeyEvent::Basic(KC_GRAVE, true));
            assert_read!(E KeyEvent::Basic(KC_GRAVE, false));
        }
        for _ in 0..3 {
            assert_read!(E KeyEvent::Basic(KC_LEFT, true));
            assert_read!(E KeyEvent::Basic(KC_LEFT, false));
        }
        assert_read!(NONE);
    });
}

#[test]
fn home_dir_macro_types_tilde_slash() {
    setup!(t, press, assert_read, {
        press!(5, 6, true, 0);
        press!(3, 5, true, 40); // F on the symbol layer
        assert_read!(E KeyEvent::Modifiers(MOD_LSFT, true));
        assert_read!(E KeyEvent::Basic(KC_GRAVE, true));
        assert_read!(E KeyEvent::Basic(KC_GRAVE, false));
        assert_read!(E KeyEvent::Modifiers(MOD_LSFT, false));
        assert_read!(E KeyEvent::Basic(KC_SLASH, true));
        assert_read!(E KeyEvent::Basic(KC_SLASH, false));
        assert_read!(NONE);
    });
}

#[test]
fn momentary_fn_layer() {
    setup!(t, press, assert_read, {
        press!(5, 9, true, 0);
        assert!(t.layout.is_active(Layer::MacFn));

        assert!(press!(0, 2, true, 30));
        t.forward_key(ScanKey::new(0, 2, true));
        assert_read!(E KeyEvent::Basic(KC_F1, true));

        press!(5, 9, false, 60);
        assert!(!t.layout.is_active(Layer::MacFn));
    });
}

#[test]
fn encoder_rotation_resolves_through_layers() {
    setup!(t, press, assert_read, {
        assert!(!t.encoder_switch(0, false));
        assert_read!(E KeyEvent::Consumer(CU_VOL_DOWN));
        assert_read!(E KeyEvent::Consumer(0));

        assert!(!t.encoder_switch(1, true));
        assert_read!(E KeyEvent::Modifiers(MOD_LGUI, true));
        assert_read!(E KeyEvent::Basic(KC_EQUAL, true));
        assert_read!(E KeyEvent::Basic(KC_EQUAL, false));
        assert_read!(E KeyEvent::Modifiers(MOD_LGUI, false));

        // The table is the same on every layer.
        press!(5, 5, true, 0);
        assert!(!t.encoder_switch(0, true));
        assert_read!(E KeyEvent::Consumer(CU_VOL_UP));
        assert_read!(E KeyEvent::Consumer(0));

        // Unknown encoder index is left to the host.
        assert!(t.encoder_switch(5, true));
    });
}

#[test]
fn alternate_variant_keeps_a_as_a_letter() {
    setup!(KM & j_custom::KEYMAP_ALT, t, press, _assert_read, {
        press!(5, 5, true, 0);
        assert!(t.layout.is_active(Layer::Nav));

        // A falls through to the base letter instead of selecting.
        assert!(press!(3, 2, true, 20));
        assert!(t.layout.is_active(Layer::Nav));
        assert_eq!(t.space.target(), Layer::Nav);
        press!(3, 2, false, 50);

        // D still selects the app layer.
        press!(3, 4, true, 80);
        assert!(t.layout.is_active(Layer::App));
        assert_eq!(t.space.target(), Layer::App);
    });
}

#[test]
fn out_of_range_scan_key_is_dropped() {
    setup!(t, press, assert_read, {
        assert!(!press!(7, 20, true, 0));
        assert_read!(NONE);
    });
}
