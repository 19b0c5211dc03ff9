use embassy_futures::select::{select, Either};
use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};
use embassy_time::{Instant, Timer};

use crate::{
    action::{Action, KeyPlusMod, RgbCommand, TextMacro},
    keycodes::*,
    keymap::Keymap,
    layout::{self, Layer},
    timer_diff,
};

mod space;
mod tap_dance;
mod text_macros;

use self::space::SpaceSelect;
use self::tap_dance::{Hit, TapDance};
use self::text_macros::Step;

/// Matrix position where hosts have been seen persisting LANG1 over the
/// intended left GUI; see [`Mapper::key_switch`].
const STORED_LANG1_POS: (usize, usize) = (5, 4);

/// A key switch change reported by the host's matrix scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanKey {
    row: u8,
    col: u8,
}
impl ScanKey {
    pub fn new(row: u8, col: u8, is_down: bool) -> Self {
        Self {
            row: row | if is_down { 0x80 } else { 0 },
            col,
        }
    }

    pub fn row(&self) -> usize {
        (self.row & 0x7f) as usize
    }

    pub fn column(&self) -> usize {
        self.col as usize
    }

    pub fn is_down(&self) -> bool {
        self.row & 0x80 == 0x80
    }

    pub fn same_key(&self, other: ScanKey) -> bool {
        self.col == other.col && self.row & 0x7f == other.row & 0x7f
    }
}

/// A scan key stamped with the host's 16-bit millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimedScanKey(pub ScanKey, pub u16);

/// HID-bound reports; the host owns the actual report descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Basic(u8, bool),
    /// Modifier mask pressed or released as a unit.
    Modifiers(u8, bool),
    /// Consumer-page usage; 0 releases.
    Consumer(u16),
    Rgb(RgbCommand),
    NkroToggle,
}

pub struct MapperChannel<M: RawMutex, const N: usize>(Channel<M, KeyEvent, N>);
impl<M: RawMutex, const N: usize> Default for MapperChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}
impl<M: RawMutex, const N: usize> MapperChannel<M, N> {
    pub async fn receive(&self) -> KeyEvent {
        self.0.receive().await
    }

    pub fn try_receive(&self) -> Option<KeyEvent> {
        self.0.try_receive().ok()
    }

    fn report(&self, event: KeyEvent) {
        if self.0.try_send(event).is_err() {
            crate::error!("report channel full; dropping {:?}", event);
        }
    }
}

pub struct ScanChannel<M: RawMutex, const N: usize>(Channel<M, ScanKey, N>);
impl<M: RawMutex, const N: usize> Default for ScanChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}
impl<M: RawMutex, const N: usize> ScanChannel<M, N> {
    pub async fn receive(&self) -> ScanKey {
        self.0.receive().await
    }

    pub async fn send(&self, key: ScanKey) {
        self.0.send(key).await;
    }

    pub fn try_send(&self, key: ScanKey) {
        self.0.try_send(key).ok();
    }
}

/// Timing knobs in milliseconds.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Hold at least this long to suppress the tap half of tap/hold keys.
    pub tapping_term: u16,
    /// Window for a double press on tap-dance keys.
    pub tap_dance_term: u16,
}
impl Default for Timing {
    fn default() -> Self {
        Self {
            tapping_term: 200,
            tap_dance_term: 200,
        }
    }
}

/// Action and press time cached when a key goes down, replayed at release so
/// layer changes between the two cannot mispair them.
#[derive(Debug, Clone, Copy)]
struct HeldKey {
    action: Action,
    pressed_at: u16,
}
impl HeldKey {
    const NONE: Self = Self {
        action: Action::No,
        pressed_at: 0,
    };
}

/// Turns timed scan events into layer changes and HID-bound reports.
///
/// `key_switch` is the synchronous core: run-to-completion per event, no
/// blocking, strict arrival order. It returns `true` when the host should
/// apply default forwarding ([`Mapper::forward_key`]) and `false` when the
/// event was consumed here.
pub struct Mapper<
    'c,
    const ROWS: usize,
    const COLS: usize,
    M: RawMutex,
    const REPORT_BUFFER_SIZE: usize,
> {
    layout: layout::Manager<ROWS, COLS>,
    held: [[HeldKey; COLS]; ROWS],
    space: SpaceSelect,
    tap_dance: TapDance,
    timing: Timing,
    report_channel: &'c MapperChannel<M, REPORT_BUFFER_SIZE>,
}

impl<'c, const ROWS: usize, const COLS: usize, M: RawMutex, const REPORT_BUFFER_SIZE: usize>
    Mapper<'c, ROWS, COLS, M, REPORT_BUFFER_SIZE>
{
    pub fn new(
        keymap: &'static Keymap<ROWS, COLS>,
        report_channel: &'c MapperChannel<M, REPORT_BUFFER_SIZE>,
        timing: Timing,
    ) -> Self {
        Self {
            layout: layout::Manager::new(keymap),
            held: [[HeldKey::NONE; COLS]; ROWS],
            space: SpaceSelect::default(),
            tap_dance: TapDance::default(),
            timing,
            report_channel,
        }
    }

    /// Bridge a scan channel to the report channel, waking early while a
    /// tap-dance press is waiting on its window.
    pub async fn run<const SCAN_BUFFER_SIZE: usize>(
        &mut self,
        scan_channel: &ScanChannel<M, SCAN_BUFFER_SIZE>,
    ) -> ! {
        loop {
            let key = match self
                .tap_dance
                .remaining(now16(), self.timing.tap_dance_term)
            {
                Some(ms) => {
                    match select(scan_channel.receive(), Timer::after_millis(ms as u64)).await {
                        Either::First(key) => key,
                        Either::Second(()) => {
                            self.check_time(now16());
                            continue;
                        }
                    }
                }
                None => scan_channel.receive().await,
            };
            let key = TimedScanKey(key, now16());
            if self.key_switch(key) {
                self.forward_key(key.0);
            }
        }
    }

    /// Handle one key switch change. Returns `true` when the resolved action
    /// is a plain emission the caller should forward.
    pub fn key_switch(&mut self, TimedScanKey(key, now): TimedScanKey) -> bool {
        if key.row() >= ROWS || key.column() >= COLS {
            crate::warn!("scan key out of range {}:{}", key.row(), key.column());
            return false;
        }

        if let Some(id) = self.tap_dance.preempt(key, now, self.timing.tap_dance_term) {
            self.fire_tap_dance(id, false);
        }

        let held = if key.is_down() {
            let held = HeldKey {
                action: self.layout.find_code(key.row(), key.column()),
                pressed_at: now,
            };
            self.held[key.row()][key.column()] = held;
            held
        } else {
            self.held[key.row()][key.column()]
        };

        crate::debug!(
            "key {}:{} down:{} {:?}",
            key.row(),
            key.column(),
            key.is_down(),
            held.action
        );

        // Some hosts persist LANG1 over the left GUI position; substitute
        // directly and keep the stored code off the wire.
        if held.action == Action::Key(KC_LANG1)
            && (key.row(), key.column()) == STORED_LANG1_POS
        {
            crate::info!("stored LANG1 remapped to left GUI");
            self.report(KeyEvent::Basic(KC_LGUI, key.is_down()));
            return false;
        }

        self.run_action(held.action, key, now, held.pressed_at)
    }

    /// Resolve the lapsed tap-dance window, if any. `now` must come from the
    /// same clock that stamps scan keys.
    pub fn check_time(&mut self, now: u16) {
        if let Some(id) = self.tap_dance.expire(now, self.timing.tap_dance_term) {
            self.fire_tap_dance(id, false);
        }
    }

    /// Handle an encoder rotation. Returns `true` when the resolved action
    /// is not something this core taps, leaving it to the host.
    pub fn encoder_switch(&mut self, encoder: usize, clockwise: bool) -> bool {
        let action = self.layout.encoder_code(encoder, clockwise);
        crate::debug!("encoder {} cw:{} {:?}", encoder, clockwise, action);
        match action {
            Action::Key(code) => self.tap_code(code),
            Action::Shortcut(shortcut) => self.tap_shortcut(shortcut),
            Action::Consumer(usage) => self.tap_consumer(usage),
            _ => return true,
        }
        false
    }

    /// Emit the cached plain action for `key`; the default handling behind
    /// `key_switch() == true`.
    pub fn forward_key(&mut self, key: ScanKey) {
        if key.row() >= ROWS || key.column() >= COLS {
            return;
        }
        match self.held[key.row()][key.column()].action {
            Action::Key(code) => self.report(KeyEvent::Basic(code, key.is_down())),
            Action::Shortcut(shortcut) => {
                if key.is_down() {
                    self.report(KeyEvent::Modifiers(shortcut.modifiers, true));
                    self.report(KeyEvent::Basic(shortcut.key, true));
                } else {
                    self.report(KeyEvent::Basic(shortcut.key, false));
                    self.report(KeyEvent::Modifiers(shortcut.modifiers, false));
                }
            }
            Action::Consumer(usage) => {
                self.report(KeyEvent::Consumer(if key.is_down() { usage } else { 0 }))
            }
            Action::Rgb(command) => {
                if key.is_down() {
                    self.report(KeyEvent::Rgb(command));
                }
            }
            Action::NkroToggle => {
                if key.is_down() {
                    self.report(KeyEvent::NkroToggle);
                }
            }
            _ => {}
        }
    }

    /// Install a host-persisted substitution for one position on one layer.
    pub fn set_override(&mut self, layer: Layer, row: usize, column: usize, action: Action) {
        self.layout.set_override(layer, row, column, action);
    }

    /// Drop every overlay, land on the base layer and forget the thumb-key
    /// target. Reachable from any state.
    pub fn return_to_base(&mut self) {
        crate::info!("return to base");
        for layer in [
            Layer::Win,
            Layer::MacFn,
            Layer::WinBase,
            Layer::WinFn,
            Layer::Numpad,
            Layer::Nav,
            Layer::Sym,
            Layer::Cursor,
            Layer::App,
            Layer::Lighting,
        ] {
            self.layout.deactivate(layer);
        }
        self.layout.move_to(Layer::MacBase);
        self.space.reset();
    }

    fn run_action(&mut self, action: Action, key: ScanKey, now: u16, pressed_at: u16) -> bool {
        match action {
            Action::No | Action::Transparent => false,
            Action::Key(_)
            | Action::Shortcut(_)
            | Action::Consumer(_)
            | Action::Rgb(_)
            | Action::NkroToggle => true,
            Action::Momentary(layer) => {
                if key.is_down() {
                    self.layout.activate(layer);
                } else {
                    self.layout.deactivate(layer);
                }
                false
            }
            Action::Toggle(layer) => {
                if key.is_down() {
                    if self.layout.is_active(layer) {
                        self.layout.deactivate(layer);
                    } else {
                        self.layout.activate(layer);
                    }
                }
                false
            }
            Action::LayerTap(layer, tap) => {
                if key.is_down() {
                    self.layout.activate(layer);
                } else {
                    self.layout.deactivate(layer);
                    if timer_diff(now, pressed_at) < self.timing.tapping_term {
                        self.tap_code(tap);
                    }
                }
                false
            }
            Action::SpaceSelect => {
                if key.is_down() {
                    self.space.press(&mut self.layout, now);
                } else if self.space.release(&mut self.layout, now, self.timing.tapping_term) {
                    self.tap_code(KC_SPACE);
                }
                false
            }
            Action::Selector(target) => {
                if key.is_down() {
                    self.space.select(&mut self.layout, target);
                }
                false
            }
            Action::Text(m) => {
                if key.is_down() {
                    self.text_macro(m);
                }
                false
            }
            Action::ImeNext => {
                if key.is_down() {
                    self.tap_shortcut(KeyPlusMod::new(KC_SPACE, MOD_LCTL));
                }
                false
            }
            Action::ReturnToBase => {
                if key.is_down() {
                    self.return_to_base();
                }
                false
            }
            Action::TapDance(id) => {
                if key.is_down()
                    && self.tap_dance.press(id, key, now, self.timing.tap_dance_term)
                        == Hit::Double
                {
                    self.fire_tap_dance(id, true);
                }
                false
            }
        }
    }

    fn fire_tap_dance(&mut self, id: u8, double: bool) {
        let Some(pair) = self.layout.keymap().tap_dances.get(id as usize).copied() else {
            crate::error!("tap dance {} not defined", id);
            return;
        };
        let action = if double { pair.double } else { pair.single };
        crate::debug!("tap dance {} double:{} {:?}", id, double, action);
        match action {
            Action::Key(code) => self.tap_code(code),
            Action::Shortcut(shortcut) => self.tap_shortcut(shortcut),
            Action::Consumer(usage) => self.tap_consumer(usage),
            Action::ReturnToBase => self.return_to_base(),
            other => crate::error!("tap dance cannot play {:?}", other),
        }
    }

    fn text_macro(&mut self, m: TextMacro) {
        for step in text_macros::steps(m) {
            match *step {
                Step::Ch(ch) => match text_macros::ascii_key(ch) {
                    Some((code, true)) => self.tap_shortcut(KeyPlusMod::new(code, MOD_LSFT)),
                    Some((code, false)) => self.tap_code(code),
                    None => crate::error!("no key sequence for char {}", ch),
                },
                Step::Tap(code) => self.tap_code(code),
            }
        }
    }

    fn tap_code(&mut self, code: u8) {
        self.report(KeyEvent::Basic(code, true));
        self.report(KeyEvent::Basic(code, false));
    }

    fn tap_shortcut(&mut self, shortcut: KeyPlusMod) {
        self.report(KeyEvent::Modifiers(shortcut.modifiers, true));
        self.tap_code(shortcut.key);
        self.report(KeyEvent::Modifiers(shortcut.modifiers, false));
    }

    fn tap_consumer(&mut self, usage: u16) {
        self.report(KeyEvent::Consumer(usage));
        self.report(KeyEvent::Consumer(0));
    }

    fn report(&self, event: KeyEvent) {
        self.report_channel.report(event);
    }
}

fn now16() -> u16 {
    Instant::now().as_millis() as u16
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[path = "mapper_test.rs"]
mod test;
