use super::ScanKey;
use crate::timer_diff;

/// Outcome of a press on a tap-dance key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Hit {
    /// First press; resolution waits for the window to lapse.
    First,
    /// Second press inside the window.
    Double,
}

/// Double-press detector for the encoder push switches.
///
/// A lone press resolves as a single tap once the window lapses or another
/// key goes down; a second press of the same key inside the window resolves
/// as a double immediately.
#[derive(Default)]
pub(crate) struct TapDance {
    pending: Option<Pending>,
}

struct Pending {
    id: u8,
    key: ScanKey,
    pressed_at: u16,
}

impl TapDance {
    /// Resolve the pending press as a single tap if `key` is a different key
    /// going down, or the window has already lapsed. Returns the tap-dance
    /// id to fire.
    pub(crate) fn preempt(&mut self, key: ScanKey, now: u16, term: u16) -> Option<u8> {
        let pending = self.pending.as_ref()?;
        if timer_diff(now, pending.pressed_at) >= term
            || (key.is_down() && !key.same_key(pending.key))
        {
            return self.pending.take().map(|p| p.id);
        }
        None
    }

    pub(crate) fn press(&mut self, id: u8, key: ScanKey, now: u16, term: u16) -> Hit {
        match self.pending.take() {
            Some(pending) if pending.id == id && timer_diff(now, pending.pressed_at) < term => {
                Hit::Double
            }
            _ => {
                self.pending = Some(Pending {
                    id,
                    key,
                    pressed_at: now,
                });
                Hit::First
            }
        }
    }

    /// Resolve the pending press as a single tap once its window lapses.
    pub(crate) fn expire(&mut self, now: u16, term: u16) -> Option<u8> {
        let pending = self.pending.as_ref()?;
        if timer_diff(now, pending.pressed_at) >= term {
            return self.pending.take().map(|p| p.id);
        }
        None
    }

    /// Milliseconds until the pending press resolves, for the run loop's
    /// wakeup timer.
    pub(crate) fn remaining(&self, now: u16, term: u16) -> Option<u16> {
        let pending = self.pending.as_ref()?;
        let elapsed = timer_diff(now, pending.pressed_at);
        Some(term.saturating_sub(elapsed).max(1))
    }
}
