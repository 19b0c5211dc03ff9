//! Static keymap data consumed by [`crate::layout::Manager`] and
//! [`crate::mapper::Mapper`].

use crate::action::Action;
use crate::layout::LAYER_COUNT;

pub mod j_custom;

pub const ROWS: usize = 6;
pub const COLS: usize = 17;
pub const ENCODER_COUNT: usize = 2;
pub const TAP_DANCE_COUNT: usize = 2;

/// Actions for one encoder, one per rotation direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderPair {
    pub ccw: Action,
    pub cw: Action,
}
impl EncoderPair {
    pub const fn new(ccw: Action, cw: Action) -> Self {
        Self { ccw, cw }
    }

    pub fn get(&self, clockwise: bool) -> Action {
        if clockwise { self.cw } else { self.ccw }
    }
}

/// Actions for an encoder push switch: one for a lone press, one for a quick
/// double press.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDancePair {
    pub single: Action,
    pub double: Action,
}

/// One keymap variant: per-layer key grids, per-layer encoder tables and the
/// tap-dance pairs, all indexed by [`crate::layout::Layer`] order.
pub struct Keymap<const ROWS: usize, const COLS: usize> {
    pub layers: [[[Action; COLS]; ROWS]; LAYER_COUNT],
    pub encoders: [[EncoderPair; ENCODER_COUNT]; LAYER_COUNT],
    pub tap_dances: [TapDancePair; TAP_DANCE_COUNT],
}
