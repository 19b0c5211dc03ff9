use crate::layout::{Layer, Manager};
use crate::timer_diff;

/// Layers the left thumb key can end up holding; all of them are dropped on
/// release no matter which one the press activated.
const HOLD_LAYERS: [Layer; 5] = [
    Layer::Nav,
    Layer::App,
    Layer::Win,
    Layer::Cursor,
    Layer::Lighting,
];

/// Retarget state for the left thumb key.
///
/// The key normally holds Nav; while Nav is active the home-row selectors
/// swap the hold over to another layer. The choice lives for exactly one
/// press: releasing the thumb key drops whichever layer ended up held and
/// resets the target back to Nav.
pub(crate) struct SpaceSelect {
    target: Layer,
    pressed_at: u16,
}
impl Default for SpaceSelect {
    fn default() -> Self {
        Self {
            target: Layer::Nav,
            pressed_at: 0,
        }
    }
}
impl SpaceSelect {
    pub(crate) fn press<const ROWS: usize, const COLS: usize>(
        &mut self,
        layout: &mut Manager<ROWS, COLS>,
        now: u16,
    ) {
        self.pressed_at = now;
        layout.activate(self.target);
    }

    /// Returns true when the press was short enough to count as a tap.
    pub(crate) fn release<const ROWS: usize, const COLS: usize>(
        &mut self,
        layout: &mut Manager<ROWS, COLS>,
        now: u16,
        tapping_term: u16,
    ) -> bool {
        let duration = timer_diff(now, self.pressed_at);
        for layer in HOLD_LAYERS {
            layout.deactivate(layer);
        }
        self.target = Layer::Nav;
        duration < tapping_term
    }

    /// Retarget the thumb hold at `target`. Ignored unless Nav is active, so
    /// the selectors only work mid-hold.
    pub(crate) fn select<const ROWS: usize, const COLS: usize>(
        &mut self,
        layout: &mut Manager<ROWS, COLS>,
        target: Layer,
    ) {
        if !layout.is_active(Layer::Nav) {
            return;
        }
        self.target = target;
        layout.deactivate(Layer::Nav);
        layout.activate(target);
    }

    pub(crate) fn reset(&mut self) {
        self.target = Layer::Nav;
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> Layer {
        self.target
    }
}
