use heapless::Vec;

use crate::{action::Action, keymap::Keymap};

pub const LAYER_COUNT: usize = 11;
pub const MAX_OVERRIDES: usize = 8;

/// The board's layers. `MacBase` is the rest state and is always active;
/// every other layer is an additive overlay above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Layer {
    MacBase = 0,
    Nav,
    Sym,
    Cursor,
    App,
    Win,
    MacFn,
    WinBase,
    WinFn,
    Lighting,
    Numpad,
}
impl Layer {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A host-persisted per-position substitution consulted before the static
/// table. The dynamic-keymap bytes themselves live in host storage; only the
/// decoded result is pushed in here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyOverride {
    pub layer: Layer,
    pub row: u8,
    pub column: u8,
    pub action: Action,
}

/// Owns the active-layer stack and resolves matrix positions to actions.
///
/// The stack is insertion ordered: the most recently activated overlay wins,
/// and a `Transparent` cell falls through to the overlay below it, ending at
/// the always-active base layer.
pub struct Manager<const ROWS: usize, const COLS: usize> {
    keymap: &'static Keymap<ROWS, COLS>,
    stack: Vec<Layer, LAYER_COUNT>,
    overrides: Vec<KeyOverride, MAX_OVERRIDES>,
}
impl<const ROWS: usize, const COLS: usize> Manager<ROWS, COLS> {
    pub fn new(keymap: &'static Keymap<ROWS, COLS>) -> Self {
        Self {
            keymap,
            stack: Vec::new(),
            overrides: Vec::new(),
        }
    }

    pub(crate) fn keymap(&self) -> &'static Keymap<ROWS, COLS> {
        self.keymap
    }

    /// Push `layer` on top of the stack. A no-op when it is already active,
    /// so redundant activations never reorder precedence.
    pub fn activate(&mut self, layer: Layer) {
        if layer == Layer::MacBase || self.stack.contains(&layer) {
            return;
        }
        let _ = self.stack.push(layer);
    }

    /// Remove `layer` wherever it sits in the stack; idempotent.
    pub fn deactivate(&mut self, layer: Layer) {
        if let Some(idx) = self.stack.iter().position(|l| *l == layer) {
            self.stack.remove(idx);
        }
    }

    /// Drop every overlay and leave `layer` as the only one (none when it is
    /// the base). Callers observe the stack only before or after.
    pub fn move_to(&mut self, layer: Layer) {
        self.stack.clear();
        self.activate(layer);
    }

    pub fn is_active(&self, layer: Layer) -> bool {
        layer == Layer::MacBase || self.stack.contains(&layer)
    }

    /// Resolve a matrix position against the stack, top overlay first.
    pub fn find_code(&self, row: usize, column: usize) -> Action {
        for layer in self.stack.iter().rev() {
            let action = self.entry(*layer, row, column);
            if action != Action::Transparent {
                return action;
            }
        }
        match self.entry(Layer::MacBase, row, column) {
            Action::Transparent => Action::No,
            action => action,
        }
    }

    /// Resolve an encoder rotation the same way key positions resolve.
    pub fn encoder_code(&self, encoder: usize, clockwise: bool) -> Action {
        if encoder >= crate::keymap::ENCODER_COUNT {
            return Action::No;
        }
        for layer in self.stack.iter().rev() {
            let action = self.keymap.encoders[layer.index()][encoder].get(clockwise);
            if action != Action::Transparent {
                return action;
            }
        }
        match self.keymap.encoders[Layer::MacBase.index()][encoder].get(clockwise) {
            Action::Transparent => Action::No,
            action => action,
        }
    }

    /// Install (or replace) a host override for one position on one layer.
    pub fn set_override(&mut self, layer: Layer, row: usize, column: usize, action: Action) {
        let (row, column) = (row as u8, column as u8);
        if let Some(existing) = self
            .overrides
            .iter_mut()
            .find(|o| o.layer == layer && o.row == row && o.column == column)
        {
            existing.action = action;
            return;
        }
        if self
            .overrides
            .push(KeyOverride {
                layer,
                row,
                column,
                action,
            })
            .is_err()
        {
            crate::error!("override table full; dropping {}:{}", row, column);
        }
    }

    fn entry(&self, layer: Layer, row: usize, column: usize) -> Action {
        if let Some(o) = self
            .overrides
            .iter()
            .find(|o| o.layer == layer && o.row as usize == row && o.column as usize == column)
        {
            return o.action;
        }
        self.keymap.layers[layer.index()]
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(Action::No)
    }
}

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[path = "layout_test.rs"]
mod test;
