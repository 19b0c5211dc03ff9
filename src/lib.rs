#![no_std]

pub mod action;
pub mod keycodes;
pub mod keymap;
pub mod layout;
pub mod mapper;

#[macro_use]
mod macros;

/// Milliseconds from `earlier` to `later` on the 16-bit wrapping event clock.
pub fn timer_diff(later: u16, earlier: u16) -> u16 {
    later.wrapping_sub(earlier)
}
