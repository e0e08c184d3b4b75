//! Swedish ErgoDox keymap for [`keyberon`] based firmware
//!
//! Three layers (base, symbols, gaming), the layer glue keyberon does not
//! provide (layer toggling, stacked transparency) and a status LED indicator
//! driven from the topmost active layer.
#![no_std]

// Use std when running tests, see: https://stackoverflow.com/a/28186509
// Make sure to use different target when testing, e.g.
//   cargo test --target x86_64-unknown-linux-gnu
#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod log;

pub mod config;
pub mod indicators;
pub mod keymap;
pub mod utils;
