use bitfield::{Bit, BitMut};

/// Bit-set of active layers, bit `n` set when layer `n` is active
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(test, derive(Debug))]
pub struct LayerState(pub u32);

impl LayerState {
    pub const MAX_LAYERS: usize = 32;
    pub const NONE: Self = Self(0);
    pub const BASE: Self = Self(1);

    pub fn is_on(&self, layer: usize) -> bool {
        layer < Self::MAX_LAYERS && self.0.bit(layer)
    }

    pub fn on(&mut self, layer: usize) {
        debug_assert!(layer < Self::MAX_LAYERS);
        self.0.set_bit(layer, true);
    }

    pub fn off(&mut self, layer: usize) {
        debug_assert!(layer < Self::MAX_LAYERS);
        self.0.set_bit(layer, false);
    }

    pub fn toggle(&mut self, layer: usize) {
        let on = self.is_on(layer);
        self.0.set_bit(layer, !on);
    }

    pub const fn with(self, layer: usize) -> Self {
        Self(self.0 | (1 << layer))
    }

    /// Topmost active layer, 0 if no layer is active
    pub const fn top(&self) -> usize {
        if self.0 == 0 {
            0
        } else {
            (u32::BITS - 1 - self.0.leading_zeros()) as usize
        }
    }

    /// Iterate over active layers from the topmost one down
    pub fn active(&self) -> impl Iterator<Item = usize> {
        let state = *self;
        (0..Self::MAX_LAYERS).rev().filter(move |&l| state.is_on(l))
    }
}
