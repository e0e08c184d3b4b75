use bitfield::{Bit, BitMut};
use static_assertions as sa;

use super::Indicator;

/// Bit-set storing indicator states as bit-flags (bit number = [`Indicator`] value)
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(test, derive(Debug))]
pub struct IndicatorSet(pub u8);

sa::const_assert!(Indicator::ALL.len() <= 8);

impl IndicatorSet {
    pub const ALL: Self = Self((1 << Indicator::ALL.len()) - 1);
    pub const NONE: Self = Self(0);

    pub const fn with(self, led: Indicator) -> Self {
        Self(self.0 | (1 << led as u8))
    }

    pub fn is_none(&self) -> bool {
        self == &Self::NONE
    }

    pub fn get(&self, led: Indicator) -> bool {
        self.0.bit(led as usize)
    }

    pub fn set(&mut self, led: Indicator, value: bool) {
        self.0.set_bit(led as usize, value);
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl core::ops::Not for IndicatorSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0 & Self::ALL.0) // mask to valid leds
    }
}

impl core::ops::BitOr for IndicatorSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
