//! Layer indicator LEDs
//!
//! The ErgoDox has a board LED and three single-color LEDs on the right half.
//! On every scan tick all of them are switched off and then the ones assigned
//! to the topmost active layer are switched on. Mapping a layer to LEDs is a
//! pure function of the configuration so it can be tested without hardware.

/// Bit-set of indicator LEDs
mod bitset;
/// Output of indicator states to hardware
mod output;

pub use bitset::IndicatorSet;
pub use output::{IndicatorOutput, PinLeds};

use crate::keymap::LayerState;

/// Status LEDs available on the board
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Indicator {
    /// LED on the Teensy
    Board = 0,
    /// Red
    Led1 = 1,
    /// Green
    Led2 = 2,
    /// Blue
    Led3 = 3,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [Self::Board, Self::Led1, Self::Led2, Self::Led3];
}

/// Light given indicator when given layer is the topmost one
pub struct IndicatorRule {
    pub layer: u8,
    pub led: Indicator,
}

/// Assignment of indicator LEDs to layers
///
/// Layers without a rule keep all LEDs off.
pub struct IndicatorConfig {
    pub rules: &'static [IndicatorRule],
}

impl IndicatorConfig {
    /// Indicators that should be lit when `layer` is the topmost layer
    pub fn for_layer(&self, layer: usize) -> IndicatorSet {
        self.rules.iter()
            .filter(|rule| rule.layer as usize == layer)
            .fold(IndicatorSet::NONE, |set, rule| set.with(rule.led))
    }
}

/// Layer indicator driven from the firmware scan loop
pub struct Indicators<O> {
    config: &'static IndicatorConfig,
    output: O,
    lit: Option<IndicatorSet>,
}

impl<O: IndicatorOutput> Indicators<O> {
    pub fn new(config: &'static IndicatorConfig, output: O) -> Self {
        Self { config, output, lit: None }
    }

    /// Update indicator LEDs for the current layer state
    ///
    /// Must be called on every scan tick. Switches all indicators off and then
    /// switches on the ones assigned to the topmost layer. A failed pin write
    /// may leave the LEDs partially updated, [`Self::lit`] is then unknown
    /// until the next successful tick.
    pub fn scan_tick(&mut self, state: LayerState) -> Result<IndicatorSet, O::Error> {
        let lit = self.config.for_layer(state.top());
        if let Err(e) = self.write(lit) {
            self.lit = None;
            return Err(e);
        }
        if self.lit != Some(lit) {
            debug!("Indicators for layer {=usize}: {=u8:b}", state.top(), lit.0);
            self.lit = Some(lit);
        }
        Ok(lit)
    }

    fn write(&mut self, lit: IndicatorSet) -> Result<(), O::Error> {
        for led in Indicator::ALL {
            self.output.set(led, false)?;
        }
        for led in Indicator::ALL.into_iter().filter(|led| lit.get(*led)) {
            self.output.set(led, true)?;
        }
        Ok(())
    }

    /// Indicators lit by the last [`Self::scan_tick`], `None` if its pin writes failed
    pub fn lit(&self) -> Option<IndicatorSet> {
        self.lit
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn release(self) -> O {
        self.output
    }
}
