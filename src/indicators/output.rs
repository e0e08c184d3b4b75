use embedded_hal::digital::v2::OutputPin;

use super::Indicator;

/// Hardware capability to switch indicator LEDs
pub trait IndicatorOutput {
    type Error;

    /// Switch a single indicator; switching to the current state is harmless
    fn set(&mut self, led: Indicator, on: bool) -> Result<(), Self::Error>;
}

/// Indicator LEDs connected directly to active-high output pins
///
/// Pins are indexed by [`Indicator`] value: board, LED1, LED2, LED3.
pub struct PinLeds<P> {
    pins: [P; 4],
}

impl<P: OutputPin> PinLeds<P> {
    pub fn new(pins: [P; 4]) -> Self {
        Self { pins }
    }

    pub fn release(self) -> [P; 4] {
        self.pins
    }
}

impl<P: OutputPin> IndicatorOutput for PinLeds<P> {
    type Error = P::Error;

    fn set(&mut self, led: Indicator, on: bool) -> Result<(), Self::Error> {
        let pin = &mut self.pins[led as usize];
        if on {
            pin.set_high()
        } else {
            pin.set_low()
        }
    }
}
