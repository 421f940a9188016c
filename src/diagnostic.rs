//! Voltmeter diagnostic mode.
//!
//! Built instead of the game when the `diagnostic` feature is enabled. Samples
//! one ADC channel per polling cycle and shows the voltage.

use core::fmt::Write;

use crate::config::{ADC_MAX, REFERENCE_VOLTS};
use crate::types::Text;

/// Trait for abstracting a blocking ADC channel.
pub trait AnalogSource {
    /// Takes one 10-bit sample (0-1023). Blocks until the conversion is done.
    fn sample(&mut self) -> u16;
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    fn sample(&mut self) -> u16 {
        T::sample(self)
    }
}

/// Converts a raw reading to volts: `raw / 1023 * reference`.
///
/// Readings above full scale are clamped.
pub fn volts(raw: u16, reference: f32) -> f32 {
    raw.min(ADC_MAX) as f32 / ADC_MAX as f32 * reference
}

/// Formats a voltage with two decimals, e.g. `"3.30 V"`.
///
/// Negative values are shown as zero.
pub fn format_volts(volts: f32) -> Text {
    let volts = if volts > 0.0 { volts } else { 0.0 };
    let centivolts = (volts * 100.0 + 0.5) as u32;

    let mut text = Text::new();
    let _ = write!(text, "{}.{:02} V", centivolts / 100, centivolts % 100);
    text
}

/// ADC channel plus its reference voltage.
pub struct Voltmeter<A: AnalogSource> {
    adc: A,
    reference: f32,
}

impl<A: AnalogSource> Voltmeter<A> {
    /// Creates a voltmeter with the board's reference voltage.
    pub fn new(adc: A) -> Self {
        Self::with_reference(adc, REFERENCE_VOLTS)
    }

    /// Creates a voltmeter with a custom reference voltage.
    pub fn with_reference(adc: A, reference: f32) -> Self {
        Self { adc, reference }
    }

    /// Samples once and returns the voltage.
    pub fn read(&mut self) -> f32 {
        volts(self.adc.sample(), self.reference)
    }

    /// Samples once and returns display text.
    pub fn read_text(&mut self) -> Text {
        format_volts(self.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_is_reference() {
        assert!((volts(1023, 5.0) - 5.0).abs() < 1e-4);
        assert_eq!(format_volts(volts(1023, 5.0)).as_str(), "5.00 V");
    }

    #[test]
    fn zero_reads_zero() {
        assert_eq!(format_volts(volts(0, 5.0)).as_str(), "0.00 V");
    }

    #[test]
    fn midscale_rounds_to_two_decimals() {
        // 512 / 1023 * 5.0 = 2.5024...
        assert_eq!(format_volts(volts(512, 5.0)).as_str(), "2.50 V");
    }

    #[test]
    fn over_range_is_clamped() {
        assert_eq!(format_volts(volts(4095, 5.0)).as_str(), "5.00 V");
    }
}
