//! Integration tests for the voltmeter diagnostic mode

mod common;
use common::*;

use reaction_game::diagnostic::{format_volts, volts};
use reaction_game::Voltmeter;

#[test]
fn full_scale_with_five_volt_reference() {
    let mut meter = Voltmeter::new(MockAdc::new(1023));

    let v = meter.read();

    assert!((v - 5.0).abs() < 0.005);
    assert_eq!(format_volts(v).as_str(), "5.00 V");
}

#[test]
fn each_read_takes_one_sample() {
    let mut adc = MockAdc::new(300);
    {
        let mut meter = Voltmeter::new(&mut adc);
        meter.read();
        meter.read_text();
    }
    assert_eq!(adc.samples, 2);
}

#[test]
fn custom_reference_scales_linearly() {
    let mut meter = Voltmeter::with_reference(MockAdc::new(1023), 3.3);
    assert_eq!(meter.read_text().as_str(), "3.30 V");

    assert_eq!(format_volts(volts(0, 3.3)).as_str(), "0.00 V");
}

#[test]
fn quarter_scale() {
    // 256 / 1023 * 5.0 = 1.2512...
    assert_eq!(format_volts(volts(256, 5.0)).as_str(), "1.25 V");
}
