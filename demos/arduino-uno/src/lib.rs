#![no_std]

pub mod adc_channel;
pub mod lcd;
pub mod led_port;
