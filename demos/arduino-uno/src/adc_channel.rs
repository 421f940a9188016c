use arduino_hal::Adc;
use arduino_hal::adc::Channel;
use reaction_game::AnalogSource;

/// One analog input together with the ADC that converts it
pub struct AdcChannel {
    adc: Adc,
    channel: Channel,
}

impl AdcChannel {
    pub fn new(adc: Adc, channel: Channel) -> Self {
        Self { adc, channel }
    }
}

impl AnalogSource for AdcChannel {
    fn sample(&mut self) -> u16 {
        // Busy-waits on ADSC until the conversion completes
        self.adc.read_blocking(&self.channel)
    }
}
