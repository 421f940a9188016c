use arduino_hal::adc::Channel;
use arduino_hal::hal::port::{PB3, PB4, PD2, PD3, PD4, PD5, PD6, PD7};
use arduino_hal::pac::{EXINT, TC0};
use arduino_hal::Adc;

use arduino_uno_demo::lcd::Hd44780;
use arduino_uno_demo::led_port::LedPort;

/// Type alias for the 8x2 LCD
pub type Lcd = Hd44780<PB4, PB3, PD5, PD4, PD3, PD2>;

/// Type alias for the bicolor LED pins
pub type Led = LedPort<PD6, PD7>;

/// Serial console used for the boot banner
pub type Console = arduino_hal::hal::usart::Usart0<arduino_hal::DefaultClock>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub lcd: Lcd,
    pub led: Led,
    pub adc: Adc,
    /// Diagnostic voltage input (A0)
    pub sense: Channel,
    pub console: Console,
    /// Noise gathered from the floating A1 input
    pub entropy: u64,
}

/// Initialize all hardware peripherals
///
/// - 1 kHz Timer0 compare interrupt for the millisecond clock
/// - LCD in 4-bit mode on D12/D11/D5/D4/D3/D2
/// - Bicolor LED on D6 (red) and D7 (green)
/// - Button on D8 (PB0) with pin-change interrupt PCINT0
/// - ADC on A0 (voltage sense) and A1 (entropy)
///
/// Interrupts are left disabled.
pub fn init_hardware() -> HardwareContext {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    let console = arduino_hal::default_serial!(dp, pins, 57600);

    configure_millis_timer(&dp.TC0);

    let lcd = Hd44780::new(
        pins.d12.into_output(),
        pins.d11.into_output(),
        pins.d5.into_output(),
        pins.d4.into_output(),
        pins.d3.into_output(),
        pins.d2.into_output(),
    );

    let led = LedPort::new(pins.d6.into_output(), pins.d7.into_output());

    // External pull-down on the button, pressed = high
    let _button = pins.d8.into_floating_input();
    configure_button_interrupt(&dp.EXINT);

    let mut adc = Adc::new(dp.ADC, Default::default());
    let sense = pins.a0.into_analog_input(&mut adc).into_channel();
    let noise = pins.a1.into_analog_input(&mut adc).into_channel();

    let mut entropy = 0u64;
    for _ in 0..64 {
        entropy = entropy.rotate_left(5) ^ adc.read_blocking(&noise) as u64;
    }

    HardwareContext {
        lcd,
        led,
        adc,
        sense,
        console,
        entropy,
    }
}

/// Timer0 in CTC mode: 16 MHz / 64 / 250 = 1 kHz
fn configure_millis_timer(tc0: &TC0) {
    tc0.tccr0a().write(|w| w.wgm0().ctc());
    tc0.ocr0a().write(|w| unsafe { w.bits(249) });
    tc0.tccr0b().write(|w| w.cs0().prescale_64());
    tc0.timsk0().write(|w| w.ocie0a().set_bit());
}

/// Enable pin-change interrupts on port B, unmask PB0
fn configure_button_interrupt(exint: &EXINT) {
    exint.pcicr().write(|w| unsafe { w.bits(0b0000_0001) });
    exint.pcmsk0().write(|w| unsafe { w.bits(0b0000_0001) });
}
