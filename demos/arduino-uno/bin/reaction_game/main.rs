#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use panic_halt as _;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use reaction_game::config::{OPERATING_MODE, TICK_PERIOD};
use reaction_game::{
    DiagnosticApp, Game, GameConfig, MillisClock, OperatingMode, PortLed, ReactionApp,
    SharedGame, TimeSource, Voltmeter,
};

use arduino_uno_demo::adc_channel::AdcChannel;

mod hardware_setup;

use hardware_setup::HardwareContext;

/// Milliseconds since boot, advanced by Timer0
static CLOCK: MillisClock = MillisClock::new();

/// Game shared between the main loop and the button interrupt
static GAME: SharedGame<SmallRng> = SharedGame::new();

/// Timer0 compare match - called every 1ms
#[avr_device::interrupt(atmega328p)]
fn TIMER0_COMPA() {
    CLOCK.advance(1);
}

/// Pin change on PB0 (button)
#[avr_device::interrupt(atmega328p)]
fn PCINT0() {
    GAME.on_edge(CLOCK.now());
}

#[arduino_hal::entry]
fn main() -> ! {
    let mut hw = hardware_setup::init_hardware();

    let mode = match OPERATING_MODE {
        OperatingMode::Game => "game",
        OperatingMode::Diagnostic => "voltmeter",
    };
    let _ = ufmt::uwriteln!(&mut hw.console, "reaction-game ({})\r", mode);

    // Enable interrupts globally
    unsafe { avr_device::interrupt::enable() };

    match OPERATING_MODE {
        OperatingMode::Game => run_game(hw),
        OperatingMode::Diagnostic => run_diagnostic(hw),
    }
}

fn run_game(hw: HardwareContext) -> ! {
    let seed = hw.entropy ^ CLOCK.now().as_millis() as u64;
    GAME.install(Game::new(GameConfig::DEFAULT, SmallRng::seed_from_u64(seed)));

    let mut app = ReactionApp::new(&GAME, hw.lcd, PortLed::new(hw.led));
    loop {
        app.poll();
        arduino_hal::delay_ms(TICK_PERIOD.as_millis() as _);
    }
}

fn run_diagnostic(hw: HardwareContext) -> ! {
    let meter = Voltmeter::new(AdcChannel::new(hw.adc, hw.sense));

    let mut app = DiagnosticApp::new(meter, hw.lcd);
    loop {
        app.poll();
        arduino_hal::delay_ms(TICK_PERIOD.as_millis() as _);
    }
}
