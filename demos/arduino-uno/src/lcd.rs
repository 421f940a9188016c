use arduino_hal::port::mode::Output;
use arduino_hal::port::{Pin, PinOps};
use reaction_game::CharDisplay;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM start address of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// HD44780 character LCD in 4-bit mode, write-only (R/W tied to ground)
///
/// Wiring on the reference board:
/// RS -> D12, E -> D11, DB4..DB7 -> D5, D4, D3, D2
pub struct Hd44780<RS, E, D4, D5, D6, D7> {
    rs: Pin<Output, RS>,
    en: Pin<Output, E>,
    data: (Pin<Output, D4>, Pin<Output, D5>, Pin<Output, D6>, Pin<Output, D7>),
}

impl<RS, E, D4, D5, D6, D7> Hd44780<RS, E, D4, D5, D6, D7>
where
    RS: PinOps,
    E: PinOps,
    D4: PinOps,
    D5: PinOps,
    D6: PinOps,
    D7: PinOps,
{
    /// Runs the 4-bit initialisation-by-instruction sequence
    pub fn new(
        rs: Pin<Output, RS>,
        en: Pin<Output, E>,
        d4: Pin<Output, D4>,
        d5: Pin<Output, D5>,
        d6: Pin<Output, D6>,
        d7: Pin<Output, D7>,
    ) -> Self {
        let mut lcd = Self {
            rs,
            en,
            data: (d4, d5, d6, d7),
        };

        // Power-on wait, then force 8-bit mode three times before switching to 4-bit
        arduino_hal::delay_ms(50);
        lcd.rs.set_low();
        lcd.en.set_low();
        lcd.write_nibble(0x3);
        arduino_hal::delay_us(4_500);
        lcd.write_nibble(0x3);
        arduino_hal::delay_us(150);
        lcd.write_nibble(0x3);
        lcd.write_nibble(0x2);

        lcd.command(CMD_FUNCTION_4BIT_2LINE);
        lcd.command(CMD_DISPLAY_ON);
        lcd.command(CMD_ENTRY_MODE_INCREMENT);
        lcd.command(CMD_CLEAR);
        arduino_hal::delay_ms(2);

        lcd
    }

    fn command(&mut self, byte: u8) {
        self.rs.set_low();
        self.write_byte(byte);
    }

    fn data(&mut self, byte: u8) {
        self.rs.set_high();
        self.write_byte(byte);
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }

    fn write_nibble(&mut self, nibble: u8) {
        let (d4, d5, d6, d7) = &mut self.data;
        set_level(d4, nibble & 0x1 != 0);
        set_level(d5, nibble & 0x2 != 0);
        set_level(d6, nibble & 0x4 != 0);
        set_level(d7, nibble & 0x8 != 0);

        self.en.set_high();
        arduino_hal::delay_us(1);
        self.en.set_low();
        // Most instructions need 37us to execute
        arduino_hal::delay_us(50);
    }
}

fn set_level<P: PinOps>(pin: &mut Pin<Output, P>, high: bool) {
    if high {
        pin.set_high();
    } else {
        pin.set_low();
    }
}

impl<RS, E, D4, D5, D6, D7> CharDisplay for Hd44780<RS, E, D4, D5, D6, D7>
where
    RS: PinOps,
    E: PinOps,
    D4: PinOps,
    D5: PinOps,
    D6: PinOps,
    D7: PinOps,
{
    fn clear(&mut self) {
        self.command(CMD_CLEAR);
        // Clear takes up to 1.52ms
        arduino_hal::delay_ms(2);
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        let offset = ROW_OFFSETS[(row as usize).min(ROW_OFFSETS.len() - 1)];
        self.command(CMD_SET_DDRAM | (offset + col));
    }

    fn print(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.data(byte);
        }
    }
}
