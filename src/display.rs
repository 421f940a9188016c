//! Character display rendering.
//!
//! The display is an 8x2 character LCD. Text up to 16 bytes is wrapped into
//! 8-byte rows; anything longer is replaced with [`ERROR_TEXT`].

use heapless::Vec;

use crate::config::{ERROR_TEXT, LCD_COLS, LCD_ROWS, MAX_TEXT_LEN};

/// One display row, NUL-padded past the end of the text.
pub type Row = [u8; LCD_COLS];

/// Trait for abstracting the character display hardware.
///
/// Handle any hardware errors internally - these methods cannot fail.
pub trait CharDisplay {
    /// Blanks the whole display.
    fn clear(&mut self);

    /// Moves the write position.
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Writes bytes at the cursor.
    fn print(&mut self, bytes: &[u8]);
}

impl<T: CharDisplay + ?Sized> CharDisplay for &mut T {
    fn clear(&mut self) {
        T::clear(self)
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        T::set_cursor(self, col, row)
    }

    fn print(&mut self, bytes: &[u8]) {
        T::print(self, bytes)
    }
}

/// How a piece of text lands on the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// `ceil(len / 8)` rows; row `i` holds bytes `[8i, 8i + 8)`.
    Rows(Vec<Row, LCD_ROWS>),
    /// Text was longer than the display.
    Error,
}

/// Splits `text` into display rows.
pub fn layout(text: &str) -> Layout {
    let bytes = text.as_bytes();
    if bytes.len() > MAX_TEXT_LEN {
        return Layout::Error;
    }

    let mut rows = Vec::new();
    for chunk in bytes.chunks(LCD_COLS) {
        let mut row = [0u8; LCD_COLS];
        row[..chunk.len()].copy_from_slice(chunk);
        // At most MAX_TEXT_LEN / LCD_COLS chunks, always fits.
        let _ = rows.push(row);
    }
    Layout::Rows(rows)
}

/// Clears `display` and draws `text`.
pub fn render<D: CharDisplay>(display: &mut D, text: &str) {
    display.clear();

    match layout(text) {
        Layout::Error => display.print(ERROR_TEXT.as_bytes()),
        Layout::Rows(rows) => {
            for (index, row) in rows.iter().enumerate() {
                display.set_cursor(0, index as u8);
                let end = row.iter().position(|&b| b == 0).unwrap_or(LCD_COLS);
                display.print(&row[..end]);
            }
        }
    }
}
