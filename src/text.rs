//! Text rendering with the built-in 5x7 font
//!
//! There is no cursor state: every call takes an explicit position, which is
//! the top-left corner of the first glyph. Characters advance by
//! [`CHAR_ADVANCE`] pixels.
//!
//! Numbers are formatted into fixed-capacity [`heapless::String`]s, so nothing
//! here allocates.

use core::fmt::Write;

use heapless::String;

use crate::color::Color;
use crate::font::{CHAR_ADVANCE, glyph};
use crate::framebuffer::Framebuffer;

/// Largest number of digits [`Framebuffer::print_float`] prints after the point
pub const MAX_DECIMALS: u8 = 9;

// "-2147483648"
const INT_CAPACITY: usize = 12;
// 39 integer digits for f32::MAX, sign, point and MAX_DECIMALS
const FLOAT_CAPACITY: usize = 56;

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw one character with its top-left corner at (x, y)
    ///
    /// Only lit glyph bits are written; background pixels are left alone.
    /// Characters outside the font range draw as space, i.e. nothing.
    pub fn draw_char(&mut self, x: u32, y: u32, c: char) {
        let columns = glyph(c);
        for (i, column) in columns.iter().enumerate() {
            for j in 0..8u32 {
                if column & (1 << j) != 0 {
                    self.set_pixel(x.saturating_add(i as u32), y.saturating_add(j), Color::On);
                }
            }
        }
    }

    /// Draw a string left to right starting at (x, y)
    ///
    /// Stops before any character whose start column would be at or past the
    /// right edge. There is no wrapping.
    ///
    /// Returns the x position following the last drawn character.
    pub fn print_str(&mut self, x: u32, y: u32, text: &str) -> u32 {
        let width = self.width();
        let mut cursor = x;
        for c in text.chars() {
            if cursor >= width {
                break;
            }
            self.draw_char(cursor, y, c);
            cursor = cursor.saturating_add(CHAR_ADVANCE);
        }
        cursor
    }

    /// Draw an integer in decimal
    pub fn print_number(&mut self, x: u32, y: u32, value: i32) -> u32 {
        let mut text: String<INT_CAPACITY> = String::new();
        if write!(text, "{value}").is_err() {
            log::debug!("number text truncated to {text}");
        }
        self.print_str(x, y, &text)
    }

    /// Draw a float in fixed-point notation with `decimals` digits after the point
    ///
    /// `decimals` is capped at [`MAX_DECIMALS`]; zero prints no point.
    pub fn print_float(&mut self, x: u32, y: u32, value: f32, decimals: u8) -> u32 {
        let precision = usize::from(decimals.min(MAX_DECIMALS));
        let mut text: String<FLOAT_CAPACITY> = String::new();
        if write!(text, "{value:.precision$}").is_err() {
            log::debug!("float text truncated to {text}");
        }
        self.print_str(x, y, &text)
    }
}
