//! In-memory 1-bit framebuffer
//!
//! [`Framebuffer`] mirrors the controller's GDDRAM: `width * height / 8` bytes
//! laid out in pages (see [`crate::page`]). All drawing happens here; the
//! buffer is pushed to the panel in one piece by
//! [`Display::flush`](crate::display::Display::flush).
//!
//! Writes outside the panel are ignored, so callers never need to pre-clip.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{Color, Dimensions, Framebuffer};
//!
//! let mut fb = Framebuffer::new(Dimensions::SSD1306_128X64, [0u8; 1024]);
//!
//! fb.set_pixel(3, 9, Color::On);
//! assert_eq!(fb.pixel(3, 9), Some(Color::On));
//! assert_eq!(fb.as_bytes()[131], 0x02);
//!
//! // Out of range: silently ignored
//! fb.set_pixel(500, 9, Color::On);
//! assert_eq!(fb.pixel(500, 9), None);
//! ```

use crate::color::Color;
use crate::config::Dimensions;
use crate::error::BufferSizeError;
use crate::page::pixel_address;

/// Packed 1-bit-per-pixel bitmap covering the whole panel
///
/// ## Type Parameters
///
/// * `B` - Backing store, e.g. `[u8; 1024]`, `&'static mut [u8; 1024]` or `Vec<u8>`
pub struct Framebuffer<B> {
    dimensions: Dimensions,
    buffer: B,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap a backing store
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is smaller than `dimensions.buffer_size()`.
    pub fn new(dimensions: Dimensions, buffer: B) -> Self {
        let required = dimensions.buffer_size();
        assert!(
            buffer.as_ref().len() >= required,
            "framebuffer too small: required {} bytes, got {}",
            required,
            buffer.as_ref().len()
        );
        Self { dimensions, buffer }
    }

    /// Wrap a backing store, returning an error if it is too small
    ///
    /// This is the fallible version of [`new`](Self::new).
    pub fn try_new(dimensions: Dimensions, buffer: B) -> Result<Self, BufferSizeError> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BufferSizeError { required, provided });
        }
        Ok(Self { dimensions, buffer })
    }

    /// Panel dimensions this buffer covers
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        u32::from(self.dimensions.width())
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        u32::from(self.dimensions.height())
    }

    /// Set or clear a single pixel
    ///
    /// No-op when `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let width = self.width();
        if x >= width || y >= self.height() {
            return;
        }

        let (index, bit) = pixel_address(x, y, width);
        let byte = &mut self.buffer.as_mut()[index];
        match color {
            Color::On => *byte |= bit,
            Color::Off => *byte &= !bit,
        }
    }

    /// Read back a single pixel, `None` when out of range
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let width = self.width();
        if x >= width || y >= self.height() {
            return None;
        }

        let (index, bit) = pixel_address(x, y, width);
        Some(Color::from(self.buffer.as_ref()[index] & bit != 0))
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(Color::Off);
    }

    /// Set every pixel to one color
    pub fn fill(&mut self, color: Color) {
        let value = if color.is_on() { 0xFF } else { 0x00 };
        let size = self.dimensions.buffer_size();
        self.buffer.as_mut()[..size].fill(value);
    }

    /// Raw page-ordered bytes, exactly `dimensions().buffer_size()` long
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.dimensions.buffer_size()]
    }

    /// Give back the backing store
    pub fn release(self) -> B {
        self.buffer
    }
}
