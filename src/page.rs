//! Page addressing for the SSD1306 GDDRAM layout
//!
//! The controller stores pixels in horizontal bands of 8 rows called pages.
//! Each byte covers one column of one page, with bit 0 at the top:
//!
//! ```text
//!            column 0   column 1   ...  column W-1
//! page 0     byte 0     byte 1          byte W-1      rows 0..=7
//! page 1     byte W     byte W+1        byte 2W-1     rows 8..=15
//! ...
//! ```
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::page::pixel_address;
//!
//! // Top-left pixel is byte 0, bit 0 (LSB)
//! assert_eq!(pixel_address(0, 0, 128), (0, 0x01));
//!
//! // Row 9 lives in page 1, bit 1
//! assert_eq!(pixel_address(3, 9, 128), (131, 0x02));
//! ```

/// Map pixel coordinates to a buffer index and bit mask
///
/// # Arguments
///
/// * `x` - Column, 0 to width-1
/// * `y` - Row, 0 to height-1
/// * `width` - Display width in pixels
///
/// # Returns
///
/// Returns a tuple of (byte_index, bit_mask):
/// - `byte_index`: `x + (y / 8) * width`
/// - `bit_mask`: `1 << (y % 8)`
///
/// Bounds are not checked here; callers clip first.
pub fn pixel_address(x: u32, y: u32, width: u32) -> (usize, u8) {
    let index = (x + (y / 8) * width) as usize;
    let bit = 0x01 << (y % 8);
    (index, bit)
}
