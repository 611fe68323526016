//! Built-in 5x7 bitmap font
//!
//! Covers character codes 32 (space) through 90 (`Z`): space, punctuation,
//! digits and uppercase letters. Anything else, lowercase letters included,
//! renders as a space.
//!
//! Glyphs are stored column-major, one byte per column, bit 0 at the top.
//! Bit 7 is unused.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::font::{glyph, GLYPH_WIDTH};
//!
//! let one = glyph('1');
//! assert_eq!(one.len(), GLYPH_WIDTH);
//! assert_eq!(one[2], 0x7F); // full-height stem
//!
//! // Unsupported characters fall back to space
//! assert_eq!(glyph('a'), glyph(' '));
//! ```

/// First character code in [`FONT_5X7`]
pub const FIRST_CHAR: u8 = 32;

/// Last character code in [`FONT_5X7`]
pub const LAST_CHAR: u8 = 90;

/// Glyph width in pixels
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: usize = 7;

/// Horizontal cursor advance per character (glyph plus one blank column)
pub const CHAR_ADVANCE: u32 = 6;

/// Glyph bitmaps for codes [`FIRST_CHAR`]..=[`LAST_CHAR`], indexed by `code - FIRST_CHAR`
pub const FONT_5X7: [[u8; GLYPH_WIDTH]; (LAST_CHAR - FIRST_CHAR + 1) as usize] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x14, 0x08, 0x3E, 0x08, 0x14], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
];

/// Look up the glyph for a character
///
/// Characters outside [`FIRST_CHAR`]..=[`LAST_CHAR`] map to the space glyph.
pub fn glyph(c: char) -> &'static [u8; GLYPH_WIDTH] {
    let code = u32::from(c);
    let index = if (u32::from(FIRST_CHAR)..=u32::from(LAST_CHAR)).contains(&code) {
        (code - u32::from(FIRST_CHAR)) as usize
    } else {
        0
    };
    &FONT_5X7[index]
}

/// One glyph of a proportional GFX-style font
///
/// Offsets are relative to the text cursor, which sits on the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GfxGlyph {
    /// Offset of this glyph's bits in [`GfxFont::bitmap`]
    pub bitmap_offset: u16,
    /// Bitmap width in pixels
    pub width: u8,
    /// Bitmap height in pixels
    pub height: u8,
    /// Cursor advance after this glyph
    pub x_advance: u8,
    /// Horizontal distance from cursor to the bitmap's left edge
    pub x_offset: i8,
    /// Vertical distance from cursor to the bitmap's top edge
    pub y_offset: i8,
}

/// A proportional GFX-style font descriptor
///
/// Can be registered on a [`GraphicDisplay`](crate::GraphicDisplay) with
/// `set_font`. Rendering text with it is not supported yet; the built-in
/// [`FONT_5X7`] is always used for drawing.
#[derive(Clone, Copy, Debug)]
pub struct GfxFont {
    /// Concatenated glyph bitmaps, row-major, MSB first
    pub bitmap: &'static [u8],
    /// Glyph table, one entry per code in `first..=last`
    pub glyphs: &'static [GfxGlyph],
    /// First character code
    pub first: u8,
    /// Last character code
    pub last: u8,
    /// Line height
    pub y_advance: u8,
}

impl GfxFont {
    /// Glyph descriptor for a character, if the font covers it
    pub fn glyph(&self, c: char) -> Option<&GfxGlyph> {
        let code = u8::try_from(u32::from(c)).ok()?;
        if code < self.first || code > self.last {
            return None;
        }
        self.glyphs.get(usize::from(code - self.first))
    }
}
