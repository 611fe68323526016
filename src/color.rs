//! Pixel color for monochrome OLED panels
//!
//! Each pixel is one bit in the framebuffer:
//!
//! | Color | Bit | Panel (normal mode) |
//! |-------|-----|---------------------|
//! | Off   | 0   | dark                |
//! | On    | 1   | lit                 |
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::Color;
//!
//! assert_eq!(Color::from(true), Color::On);
//! assert!(!Color::Off.is_on());
//! ```

/// Colors supported by SSD1306 (one bit per pixel)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Pixel dark
    #[default]
    Off,
    /// Pixel lit
    On,
}

impl Color {
    /// Whether the pixel bit is set
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}
