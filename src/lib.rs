//! SSD1306 OLED Framebuffer Driver
//!
//! A framebuffer, text and shape renderer for SSD1306 monochrome OLED panels
//! (up to 128x64 pixels) driven over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Built-in 5x7 font with integer and fixed-point number printing
//! - Symmetric lines, rectangle outlines and fills, all clipped to the panel
//! - Chunked full-frame flush with per-chunk error reporting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use ssd1306_fb::{Builder, Color, Dimensions, Display, GraphicDisplay, I2cInterface};
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(i2c);
//! let config = match Builder::new().dimensions(Dimensions::SSD1306_128X64).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut oled = GraphicDisplay::new(Display::new(interface, config), [0u8; 1024]);
//! let _ = oled.init(&mut delay);
//!
//! oled.clear();
//! oled.print_str(0, 0, "SOIL:");
//! oled.print_number(36, 0, 57);
//! oled.draw_rect(0, 36, 100, 8, Color::On);
//! let _ = oled.display();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Monochrome pixel color
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Plant monitor status screen
pub mod dashboard;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 5x7 font and GFX font descriptors
pub mod font;
/// In-memory 1-bit framebuffer
pub mod framebuffer;
/// Rendering engine combining driver and framebuffer
pub mod graphics;
/// Hardware interface abstraction
pub mod interface;
/// Page-model pixel addressing
pub mod page;
/// Line and rectangle primitives
mod shapes;
/// Text rendering
pub mod text;

pub use color::Color;
pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, Rotation};
pub use display::{DeviceState, Display};
pub use error::{BufferSizeError, BuilderError, Error};
pub use font::{GfxFont, GfxGlyph};
pub use framebuffer::Framebuffer;
pub use graphics::GraphicDisplay;
pub use interface::InterfaceError;
pub use interface::{
    BUS_FREQUENCY_HZ, BUS_TIMEOUT_MS, DEFAULT_I2C_ADDRESS, DisplayInterface, I2cInterface,
    MAX_DATA_CHUNK,
};
