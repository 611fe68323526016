//! SSD1306 command definitions
//!
//! This module defines the command bytes used to configure and drive the
//! SSD1306 OLED controller. Over I2C every transaction starts with a control
//! byte that tells the controller how to interpret the bytes that follow:
//!
//! | Control byte | Meaning                         |
//! |--------------|---------------------------------|
//! | `0x00`       | Following byte is a command     |
//! | `0x40`       | Following bytes are GDDRAM data |
//!
//! Command arguments are sent as further command bytes, one transaction each.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_fb::{command, DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
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
//! # let mut interface = I2cInterface::new(MockI2c);
//! // Set contrast to 0x7F
//! let _ = interface.send_command(command::SET_CONTRAST);
//! let _ = interface.send_command(0x7F);
//!
//! // Turn the panel on
//! let _ = interface.send_command(command::DISPLAY_ON);
//! ```

// Control bytes

/// Control byte prefixing a command transaction (Co=0, D/C#=0)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte prefixing a GDDRAM data transaction (Co=0, D/C#=1)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Set contrast control (0x81)
///
/// Followed by 1 byte: contrast level 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from GDDRAM contents (0xA4)
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal display, a set bit lights the pixel (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display, a cleared bit lights the pixel (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

// Addressing commands

/// Set memory addressing mode (0x20)
///
/// Followed by 1 byte: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
pub const MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode: column pointer wraps into the next page
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Set column address window (0x21)
///
/// Followed by 2 bytes: start column, end column (inclusive).
pub const COLUMN_ADDR: u8 = 0x21;

/// Set page address window (0x22)
///
/// Followed by 2 bytes: start page, end page (inclusive).
pub const PAGE_ADDR: u8 = 0x22;

// Hardware configuration commands

/// Set display start line (0x40 | line)
///
/// The low 6 bits select the RAM row mapped to COM0.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap base (0xA0); OR with 0x01 to map column 127 to SEG0
pub const SEG_REMAP: u8 = 0xA0;

/// COM output scan direction: COM0 to COM[N-1] (0xC0)
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM output scan direction: COM[N-1] to COM0 (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set multiplex ratio (0xA8)
///
/// Followed by 1 byte: number of rows minus one.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// Set display vertical offset (0xD3)
///
/// Followed by 1 byte: COM shift.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Followed by 1 byte: 0x02 = sequential (128x32), 0x12 = alternative (128x64).
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Followed by 1 byte: high nibble = frequency, low nibble = divide ratio - 1.
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Followed by 1 byte: high nibble = phase 2, low nibble = phase 1.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Followed by 1 byte.
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Charge pump setting (0x8D)
///
/// Followed by 1 byte: 0x14 = enable internal DC-DC, 0x10 = disable.
pub const CHARGE_PUMP: u8 = 0x8D;
