//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for communicating with the SSD1306 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I2C mode needs only the two bus lines (SDA + SCL). Configure
//! the I2C peripheral with your HAL before handing it to [`I2cInterface`]:
//!
//! - clock: [`BUS_FREQUENCY_HZ`] (400 kHz fast mode)
//! - per-transaction timeout: [`BUS_TIMEOUT_MS`]
//!
//! ## Framing
//!
//! Every call on the trait is exactly one bus transaction
//! (start, address, payload, stop):
//!
//! | Call             | Payload                                   |
//! |------------------|-------------------------------------------|
//! | `probe`          | none (address acknowledge only)           |
//! | `send_command`   | `0x00`, command byte                      |
//! | `send_data`      | `0x40`, up to [`MAX_DATA_CHUNK`] bytes    |
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_fb::{DisplayInterface, I2cInterface};
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
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Is anything answering at 0x3C?
//! let present = interface.probe().is_ok();
//!
//! // Send command
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! # let _ = present;
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of SSD1306 modules (SA0 pulled low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Bus clock the controller is driven at, in hertz
pub const BUS_FREQUENCY_HZ: u32 = 400_000;

/// Timeout for a single bus transaction in milliseconds
pub const BUS_TIMEOUT_MS: u32 = 1000;

/// Maximum payload bytes carried by one data transaction
pub const MAX_DATA_CHUNK: usize = 16;

/// Trait for hardware interface to SSD1306 controller
///
/// This trait abstracts over the bus transport, allowing the
/// [`Display`](crate::display::Display) to work with real hardware or with a
/// simulated in-memory transport in tests.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`]. Implement this trait on
/// your own type to use a different transport or to record traffic.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Check that the controller acknowledges its address
    ///
    /// Issues an addressed transaction with no payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not acknowledged or the bus fails.
    fn probe(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send a single command byte to the controller
    ///
    /// The implementation must frame it as one transaction prefixed with the
    /// command control byte (`0x00`).
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails or times out.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send GDDRAM data bytes to the controller
    ///
    /// The implementation must frame them as one transaction prefixed with
    /// the data control byte (`0x40`).
    ///
    /// # Arguments
    ///
    /// * `data` - At most [`MAX_DATA_CHUNK`] bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails or times out.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the I2C bus error type.
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error (NACK, arbitration loss, timeout, ...)
    I2c(I2cErr),
    /// Data payload larger than one transaction can carry
    ChunkTooLarge {
        /// Length that was requested
        len: usize,
    },
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
            Self::ChunkTooLarge { len } => {
                write!(f, "Data chunk too large: {len} bytes (max {MAX_DATA_CHUNK})")
            }
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// I2C interface implementation for SSD1306
///
/// Implements [`DisplayInterface`] for an embedded-hal v1.0 [`I2c`] bus.
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`] with 7-bit addressing
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_fb::{Builder, Dimensions, Display, I2cInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c<SevenBitAddress> for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// // Module strapped to the alternate address
/// let interface = I2cInterface::with_address(MockI2c, 0x3D);
///
/// # let config = match Builder::new().dimensions(Dimensions::SSD1306_128X64).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c<SevenBitAddress>,
{
    /// Create a new interface at [`DEFAULT_I2C_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create a new interface at a specific 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c<SevenBitAddress>,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error>;

    fn probe(&mut self) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[])
            .map_err(InterfaceError::I2c)
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, command])
            .map_err(InterfaceError::I2c)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        if data.len() > MAX_DATA_CHUNK {
            return Err(InterfaceError::ChunkTooLarge { len: data.len() });
        }

        let mut frame = [0u8; MAX_DATA_CHUNK + 1];
        frame[0] = CONTROL_DATA;
        frame[1..=data.len()].copy_from_slice(data);

        self.i2c
            .write(self.address, &frame[..=data.len()])
            .map_err(InterfaceError::I2c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        }
    }

    #[derive(Debug, Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        nack: bool,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c<SevenBitAddress> for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.nack {
                return Err(MockError);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_default_address() {
        let interface = I2cInterface::new(MockI2c::default());
        assert_eq!(interface.address(), 0x3C);
    }

    #[test]
    fn test_probe_sends_empty_write() {
        let mut interface = I2cInterface::new(MockI2c::default());
        assert!(interface.probe().is_ok());
        let i2c = interface.release();
        assert_eq!(i2c.writes, alloc::vec![(0x3C, Vec::new())]);
    }

    #[test]
    fn test_probe_reports_nack() {
        let mut interface = I2cInterface::new(MockI2c {
            nack: true,
            ..MockI2c::default()
        });
        assert!(matches!(interface.probe(), Err(InterfaceError::I2c(MockError))));
    }

    #[test]
    fn test_command_is_prefixed_with_control_byte() {
        let mut interface = I2cInterface::with_address(MockI2c::default(), 0x3D);
        assert!(interface.send_command(0xAF).is_ok());
        let i2c = interface.release();
        assert_eq!(i2c.writes, alloc::vec![(0x3D, alloc::vec![0x00, 0xAF])]);
    }

    #[test]
    fn test_data_is_prefixed_with_control_byte() {
        let mut interface = I2cInterface::new(MockI2c::default());
        assert!(interface.send_data(&[1, 2, 3]).is_ok());
        let i2c = interface.release();
        assert_eq!(i2c.writes, alloc::vec![(0x3C, alloc::vec![0x40, 1, 2, 3])]);
    }

    #[test]
    fn test_full_chunk_fits_one_transaction() {
        let mut interface = I2cInterface::new(MockI2c::default());
        let chunk = [0xA5u8; MAX_DATA_CHUNK];
        assert!(interface.send_data(&chunk).is_ok());
        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 1);
        assert_eq!(i2c.writes[0].1.len(), MAX_DATA_CHUNK + 1);
    }

    #[test]
    fn test_oversized_chunk_is_rejected() {
        let mut interface = I2cInterface::new(MockI2c::default());
        let chunk = [0u8; MAX_DATA_CHUNK + 1];
        let result = interface.send_data(&chunk);
        assert!(matches!(
            result,
            Err(InterfaceError::ChunkTooLarge { len }) if len == MAX_DATA_CHUNK + 1
        ));
        assert!(interface.release().writes.is_empty());
    }
}
