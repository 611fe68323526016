//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during device bring-up and flushing
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Drawing never fails: coordinates outside the panel are clipped silently,
//! so no error type exists for them.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(128, 60); // Not a whole number of pages
//! assert!(result.is_err());
//! ```

use crate::interface::{DisplayInterface, MAX_DATA_CHUNK};

/// Maximum COM outputs (rows) supported by the SSD1306 controller
pub const MAX_ROWS: u16 = 64;

/// Maximum segment outputs (columns) supported by the SSD1306 controller
pub const MAX_COLUMNS: u16 = 128;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// The controller did not acknowledge the presence probe
    ///
    /// Terminal for the session: the device stays in
    /// [`DeviceState::Failed`](crate::display::DeviceState::Failed).
    Probe(I::Error),
    /// A framebuffer chunk could not be transferred
    ///
    /// The remaining chunks of the frame were not sent. The next flush
    /// starts over with a full transfer.
    Transfer {
        /// Zero-based index of the chunk that failed
        chunk: usize,
        /// Underlying bus error
        source: I::Error,
    },
    /// A command transaction failed
    Interface(I::Error),
    /// The device has not been successfully initialized
    NotInitialized,
    /// Buffer is too small for the display
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Probe(e) => write!(f, "Display not found: {e:?}"),
            Self::Transfer { chunk, source } => {
                write!(f, "Display update failed at chunk {chunk}: {source:?}")
            }
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<BufferSizeError> for Error<I> {
    fn from(err: BufferSizeError) -> Self {
        Self::BufferTooSmall {
            required: err.required,
            provided: err.provided,
        }
    }
}

/// A framebuffer backing store smaller than the display needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferSizeError {
    /// Required buffer size in bytes
    pub required: usize,
    /// Provided buffer size in bytes
    pub provided: usize,
}

impl core::fmt::Display for BufferSizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Buffer too small: required {} bytes, provided {}",
            self.required, self.provided
        )
    }
}

impl core::error::Error for BufferSizeError {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
    /// Flush chunk size outside `1..=MAX_DATA_CHUNK`
    InvalidChunkSize {
        /// Chunk size requested
        chunk_size: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, both must be multiples of 8)"
            ),
            Self::InvalidChunkSize { chunk_size } => write!(
                f,
                "Invalid chunk size {chunk_size} (must be 1..={MAX_DATA_CHUNK})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
