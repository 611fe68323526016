//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};
use crate::interface::MAX_DATA_CHUNK;

/// Display dimensions
///
/// Only obtainable through [`Dimensions::new`] or the provided constants, so
/// a value always describes a panel the controller can drive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    /// The common 0.96" 128x64 module
    pub const SSD1306_128X64: Self = Self {
        width: 128,
        height: 64,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is zero, larger than MAX_COLUMNS or not a multiple of 8
    /// - height is zero, larger than MAX_ROWS or not a multiple of 8
    ///   (the page model packs 8 rows per byte)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS || width % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels (segment outputs)
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels (COM outputs)
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }
}

/// Panel orientation, applied in hardware through segment remap and COM scan direction
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// Native orientation for the usual module wiring
    #[default]
    Rotate0,
    /// Upside down
    Rotate180,
}

/// Display configuration
///
/// Holds the register values written by the initialization sequence.
/// Use [`Builder`] to create a Config.
///
/// Register values are public. Panel geometry and the flush chunk size are
/// fixed at build time:
///
/// ```compile_fail
/// use ssd1306_fb::{Builder, Dimensions};
///
/// let mut config = Builder::new()
///     .dimensions(Dimensions::SSD1306_128X64)
///     .build()
///     .unwrap();
/// config.chunk_size = 0;
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    dimensions: Dimensions,
    /// Panel orientation
    pub rotation: Rotation,
    /// Clock divide ratio / oscillator frequency
    pub clock_div: u8,
    /// Vertical display offset
    pub display_offset: u8,
    /// RAM row mapped to COM0 (0..=63)
    pub start_line: u8,
    /// Charge pump setting
    pub charge_pump: u8,
    /// Memory addressing mode
    pub memory_mode: u8,
    /// COM pins hardware configuration
    pub com_pins: u8,
    /// Contrast level
    pub contrast: u8,
    /// Pre-charge period
    pub precharge: u8,
    /// VCOMH deselect level
    pub vcom_detect: u8,
    /// Delay before probing, letting the panel supply settle
    pub power_up_delay_ms: u32,
    chunk_size: usize,
}

impl Config {
    /// Panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Bytes per data transaction when flushing the framebuffer, `1..=MAX_DATA_CHUNK`
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ssd1306_fb::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .com_pins(0x02)
///     .rotation(Rotation::Rotate180)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    dimensions: Option<Dimensions>,
    rotation: Rotation,
    clock_div: u8,
    display_offset: u8,
    start_line: u8,
    charge_pump: u8,
    memory_mode: u8,
    com_pins: u8,
    contrast: u8,
    precharge: u8,
    vcom_detect: u8,
    power_up_delay_ms: u32,
    chunk_size: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            // Default oscillator, divide ratio 1
            clock_div: 0x80,
            display_offset: 0x00,
            start_line: 0,
            // Internal DC-DC enabled
            charge_pump: 0x14,
            memory_mode: crate::command::MEMORY_MODE_HORIZONTAL,
            // Alternative COM pin layout (128x64 modules)
            com_pins: 0x12,
            contrast: 0xCF,
            precharge: 0xF1,
            vcom_detect: 0x40,
            power_up_delay_ms: 100,
            chunk_size: MAX_DATA_CHUNK,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set panel orientation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set clock divide ratio / oscillator frequency
    pub fn clock_div(mut self, value: u8) -> Self {
        self.clock_div = value;
        self
    }

    /// Set vertical display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set display start line (masked to 0..=63)
    pub fn start_line(mut self, value: u8) -> Self {
        self.start_line = value & 0x3F;
        self
    }

    /// Set charge pump setting
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.charge_pump = value;
        self
    }

    /// Set COM pins hardware configuration
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set contrast level
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set pre-charge period
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set VCOMH deselect level
    pub fn vcom_detect(mut self, value: u8) -> Self {
        self.vcom_detect = value;
        self
    }

    /// Set the delay before the presence probe
    pub fn power_up_delay_ms(mut self, value: u32) -> Self {
        self.power_up_delay_ms = value;
        self
    }

    /// Set bytes per data transaction when flushing
    pub fn chunk_size(mut self, value: usize) -> Self {
        self.chunk_size = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// and `BuilderError::InvalidChunkSize` if the chunk size is zero or does
    /// not fit one bus transaction.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.chunk_size == 0 || self.chunk_size > MAX_DATA_CHUNK {
            return Err(BuilderError::InvalidChunkSize {
                chunk_size: self.chunk_size,
            });
        }
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
            clock_div: self.clock_div,
            display_offset: self.display_offset,
            start_line: self.start_line,
            charge_pump: self.charge_pump,
            memory_mode: self.memory_mode,
            com_pins: self.com_pins,
            contrast: self.contrast,
            precharge: self.precharge,
            vcom_detect: self.vcom_detect,
            power_up_delay_ms: self.power_up_delay_ms,
            chunk_size: self.chunk_size,
        })
    }
}
