//! Core display operations
//!
//! [`Display`] owns the bus interface and the configuration, tracks whether
//! the controller has been brought up, and pushes finished frames to GDDRAM.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --init()--> probe ok  --> Initialized   (flush allowed)
//!                           probe nack --> Failed        (flush refused)
//! ```
//!
//! Both outcomes are terminal: `init` runs the bring-up sequence at most once.

use embedded_hal::delay::DelayNs;

use crate::command::{
    CHARGE_PUMP, COLUMN_ADDR, COM_SCAN_DEC, COM_SCAN_INC, DISPLAY_ALL_ON_RESUME, DISPLAY_OFF,
    DISPLAY_ON, INVERT_DISPLAY, MEMORY_MODE, NORMAL_DISPLAY, PAGE_ADDR, SEG_REMAP, SET_COM_PINS,
    SET_CONTRAST, SET_DISPLAY_CLOCK_DIV, SET_DISPLAY_OFFSET, SET_MULTIPLEX, SET_PRECHARGE,
    SET_START_LINE, SET_VCOM_DETECT,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Bring-up state of the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceState {
    /// `init` has not run yet
    #[default]
    Uninitialized,
    /// Probe acknowledged and configuration sent
    Initialized,
    /// Probe or configuration failed; the device stays unusable
    Failed,
}

/// Core display driver for SSD1306
///
/// Low-level operations only; for drawing use
/// [`GraphicDisplay`](crate::GraphicDisplay), which pairs this with a
/// framebuffer.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Bring-up state
    state: DeviceState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: DeviceState::Uninitialized,
        }
    }

    /// Wait for the panel supply to settle, probe for the controller and configure it
    ///
    /// Runs once. Later calls return immediately: `Ok` if the first call
    /// succeeded, [`Error::NotInitialized`] if it failed.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        match self.state {
            DeviceState::Initialized => return Ok(()),
            DeviceState::Failed => return Err(Error::NotInitialized),
            DeviceState::Uninitialized => {}
        }

        delay.delay_ms(self.config.power_up_delay_ms);

        if let Err(e) = self.interface.probe() {
            log::error!("SSD1306 not found: {e:?}");
            self.state = DeviceState::Failed;
            return Err(Error::Probe(e));
        }

        log::info!("SSD1306 found, sending initialization commands");

        if let Err(err) = self.configure() {
            log::error!("SSD1306 initialization failed: {err}");
            self.state = DeviceState::Failed;
            return Err(err);
        }

        self.state = DeviceState::Initialized;
        Ok(())
    }

    /// Send the register setup sequence, ending with the panel switched on
    fn configure(&mut self) -> DisplayResult<I> {
        let config = &self.config;
        let (seg_remap, com_scan) = match config.rotation {
            Rotation::Rotate0 => (SEG_REMAP | 0x01, COM_SCAN_DEC),
            Rotation::Rotate180 => (SEG_REMAP, COM_SCAN_INC),
        };
        let multiplex = (config.dimensions().height() - 1) as u8;

        let sequence = [
            DISPLAY_OFF,
            SET_DISPLAY_CLOCK_DIV,
            config.clock_div,
            SET_MULTIPLEX,
            multiplex,
            SET_DISPLAY_OFFSET,
            config.display_offset,
            SET_START_LINE | (config.start_line & 0x3F),
            CHARGE_PUMP,
            config.charge_pump,
            MEMORY_MODE,
            config.memory_mode,
            seg_remap,
            com_scan,
            SET_COM_PINS,
            config.com_pins,
            SET_CONTRAST,
            config.contrast,
            SET_PRECHARGE,
            config.precharge,
            SET_VCOM_DETECT,
            config.vcom_detect,
            DISPLAY_ALL_ON_RESUME,
            NORMAL_DISPLAY,
            DISPLAY_ON,
        ];

        for command in sequence {
            self.send_command(command)?;
        }

        Ok(())
    }

    /// Push a full frame to the controller
    ///
    /// Sets the column/page window to the whole panel, then sends `buffer` in
    /// `config.chunk_size()` byte transactions. The first failing chunk aborts
    /// the frame; nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`Error::NotInitialized`] if `init` has not succeeded (nothing is sent)
    /// - [`Error::BufferTooSmall`] if `buffer` is shorter than one frame
    /// - [`Error::Interface`] if setting the window fails
    /// - [`Error::Transfer`] if a data chunk fails
    pub fn flush(&mut self, buffer: &[u8]) -> DisplayResult<I> {
        if self.state != DeviceState::Initialized {
            log::warn!("SSD1306 not initialized, frame dropped");
            return Err(Error::NotInitialized);
        }

        let frame_size = self.config.dimensions().buffer_size();
        if buffer.len() < frame_size {
            return Err(Error::BufferTooSmall {
                required: frame_size,
                provided: buffer.len(),
            });
        }

        self.set_full_window()?;

        for (chunk, bytes) in buffer[..frame_size]
            .chunks(self.config.chunk_size())
            .enumerate()
        {
            if let Err(source) = self.interface.send_data(bytes) {
                log::error!("Display update failed at chunk {chunk}: {source:?}");
                return Err(Error::Transfer { chunk, source });
            }
        }

        log::debug!("Flushed {frame_size} bytes");
        Ok(())
    }

    /// Address the whole panel: all columns, all pages
    fn set_full_window(&mut self) -> DisplayResult<I> {
        let dims = self.config.dimensions();
        let last_column = (dims.width() - 1) as u8;
        let last_page = (dims.pages() - 1) as u8;

        self.send_command(COLUMN_ADDR)?;
        self.send_command(0)?;
        self.send_command(last_column)?;
        self.send_command(PAGE_ADDR)?;
        self.send_command(0)?;
        self.send_command(last_page)?;
        Ok(())
    }

    /// Change the contrast level
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(SET_CONTRAST)?;
        self.send_command(contrast)?;
        self.config.contrast = contrast;
        log::debug!("Contrast set to {contrast:#04x}");
        Ok(())
    }

    /// Switch the panel on or into sleep, GDDRAM is kept either way
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Swap lit and dark pixels in hardware
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    fn ensure_initialized(&self) -> DisplayResult<I> {
        if self.state == DeviceState::Initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Current bring-up state
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Whether `init` succeeded
    pub fn is_initialized(&self) -> bool {
        self.state == DeviceState::Initialized
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions()
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::interface::MAX_DATA_CHUNK;
    use alloc::vec::Vec;

    /// One recorded bus transaction
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Transaction {
        Probe,
        Command(u8),
        Data(Vec<u8>),
    }

    #[derive(Debug, Default)]
    pub(crate) struct MockInterface {
        pub(crate) transactions: Vec<Transaction>,
        /// Reject the probe
        pub(crate) absent: bool,
        /// Fail the data transaction with this zero-based index (counted across frames)
        pub(crate) fail_data_at: Option<usize>,
        /// Fail every command
        pub(crate) fail_commands: bool,
        pub(crate) data_sent: usize,
    }

    impl MockInterface {
        pub(crate) fn data(&self) -> Vec<&[u8]> {
            self.transactions
                .iter()
                .filter_map(|t| match t {
                    Transaction::Data(bytes) => Some(bytes.as_slice()),
                    _ => None,
                })
                .collect()
        }

        pub(crate) fn commands(&self) -> Vec<u8> {
            self.transactions
                .iter()
                .filter_map(|t| match t {
                    Transaction::Command(cmd) => Some(*cmd),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = &'static str;

        fn probe(&mut self) -> Result<(), Self::Error> {
            self.transactions.push(Transaction::Probe);
            if self.absent { Err("nack") } else { Ok(()) }
        }

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            if self.fail_commands {
                return Err("command nack");
            }
            self.transactions.push(Transaction::Command(command));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            assert!(data.len() <= MAX_DATA_CHUNK);
            let index = self.data_sent;
            self.data_sent += 1;
            if self.fail_data_at == Some(index) {
                return Err("timeout");
            }
            self.transactions.push(Transaction::Data(data.to_vec()));
            Ok(())
        }
    }

    pub(crate) struct MockDelay {
        pub(crate) total_ms: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ms += u64::from(ns) / 1_000_000;
        }

        fn delay_ms(&mut self, ms: u32) {
            self.total_ms += u64::from(ms);
        }
    }

    fn test_display(interface: MockInterface) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::SSD1306_128X64)
            .build()
            .unwrap();
        Display::new(interface, config)
    }

    fn initialized_display() -> Display<MockInterface> {
        let mut display = test_display(MockInterface::default());
        display.init(&mut MockDelay { total_ms: 0 }).unwrap();
        display.interface.transactions.clear();
        display
    }

    const INIT_SEQUENCE: [u8; 25] = [
        0xAE, 0xD5, 0x80, 0xA8, 0x3F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0x20, 0x00, 0xA1, 0xC8, 0xDA,
        0x12, 0x81, 0xCF, 0xD9, 0xF1, 0xDB, 0x40, 0xA4, 0xA6, 0xAF,
    ];

    #[test]
    fn test_init_waits_probes_then_configures() {
        let mut display = test_display(MockInterface::default());
        let mut delay = MockDelay { total_ms: 0 };
        assert!(display.init(&mut delay).is_ok());

        assert_eq!(delay.total_ms, 100);
        assert_eq!(display.state(), DeviceState::Initialized);
        assert_eq!(display.interface.transactions[0], Transaction::Probe);
        assert_eq!(display.interface.commands(), INIT_SEQUENCE.to_vec());
    }

    #[test]
    fn test_init_rotated_flips_scan_direction() {
        let config = Builder::new()
            .dimensions(Dimensions::SSD1306_128X64)
            .rotation(Rotation::Rotate180)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::default(), config);
        display.init(&mut MockDelay { total_ms: 0 }).unwrap();

        let commands = display.interface.commands();
        assert_eq!(commands[12], 0xA0);
        assert_eq!(commands[13], 0xC0);
    }

    #[test]
    fn test_init_small_panel_multiplex() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .com_pins(0x02)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::default(), config);
        display.init(&mut MockDelay { total_ms: 0 }).unwrap();

        let commands = display.interface.commands();
        assert_eq!(&commands[3..5], &[0xA8, 0x1F]);
        assert_eq!(&commands[14..16], &[0xDA, 0x02]);
    }

    #[test]
    fn test_probe_failure_is_terminal() {
        let mut display = test_display(MockInterface {
            absent: true,
            ..MockInterface::default()
        });
        let mut delay = MockDelay { total_ms: 0 };

        assert!(matches!(display.init(&mut delay), Err(Error::Probe("nack"))));
        assert_eq!(display.state(), DeviceState::Failed);
        assert!(display.interface.commands().is_empty());

        // No second probe
        assert!(matches!(display.init(&mut delay), Err(Error::NotInitialized)));
        assert_eq!(display.interface.transactions, alloc::vec![Transaction::Probe]);
    }

    #[test]
    fn test_config_failure_marks_failed() {
        let mut display = test_display(MockInterface {
            fail_commands: true,
            ..MockInterface::default()
        });
        let result = display.init(&mut MockDelay { total_ms: 0 });
        assert!(matches!(result, Err(Error::Interface("command nack"))));
        assert!(!display.is_initialized());
        assert_eq!(display.state(), DeviceState::Failed);
    }

    #[test]
    fn test_init_twice_is_noop() {
        let mut display = test_display(MockInterface::default());
        let mut delay = MockDelay { total_ms: 0 };
        display.init(&mut delay).unwrap();
        let sent = display.interface.transactions.len();

        assert!(display.init(&mut delay).is_ok());
        assert_eq!(display.interface.transactions.len(), sent);
        assert_eq!(delay.total_ms, 100);
    }

    #[test]
    fn test_flush_before_init_sends_nothing() {
        let mut display = test_display(MockInterface::default());
        let frame = alloc::vec![0u8; 1024];
        assert!(matches!(display.flush(&frame), Err(Error::NotInitialized)));
        assert!(display.interface.transactions.is_empty());
    }

    #[test]
    fn test_flush_after_failed_probe_sends_nothing() {
        let mut display = test_display(MockInterface {
            absent: true,
            ..MockInterface::default()
        });
        let _ = display.init(&mut MockDelay { total_ms: 0 });
        display.interface.transactions.clear();

        let frame = alloc::vec![0u8; 1024];
        assert!(matches!(display.flush(&frame), Err(Error::NotInitialized)));
        assert!(display.interface.transactions.is_empty());
    }

    #[test]
    fn test_flush_sets_window_then_sends_chunks() {
        let mut display = initialized_display();
        let frame: Vec<u8> = (0..1024).map(|i| i as u8).collect();
        assert!(display.flush(&frame).is_ok());

        assert_eq!(
            display.interface.commands(),
            alloc::vec![0x21, 0x00, 0x7F, 0x22, 0x00, 0x07]
        );
        let data = display.interface.data();
        assert_eq!(data.len(), 64);
        assert!(data.iter().all(|chunk| chunk.len() == 16));
        assert_eq!(data.concat(), frame);
    }

    #[test]
    fn test_flush_short_last_chunk() {
        let config = Builder::new()
            .dimensions(Dimensions::SSD1306_128X64)
            .chunk_size(10)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::default(), config);
        display.init(&mut MockDelay { total_ms: 0 }).unwrap();

        let frame = alloc::vec![0x5Au8; 1024];
        assert!(display.flush(&frame).is_ok());

        let data = display.interface.data();
        assert_eq!(data.len(), 103);
        assert_eq!(data.last().map(|chunk| chunk.len()), Some(4));
        assert_eq!(data.concat().len(), 1024);
    }

    #[test]
    fn test_flush_smallest_chunks_and_panel() {
        let config = Builder::new()
            .dimensions(Dimensions::new(8, 8).unwrap())
            .chunk_size(1)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::default(), config);
        display.init(&mut MockDelay { total_ms: 0 }).unwrap();
        display.interface.transactions.clear();

        let frame = [0xC3u8; 8];
        assert!(display.flush(&frame).is_ok());

        assert_eq!(
            display.interface.commands(),
            alloc::vec![0x21, 0x00, 0x07, 0x22, 0x00, 0x00]
        );
        let data = display.interface.data();
        assert_eq!(data.len(), 8);
        assert!(data.iter().all(|chunk| **chunk == [0xC3]));
    }

    #[test]
    fn test_flush_aborts_on_transfer_failure() {
        let mut display = initialized_display();
        display.interface.fail_data_at = Some(5);

        let frame = alloc::vec![0xFFu8; 1024];
        let result = display.flush(&frame);
        assert!(matches!(
            result,
            Err(Error::Transfer {
                chunk: 5,
                source: "timeout"
            })
        ));
        assert_eq!(display.interface.data().len(), 5);

        // Next frame starts over with the window and all chunks
        display.interface.transactions.clear();
        assert!(display.flush(&frame).is_ok());
        assert_eq!(display.interface.commands().len(), 6);
        assert_eq!(display.interface.data().len(), 64);
    }

    #[test]
    fn test_flush_buffer_too_small() {
        let mut display = initialized_display();
        let frame = alloc::vec![0u8; 1000];
        assert!(matches!(
            display.flush(&frame),
            Err(Error::BufferTooSmall {
                required: 1024,
                provided: 1000
            })
        ));
        assert!(display.interface.transactions.is_empty());
    }

    #[test]
    fn test_flush_twice_sends_identical_bytes() {
        let mut display = initialized_display();
        let frame: Vec<u8> = (0..1024).map(|i| (i * 7) as u8).collect();

        display.flush(&frame).unwrap();
        let first = display.interface.transactions.clone();
        display.interface.transactions.clear();
        display.flush(&frame).unwrap();
        assert_eq!(display.interface.transactions, first);
    }

    #[test]
    fn test_runtime_settings_require_init() {
        let mut display = test_display(MockInterface::default());
        assert!(matches!(display.set_contrast(0x10), Err(Error::NotInitialized)));
        assert!(matches!(display.set_inverted(true), Err(Error::NotInitialized)));
        assert!(matches!(display.set_display_on(false), Err(Error::NotInitialized)));
        assert!(display.interface.transactions.is_empty());
    }

    #[test]
    fn test_runtime_settings() {
        let mut display = initialized_display();
        display.set_contrast(0x10).unwrap();
        display.set_inverted(true).unwrap();
        display.set_inverted(false).unwrap();
        display.set_display_on(false).unwrap();

        assert_eq!(
            display.interface.commands(),
            alloc::vec![0x81, 0x10, 0xA7, 0xA6, 0xAE]
        );
        assert_eq!(display.config().contrast, 0x10);
    }
}
