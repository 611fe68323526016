//! Rendering engine: a [`Display`] paired with its [`Framebuffer`]
//!
//! [`GraphicDisplay`] is the one object an application keeps per panel. Draw
//! into it with the built-in primitives (or any embedded-graphics drawable
//! when the `graphics` feature is on), then call
//! [`display`](GraphicDisplay::display) to push the frame.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_fb::{Builder, Color, Dimensions, Display, GraphicDisplay, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let config = match Builder::new().dimensions(Dimensions::SSD1306_128X64).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let driver = Display::new(I2cInterface::new(MockI2c), config);
//! let mut oled = GraphicDisplay::new(driver, [0u8; 1024]);
//!
//! if oled.init(&mut delay).is_err() {
//!     // Panel missing: drawing still works, frames are just not sent
//! }
//!
//! oled.clear();
//! oled.print_str(0, 0, "HELLO");
//! oled.draw_line(0, 10, 127, 10, Color::On);
//! oled.fill_rect(2, 38, 46, 4, Color::On);
//! let _ = oled.display();
//! ```

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::font::GfxFont;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;
type GraphicsNewResult<I, T> = core::result::Result<T, Error<I>>;

/// Display driver plus framebuffer
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Framebuffer backing store, at least `dimensions.buffer_size()` bytes
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// The underlying display driver
    display: Display<I>,
    /// Frame being drawn
    framebuffer: Framebuffer<B>,
    /// Registered proportional font
    font: Option<&'static GfxFont>,
}

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new GraphicDisplay
    ///
    /// The framebuffer covers the driver's configured dimensions. Its initial
    /// contents are whatever `buffer` holds; call [`clear`](Self::clear)
    /// before the first frame.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is smaller than `dimensions.buffer_size()`.
    pub fn new(display: Display<I>, buffer: B) -> Self {
        let framebuffer = Framebuffer::new(display.dimensions(), buffer);
        Self {
            display,
            framebuffer,
            font: None,
        }
    }

    /// Try to create a new GraphicDisplay, returning an error if the buffer is too small
    ///
    /// This is the fallible version of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `buffer` cannot hold one frame.
    pub fn try_new(display: Display<I>, buffer: B) -> GraphicsNewResult<I, Self> {
        let framebuffer = Framebuffer::try_new(display.dimensions(), buffer)?;
        Ok(Self {
            display,
            framebuffer,
            font: None,
        })
    }

    /// Probe and configure the panel, see [`Display::init`]
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> GraphicsResult<I> {
        self.display.init(delay)
    }

    /// Turn every framebuffer pixel off
    ///
    /// Only the framebuffer changes; the panel keeps showing the last
    /// frame until [`display`](Self::display).
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Send the framebuffer to the panel
    ///
    /// Sending an unchanged framebuffer again produces identical bus traffic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] without touching the bus if
    /// [`init`](Self::init) has not succeeded, and [`Error::Transfer`] if a
    /// chunk fails mid-frame (the panel then shows a partial update until the
    /// next successful call).
    pub fn display(&mut self) -> GraphicsResult<I> {
        self.display.flush(self.framebuffer.as_bytes())
    }

    /// Set or clear one pixel, out-of-range coordinates are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.framebuffer.set_pixel(x, y, color);
    }

    /// Draw one 5x7 character with its top-left corner at (x, y)
    pub fn draw_char(&mut self, x: u32, y: u32, c: char) {
        self.framebuffer.draw_char(x, y, c);
    }

    /// Draw a string, returns the x position after the last drawn character
    pub fn print_str(&mut self, x: u32, y: u32, text: &str) -> u32 {
        self.framebuffer.print_str(x, y, text)
    }

    /// Draw an integer in decimal
    pub fn print_number(&mut self, x: u32, y: u32, value: i32) -> u32 {
        self.framebuffer.print_number(x, y, value)
    }

    /// Draw a float with `decimals` digits after the point
    pub fn print_float(&mut self, x: u32, y: u32, value: f32, decimals: u8) -> u32 {
        self.framebuffer.print_float(x, y, value, decimals)
    }

    /// Draw a line between two points, both included
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.framebuffer.draw_line(x0, y0, x1, y1, color);
    }

    /// Draw a rectangle outline
    pub fn draw_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        self.framebuffer.draw_rect(x, y, w, h, color);
    }

    /// Fill a rectangle
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        self.framebuffer.fill_rect(x, y, w, h, color);
    }

    /// Register a proportional font, or go back to none
    ///
    /// Text is still drawn with the built-in 5x7 font.
    pub fn set_font(&mut self, font: Option<&'static GfxFont>) {
        self.font = font;
    }

    /// Currently registered font
    pub fn font(&self) -> Option<&'static GfxFont> {
        self.font
    }

    /// Access the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Access the framebuffer mutably
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }

    /// Access the underlying Display
    pub fn display_driver(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// For runtime settings such as contrast or hardware inversion.
    pub fn display_driver_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Split back into driver and backing store
    pub fn release(self) -> (Display<I>, B) {
        (self.display, self.framebuffer.release())
    }
}

#[cfg(feature = "graphics")]
mod draw_target {
    use core::convert::Infallible;

    use embedded_graphics_core::{
        draw_target::DrawTarget,
        geometry::{Dimensions as _, OriginDimensions, Point, Size},
        prelude::Pixel,
        primitives::Rectangle,
    };

    use super::GraphicDisplay;
    use crate::color::Color;
    use crate::interface::DisplayInterface;

    impl<I, B> DrawTarget for GraphicDisplay<I, B>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        type Color = Color;
        type Error = Infallible;

        fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
        where
            Iter: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(Point { x, y }, color) in pixels {
                if x < 0 || y < 0 {
                    continue;
                }
                self.framebuffer.set_pixel(x as u32, y as u32, color);
            }

            Ok(())
        }

        fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
            let area = area.intersection(&self.bounding_box());
            if area.is_zero_sized() {
                return Ok(());
            }

            // Clipped to the panel, so the corner is non-negative
            self.framebuffer.fill_rect(
                area.top_left.x as u32,
                area.top_left.y as u32,
                area.size.width,
                area.size.height,
                color,
            );
            Ok(())
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            self.framebuffer.fill(color);
            Ok(())
        }
    }

    impl<I, B> OriginDimensions for GraphicDisplay<I, B>
    where
        I: DisplayInterface,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        fn size(&self) -> Size {
            Size::new(self.framebuffer.width(), self.framebuffer.height())
        }
    }
}
