//! Plant monitor status screen
//!
//! Lays out the latest sensor readings on a 128x64 panel:
//!
//! ```text
//!  y=0   Temp: 23.5 C
//!  y=12  Hum:  41.0 %
//!  y=24  Soil: 57   %
//!  y=36  [#########.......]    soil moisture bar
//!  y=50  Status: OK
//! ```
//!
//! The built-in font has no lowercase glyphs, so the lowercase parts of the
//! labels render blank ("T   :").
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::dashboard::{self, Readings, SoilStatus};
//! use ssd1306_fb::{Dimensions, Framebuffer};
//!
//! let mut fb = Framebuffer::new(Dimensions::SSD1306_128X64, [0u8; 1024]);
//! let readings = Readings {
//!     temperature_c: 23.46,
//!     humidity_pct: 41.0,
//!     soil_pct: 57,
//! };
//!
//! assert_eq!(readings.soil_status(), SoilStatus::Ok);
//! dashboard::render(&mut fb, &readings);
//! ```

use crate::color::Color;
use crate::framebuffer::Framebuffer;

/// Soil moisture below this percentage is reported as dry
pub const DRY_BELOW_PCT: i32 = 30;

/// Soil moisture below this percentage (and not dry) is reported as ok
pub const WET_FROM_PCT: i32 = 60;

const BAR_X: u32 = 0;
const BAR_Y: u32 = 36;
const BAR_WIDTH: u32 = 100;
const BAR_HEIGHT: u32 = 8;
// Fill sits two pixels inside the outline
const FILL_INSET: u32 = 2;
const FILL_MAX_WIDTH: i32 = 96;
const FILL_HEIGHT: u32 = 4;

/// Coarse soil moisture classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoilStatus {
    /// Below [`DRY_BELOW_PCT`]
    Dry,
    /// Between the two thresholds
    Ok,
    /// At or above [`WET_FROM_PCT`]
    Wet,
}

impl SoilStatus {
    /// Classify a moisture percentage
    pub fn from_percent(soil_pct: i32) -> Self {
        if soil_pct < DRY_BELOW_PCT {
            Self::Dry
        } else if soil_pct < WET_FROM_PCT {
            Self::Ok
        } else {
            Self::Wet
        }
    }

    /// Text shown on the status line
    pub fn label(self) -> &'static str {
        match self {
            Self::Dry => "DRY",
            Self::Ok => "OK",
            Self::Wet => "WET",
        }
    }
}

/// One set of sensor readings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readings {
    /// Air temperature in degrees Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
    /// Soil moisture in percent, nominally 0..=100
    pub soil_pct: i32,
}

impl Readings {
    /// Classification of [`soil_pct`](Self::soil_pct)
    pub fn soil_status(&self) -> SoilStatus {
        SoilStatus::from_percent(self.soil_pct)
    }
}

/// Width in pixels of the moisture bar fill
///
/// Out-of-range percentages are clamped so the fill stays inside the outline.
pub fn bar_fill_width(soil_pct: i32) -> u32 {
    (soil_pct.clamp(0, 100) * FILL_MAX_WIDTH / 100) as u32
}

/// Clear `fb` and draw the status screen for `readings`
///
/// Only the framebuffer is touched; sending it to the panel is up to the
/// caller.
pub fn render<B>(fb: &mut Framebuffer<B>, readings: &Readings)
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fb.clear();

    fb.print_str(0, 0, "Temp:");
    fb.print_float(36, 0, readings.temperature_c, 1);
    fb.print_str(72, 0, "C");

    fb.print_str(0, 12, "Hum:");
    fb.print_float(30, 12, readings.humidity_pct, 1);
    fb.print_str(66, 12, "%");

    fb.print_str(0, 24, "Soil:");
    fb.print_number(36, 24, readings.soil_pct);
    fb.print_str(60, 24, "%");

    fb.draw_rect(BAR_X, BAR_Y, BAR_WIDTH, BAR_HEIGHT, Color::On);
    fb.fill_rect(
        BAR_X + FILL_INSET,
        BAR_Y + FILL_INSET,
        bar_fill_width(readings.soil_pct),
        FILL_HEIGHT,
        Color::On,
    );

    let end = fb.print_str(0, 50, "Status: ");
    fb.print_str(end, 50, readings.soil_status().label());

    log::debug!(
        "Dashboard rendered: soil {}% {:?}",
        readings.soil_pct,
        readings.soil_status()
    );
}
