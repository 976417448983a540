//! PCD8544 LCD Driver
//!
//! A text-mode driver for the PCD8544 controller found on 84x48 monochrome
//! modules such as the Nokia 5110 display.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - Automatic instruction-set switching
//! - 6x8 regular and bold fonts with ASCII and Cyrillic glyphs
//! - Cursor tracking that mirrors the controller's address increment
//! - Contrast, bias, temperature coefficient, display mode and power-down control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use pcd8544::{Builder, Display, Font, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let rst = MockPin;
//! # let ce = MockPin;
//! # let dc = MockPin;
//! # let bl = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, rst, ce, dc, bl);
//! let config = match Builder::new().contrast(0x41).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//! let _ = display.set_backlight(true);
//! let _ = display.write_string(0, 0, "Hello");
//! display.set_font(Font::BOLD);
//! let _ = display.write_string(0, 2, "Привет");
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// PCD8544 instruction set
pub mod command;
/// Display geometry, configuration types and builder
pub mod config;
/// Text cursor and RAM addressing
pub mod cursor;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Glyph tables and font registry
pub mod font;
/// Hardware interface abstraction
pub mod interface;

#[cfg(test)]
mod mock;

pub use command::{Bias, DisplayMode, TemperatureCoefficient};
pub use config::{
    Builder, Config, DEFAULT_CONTRAST, HEIGHT, MAX_CONTRAST, RAM_SIZE, ROWS, WIDTH,
};
pub use cursor::{Cursor, MAX_X, MAX_Y};
pub use display::{Display, State};
pub use error::{BuilderError, Error, OutOfRange};
pub use font::{FONTS, Font, GLYPH_WIDTH, Glyph};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, RESET_PULSE_MS};
