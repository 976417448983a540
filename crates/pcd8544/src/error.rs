//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`OutOfRange`] - A cursor coordinate or register value outside its field
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus and pin errors
//!
//! ## Example
//!
//! ```
//! use pcd8544::{Builder, BuilderError, Cursor};
//!
//! // Contrast is a 7-bit field
//! let result = Builder::new().contrast(0x80).build();
//! assert!(matches!(result, Err(BuilderError::InvalidContrast(0x80))));
//!
//! // Column 84 does not exist
//! let result = Cursor::new(84, 0);
//! assert!(result.is_err());
//! ```

use crate::display::State;
use crate::interface::DisplayInterface;

/// A value rejected because it exceeds its field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    /// Value that was requested
    pub value: u8,
    /// Largest accepted value
    pub max: u8,
}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} out of range (max {})", self.value, self.max)
    }
}

impl core::error::Error for OutOfRange {}

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation. The transfer was not retried; cursor and controller
    /// state are left as they were after the last successful byte.
    Interface(I::Error),
    /// Coordinate or register value rejected before any bus traffic
    OutOfRange(OutOfRange),
    /// Operation needs an initialized display
    ///
    /// Carries the state the driver was in.
    NotReady(State),
}

impl<I: DisplayInterface> From<OutOfRange> for Error<I> {
    fn from(err: OutOfRange) -> Self {
        Error::OutOfRange(err)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::OutOfRange(e) => write!(f, "Value {e}"),
            Error::NotReady(state) => write!(f, "Display not ready ({state:?})"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Operating voltage does not fit the 7-bit Vop field
    InvalidContrast(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::InvalidContrast(value) => write!(
                f,
                "Invalid contrast {value:#04x} (max {:#04x})",
                crate::config::MAX_CONTRAST
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
