//! Text cursor and RAM addressing
//!
//! The controller keeps its own X/Y write address and advances it after
//! every data byte: X runs 0..=83, then continues at X = 0 of the next
//! bank, and after the last bank returns to bank 0. [`Cursor`] mirrors that
//! address so the driver always knows where the next glyph will land.
//!
//! Explicit moves are never clamped or wrapped. An out-of-range request is
//! rejected with [`Error::OutOfRange`] before anything reaches the bus.

use crate::command::Command;
use crate::config::{ROWS, WIDTH};
use crate::display::Display;
use crate::error::{Error, OutOfRange};
use crate::interface::DisplayInterface;

/// Largest column (X address)
pub const MAX_X: u8 = WIDTH - 1;
/// Largest row (Y address)
pub const MAX_Y: u8 = ROWS - 1;

/// Logical write position, column `0..=83` and row `0..=5`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    x: u8,
    y: u8,
}

impl Cursor {
    /// Top-left corner
    pub const ORIGIN: Cursor = Cursor { x: 0, y: 0 };

    /// Create a cursor, rejecting coordinates outside the display
    pub fn new(x: u8, y: u8) -> Result<Self, OutOfRange> {
        Ok(Self {
            x: check_x(x)?,
            y: check_y(y)?,
        })
    }

    /// Column
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Row
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Follow the controller's address increment after one data byte
    pub(crate) fn advance(&mut self) {
        if self.x < MAX_X {
            self.x += 1;
        } else {
            self.x = 0;
            self.y = if self.y < MAX_Y { self.y + 1 } else { 0 };
        }
    }

    /// Start of the next row
    pub(crate) fn next_line(&self) -> Result<Self, OutOfRange> {
        Cursor::new(0, self.y + 1)
    }
}

impl From<Cursor> for (u8, u8) {
    fn from(cursor: Cursor) -> Self {
        (cursor.x, cursor.y)
    }
}

fn check_x(x: u8) -> Result<u8, OutOfRange> {
    if x > MAX_X {
        return Err(OutOfRange {
            value: x,
            max: MAX_X,
        });
    }
    Ok(x)
}

fn check_y(y: u8) -> Result<u8, OutOfRange> {
    if y > MAX_Y {
        return Err(OutOfRange {
            value: y,
            max: MAX_Y,
        });
    }
    Ok(y)
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Current cursor position as `(x, y)`
    ///
    /// Glyph writes advance the cursor along with the controller's address.
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor.into()
    }

    /// Move to column `x`, keeping the row
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for `x > 83`, with no bus traffic.
    pub fn set_x(&mut self, x: u8) -> Result<(), Error<I>> {
        self.require_ready()?;
        let x = check_x(x)?;
        self.command(Command::SetX(x))?;
        self.cursor.x = x;
        Ok(())
    }

    /// Move to row `y`, keeping the column
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for `y > 5`, with no bus traffic.
    pub fn set_y(&mut self, y: u8) -> Result<(), Error<I>> {
        self.require_ready()?;
        let y = check_y(y)?;
        self.command(Command::SetY(y))?;
        self.cursor.y = y;
        Ok(())
    }

    /// Move to `(x, y)`, sending the Y address before the X address
    ///
    /// Both coordinates are checked first, so a rejected move leaves the
    /// cursor and the controller untouched.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for `x > 83` or `y > 5`.
    pub fn set_position(&mut self, x: u8, y: u8) -> Result<(), Error<I>> {
        self.require_ready()?;
        let target = Cursor::new(x, y)?;
        self.address(target)
    }

    /// Send a validated position to the controller
    pub(crate) fn address(&mut self, target: Cursor) -> Result<(), Error<I>> {
        self.command(Command::SetY(target.y))?;
        self.cursor.y = target.y;
        self.command(Command::SetX(target.x))?;
        self.cursor.x = target.x;
        self.address_stale = false;
        Ok(())
    }
}
