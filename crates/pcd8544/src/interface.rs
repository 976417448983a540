//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the PCD8544 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The PCD8544 requires:
//! - SPI bus (SDIN + SCLK), mode 0, up to 4 MHz
//! - 4 GPIO outputs:
//!   - **RST**: Reset (active low)
//!   - **CE**: Chip enable (active low)
//!   - **DC**: Data/Command select (low=command, high=data)
//!   - **BL**: Backlight (high=on)
//!
//! Chip enable is driven by the interface rather than the bus, so the bus is
//! an [`SpiBus`] and not an `SpiDevice`. Transfer timeouts are the bus
//! implementation's concern; a timed-out write surfaces as its error.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pcd8544::{DisplayInterface, Interface};
//!
//! let mut interface = Interface::new(spi_bus, rst_pin, ce_pin, dc_pin, bl_pin);
//!
//! // Pulse reset
//! interface.reset(&mut delay)?;
//!
//! // Extended instruction set, then Vop = 0x41
//! interface.send_command(0x21)?;
//! interface.send_command(0xC1)?;
//!
//! // One column of display RAM
//! interface.send_data(0xFF)?;
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// How long reset is held low
pub const RESET_PULSE_MS: u32 = 50;

/// Trait for hardware interface to PCD8544 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation, or with a software model of the controller.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Every call moves
/// exactly one byte; implementations must not retry on failure.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set CE low (select)
    /// 2. Set DC low (command mode)
    /// 3. Send the byte and wait for the transfer to finish
    /// 4. Return CE and DC high (idle), even if the transfer failed
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a display RAM byte to the controller
    ///
    /// Same framing as [`send_command`](DisplayInterface::send_command)
    /// with DC high.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: u8) -> Result<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST low
    /// 2. Wait at least [`RESET_PULSE_MS`]
    /// 3. Set RST high
    ///
    /// # Errors
    ///
    /// Returns an error if the reset line cannot be driven.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Drive the backlight line, high for on
    ///
    /// # Errors
    ///
    /// Returns an error if the backlight line cannot be driven.
    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug, PartialEq, Eq)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error, including transfer timeouts
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Spi(e) => write!(f, "SPI error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for PCD8544
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// This is the bus and line binding of a display; it is created once and
/// owned by the [`Display`](crate::display::Display).
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `CE` - Chip enable pin implementing [`OutputPin`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`]
pub struct Interface<SPI, RST, CE, DC, BL> {
    /// SPI bus for communication
    spi: SPI,
    /// Reset pin (active low)
    rst: RST,
    /// Chip enable pin (active low)
    ce: CE,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Backlight pin (high=on)
    bl: BL,
}

impl<SPI, RST, CE, DC, BL> Interface<SPI, RST, CE, DC, BL> {
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `rst` - Reset pin (output, active low)
    /// * `ce` - Chip enable pin (output, active low)
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `bl` - Backlight pin (output, high=on)
    pub fn new(spi: SPI, rst: RST, ce: CE, dc: DC, bl: BL) -> Self {
        Self {
            spi,
            rst,
            ce,
            dc,
            bl,
        }
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, RST, CE, DC, BL) {
        (self.spi, self.rst, self.ce, self.dc, self.bl)
    }
}

impl<SPI, RST, CE, DC, BL, PinErr> Interface<SPI, RST, CE, DC, BL>
where
    SPI: SpiBus,
    CE: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
{
    /// Frame one byte with CE and DC, then return both lines to idle
    fn transfer(
        &mut self,
        data: bool,
        byte: u8,
    ) -> Result<(), InterfaceError<SPI::Error, PinErr>> {
        self.ce.set_low().map_err(InterfaceError::Pin)?;

        let result = self.write_selected(data, byte);

        let idle = self
            .ce
            .set_high()
            .and_then(|()| self.dc.set_high())
            .map_err(InterfaceError::Pin);

        result.and(idle)
    }

    fn write_selected(
        &mut self,
        data: bool,
        byte: u8,
    ) -> Result<(), InterfaceError<SPI::Error, PinErr>> {
        if data {
            self.dc.set_high().map_err(InterfaceError::Pin)?;
        } else {
            self.dc.set_low().map_err(InterfaceError::Pin)?;
        }
        self.spi.write(&[byte]).map_err(InterfaceError::Spi)?;
        self.spi.flush().map_err(InterfaceError::Spi)
    }
}

impl<SPI, RST, CE, DC, BL, PinErr> DisplayInterface for Interface<SPI, RST, CE, DC, BL>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    RST: OutputPin<Error = PinErr>,
    CE: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.transfer(false, command)
    }

    fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
        self.transfer(true, data)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        // Reset sequence: LOW -> wait 50ms -> HIGH
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        if on {
            self.bl.set_high().map_err(InterfaceError::Pin)
        } else {
            self.bl.set_low().map_err(InterfaceError::Pin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, EventLog, Line, MockBus, MockDelay, MockError, MockPin, event_log};

    fn interface(log: &EventLog) -> Interface<MockBus, MockPin, MockPin, MockPin, MockPin> {
        Interface::new(
            MockBus::new(log),
            MockPin::new(Line::Reset, log),
            MockPin::new(Line::ChipEnable, log),
            MockPin::new(Line::DataCommand, log),
            MockPin::new(Line::Backlight, log),
        )
    }

    #[test]
    fn command_framing() {
        let log = event_log();
        let mut interface = interface(&log);

        interface.send_command(0x21).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Line(Line::ChipEnable, false),
                Event::Line(Line::DataCommand, false),
                Event::Write(0x21),
                Event::Flush,
                Event::Line(Line::ChipEnable, true),
                Event::Line(Line::DataCommand, true),
            ]
        );
    }

    #[test]
    fn data_framing() {
        let log = event_log();
        let mut interface = interface(&log);

        interface.send_data(0x7E).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Line(Line::ChipEnable, false),
                Event::Line(Line::DataCommand, true),
                Event::Write(0x7E),
                Event::Flush,
                Event::Line(Line::ChipEnable, true),
                Event::Line(Line::DataCommand, true),
            ]
        );
    }

    #[test]
    fn failed_transfer_still_deselects() {
        let log = event_log();
        let mut interface = interface(&log);
        interface.spi.fail_next();

        let result = interface.send_command(0x40);

        assert_eq!(result, Err(InterfaceError::Spi(MockError)));
        let log = log.borrow();
        assert!(!log.contains(&Event::Flush));
        assert_eq!(
            log[log.len() - 2..],
            [
                Event::Line(Line::ChipEnable, true),
                Event::Line(Line::DataCommand, true),
            ]
        );
    }

    #[test]
    fn reset_pulse() {
        let log = event_log();
        let mut interface = interface(&log);
        let mut delay = MockDelay::new(&log);

        interface.reset(&mut delay).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Line(Line::Reset, false),
                Event::Delay(u64::from(RESET_PULSE_MS) * 1_000_000),
                Event::Line(Line::Reset, true),
            ]
        );
    }

    #[test]
    fn backlight_polarity() {
        let log = event_log();
        let mut interface = interface(&log);

        interface.set_backlight(true).unwrap();
        interface.set_backlight(false).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Line(Line::Backlight, true),
                Event::Line(Line::Backlight, false),
            ]
        );
    }
}
