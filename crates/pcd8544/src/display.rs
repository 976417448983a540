//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{Bias, Codec, Command, DisplayMode, TemperatureCoefficient};
use crate::config::{Config, MAX_CONTRAST, RAM_SIZE};
use crate::cursor::Cursor;
use crate::error::{Error, OutOfRange};
use crate::font::{self, Font};
use crate::interface::DisplayInterface;

/// Driver lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Created, or a previous `init` failed
    Uninitialized,
    /// Reset line is being pulsed
    Resetting,
    /// Configuration sequence and clear in progress
    Configuring,
    /// Accepting drawing commands
    Ready,
}

/// Core display driver for PCD8544
///
/// Owns the hardware interface, the controller parameters, the text cursor
/// and the active font. There is no internal locking; share an instance
/// between threads only behind a mutex.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    state: State,
    /// Function-set bits last accepted by the controller
    codec: Codec,
    pub(crate) cursor: Cursor,
    /// Set when the cursor moved without telling the controller
    pub(crate) address_stale: bool,
    font: Font,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`init`](Display::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: State::Uninitialized,
            codec: Codec::new(),
            cursor: Cursor::ORIGIN,
            address_stale: false,
            font: Font::default(),
        }
    }

    /// Perform hardware reset, configure the controller and clear the screen
    ///
    /// Sequence: reset pulse, extended instruction set, Vop, temperature
    /// coefficient (if configured), bias, normal instruction set, display
    /// mode, then 504 blank bytes.
    ///
    /// # Errors
    ///
    /// Any interface error aborts initialization and leaves the driver
    /// [`State::Uninitialized`]. Nothing is retried.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        match self.reset_and_configure(delay) {
            Ok(()) => {
                self.transition(State::Ready);
                Ok(())
            }
            Err(e) => {
                log::warn!("pcd8544: init failed in {:?}", self.state);
                self.transition(State::Uninitialized);
                Err(e)
            }
        }
    }

    fn reset_and_configure<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.transition(State::Resetting);
        self.codec.invalidate();
        self.interface.reset(delay).map_err(Error::Interface)?;

        self.transition(State::Configuring);
        self.command(Command::SetVop(self.config.contrast))?;
        if let Some(tc) = self.config.temperature_coefficient {
            self.command(Command::TemperatureCoefficient(tc))?;
        }
        self.command(Command::Bias(self.config.bias))?;
        self.command(Command::DisplayControl(self.config.display_mode))?;

        self.clear_ram()
    }

    /// Blank the whole display RAM and return the cursor to `(0, 0)`
    pub fn clear(&mut self) -> Result<(), Error<I>> {
        self.require_ready()?;
        self.clear_ram()
    }

    fn clear_ram(&mut self) -> Result<(), Error<I>> {
        self.address(Cursor::ORIGIN)?;
        // a full pass wraps the address back to the origin
        for _ in 0..RAM_SIZE {
            self.send_data(0x00)?;
            self.cursor.advance();
        }
        Ok(())
    }

    /// Render one character code at the cursor
    ///
    /// - `\n` moves to column 0 of the next row without bus traffic; the
    ///   controller address is re-sent before the next glyph
    /// - `\t` renders as a space
    /// - the UTF-8 lead bytes `0xD0` and `0xD1` render as nothing and do not
    ///   move the cursor
    /// - anything else writes its 6 glyph columns from the active font
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for a newline on the last row, or an interface
    /// error. A failure inside a glyph leaves the columns already sent on
    /// screen and the cursor after them.
    pub fn write_char(&mut self, code: u8) -> Result<(), Error<I>> {
        self.require_ready()?;
        match code {
            b'\n' => {
                self.cursor = self.cursor.next_line()?;
                self.address_stale = true;
                Ok(())
            }
            b'\t' => self.write_glyph(b' '),
            code if font::is_skip_code(code) => Ok(()),
            code => self.write_glyph(code),
        }
    }

    fn write_glyph(&mut self, code: u8) -> Result<(), Error<I>> {
        if self.address_stale {
            self.address(self.cursor)?;
        }
        for &column in self.font.glyph(code) {
            self.send_data(column)?;
            self.cursor.advance();
        }
        Ok(())
    }

    /// Render every byte of `text` from the cursor on
    pub fn write_text(&mut self, text: &str) -> Result<(), Error<I>> {
        text.bytes().try_for_each(|code| self.write_char(code))
    }

    /// Move to `(x, y)` and render `text` there
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for a position outside the display, in which
    /// case nothing is drawn.
    pub fn write_string(&mut self, x: u8, y: u8, text: &str) -> Result<(), Error<I>> {
        self.set_position(x, y)?;
        self.write_text(text)
    }

    /// Switch the backlight on or off
    ///
    /// Works in any state.
    pub fn set_backlight(&mut self, on: bool) -> Result<(), Error<I>> {
        self.interface.set_backlight(on).map_err(Error::Interface)
    }

    /// Change the operating voltage (contrast)
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for values above 127.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<I>> {
        self.require_ready()?;
        if contrast > MAX_CONTRAST {
            return Err(OutOfRange {
                value: contrast,
                max: MAX_CONTRAST,
            }
            .into());
        }
        self.command(Command::SetVop(contrast))
    }

    /// Blank, normal, all segments on, or inverse video
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), Error<I>> {
        self.require_ready()?;
        self.command(Command::DisplayControl(mode))
    }

    /// Change the bias system
    pub fn set_bias(&mut self, bias: Bias) -> Result<(), Error<I>> {
        self.require_ready()?;
        self.command(Command::Bias(bias))
    }

    /// Change the temperature coefficient
    pub fn set_temperature_coefficient(
        &mut self,
        tc: TemperatureCoefficient,
    ) -> Result<(), Error<I>> {
        self.require_ready()?;
        self.command(Command::TemperatureCoefficient(tc))
    }

    /// Enter power-down mode; display RAM is retained
    pub fn power_down(&mut self) -> Result<(), Error<I>> {
        self.require_ready()?;
        self.command(self.codec.function_set(true))
    }

    /// Leave power-down mode
    pub fn power_up(&mut self) -> Result<(), Error<I>> {
        self.require_ready()?;
        self.command(self.codec.function_set(false))
    }

    /// Whether the controller was last told to power down
    pub fn is_powered_down(&self) -> bool {
        self.codec.is_powered_down()
    }

    /// Select the font used by subsequent character writes
    pub fn set_font(&mut self, font: Font) {
        log::debug!("pcd8544: font {}", font.name());
        self.font = font;
    }

    /// Active font
    pub fn font(&self) -> Font {
        self.font
    }

    /// Lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Borrow the hardware interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Mutably borrow the hardware interface
    ///
    /// Bytes sent directly bypass cursor and instruction-set tracking.
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Give back the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    pub(crate) fn require_ready(&self) -> Result<(), Error<I>> {
        match self.state {
            State::Ready => Ok(()),
            state => Err(Error::NotReady(state)),
        }
    }

    fn transition(&mut self, state: State) {
        log::debug!("pcd8544: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Send a command, switching instruction set first if needed
    pub(crate) fn command(&mut self, command: Command) -> Result<(), Error<I>> {
        for step in self.codec.encode(command) {
            self.send_command(step.byte())?;
            self.codec.apply(step);
        }
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> Result<(), Error<I>> {
        log::trace!("pcd8544: command {cmd:#04x}");
        self.interface.send_command(cmd).map_err(|e| {
            log::warn!("pcd8544: command {cmd:#04x} failed: {e:?}");
            Error::Interface(e)
        })
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: u8) -> Result<(), Error<I>> {
        self.interface.send_data(data).map_err(|e| {
            log::warn!("pcd8544: data write failed: {e:?}");
            Error::Interface(e)
        })
    }
}

/// Lets `write!` render formatted text at the cursor
impl<I> core::fmt::Write for Display<I>
where
    I: DisplayInterface,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_text(s).map_err(|_| core::fmt::Error)
    }
}
