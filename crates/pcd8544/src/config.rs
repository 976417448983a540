//! Controller geometry, configuration types and builder

pub use crate::command::{Bias, DisplayMode, TemperatureCoefficient};
pub use crate::error::BuilderError;

/// Display width in pixels (X addresses 0..=83)
pub const WIDTH: u8 = 84;
/// Display height in pixels
pub const HEIGHT: u8 = 48;
/// Text rows of 8 pixels (Y addresses 0..=5)
pub const ROWS: u8 = HEIGHT / 8;
/// Bytes of display RAM
pub const RAM_SIZE: usize = WIDTH as usize * ROWS as usize;

/// Largest operating voltage (Vop) value
pub const MAX_CONTRAST: u8 = 0x7F;
/// Operating voltage used when none is configured
pub const DEFAULT_CONTRAST: u8 = 0x41;

/// Controller parameters applied by [`Display::init`](crate::Display::init)
///
/// Use `Builder` to create a Config, or `Config::default()` for the
/// common Nokia 5110 module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Operating voltage (contrast), 0..=127
    pub contrast: u8,
    /// Bias system
    pub bias: Bias,
    /// Temperature coefficient, left at the controller's reset value when `None`
    pub temperature_coefficient: Option<TemperatureCoefficient>,
    /// Display mode set at the end of initialization
    pub display_mode: DisplayMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contrast: DEFAULT_CONTRAST,
            bias: Bias::N1To48,
            temperature_coefficient: None,
            display_mode: DisplayMode::Normal,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use pcd8544::{Bias, Builder, TemperatureCoefficient};
///
/// let config = Builder::new()
///     .contrast(0x38)
///     .bias(Bias::N1To40)
///     .temperature_coefficient(TemperatureCoefficient::TC2)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.contrast, 0x38);
/// ```
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set operating voltage (contrast)
    pub fn contrast(mut self, value: u8) -> Self {
        self.config.contrast = value;
        self
    }

    /// Set bias system
    pub fn bias(mut self, bias: Bias) -> Self {
        self.config.bias = bias;
        self
    }

    /// Send a temperature coefficient during initialization
    pub fn temperature_coefficient(mut self, tc: TemperatureCoefficient) -> Self {
        self.config.temperature_coefficient = Some(tc);
        self
    }

    /// Set the display mode applied after initialization
    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.config.display_mode = mode;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidContrast` if contrast exceeds [`MAX_CONTRAST`]
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.config.contrast > MAX_CONTRAST {
            return Err(BuilderError::InvalidContrast(self.config.contrast));
        }
        Ok(self.config)
    }
}
