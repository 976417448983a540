//! Host-side scenario test harness for the PCD8544 driver.
//!
//! Runs the real driver against [`Controller`], a software model of the
//! chip, so tests can assert on display RAM and controller registers
//! instead of raw byte streams.

mod controller;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use embedded_hal::delay::DelayNs;
use pcd8544::{Config, Display, Error, Font, GLYPH_WIDTH, HEIGHT, WIDTH};
use png::{BitDepth, ColorType, Encoder};

pub use controller::{BusFault, Controller, Transfer, Violation};

/// Delay that returns immediately and remembers how long it was asked to wait.
#[derive(Debug, Default)]
pub struct HostDelay {
    elapsed_ns: u64,
}

impl HostDelay {
    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }
}

impl DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
    }
}

/// Couples a driver, its controller model, and a delay for scenario tests.
pub struct LcdHarness {
    display: Display<Controller>,
    delay: HostDelay,
}

impl LcdHarness {
    /// Harness with the default configuration and a fresh controller.
    pub fn new() -> Self {
        Self::with_controller(Controller::new(), Config::default())
    }

    /// Harness with caller-provided controller state and configuration.
    pub fn with_controller(controller: Controller, config: Config) -> Self {
        Self {
            display: Display::new(controller, config),
            delay: HostDelay::default(),
        }
    }

    /// Harness that is already initialized.
    pub fn ready() -> Self {
        let mut harness = Self::new();
        harness.init().expect("init against the model should succeed");
        harness
    }

    /// Run the driver's init sequence.
    pub fn init(&mut self) -> Result<(), Error<Controller>> {
        self.display.init(&mut self.delay)
    }

    pub fn display(&self) -> &Display<Controller> {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut Display<Controller> {
        &mut self.display
    }

    pub fn controller(&self) -> &Controller {
        self.display.interface()
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        self.display.interface_mut()
    }

    /// Total time the driver asked to sleep.
    pub fn slept_ns(&self) -> u64 {
        self.delay.elapsed_ns()
    }

    /// The six RAM columns starting at `(x, y)`.
    pub fn cell(&self, x: u8, y: u8) -> [u8; GLYPH_WIDTH] {
        let start = y as usize * WIDTH as usize + x as usize;
        let ram = self.controller().ram();
        let mut cell = [0u8; GLYPH_WIDTH];
        for (i, column) in cell.iter_mut().enumerate() {
            *column = ram[(start + i) % ram.len()];
        }
        cell
    }

    /// Read `cells` glyphs of printable ASCII back from RAM.
    ///
    /// Cells that match no printable character come back as `?`.
    pub fn read_ascii(&self, font: Font, x: u8, y: u8, cells: usize) -> String {
        (0..cells)
            .map(|i| {
                let offset = x as usize + i * GLYPH_WIDTH;
                let cell_x = (offset % WIDTH as usize) as u8;
                let cell_y = y + (offset / WIDTH as usize) as u8;
                let cell = self.cell(cell_x, cell_y);
                (0x20u8..0x7F)
                    .find(|&code| *font.glyph(code) == cell)
                    .map_or('?', char::from)
            })
            .collect()
    }

    /// RAM as text, one line per pixel row, `#` for set bits.
    pub fn dump(&self) -> String {
        let controller = self.controller();
        let mut out = String::with_capacity((WIDTH as usize + 1) * HEIGHT as usize);
        for py in 0..HEIGHT as usize {
            for px in 0..WIDTH as usize {
                out.push(if controller.ram_pixel(px, py) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    /// Save what the glass shows to a PNG (white = clear, black = dark).
    pub fn save_screenshot_png(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let controller = self.controller();
        let (width, height) = (WIDTH as u32, HEIGHT as u32);
        let mut data = Vec::with_capacity((width * height) as usize);
        for py in 0..height as usize {
            for px in 0..width as usize {
                let value = if controller.visible_pixel(px, py) {
                    0u8
                } else {
                    255u8
                };
                data.push(value);
            }
        }

        let file = File::create(path).map_err(|e| e.to_string())?;
        let writer = BufWriter::new(file);
        let mut encoder = Encoder::new(writer, width, height);
        encoder.set_color(ColorType::Grayscale);
        encoder.set_depth(BitDepth::Eight);
        let mut png_writer = encoder.write_header().map_err(|e| e.to_string())?;
        png_writer
            .write_image_data(&data)
            .map_err(|e| e.to_string())
    }
}

impl Default for LcdHarness {
    fn default() -> Self {
        Self::new()
    }
}
