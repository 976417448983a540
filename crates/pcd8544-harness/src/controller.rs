//! Software model of the PCD8544 controller.

use embedded_hal::delay::DelayNs;
use pcd8544::command::{
    BIAS_SYSTEM, DISPLAY_CONTROL, FUNCTION_SET, FUNCTION_SET_EXTENDED, FUNCTION_SET_POWER_DOWN,
    FUNCTION_SET_VERTICAL, SET_VOP, SET_X_ADDRESS, SET_Y_ADDRESS, TEMPERATURE_COEFFICIENT,
};
use pcd8544::{DisplayInterface, DisplayMode, MAX_X, MAX_Y, RAM_SIZE, RESET_PULSE_MS, WIDTH};

/// One byte as seen on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transfer {
    Command(u8),
    Data(u8),
}

/// Something the real controller would not accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Opcode with no meaning in the active instruction set
    UnknownInstruction { byte: u8, extended: bool },
    /// X address above 83 or Y address above 5
    AddressOutOfRange(u8),
}

/// Injected bus failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusFault {
    /// Zero-based index of the byte transfer that failed
    pub index: usize,
}

impl core::fmt::Display for BusFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "bus fault at transfer {}", self.index)
    }
}

impl std::error::Error for BusFault {}

/// Decodes the byte stream the driver produces and keeps the resulting
/// controller registers and display RAM.
#[derive(Clone, Debug)]
pub struct Controller {
    ram: [u8; RAM_SIZE],
    x: u8,
    y: u8,
    power_down: bool,
    vertical: bool,
    extended: bool,
    display_mode: DisplayMode,
    vop: u8,
    bias: u8,
    temperature_coefficient: u8,
    backlight: bool,
    resets: usize,
    transfers: Vec<Transfer>,
    violations: Vec<Violation>,
    fail_at: Option<usize>,
    attempted: usize,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Controller straight after power-on.
    ///
    /// RAM is undefined on real glass; the model fills it with a pattern so a
    /// missing clear shows up in tests.
    pub fn new() -> Self {
        let mut ram = [0u8; RAM_SIZE];
        for (i, byte) in ram.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(37) | 0x01;
        }
        let mut controller = Self {
            ram,
            x: 0,
            y: 0,
            power_down: true,
            vertical: false,
            extended: false,
            display_mode: DisplayMode::Blank,
            vop: 0,
            bias: 0,
            temperature_coefficient: 0,
            backlight: false,
            resets: 0,
            transfers: Vec::new(),
            violations: Vec::new(),
            fail_at: None,
            attempted: 0,
        };
        controller.reset_registers();
        controller
    }

    /// Make the byte transfer with zero-based `index` fail once.
    ///
    /// The index counts every command and data byte since creation.
    pub fn fail_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Arm a one-shot failure `ahead` transfers from now.
    pub fn fail_after(&mut self, ahead: usize) {
        self.fail_at = Some(self.attempted + ahead);
    }

    /// Register state the datasheet specifies for RES low.
    fn reset_registers(&mut self) {
        self.x = 0;
        self.y = 0;
        self.power_down = true;
        self.vertical = false;
        self.extended = false;
        self.display_mode = DisplayMode::Blank;
        self.vop = 0;
        self.bias = 0;
        self.temperature_coefficient = 0;
    }

    pub fn ram(&self) -> &[u8; RAM_SIZE] {
        &self.ram
    }

    /// RAM address the next data byte lands at, as `(x, y)`.
    pub fn address(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn is_powered_down(&self) -> bool {
        self.power_down
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn vop(&self) -> u8 {
        self.vop
    }

    /// Raw BS0..BS2 bits.
    pub fn bias(&self) -> u8 {
        self.bias
    }

    /// Raw TC0..TC1 bits.
    pub fn temperature_coefficient(&self) -> u8 {
        self.temperature_coefficient
    }

    pub fn backlight(&self) -> bool {
        self.backlight
    }

    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Every byte accepted since creation, in order.
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Forget recorded transfers, keeping registers and RAM.
    pub fn clear_transfers(&mut self) {
        self.transfers.clear();
    }

    /// RAM bit for pixel `(px, py)`, set bits are dark in normal mode.
    pub fn ram_pixel(&self, px: usize, py: usize) -> bool {
        let byte = self.ram[(py / 8) * WIDTH as usize + px];
        byte & (1 << (py % 8)) != 0
    }

    /// Whether pixel `(px, py)` is dark on the glass.
    pub fn visible_pixel(&self, px: usize, py: usize) -> bool {
        if self.power_down {
            return false;
        }
        match self.display_mode {
            DisplayMode::Blank => false,
            DisplayMode::AllSegmentsOn => true,
            DisplayMode::Normal => self.ram_pixel(px, py),
            DisplayMode::Inverse => !self.ram_pixel(px, py),
        }
    }

    fn begin_transfer(&mut self) -> Result<(), BusFault> {
        let index = self.attempted;
        self.attempted += 1;
        if self.fail_at == Some(index) {
            self.fail_at = None;
            log::debug!("controller: injected fault at transfer {index}");
            return Err(BusFault { index });
        }
        Ok(())
    }

    fn violation(&mut self, violation: Violation) {
        log::warn!("controller: {violation:?}");
        self.violations.push(violation);
    }

    fn execute(&mut self, byte: u8) {
        log::trace!("controller: command {byte:#04x}");
        if byte == 0x00 {
            return;
        }
        if byte & 0xF8 == FUNCTION_SET {
            self.power_down = byte & FUNCTION_SET_POWER_DOWN != 0;
            self.vertical = byte & FUNCTION_SET_VERTICAL != 0;
            self.extended = byte & FUNCTION_SET_EXTENDED != 0;
            return;
        }
        if self.extended {
            self.execute_extended(byte);
        } else {
            self.execute_basic(byte);
        }
    }

    fn execute_basic(&mut self, byte: u8) {
        if byte & SET_X_ADDRESS != 0 {
            let x = byte & 0x7F;
            if x > MAX_X {
                self.violation(Violation::AddressOutOfRange(byte));
            } else {
                self.x = x;
            }
        } else if byte & 0xF8 == SET_Y_ADDRESS {
            let y = byte & 0x07;
            if y > MAX_Y {
                self.violation(Violation::AddressOutOfRange(byte));
            } else {
                self.y = y;
            }
        } else if byte & 0xFA == DISPLAY_CONTROL {
            self.display_mode = match byte & 0x05 {
                0b000 => DisplayMode::Blank,
                0b100 => DisplayMode::Normal,
                0b001 => DisplayMode::AllSegmentsOn,
                _ => DisplayMode::Inverse,
            };
        } else {
            self.violation(Violation::UnknownInstruction {
                byte,
                extended: false,
            });
        }
    }

    fn execute_extended(&mut self, byte: u8) {
        if byte & SET_VOP != 0 {
            self.vop = byte & 0x7F;
        } else if byte & 0xF8 == BIAS_SYSTEM {
            self.bias = byte & 0x07;
        } else if byte & 0xFC == TEMPERATURE_COEFFICIENT {
            self.temperature_coefficient = byte & 0x03;
        } else {
            self.violation(Violation::UnknownInstruction {
                byte,
                extended: true,
            });
        }
    }

    fn write_ram(&mut self, byte: u8) {
        self.ram[self.y as usize * WIDTH as usize + self.x as usize] = byte;
        if self.vertical {
            if self.y < MAX_Y {
                self.y += 1;
            } else {
                self.y = 0;
                self.x = if self.x < MAX_X { self.x + 1 } else { 0 };
            }
        } else if self.x < MAX_X {
            self.x += 1;
        } else {
            self.x = 0;
            self.y = if self.y < MAX_Y { self.y + 1 } else { 0 };
        }
    }
}

impl DisplayInterface for Controller {
    type Error = BusFault;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.begin_transfer()?;
        self.transfers.push(Transfer::Command(command));
        self.execute(command);
        Ok(())
    }

    fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
        self.begin_transfer()?;
        self.transfers.push(Transfer::Data(data));
        self.write_ram(data);
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        delay.delay_ms(RESET_PULSE_MS);
        self.reset_registers();
        self.resets += 1;
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.backlight = on;
        Ok(())
    }
}
