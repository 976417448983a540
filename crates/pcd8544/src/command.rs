//! PCD8544 instruction set and instruction-set tracking
//!
//! Every instruction is a single byte. The controller has two instruction
//! sets selected by the `H` bit of the function-set instruction; the
//! [`Codec`] remembers which one is active and inserts the function-set
//! opcode whenever a command needs the other set.

use core::iter::{Chain, Once, once};
use core::option;

// Available in both instruction sets
pub const FUNCTION_SET: u8 = 0x20; // Function set (PD, V, H bits)
pub const FUNCTION_SET_POWER_DOWN: u8 = 0x04; // PD: chip power down
pub const FUNCTION_SET_VERTICAL: u8 = 0x02; // V: vertical addressing
pub const FUNCTION_SET_EXTENDED: u8 = 0x01; // H: extended instruction set

// Basic instruction set (H = 0)
pub const DISPLAY_CONTROL: u8 = 0x08; // Display control (D, E bits)
pub const SET_Y_ADDRESS: u8 = 0x40; // Set Y address of RAM, 0..=5
pub const SET_X_ADDRESS: u8 = 0x80; // Set X address of RAM, 0..=83

// Extended instruction set (H = 1)
pub const TEMPERATURE_COEFFICIENT: u8 = 0x04; // Temperature control, TC0..TC3
pub const BIAS_SYSTEM: u8 = 0x10; // Bias system, BS0..BS2
pub const SET_VOP: u8 = 0x80; // Operating voltage (contrast), 7 bits

/// Instruction set selected by the `H` bit of function set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionSet {
    /// H = 0: display control and RAM addressing
    Normal,
    /// H = 1: temperature coefficient, bias and operating voltage
    Extended,
}

/// Display configuration (`D` and `E` bits of display control)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    /// All pixels off
    Blank = 0b000,
    /// RAM contents, set bits are dark
    #[default]
    Normal = 0b100,
    /// All pixels on
    AllSegmentsOn = 0b001,
    /// RAM contents, set bits are light
    Inverse = 0b101,
}

/// Bias system, named after the multiplex rate it suits
///
/// The usual 84x48 glass is 1:48.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Bias {
    N1To100 = 0,
    N1To80 = 1,
    N1To65 = 2,
    #[default]
    N1To48 = 3,
    N1To40 = 4,
    N1To24 = 5,
    N1To18 = 6,
    N1To10 = 7,
}

/// Temperature coefficient of the operating voltage
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TemperatureCoefficient {
    #[default]
    TC0 = 0,
    TC1 = 1,
    TC2 = 2,
    TC3 = 3,
}

/// A single controller instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    FunctionSet {
        power_down: bool,
        vertical: bool,
        extended: bool,
    },
    DisplayControl(DisplayMode),
    SetY(u8),
    SetX(u8),
    TemperatureCoefficient(TemperatureCoefficient),
    Bias(Bias),
    SetVop(u8),
}

impl Command {
    /// Opcode byte for this instruction
    ///
    /// Arguments are masked to their field width; range checks belong to
    /// the caller.
    pub fn byte(self) -> u8 {
        match self {
            Command::FunctionSet {
                power_down,
                vertical,
                extended,
            } => {
                let mut byte = FUNCTION_SET;
                if power_down {
                    byte |= FUNCTION_SET_POWER_DOWN;
                }
                if vertical {
                    byte |= FUNCTION_SET_VERTICAL;
                }
                if extended {
                    byte |= FUNCTION_SET_EXTENDED;
                }
                byte
            }
            Command::DisplayControl(mode) => DISPLAY_CONTROL | mode as u8,
            Command::SetY(y) => SET_Y_ADDRESS | (y & 0x07),
            Command::SetX(x) => SET_X_ADDRESS | (x & 0x7F),
            Command::TemperatureCoefficient(tc) => TEMPERATURE_COEFFICIENT | tc as u8,
            Command::Bias(bias) => BIAS_SYSTEM | bias as u8,
            Command::SetVop(vop) => SET_VOP | (vop & 0x7F),
        }
    }

    /// Instruction set this command must be sent in, `None` if valid in both
    pub fn instruction_set(self) -> Option<InstructionSet> {
        match self {
            Command::FunctionSet { .. } => None,
            Command::DisplayControl(_) | Command::SetY(_) | Command::SetX(_) => {
                Some(InstructionSet::Normal)
            }
            Command::TemperatureCoefficient(_) | Command::Bias(_) | Command::SetVop(_) => {
                Some(InstructionSet::Extended)
            }
        }
    }
}

/// Commands to transmit for one logical command, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoded {
    /// Function set switching the instruction set, if one is needed
    pub switch: Option<Command>,
    /// The requested command
    pub command: Command,
}

impl IntoIterator for Encoded {
    type Item = Command;
    type IntoIter = Chain<option::IntoIter<Command>, Once<Command>>;

    fn into_iter(self) -> Self::IntoIter {
        self.switch.into_iter().chain(once(self.command))
    }
}

/// Tracks the function-set bits last sent to the controller
///
/// [`encode`](Codec::encode) never changes state. Call
/// [`apply`](Codec::apply) for each command once it has actually been
/// transmitted, so a failed transfer leaves the tracked state matching the
/// controller's last accepted instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    /// `None` until the first function set after a hardware reset
    active: Option<InstructionSet>,
    power_down: bool,
    vertical: bool,
}

impl Codec {
    /// Codec in the post-reset state (instruction set unknown)
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active instruction set, if known
    pub fn active(&self) -> Option<InstructionSet> {
        self.active
    }

    /// Whether the last function set powered the chip down
    pub fn is_powered_down(&self) -> bool {
        self.power_down
    }

    /// Forget the controller state, e.g. after a hardware reset
    pub fn invalidate(&mut self) {
        *self = Self::default();
    }

    /// Function set keeping the tracked V bit and instruction set
    pub fn function_set(&self, power_down: bool) -> Command {
        Command::FunctionSet {
            power_down,
            vertical: self.vertical,
            extended: self.active == Some(InstructionSet::Extended),
        }
    }

    /// Plan the transmission of `command`
    pub fn encode(&self, command: Command) -> Encoded {
        let switch = match command.instruction_set() {
            Some(set) if self.active != Some(set) => Some(Command::FunctionSet {
                power_down: self.power_down,
                vertical: self.vertical,
                extended: set == InstructionSet::Extended,
            }),
            _ => None,
        };

        Encoded { switch, command }
    }

    /// Record that `command` was accepted by the controller
    pub fn apply(&mut self, command: Command) {
        if let Command::FunctionSet {
            power_down,
            vertical,
            extended,
        } = command
        {
            self.power_down = power_down;
            self.vertical = vertical;
            self.active = Some(if extended {
                InstructionSet::Extended
            } else {
                InstructionSet::Normal
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(encoded: Encoded) -> alloc::vec::Vec<u8> {
        encoded.into_iter().map(Command::byte).collect()
    }

    #[test]
    fn opcode_encoding_matches_datasheet() {
        assert_eq!(
            Command::FunctionSet {
                power_down: false,
                vertical: false,
                extended: true
            }
            .byte(),
            0x21
        );
        assert_eq!(
            Command::FunctionSet {
                power_down: true,
                vertical: false,
                extended: false
            }
            .byte(),
            0x24
        );
        assert_eq!(Command::DisplayControl(DisplayMode::Blank).byte(), 0x08);
        assert_eq!(Command::DisplayControl(DisplayMode::Normal).byte(), 0x0C);
        assert_eq!(Command::DisplayControl(DisplayMode::AllSegmentsOn).byte(), 0x09);
        assert_eq!(Command::DisplayControl(DisplayMode::Inverse).byte(), 0x0D);
        assert_eq!(Command::SetY(5).byte(), 0x45);
        assert_eq!(Command::SetX(83).byte(), 0xD3);
        assert_eq!(
            Command::TemperatureCoefficient(TemperatureCoefficient::TC2).byte(),
            0x06
        );
        assert_eq!(Command::Bias(Bias::N1To48).byte(), 0x13);
        assert_eq!(Command::SetVop(0x41).byte(), 0xC1);
    }

    #[test]
    fn arguments_are_masked_to_field_width() {
        // Y is a 3-bit field, a wider value must not spill into the opcode
        assert_eq!(Command::SetY(0x0F).byte(), 0x47);
        assert_eq!(Command::SetY(0x48).byte(), 0x40);
        // X and Vop share bit 7 with their opcode
        assert_eq!(Command::SetX(0xD3).byte(), 0xD3);
        assert_eq!(Command::SetVop(0x80).byte(), 0x80);
    }

    #[test]
    fn unknown_mode_always_switches() {
        let codec = Codec::new();
        assert_eq!(codec.active(), None);
        assert_eq!(bytes(codec.encode(Command::SetX(0))), [0x20, 0x80]);
        assert_eq!(bytes(codec.encode(Command::SetVop(0x41))), [0x21, 0xC1]);
    }

    #[test]
    fn switch_is_emitted_once_per_mode_change() {
        let mut codec = Codec::new();
        let mut sent = alloc::vec::Vec::new();

        for command in [
            Command::SetVop(0x41),
            Command::Bias(Bias::N1To48),
            Command::DisplayControl(DisplayMode::Normal),
            Command::SetY(0),
            Command::SetX(0),
        ] {
            for step in codec.encode(command) {
                sent.push(step.byte());
                codec.apply(step);
            }
        }

        assert_eq!(sent, [0x21, 0xC1, 0x13, 0x20, 0x0C, 0x40, 0x80]);
        assert_eq!(codec.active(), Some(InstructionSet::Normal));
    }

    #[test]
    fn encode_does_not_change_state() {
        let codec = Codec::new();
        let _ = codec.encode(Command::SetVop(10));
        assert_eq!(codec, Codec::new());
    }

    #[test]
    fn switch_preserves_power_down_bit() {
        let mut codec = Codec::new();
        let power_down = codec.function_set(true);
        codec.apply(power_down);
        assert!(codec.is_powered_down());

        let encoded = codec.encode(Command::Bias(Bias::N1To40));
        assert_eq!(bytes(encoded), [0x25, 0x14]);
    }

    #[test]
    fn invalidate_forgets_mode() {
        let mut codec = Codec::new();
        let function_set = codec.function_set(false);
        codec.apply(function_set);
        assert_eq!(codec.active(), Some(InstructionSet::Normal));

        codec.invalidate();
        assert_eq!(codec.active(), None);
    }
}
