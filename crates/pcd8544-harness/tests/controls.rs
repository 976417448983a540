//! Backlight, contrast, display mode and power control.

use pcd8544::{Bias, DisplayMode, Error, State, TemperatureCoefficient};
use pcd8544_harness::LcdHarness;

#[test]
fn backlight_works_before_init() {
    let mut harness = LcdHarness::new();

    harness
        .display_mut()
        .set_backlight(true)
        .expect("backlight should switch");
    assert!(harness.controller().backlight());
    assert_eq!(harness.display().state(), State::Uninitialized);

    harness
        .display_mut()
        .set_backlight(false)
        .expect("backlight should switch");
    assert!(!harness.controller().backlight());
}

#[test]
fn contrast_changes_vop_and_returns_to_basic_set() {
    let mut harness = LcdHarness::ready();

    harness
        .display_mut()
        .set_contrast(0x30)
        .expect("contrast should be accepted");
    assert_eq!(harness.controller().vop(), 0x30);
    assert!(harness.controller().is_extended());

    harness
        .display_mut()
        .write_string(0, 0, "A")
        .expect("write should succeed");
    assert!(!harness.controller().is_extended());
    assert!(harness.controller().violations().is_empty());
}

#[test]
fn contrast_above_seven_bits_is_rejected() {
    let mut harness = LcdHarness::ready();
    harness.controller_mut().clear_transfers();

    let result = harness.display_mut().set_contrast(0x80);

    assert!(matches!(result, Err(Error::OutOfRange(_))));
    assert!(harness.controller().transfers().is_empty());
    assert_eq!(harness.controller().vop(), 0x41);
}

#[test]
fn bias_and_temperature_coefficient() {
    let mut harness = LcdHarness::ready();

    harness
        .display_mut()
        .set_bias(Bias::N1To100)
        .expect("bias should be accepted");
    harness
        .display_mut()
        .set_temperature_coefficient(TemperatureCoefficient::TC1)
        .expect("temperature coefficient should be accepted");

    assert_eq!(harness.controller().bias(), 0);
    assert_eq!(harness.controller().temperature_coefficient(), 1);
}

#[test]
fn display_modes_change_what_the_glass_shows() {
    let mut harness = LcdHarness::ready();
    harness
        .display_mut()
        .write_char(b'|')
        .expect("write should succeed");
    // x = 3 is set in RAM, x = 0 is clear
    assert!(harness.controller().visible_pixel(3, 0));
    assert!(!harness.controller().visible_pixel(0, 0));

    harness
        .display_mut()
        .set_display_mode(DisplayMode::Inverse)
        .expect("mode should switch");
    assert!(!harness.controller().visible_pixel(3, 0));
    assert!(harness.controller().visible_pixel(0, 0));

    harness
        .display_mut()
        .set_display_mode(DisplayMode::AllSegmentsOn)
        .expect("mode should switch");
    assert!(harness.controller().visible_pixel(0, 0));

    harness
        .display_mut()
        .set_display_mode(DisplayMode::Blank)
        .expect("mode should switch");
    assert!(!harness.controller().visible_pixel(3, 0));
    assert!(harness.controller().ram_pixel(3, 0));
}

#[test]
fn power_down_keeps_ram() {
    let mut harness = LcdHarness::ready();
    harness
        .display_mut()
        .write_string(0, 0, "RAM")
        .expect("write should succeed");

    harness.display_mut().power_down().expect("power down");
    assert!(harness.controller().is_powered_down());
    assert!(harness.display().is_powered_down());
    assert!(!harness.controller().visible_pixel(1, 0));

    harness.display_mut().power_up().expect("power up");
    assert!(!harness.controller().is_powered_down());
    assert_eq!(harness.read_ascii(pcd8544::Font::REGULAR, 0, 0, 3), "RAM");
}

#[test]
fn extended_command_while_powered_down_keeps_power_down() {
    let mut harness = LcdHarness::ready();
    harness.display_mut().power_down().expect("power down");

    harness
        .display_mut()
        .set_contrast(0x20)
        .expect("contrast should be accepted");

    assert!(harness.controller().is_powered_down());
    assert_eq!(harness.controller().vop(), 0x20);
}
