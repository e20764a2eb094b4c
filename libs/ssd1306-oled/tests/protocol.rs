//! Bus traffic produced by the driver, checked byte for byte against the
//! controller's command set.

mod common;

use common::{COMMAND, DATA, MockI2c, cmd, no_splash, ready};
use embedded_hal::i2c::ErrorKind;
use ssd1306_oled::{Config, Error, PixelMode, Ssd1306};

fn init_sequence(height: u8, com_pins: u8, contrast: u8) -> Vec<Vec<u8>> {
    vec![
        cmd(&[0xAE, 0xD5, 0x80, 0xA8]),
        cmd(&[height - 1]),
        cmd(&[0xD3, 0x00, 0x40, 0x8D]),
        cmd(&[0x14]),
        cmd(&[0x20, 0x00, 0xA1, 0xC8]),
        cmd(&[0xDA]),
        cmd(&[com_pins]),
        cmd(&[0x81]),
        cmd(&[contrast]),
        cmd(&[0xD9]),
        cmd(&[0xF1]),
        cmd(&[0xDB, 0x40, 0xA4, 0xA6, 0x2E, 0xAF]),
    ]
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_begin_sends_init_sequence_for_128x64() {
    let bus = MockI2c::default();
    let mut display = Ssd1306::with_config(bus.clone(), 128, 64, no_splash());

    display.begin().unwrap();

    assert_eq!(bus.writes(), init_sequence(64, 0x12, 0xCF));
    assert!(bus.transactions().iter().all(|t| t.address == 0x3C));
    assert_eq!(display.contrast(), 0xCF);
}

#[test]
fn test_begin_selects_panel_parameters_by_geometry() {
    for (width, height, com_pins, contrast) in [
        (128, 32, 0x02, 0x8F),
        (96, 16, 0x02, 0xAF),
        // Unknown panel: defaults, not an error
        (64, 48, 0x02, 0x8F),
    ] {
        let bus = MockI2c::default();
        let mut display = Ssd1306::with_config(bus.clone(), width, height, no_splash());

        assert!(display.begin().is_ok());
        assert_eq!(bus.writes(), init_sequence(height, com_pins, contrast));
    }
}

#[test]
fn test_begin_allocation_failure_sends_nothing() {
    let bus = MockI2c::default();
    let config = Config {
        buffer_limit: Some(512),
        ..Config::default()
    };
    let mut display = Ssd1306::with_config(bus.clone(), 128, 64, config);

    let result = display.begin();

    assert!(matches!(result, Err(Error::Allocation { bytes: 1024 })));
    assert!(bus.transactions().is_empty());
    assert!(display.buffer().is_empty());

    // Nothing to draw into and nothing to push
    display.draw_pixel(0, 0, PixelMode::Set);
    assert!(!display.get_pixel(0, 0));
    display.display();
    assert!(bus.transactions().is_empty());
}

#[test]
fn test_begin_clears_and_keeps_buffer() {
    let (mut display, _bus) = ready(128, 64);
    display.draw_pixel(3, 3, PixelMode::Set);
    let before = display.buffer().as_ptr();

    display.begin().unwrap();

    assert_eq!(display.buffer().as_ptr(), before);
    assert!(display.buffer().iter().all(|&b| b == 0));
}

#[cfg(feature = "splash")]
#[test]
fn test_begin_draws_centred_splash() {
    let bus = MockI2c::default();
    let mut display = Ssd1306::new(bus, 128, 64);

    display.begin().unwrap();

    // 48x32 frame centred on 128x64 starts at (40, 16)
    assert!(display.get_pixel(40, 16));
    assert!(display.get_pixel(87, 47));
    assert!(!display.get_pixel(39, 16));
    assert!(!display.get_pixel(0, 0));
}

#[cfg(feature = "splash")]
#[test]
fn test_begin_draws_short_splash_on_short_panel() {
    let bus = MockI2c::default();
    let mut display = Ssd1306::new(bus, 96, 16);

    display.begin().unwrap();

    // 32x16 frame centred on 96x16 starts at (32, 0)
    assert!(display.get_pixel(32, 0));
    assert!(display.get_pixel(63, 15));
    assert!(!display.get_pixel(31, 0));
    assert!(!display.get_pixel(64, 0));
}

// ============================================================================
// Frame transfer
// ============================================================================

#[test]
fn test_display_sends_window_then_whole_buffer() {
    let (mut display, bus) = ready(128, 64);

    display.display();

    let transactions = bus.transactions();
    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[0].bytes, cmd(&[0x22, 0x00, 0xFF, 0x21, 0x00]));
    assert_eq!(transactions[1].bytes, cmd(&[127]));
    assert_eq!(transactions[2].selector(), DATA);
    assert_eq!(transactions[2].payload().len(), 1024);
}

#[test]
fn test_display_streams_buffer_in_page_order() {
    let (mut display, bus) = ready(128, 32);
    display.draw_pixel(0, 0, PixelMode::Set);
    display.draw_pixel(127, 31, PixelMode::Set);
    display.draw_pixel(10, 20, PixelMode::Set);

    display.display();

    let frame = bus.transactions()[2].clone();
    assert_eq!(frame.payload(), display.buffer());
    assert_eq!(frame.payload()[0], 0x01);
    assert_eq!(frame.payload()[10 + 2 * 128], 1 << 4);
    assert_eq!(frame.payload()[511], 0x80);
}

#[test]
fn test_display_partial_page_height() {
    // 20 rows round up to 3 pages
    let (mut display, bus) = ready(64, 20);

    display.display();

    let transactions = bus.transactions();
    assert_eq!(transactions[1].bytes, cmd(&[63]));
    assert_eq!(transactions[2].payload().len(), 64 * 3);
}

#[test]
fn test_single_pixel_lands_in_page_two() {
    let (mut display, _bus) = ready(128, 64);
    display.clear_display();

    display.draw_pixel(10, 20, PixelMode::Set);

    let buffer = display.buffer();
    // 10 + (20 / 8) * 128
    assert_eq!(buffer[266], 0b0001_0000);
    assert_eq!(buffer.iter().filter(|&&b| b != 0).count(), 1);
}

#[test]
fn test_buffer_mut_writes_reach_the_panel() {
    let (mut display, bus) = ready(128, 32);
    display.buffer_mut().fill(0xAA);

    display.display();

    assert!(bus.transactions()[2].payload().iter().all(|&b| b == 0xAA));
    assert!(display.get_pixel(0, 1));
    assert!(!display.get_pixel(0, 0));
}

// ============================================================================
// Device control
// ============================================================================

#[test]
fn test_dim_uses_zero_or_stored_contrast() {
    let (mut display, bus) = ready(128, 64);

    display.dim(true);
    display.dim(false);

    assert_eq!(
        bus.writes(),
        vec![cmd(&[0x81]), cmd(&[0x00]), cmd(&[0x81]), cmd(&[0xCF])]
    );
}

#[test]
fn test_invert_toggles_polarity_command() {
    let (mut display, bus) = ready(128, 64);
    display.draw_pixel(1, 1, PixelMode::Set);
    let frame = display.buffer().to_vec();

    display.invert(true);
    display.invert(false);

    assert_eq!(bus.writes(), vec![cmd(&[0xA7]), cmd(&[0xA6])]);
    assert_eq!(display.buffer(), frame.as_slice());
}

#[test]
fn test_horizontal_scrolls() {
    let (mut display, bus) = ready(128, 64);

    display.start_scroll_right(0x00, 0x0F);
    let right = bus.writes();
    bus.reset();
    display.start_scroll_left(0x02, 0x05);
    let left = bus.writes();

    assert_eq!(
        right,
        vec![
            cmd(&[0x26, 0x00]),
            cmd(&[0x00]),
            cmd(&[0x00]),
            cmd(&[0x0F]),
            cmd(&[0x00, 0xFF, 0x2F]),
        ]
    );
    assert_eq!(
        left,
        vec![
            cmd(&[0x27, 0x00]),
            cmd(&[0x02]),
            cmd(&[0x00]),
            cmd(&[0x05]),
            cmd(&[0x00, 0xFF, 0x2F]),
        ]
    );
}

#[test]
fn test_diagonal_scrolls_set_full_height_area_first() {
    let (mut display, bus) = ready(128, 32);

    display.start_scroll_diag_right(0x00, 0x07);
    let right = bus.writes();
    bus.reset();
    display.start_scroll_diag_left(0x01, 0x03);
    let left = bus.writes();

    assert_eq!(
        right,
        vec![
            cmd(&[0xA3, 0x00]),
            cmd(&[32]),
            cmd(&[0x29, 0x00]),
            cmd(&[0x00]),
            cmd(&[0x00]),
            cmd(&[0x07]),
            cmd(&[0x01, 0x2F]),
        ]
    );
    assert_eq!(left[2], cmd(&[0x2A, 0x00]));
    assert_eq!(left[3], cmd(&[0x01]));
    assert_eq!(left[5], cmd(&[0x03]));
}

#[test]
fn test_scroll_values_are_forwarded_unchecked() {
    let (mut display, bus) = ready(128, 64);

    display.start_scroll_right(0xFF, 0x00);

    assert_eq!(bus.writes()[1], cmd(&[0xFF]));
    assert_eq!(bus.writes()[3], cmd(&[0x00]));
}

#[test]
fn test_stop_scroll_and_raw_command() {
    let (mut display, bus) = ready(128, 64);

    display.stop_scroll();
    display.command(0xAE);

    assert_eq!(bus.writes(), vec![cmd(&[0x2E]), cmd(&[0xAE])]);
    assert!(bus.transactions().iter().all(|t| t.selector() == COMMAND));
}

// ============================================================================
// Bus failures
// ============================================================================

#[test]
fn test_bus_failures_are_swallowed_and_recorded() {
    let bus = MockI2c::default();
    bus.set_failing(true);
    let mut display = Ssd1306::with_config(bus.clone(), 128, 64, no_splash());

    assert!(display.begin().is_ok());
    display.display();

    // Every transaction was still attempted
    assert_eq!(bus.transactions().len(), 12 + 3);
    assert_eq!(display.bus_error_count(), 15);
    assert!(matches!(
        display.last_bus_error(),
        Some(Error::Bus(ErrorKind::Other))
    ));

    assert!(display.take_bus_error().is_some());
    assert!(display.last_bus_error().is_none());
}

#[test]
fn test_bus_recovers_after_transient_failure() {
    let (mut display, bus) = ready(128, 64);
    bus.set_failing(true);
    display.invert(true);
    bus.set_failing(false);

    display.invert(false);

    assert_eq!(display.bus_error_count(), 1);
    assert_eq!(bus.writes(), vec![cmd(&[0xA7]), cmd(&[0xA6])]);
}

#[test]
fn test_release_returns_bus() {
    let (display, bus) = ready(128, 64);
    let released = display.release();
    released.reset();
    assert!(bus.transactions().is_empty());
}
