use chrono::{Local, Timelike};
use embedded_graphics::{
    mono_font::{MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use ssd1306_oled::{DeviceConfig, DeviceResult, Ssd1306};
use std::thread;
use std::time::Duration;

const CLOCK_TICKS: u32 = 10;
const SPLASH_HOLD: Duration = Duration::from_secs(2);
const EFFECT_HOLD: Duration = Duration::from_secs(3);

fn main() -> DeviceResult<()> {
    env_logger::init();
    log::info!("SSD1306 OLED Demo");

    let mut display = ssd1306_oled::open(DeviceConfig::default())?;
    display.display();
    thread::sleep(SPLASH_HOLD);

    draw_frame(&mut display)?;
    for _ in 0..CLOCK_TICKS {
        draw_clock(&mut display)?;
        display.display();
        thread::sleep(Duration::from_secs(1));
    }

    run_effects(&mut display);

    log::info!("Demo finished, blanking panel.");
    display.clear(BinaryColor::Off)?;
    display.display();
    Ok(())
}

fn draw_frame<D: DrawTarget<Color = BinaryColor>>(display: &mut D) -> Result<(), D::Error> {
    display.clear(BinaryColor::Off)?;
    let bounding_box = display.bounding_box();
    log::debug!(
        "left: {}, size: {}",
        bounding_box.top_left,
        bounding_box.size
    );

    Rectangle::new(bounding_box.top_left, bounding_box.size)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)?;

    let character_style = MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build();
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(
        "SSD1306",
        Point::new(bounding_box.center().x, 4),
        character_style,
        text_style,
    )
    .draw(display)?;
    Ok(())
}

fn draw_clock<D: DrawTarget<Color = BinaryColor>>(display: &mut D) -> Result<(), D::Error> {
    let time_text_style = MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .background_color(BinaryColor::Off)
        .build();
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    let now = Local::now();
    let time_str = format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second());
    Text::with_text_style(
        &time_str,
        display.bounding_box().center(),
        time_text_style,
        text_style,
    )
    .draw(display)?;
    Ok(())
}

fn run_effects<I2C: embedded_hal::i2c::I2c>(display: &mut Ssd1306<I2C>) {
    log::info!("Scrolling right");
    display.start_scroll_right(0x00, 0x0F);
    thread::sleep(EFFECT_HOLD);
    log::info!("Scrolling diagonally left");
    display.start_scroll_diag_left(0x00, 0x0F);
    thread::sleep(EFFECT_HOLD);
    display.stop_scroll();
    // Scrolling moves GDDRAM contents, repaint from the buffer
    display.display();

    log::info!("Inverted, then dimmed");
    display.invert(true);
    thread::sleep(EFFECT_HOLD);
    display.invert(false);
    display.dim(true);
    thread::sleep(EFFECT_HOLD);
    display.dim(false);

    if display.bus_error_count() > 0 {
        log::warn!(
            "{} bus transactions failed, last: {:?}",
            display.bus_error_count(),
            display.last_bus_error()
        );
    }
}
