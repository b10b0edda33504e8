#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use arduino_hal::spi;
use dotclock::{
    Clock, Config, Ds3231, MatrixChain, PinBus, PresenceGate, SevenSegment, SpiTransport, GLYPHS,
};
use panic_halt as _;

const NUM_CHIPS: usize = 4; // one glyph per chip

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    let (spi, cs) = arduino_hal::Spi::new(
        dp.SPI,
        pins.d52.into_output(),
        pins.d51.into_output(),
        pins.d50.into_pull_up_input(),
        pins.d53.into_output(),
        spi::Settings::default(),
    );
    let matrix: MatrixChain<_, NUM_CHIPS> = MatrixChain::new(SpiTransport::new(spi, cs).unwrap());

    // segment data on PORTC, bit 0 = segment a
    let bus = PinBus::new([
        pins.d37.into_output().downgrade(),
        pins.d36.into_output().downgrade(),
        pins.d35.into_output().downgrade(),
        pins.d34.into_output().downgrade(),
        pins.d33.into_output().downgrade(),
        pins.d32.into_output().downgrade(),
        pins.d31.into_output().downgrade(),
        pins.d30.into_output().downgrade(),
    ]);
    // latches on PA3..PA6: hour tens, hour units, minute tens, minute units
    let segments = SevenSegment::new(
        bus,
        [
            pins.d25.into_output().downgrade(),
            pins.d26.into_output().downgrade(),
            pins.d27.into_output().downgrade(),
            pins.d28.into_output().downgrade(),
        ],
    );

    let i2c = arduino_hal::I2c::new(
        dp.TWI,
        pins.d20.into_pull_up_input(),
        pins.d21.into_pull_up_input(),
        50_000,
    );
    let rtc = Ds3231::new(i2c);
    let pir = PresenceGate::new(pins.d2.into_floating_input());

    let mut clock = Clock::new(
        matrix,
        segments,
        rtc,
        pir,
        arduino_hal::Delay::new(),
        GLYPHS,
        Config::default(),
    );

    ufmt::uwriteln!(&mut serial, "Initializing display chain...").unwrap_infallible();
    if clock.init().is_err() {
        ufmt::uwriteln!(&mut serial, "Display init failed").unwrap_infallible();
    }

    ufmt::uwriteln!(&mut serial, "Running clock...").unwrap_infallible();
    if clock.run().is_err() {
        ufmt::uwriteln!(&mut serial, "Clock stopped").unwrap_infallible();
    }

    loop {
        arduino_hal::delay_ms(1000);
    }
}
