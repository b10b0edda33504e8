pub const MAX_INTENSITY: u8 = 15; // 4 bits
pub const DEFAULT_INTENSITY: u8 = 7;
pub const ROWS: u8 = 8;
pub const DWELL_MS: u32 = 5_000;
pub const CYCLE_DELAY_MS: u32 = 100;

/// One 8x8 bitmap, row 1 first, MSB is the leftmost column.
pub type Glyph = [u8; ROWS as usize];

// bit 0 = segment a ... bit 6 = segment g
pub const SEGMENTS: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
];

pub mod glyph {
    use super::Glyph;

    pub const V: Glyph = [
        0b0100_0001, 0b0100_0001, 0b0100_0001, 0b0100_0001, 0b0010_0010, 0b0010_0010, 0b0001_0100,
        0b0000_1000,
    ];
    pub const E_LOWER: Glyph = [
        0b0000_0001, 0b0000_0010, 0b0000_0010, 0b0111_0010, 0b1000_1010, 0b1111_1010, 0b1000_0010,
        0b0111_0001,
    ];
    pub const C: Glyph = [
        0b1100_0111, 0b0010_1000, 0b0000_1000, 0b0000_1000, 0b0000_1111, 0b0000_1000, 0b0010_1000,
        0b1100_1000,
    ];
    pub const A: Glyph = [
        0b0011_1100, 0b1010_0010, 0b1010_0010, 0b1010_0010, 0b1010_0010, 0b1010_0010, 0b1010_0010,
        0b1011_1100,
    ];
}

/// Glyph shown on each chip position while motion is present.
pub const GLYPHS: [Glyph; 4] = [glyph::V, glyph::E_LOWER, glyph::C, glyph::A];

#[allow(dead_code)]
pub mod register {
    pub const NO_OP: u8 = 0x00;
    pub const ROW_OFFSET: u8 = 0x01; // Row1 - Row8
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // raw bitmap for rows 8:1
        pub const DECODE_ALL: u8 = 0xFF; // Code-B for rows 8:1
    }

    pub mod shutdown {
        pub const SHUTDOWN_MODE: u8 = 0x00; // bit 0 clear: shutdown mode
        pub const NORMAL_OPERATION: u8 = 0x01; // bit 0 set: normal operation
    }

    pub mod display_test {
        pub const NORMAL_OPERATION: u8 = 0x00;
        pub const DISPLAY_TEST_MODE: u8 = 0x01;
    }
}
