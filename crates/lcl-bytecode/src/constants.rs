//! Bytecode format constants.

/// Magic bytes identifying an LCL program.
pub const MAGIC: [u8; 3] = *b"LCL";

/// Current bytecode format version (fixed layout).
pub const VERSION: u8 = 4;

pub const HEADER_SIZE: usize = 8;

/// Effect, brightness, speed, four params, color mode and eight reserved bytes.
pub const CORE_PARAMS_SIZE: usize = 16;

/// Primary (3) + secondary (3) + palette count (1).
pub const COLOR_BLOCK_SIZE: usize = 7;

pub const MAX_PALETTE_COLORS: usize = 8;

/// Size of a program with an empty palette.
pub const MIN_PROGRAM_SIZE: usize = HEADER_SIZE + CORE_PARAMS_SIZE + COLOR_BLOCK_SIZE;

/// Byte offsets of every fixed field.
pub mod offset {
    pub const MAGIC: usize = 0;
    pub const VERSION: usize = 3;
    /// Big-endian u16: bytes after the header.
    pub const LENGTH: usize = 4;
    pub const CHECKSUM: usize = 6;
    pub const FLAGS: usize = 7;
    pub const EFFECT: usize = 8;
    pub const BRIGHTNESS: usize = 9;
    pub const SPEED: usize = 10;
    pub const PARAM1: usize = 11;
    pub const PARAM2: usize = 12;
    pub const PARAM3: usize = 13;
    pub const PARAM4: usize = 14;
    pub const COLOR_MODE: usize = 15;
    pub const RESERVED: usize = 16;
    pub const PRIMARY_COLOR: usize = 24;
    pub const SECONDARY_COLOR: usize = 27;
    pub const COLOR_COUNT: usize = 30;
    pub const PALETTE: usize = 31;
}

const _: () = assert!(offset::PALETTE == MIN_PROGRAM_SIZE);
const _: () = assert!(offset::PRIMARY_COLOR == HEADER_SIZE + CORE_PARAMS_SIZE);
