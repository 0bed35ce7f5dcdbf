//! Decoded LCL program.
//!
//! [`Module`] owns the raw bytes and checks every structural invariant up front,
//! so accessors can index directly.

use lcl_core::Rgb;

use super::effect::EffectId;
use super::header::{Header, checksum};
use super::{HEADER_SIZE, MAX_PALETTE_COLORS, MIN_PROGRAM_SIZE, VERSION, offset};

/// Program load error.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("program too small: {0} bytes (minimum {MIN_PROGRAM_SIZE})")]
    TooShort(usize),
    #[error("invalid magic: expected LCL")]
    InvalidMagic,
    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u8),
    #[error("length mismatch: header says {header} payload bytes, got {actual}")]
    LengthMismatch { header: u16, actual: usize },
    #[error("checksum mismatch: header has 0x{header:02X}, payload gives 0x{computed:02X}")]
    ChecksumMismatch { header: u8, computed: u8 },
    #[error("palette too large: {0} colors (max {MAX_PALETTE_COLORS})")]
    PaletteTooLarge(u8),
    #[error("palette count {count} needs {expected} bytes, got {actual}")]
    PaletteLengthMismatch {
        count: u8,
        expected: usize,
        actual: usize,
    },
    #[error("unknown effect id: 0x{0:02X}")]
    UnknownEffect(u8),
}

/// A verified LCL program.
#[derive(Debug, Clone)]
pub struct Module {
    bytes: Vec<u8>,
    header: Header,
    effect: EffectId,
}

impl Module {
    /// Load a program from owned bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ModuleError> {
        if bytes.len() < MIN_PROGRAM_SIZE {
            return Err(ModuleError::TooShort(bytes.len()));
        }

        let mut raw = [0u8; HEADER_SIZE];
        raw.copy_from_slice(&bytes[..HEADER_SIZE]);
        let header = Header::from_bytes(&raw);

        if !header.validate_magic() {
            return Err(ModuleError::InvalidMagic);
        }
        if !header.validate_version() {
            return Err(ModuleError::UnsupportedVersion(header.version));
        }

        let payload = &bytes[HEADER_SIZE..];
        if header.payload_len as usize != payload.len() {
            return Err(ModuleError::LengthMismatch {
                header: header.payload_len,
                actual: payload.len(),
            });
        }

        let computed = checksum(payload);
        if computed != header.checksum {
            return Err(ModuleError::ChecksumMismatch {
                header: header.checksum,
                computed,
            });
        }

        let count = bytes[offset::COLOR_COUNT];
        if count as usize > MAX_PALETTE_COLORS {
            return Err(ModuleError::PaletteTooLarge(count));
        }
        let palette_bytes = bytes.len() - offset::PALETTE;
        let expected = count as usize * 3;
        if palette_bytes != expected {
            return Err(ModuleError::PaletteLengthMismatch {
                count,
                expected,
                actual: palette_bytes,
            });
        }

        let effect = EffectId::from_u8(bytes[offset::EFFECT])
            .ok_or(ModuleError::UnknownEffect(bytes[offset::EFFECT]))?;

        Ok(Self {
            bytes,
            header,
            effect,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn effect(&self) -> EffectId {
        self.effect
    }

    pub fn brightness(&self) -> u8 {
        self.bytes[offset::BRIGHTNESS]
    }

    pub fn speed(&self) -> u8 {
        self.bytes[offset::SPEED]
    }

    /// Effect-dependent param1..param4.
    pub fn params(&self) -> [u8; 4] {
        [
            self.bytes[offset::PARAM1],
            self.bytes[offset::PARAM2],
            self.bytes[offset::PARAM3],
            self.bytes[offset::PARAM4],
        ]
    }

    /// Bit 0 of param4.
    pub fn direction(&self) -> u8 {
        self.bytes[offset::PARAM4] & 0x01
    }

    pub fn color_mode(&self) -> u8 {
        self.bytes[offset::COLOR_MODE]
    }

    pub fn primary(&self) -> Rgb {
        self.color_at(offset::PRIMARY_COLOR)
    }

    pub fn secondary(&self) -> Rgb {
        self.color_at(offset::SECONDARY_COLOR)
    }

    pub fn palette_len(&self) -> usize {
        self.bytes[offset::COLOR_COUNT] as usize
    }

    pub fn palette(&self) -> Vec<Rgb> {
        (0..self.palette_len())
            .map(|i| self.color_at(offset::PALETTE + i * 3))
            .collect()
    }

    fn color_at(&self, at: usize) -> Rgb {
        Rgb::new(self.bytes[at], self.bytes[at + 1], self.bytes[at + 2])
    }
}
