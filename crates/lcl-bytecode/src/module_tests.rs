//! Tests for program decoding.

use lcl_core::Rgb;

use crate::{EffectId, HEADER_SIZE, Header, Module, ModuleError, offset};

/// Assemble a well-formed program by hand.
pub(crate) fn program(effect: u8, params: [u8; 4], palette: &[[u8; 3]]) -> Vec<u8> {
    let mut payload = vec![0u8; 23];
    payload[0] = effect;
    payload[1] = 200;
    payload[2] = 128;
    payload[3..7].copy_from_slice(&params);
    if let Some(first) = palette.first() {
        payload[16..19].copy_from_slice(first);
    }
    payload[22] = palette.len() as u8;
    for color in palette {
        payload.extend_from_slice(color);
    }

    let mut bytes = Header::for_payload(&payload).to_bytes().to_vec();
    bytes.extend_from_slice(&payload);
    bytes
}

#[test]
fn decode_valid_program() {
    let bytes = program(0x0B, [0, 3, 8, 0], &[[255, 0, 0], [0, 0, 255]]);
    let total = bytes.len();
    let module = Module::from_bytes(bytes).unwrap();

    assert_eq!(module.effect(), EffectId::Scanner);
    assert_eq!(module.brightness(), 200);
    assert_eq!(module.speed(), 128);
    assert_eq!(module.params(), [0, 3, 8, 0]);
    assert_eq!(module.primary(), Rgb::new(255, 0, 0));
    assert_eq!(module.secondary(), Rgb::BLACK);
    assert_eq!(module.palette(), vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);
    assert_eq!(module.header().payload_len as usize, total - HEADER_SIZE);
}

#[test]
fn direction_reads_bit_zero_of_param4() {
    let bytes = program(0x09, [3, 0, 0, 0b0000_0101], &[]);
    let module = Module::from_bytes(bytes).unwrap();
    assert_eq!(module.direction(), 1);

    let bytes = program(0x09, [3, 0, 0, 0b0000_0010], &[]);
    assert_eq!(Module::from_bytes(bytes).unwrap().direction(), 0);
}

#[test]
fn reject_short_program() {
    let err = Module::from_bytes(vec![b'L', b'C', b'L', 4]).unwrap_err();
    assert!(matches!(err, ModuleError::TooShort(4)));
}

#[test]
fn reject_bad_magic() {
    let mut bytes = program(0x01, [0; 4], &[]);
    bytes[0] = b'X';
    assert!(matches!(
        Module::from_bytes(bytes),
        Err(ModuleError::InvalidMagic)
    ));
}

#[test]
fn reject_old_version() {
    let mut bytes = program(0x01, [0; 4], &[]);
    bytes[offset::VERSION] = 2;
    assert!(matches!(
        Module::from_bytes(bytes),
        Err(ModuleError::UnsupportedVersion(2))
    ));
}

#[test]
fn reject_corrupted_payload() {
    let mut bytes = program(0x07, [55, 120, 0, 0], &[[255, 0, 0]]);
    bytes[offset::BRIGHTNESS] ^= 0xFF;
    assert!(matches!(
        Module::from_bytes(bytes),
        Err(ModuleError::ChecksumMismatch { .. })
    ));
}

#[test]
fn reject_truncated_program() {
    let mut bytes = program(0x07, [55, 120, 0, 0], &[[255, 0, 0]]);
    bytes.pop();
    assert!(matches!(
        Module::from_bytes(bytes),
        Err(ModuleError::LengthMismatch { header: 26, actual: 25 })
    ));
}

#[test]
fn reject_palette_count_mismatch() {
    let mut payload = program(0x01, [0; 4], &[[1, 2, 3]])[HEADER_SIZE..].to_vec();
    payload[22] = 2;
    let mut bytes = Header::for_payload(&payload).to_bytes().to_vec();
    bytes.extend_from_slice(&payload);

    assert!(matches!(
        Module::from_bytes(bytes),
        Err(ModuleError::PaletteLengthMismatch {
            count: 2,
            expected: 6,
            actual: 3
        })
    ));
}

#[test]
fn reject_unknown_effect() {
    let bytes = program(0x03, [0; 4], &[]);
    assert!(matches!(
        Module::from_bytes(bytes),
        Err(ModuleError::UnknownEffect(3))
    ));
}

#[test]
fn module_error_display() {
    let err = ModuleError::InvalidMagic;
    assert_eq!(err.to_string(), "invalid magic: expected LCL");

    let err = ModuleError::UnsupportedVersion(2);
    assert_eq!(err.to_string(), "unsupported version: 2 (expected 4)");

    let err = ModuleError::ChecksumMismatch {
        header: 0x10,
        computed: 0x2F,
    };
    assert_eq!(
        err.to_string(),
        "checksum mismatch: header has 0x10, payload gives 0x2F"
    );
}
