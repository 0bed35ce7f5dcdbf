//! Core bytecode emission logic.

use lcl_bytecode::{
    EffectId, HEADER_SIZE, Header, MAX_PALETTE_COLORS, MIN_PROGRAM_SIZE, offset,
};
use lcl_core::{Rgb, parse_hex_color, resolve_color};

use crate::diagnostics::{Warning, Warnings};
use crate::spec::{DEFAULT_BRIGHTNESS, DEFAULT_SPEED, PatternSpec};
use crate::{Error, PassResult};

use super::params::effect_params;

/// Color mode byte for a plain palette. The only mode the compiler emits.
const COLOR_MODE_PALETTE: u8 = 0;

/// Emit an LCL v4 program from a pattern.
///
/// Output depends only on `spec`: the same pattern always yields the same
/// bytes. Unusable colors become white (palette) or black (background) and
/// are reported as warnings.
pub fn emit(spec: &PatternSpec) -> PassResult<Vec<u8>> {
    let name = spec.effect.trim();
    if name.is_empty() {
        return Err(Error::MissingEffect);
    }
    let effect =
        EffectId::from_name(name).ok_or_else(|| Error::UnknownEffect(name.to_string()))?;

    let mut warnings = Warnings::new();
    let palette = resolve_palette(&spec.colors, &mut warnings);
    let secondary = resolve_background(spec.background(), &mut warnings);
    let params = effect_params(effect, spec);

    let mut bytes = vec![0u8; MIN_PROGRAM_SIZE + palette.len() * 3];

    // Core parameters; the eight reserved bytes stay zero
    bytes[offset::EFFECT] = effect.id();
    bytes[offset::BRIGHTNESS] = normalize(spec.brightness, DEFAULT_BRIGHTNESS);
    bytes[offset::SPEED] = normalize(spec.speed, DEFAULT_SPEED);
    bytes[offset::PARAM1..=offset::PARAM4].copy_from_slice(&params);
    bytes[offset::COLOR_MODE] = COLOR_MODE_PALETTE;

    // Color block
    put_color(&mut bytes, offset::PRIMARY_COLOR, palette[0]);
    put_color(&mut bytes, offset::SECONDARY_COLOR, secondary);
    bytes[offset::COLOR_COUNT] = palette.len() as u8;
    for (i, color) in palette.iter().enumerate() {
        put_color(&mut bytes, offset::PALETTE + i * 3, *color);
    }

    let header = Header::for_payload(&bytes[HEADER_SIZE..]);
    bytes[..HEADER_SIZE].copy_from_slice(&header.to_bytes());

    tracing::debug!(
        effect = effect.name(),
        len = bytes.len(),
        checksum = header.checksum,
        "emitted program"
    );
    Ok((bytes, warnings))
}

/// Brightness and speed: non-positive picks the default, large values cap at 255.
fn normalize(value: i32, default: i32) -> u8 {
    if value <= 0 {
        default as u8
    } else {
        value.min(255) as u8
    }
}

/// Resolve palette strings to colors. Never empty, never longer than the
/// format allows.
fn resolve_palette(colors: &[String], warnings: &mut Warnings) -> Vec<Rgb> {
    if colors.is_empty() {
        return vec![Rgb::WHITE];
    }
    if colors.len() > MAX_PALETTE_COLORS {
        warnings.push(Warning::PaletteTruncated {
            given: colors.len(),
            kept: MAX_PALETTE_COLORS,
        });
    }

    colors
        .iter()
        .take(MAX_PALETTE_COLORS)
        .map(|color| parse_or(color, Rgb::WHITE, warnings))
        .collect()
}

fn resolve_background(color: Option<&str>, warnings: &mut Warnings) -> Rgb {
    match color {
        Some(color) => parse_or(color, Rgb::BLACK, warnings),
        None => Rgb::BLACK,
    }
}

fn parse_or(color: &str, replacement: Rgb, warnings: &mut Warnings) -> Rgb {
    parse_hex_color(&resolve_color(color)).unwrap_or_else(|error| {
        warnings.push(Warning::InvalidColor {
            color: color.to_string(),
            error,
            replacement,
        });
        replacement
    })
}

fn put_color(bytes: &mut [u8], at: usize, color: Rgb) {
    bytes[at..at + 3].copy_from_slice(&color.to_bytes());
}
