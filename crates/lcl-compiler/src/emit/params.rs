//! Effect parameter derivation.
//!
//! Maps the effect-specific IR fields onto param1..param4. Zero (or less) in
//! the IR means "not given" and picks the effect default. Results saturate to
//! `0..=255` rather than wrapping.

use lcl_bytecode::EffectId;

use crate::spec::PatternSpec;

pub const DEFAULT_DENSITY: i32 = 128;
pub const DEFAULT_COOLING: i32 = 55;
pub const DEFAULT_SPARKING: i32 = 120;
pub const DEFAULT_WAVE_COUNT: i32 = 3;
pub const MAX_WAVE_COUNT: i32 = 10;
pub const DEFAULT_SCANNER_EYE: i32 = 2;
pub const DEFAULT_SCANNER_TAIL: i32 = 4;
/// Slowest a pulse may breathe.
pub const MIN_PULSE_RHYTHM: i32 = 10;

/// Derive param1..param4 for `effect`.
///
/// param4 is shared by every effect and carries only the direction in bit 0.
/// `style` stays in the IR but is never encoded.
pub fn effect_params(effect: EffectId, spec: &PatternSpec) -> [u8; 4] {
    let mut params = [0u8; 4];

    match effect {
        EffectId::Sparkle => {
            params[0] = saturate(or_default(spec.density, DEFAULT_DENSITY));
        }
        EffectId::Pulse => {
            // Faster speed breathes faster, unless a rhythm was given outright.
            let rhythm = if spec.rhythm > 0 {
                i64::from(spec.rhythm)
            } else {
                255 - i64::from(spec.speed)
            };
            params[0] = saturate(rhythm.max(i64::from(MIN_PULSE_RHYTHM)));
        }
        EffectId::Fire | EffectId::Candle => {
            params[0] = saturate(or_default(spec.cooling, DEFAULT_COOLING));
            params[1] = saturate(or_default(spec.sparking, DEFAULT_SPARKING));
        }
        EffectId::Wave => {
            let waves = or_default(spec.wave_count, DEFAULT_WAVE_COUNT)
                .min(i64::from(MAX_WAVE_COUNT));
            params[0] = saturate(waves);
            params[1] = saturate(i64::from(spec.eye_size));
            params[2] = saturate(i64::from(spec.tail_length));
        }
        EffectId::Scanner => {
            params[1] = saturate(or_default(spec.eye_size, DEFAULT_SCANNER_EYE));
            params[2] = saturate(or_default(spec.tail_length, DEFAULT_SCANNER_TAIL));
        }
        EffectId::Solid | EffectId::Gradient | EffectId::Rainbow | EffectId::Wipe => {}
    }

    params[3] = direction_byte(spec.direction);
    params
}

/// Direction bit for param4. Only bit 0 of the input counts.
pub fn direction_byte(direction: i32) -> u8 {
    (direction & 0x01) as u8
}

fn or_default(value: i32, default: i32) -> i64 {
    i64::from(if value <= 0 { default } else { value })
}

pub(crate) fn saturate(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}
