//! Section-aware mapping from intent words to a [`PatternSpec`].

use lcl_core::tables::{self, Family, Resolved};
use lcl_core::{color_scheme, resolve_color, resolve_color_scheme};

use crate::diagnostics::{Warning, Warnings};
use crate::spec::PatternSpec;
use crate::{Error, PassResult};

use super::lines::{Line, lines, unquote};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Root,
    Behavior,
    Appearance,
    Timing,
    Spatial,
    /// Any other header. Its entries are ignored.
    Other,
}

impl Section {
    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "" | "root" => Self::Root,
            "behavior" => Self::Behavior,
            "appearance" => Self::Appearance,
            "timing" => Self::Timing,
            "spatial" => Self::Spatial,
            _ => Self::Other,
        }
    }
}

/// Parse semantic intent text into a [`PatternSpec`].
///
/// Brightness starts at 200 and speed at 128; everything else starts at zero
/// and is filled in by whichever entries appear. Unknown keys and sections are
/// skipped silently. Unknown words fall back to their family default with a
/// warning.
///
/// Fails only when no `effect` was given at the top level.
pub fn parse_intent(text: &str) -> PassResult<PatternSpec> {
    let mut spec = PatternSpec::with_intent_defaults();
    let mut warnings = Warnings::new();
    let mut section = Section::Root;

    for line in lines(text) {
        match line {
            Line::Section(name) => section = Section::from_name(name),
            Line::Entry { key, value } => {
                tracing::trace!(?section, key, value, "intent entry");
                let key = key.to_ascii_lowercase();
                let mut target = Target {
                    spec: &mut spec,
                    warnings: &mut warnings,
                };
                match section {
                    Section::Root => target.root(&key, value),
                    Section::Behavior => target.behavior(&key, value),
                    Section::Appearance => target.appearance(&key, value),
                    Section::Timing => target.timing(&key, value),
                    Section::Spatial => target.spatial(&key, value),
                    Section::Other => {}
                }
            }
        }
    }

    if spec.effect.is_empty() {
        return Err(Error::MissingEffect);
    }
    Ok((spec, warnings))
}

struct Target<'a> {
    spec: &'a mut PatternSpec,
    warnings: &'a mut Warnings,
}

impl Target<'_> {
    fn root(&mut self, key: &str, value: &str) {
        match key {
            "effect" => self.spec.effect = value.to_string(),
            "name" | "description" if !value.is_empty() => {
                self.spec.name = Some(value.to_string())
            }
            _ => {}
        }
    }

    fn behavior(&mut self, key: &str, value: &str) {
        match key {
            "flame_height" => self.spec.cooling = self.lookup(&tables::FLAME_HEIGHT, key, value),
            "spark_frequency" => {
                self.spec.sparking = self.lookup(&tables::SPARK_FREQUENCY, key, value)
            }
            "density" => self.spec.density = self.lookup(&tables::DENSITY, key, value),
            "wave_count" => self.spec.wave_count = self.lookup(&tables::WAVE_COUNT, key, value),
            "rhythm" => self.rhythm(value),
            "eye_size" | "head_size" => {
                self.spec.eye_size = self.lookup(&tables::EYE_SIZE, key, value)
            }
            "tail_length" => {
                self.spec.tail_length = self.lookup(&tables::TAIL_LENGTH, key, value)
            }
            _ => {}
        }
    }

    fn appearance(&mut self, key: &str, value: &str) {
        match key {
            "color" => self.spec.colors = vec![resolve_color(value)],
            "colors" => self.spec.colors = color_list(value),
            "color_scheme" | "palette" => {
                if color_scheme(value).is_none() {
                    self.warnings
                        .push(Warning::UnknownScheme(value.to_string()));
                }
                self.spec.colors = resolve_color_scheme(value);
            }
            "brightness" => self.spec.brightness = self.lookup(&tables::BRIGHTNESS, key, value),
            "background" | "background_color" => {
                self.spec.background_color = Some(resolve_color(value))
            }
            _ => {}
        }
    }

    fn timing(&mut self, key: &str, value: &str) {
        if key == "speed" {
            self.spec.speed = self.lookup(&tables::SPEED, key, value);
        }
    }

    fn spatial(&mut self, key: &str, value: &str) {
        if key == "direction" {
            self.spec.direction = self.lookup(&tables::DIRECTION, key, value);
        }
    }

    /// Rhythm words describe a breathing pace and land in `speed`; a bare
    /// number is taken as the rhythm byte itself.
    fn rhythm(&mut self, value: &str) {
        match tables::RHYTHM.resolve(value) {
            Resolved::Word(speed) => self.spec.speed = speed,
            Resolved::Number(rhythm) => self.spec.rhythm = rhythm,
            Resolved::Fallback(speed) => {
                self.unknown("rhythm", value, speed);
                self.spec.speed = speed;
            }
        }
    }

    fn lookup(&mut self, family: &Family, key: &str, value: &str) -> i32 {
        let resolved = family.resolve(value);
        if resolved.is_fallback() {
            self.unknown(key, value, resolved.value());
        }
        resolved.value()
    }

    fn unknown(&mut self, key: &str, value: &str, fallback: i32) {
        self.warnings.push(Warning::UnknownWord {
            key: key.to_string(),
            value: value.to_string(),
            fallback,
        });
    }
}

/// Split `red, #00ff00, [blue]` style lists into resolved colors.
fn color_list(value: &str) -> Vec<String> {
    value
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|item| unquote(item.trim()))
        .filter(|item| !item.is_empty())
        .map(resolve_color)
        .collect()
}
