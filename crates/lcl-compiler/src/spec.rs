//! Pattern IR shared by both input forms.

use serde::{Deserialize, Deserializer, Serialize};

/// Default brightness when none is given or the given value is not positive.
pub const DEFAULT_BRIGHTNESS: i32 = 200;

/// Default speed when none is given or the given value is not positive.
pub const DEFAULT_SPEED: i32 = 128;

/// Intermediate description of one LED pattern.
///
/// Numeric fields are unclamped here. Zero means "not given" for every
/// effect-specific parameter; the encoder substitutes per-effect defaults and
/// saturates everything into a byte.
///
/// Structured input deserializes straight into this type, so every field is
/// optional on the wire and an explicit `null` reads as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub effect: String,
    #[serde(alias = "description", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub brightness: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub speed: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub density: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub cooling: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub sparking: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub wave_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub rhythm: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub eye_size: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub tail_length: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub direction: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub style: i32,
}

impl PatternSpec {
    /// Starting point for intent parsing: brightness and speed are pre-set.
    pub fn with_intent_defaults() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            speed: DEFAULT_SPEED,
            ..Self::default()
        }
    }

    /// Background color, treating an empty string as absent.
    pub fn background(&self) -> Option<&str> {
        self.background_color
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
