//! Non-fatal compiler findings.
//!
//! Nothing here stops compilation. Every warning records a place where the
//! compiler substituted a default for something it could not use.

use std::fmt;

use lcl_core::{ColorFormatError, Rgb};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// A value matched neither a known word nor a number.
    UnknownWord {
        key: String,
        value: String,
        fallback: i32,
    },
    /// A `color_scheme` name with no palette.
    UnknownScheme(String),
    /// A color that could not be parsed and was replaced.
    InvalidColor {
        color: String,
        error: ColorFormatError,
        replacement: Rgb,
    },
    /// More palette entries than the format can hold.
    PaletteTruncated { given: usize, kept: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWord {
                key,
                value,
                fallback,
            } => write!(f, "unknown {key} value {value:?}, using {fallback}"),
            Self::UnknownScheme(name) => {
                write!(f, "unknown color scheme {name:?}, using white")
            }
            Self::InvalidColor {
                color,
                error,
                replacement,
            } => write!(f, "color {color:?} ignored ({error}), using {replacement}"),
            Self::PaletteTruncated { given, kept } => {
                write!(f, "palette has {given} colors, keeping the first {kept}")
            }
        }
    }
}

/// Ordered collection of warnings from one compilation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Warnings(Vec<Warning>);

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        tracing::debug!(%warning, "compiler warning");
        self.0.push(warning);
    }

    pub fn extend(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.0.iter()
    }

    /// Rendered messages in the order the warnings were raised.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
