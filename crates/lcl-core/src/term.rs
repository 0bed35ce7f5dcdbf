//! ANSI styling for terminal output.
//!
//! Three semantic styles with a dim modifier:
//! - Blue: section names, field labels
//! - Green: values
//! - Dim: offsets, comments
//!
//! Color swatches use 24-bit background codes so a dump shows the LED colors.

use crate::Rgb;

#[derive(Clone, Copy, Debug)]
pub struct Styles {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Styles {
    fn default() -> Self {
        Self::OFF
    }
}

impl Styles {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// Two-cell block painted in `color`, or an empty string when disabled.
    pub fn swatch(&self, color: Rgb) -> String {
        if !self.is_enabled() {
            return String::new();
        }
        format!(
            "\x1b[48;2;{};{};{}m  {}",
            color.r, color.g, color.b, self.reset
        )
    }
}
