#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core lookup data for the LCL pattern language.
//!
//! Two layers:
//! - **Semantic tables** (`tables`): human words (`tall`, `frequent`, `fast`) to numbers
//! - **Colors** (`color`): named colors, color schemes and hex parsing into [`Rgb`]
//!
//! Everything here is immutable and built at compile time, so lookups are safe to
//! share between threads without synchronization.

pub mod color;
pub mod tables;
pub mod term;

#[cfg(test)]
mod color_tests;

pub use color::{
    ColorFormatError, NAMED_COLORS, Rgb, color_scheme, parse_hex_color, resolve_color,
    resolve_color_scheme,
};
pub use tables::{Family, Resolved};
pub use term::Styles;
