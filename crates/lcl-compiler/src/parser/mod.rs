//! Semantic intent parser.
//!
//! Intent text is a small YAML-like document: optional `key: value` lines at
//! the top, then named sections whose entries describe the pattern in words.
//!
//! ```text
//! effect: fire
//! behavior:
//!   flame_height: tall
//!   spark_frequency: frequent
//! appearance:
//!   color_scheme: classic_fire
//! ```

mod intent;
mod lines;


pub use intent::parse_intent;
pub use lines::{Line, lines};
