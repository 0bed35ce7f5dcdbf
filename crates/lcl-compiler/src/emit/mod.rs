//! Bytecode emission from a [`PatternSpec`](crate::PatternSpec).
//!
//! Converts the pattern IR into the fixed LCL v4 layout:
//! - Effect lookup and brightness/speed normalization
//! - Per-effect parameter derivation (`params`)
//! - Color resolution with white/black substitution
//! - Header assembly and payload checksum

mod emitter;
pub mod params;


pub use emitter::emit;
pub use params::effect_params;
