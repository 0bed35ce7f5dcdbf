//! Bytecode format for LCL LED programs.
//!
//! This crate contains:
//! - Format constants and byte offsets (version 4, fixed layout)
//! - Effect identifiers shared with device firmware
//! - Header encoding and the XOR checksum
//! - A strict decoder ([`Module`]) and a human-readable [`dump`]

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod constants;
mod dump;
mod effect;
mod header;
mod module;

#[cfg(test)]
mod header_tests;
#[cfg(test)]
mod module_tests;

pub use constants::{
    COLOR_BLOCK_SIZE, CORE_PARAMS_SIZE, HEADER_SIZE, MAGIC, MAX_PALETTE_COLORS,
    MIN_PROGRAM_SIZE, VERSION, offset,
};
pub use dump::dump;
pub use effect::EffectId;
pub use header::{Header, checksum};
pub use module::{Module, ModuleError};
