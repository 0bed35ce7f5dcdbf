//! LCL compiler: intent parser, pattern IR and bytecode encoder.
//!
//! Pipeline:
//! - `source` - detects structured JSON versus semantic intent text
//! - `parser` - turns intent text into a [`PatternSpec`]
//! - `emit` - encodes a [`PatternSpec`] into an LCL v4 program
//! - `diagnostics` - non-fatal [`Warnings`] collected along the way

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod emit;
pub mod parser;
pub mod source;
pub mod spec;

#[cfg(test)]
mod source_tests;
#[cfg(test)]
pub mod test_utils;

/// Result type for passes that produce both output and warnings.
///
/// Fatal problems use the outer `Result`; everything else rides along as
/// [`Warnings`] next to the output.
pub type PassResult<T> = std::result::Result<(T, Warnings), Error>;

pub use diagnostics::{Warning, Warnings};
pub use emit::emit;
pub use parser::parse_intent;
pub use source::{Compiled, Source, compile, describe, validate};
pub use spec::PatternSpec;

/// Errors that stop compilation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the intent text nor the structured input named an effect.
    #[error("missing required field: effect")]
    MissingEffect,

    #[error("unknown effect type: {0}")]
    UnknownEffect(String),

    #[error("structured input parse error: {0}")]
    StructuredParse(#[from] serde_json::Error),
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
