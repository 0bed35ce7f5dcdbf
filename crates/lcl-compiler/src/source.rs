//! Input format detection and the top-level compile entry points.

use crate::diagnostics::Warnings;
use crate::emit::emit;
use crate::parser::parse_intent;
use crate::spec::PatternSpec;
use crate::{Error, PassResult, Result};

/// A compile request in one of the two accepted encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source<'a> {
    /// A JSON object shaped like [`PatternSpec`].
    Structured(&'a str),
    /// Semantic intent text.
    Semantic(&'a str),
}

impl<'a> Source<'a> {
    /// Input whose trimmed form starts with `{` is structured; anything else
    /// is intent text.
    pub fn detect(text: &'a str) -> Self {
        let trimmed = text.trim();
        if trimmed.starts_with('{') {
            Self::Structured(trimmed)
        } else {
            Self::Semantic(text)
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Produce the pattern IR without encoding it.
    pub fn to_spec(self) -> PassResult<PatternSpec> {
        let (spec, warnings) = match self {
            Self::Structured(json) => (serde_json::from_str::<PatternSpec>(json)?, Warnings::new()),
            Self::Semantic(text) => parse_intent(text)?,
        };

        // Structured input may omit the effect or leave it blank.
        if spec.effect.trim().is_empty() {
            return Err(Error::MissingEffect);
        }
        Ok((spec, warnings))
    }
}

/// Output of a successful compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled {
    pub bytecode: Vec<u8>,
    pub spec: PatternSpec,
    pub warnings: Warnings,
}

/// Compile intent text or structured JSON to an LCL program.
pub fn compile(text: &str) -> Result<Compiled> {
    let source = Source::detect(text);
    tracing::debug!(structured = source.is_structured(), len = text.len(), "compiling");

    let (spec, mut warnings) = source.to_spec()?;
    let (bytecode, emit_warnings) = emit(&spec)?;
    warnings.extend(emit_warnings);

    Ok(Compiled {
        bytecode,
        spec,
        warnings,
    })
}

/// Run the full pipeline and keep only the verdict.
///
/// On success the messages are the warnings; on failure, the error.
pub fn validate(text: &str) -> (bool, Vec<String>) {
    match compile(text) {
        Ok(compiled) => (true, compiled.warnings.messages()),
        Err(err) => (false, vec![err.to_string()]),
    }
}

/// Pattern name from either encoding, without compiling.
///
/// Returns `None` when the input has no name or does not parse.
pub fn describe(text: &str) -> Option<String> {
    let (spec, _) = Source::detect(text).to_spec().ok()?;
    spec.name.filter(|name| !name.trim().is_empty())
}
