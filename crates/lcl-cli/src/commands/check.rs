use std::path::PathBuf;

use super::input_loader::load_input;
use super::{fail, print_warnings};

pub struct CheckArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub strict: bool,
    pub color: bool,
}

/// Outcome of validating one input.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid { warnings: Vec<String> },
    Invalid(String),
}

impl Verdict {
    pub fn of(text: &str) -> Self {
        let (ok, mut messages) = lcl_compiler::validate(text);
        if ok {
            return Self::Valid { warnings: messages };
        }
        Self::Invalid(messages.pop().unwrap_or_default())
    }

    /// The error to report, if any. `strict` turns warnings into a failure.
    pub fn failure(&self, strict: bool) -> Option<String> {
        match self {
            Self::Invalid(err) => Some(err.clone()),
            Self::Valid { warnings } if strict && !warnings.is_empty() => Some(format!(
                "{} warning(s) treated as errors (--strict)",
                warnings.len()
            )),
            Self::Valid { .. } => None,
        }
    }
}

pub fn run(args: CheckArgs) {
    let text = load_input(args.input_path.as_deref(), args.input_text.as_deref())
        .unwrap_or_else(|err| fail(err));

    let verdict = Verdict::of(&text);
    if let Verdict::Valid { warnings } = &verdict {
        print_warnings(warnings, args.color);
    }
    if let Some(err) = verdict.failure(args.strict) {
        fail(err);
    }

    // Silent on success (like cargo check)
}
