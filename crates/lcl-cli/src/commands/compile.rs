use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lcl_compiler::{Compiled, Error};
use serde::Serialize;

use super::input_loader::load_input;
use super::{fail, print_warnings};
use crate::cli::OutputFormat;

pub struct CompileArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

/// Machine-readable compile outcome for `--format json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub success: bool,
    /// Lowercase hex, absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Report {
    pub fn new(result: &Result<Compiled, Error>, strict: bool) -> Self {
        match result {
            Ok(compiled) => {
                let warnings = compiled.warnings.messages();
                let rejected = strict && !warnings.is_empty();
                Self {
                    success: !rejected,
                    bytecode: (!rejected).then(|| to_hex(&compiled.bytecode)),
                    errors: if rejected {
                        vec!["warnings treated as errors (--strict)".to_string()]
                    } else {
                        Vec::new()
                    },
                    warnings,
                }
            }
            Err(err) => Self {
                success: false,
                bytecode: None,
                warnings: Vec::new(),
                errors: vec![err.to_string()],
            },
        }
    }
}

pub fn run(args: CompileArgs) {
    let text = load_input(args.input_path.as_deref(), args.input_text.as_deref())
        .unwrap_or_else(|err| fail(err));

    let result = lcl_compiler::compile(&text);

    if args.format == OutputFormat::Json {
        let report = Report::new(&result, args.strict);
        let mut out = serde_json::to_string_pretty(&report).unwrap_or_else(|err| fail(err));
        out.push('\n');
        write_output(args.output.as_deref(), out.as_bytes()).unwrap_or_else(|err| fail(err));
        if !report.success {
            std::process::exit(1);
        }
        return;
    }

    let compiled = result.unwrap_or_else(|err| fail(err));
    print_warnings(&compiled.warnings, args.color);
    if args.strict && !compiled.warnings.is_empty() {
        fail("warnings treated as errors (--strict)");
    }

    let bytes = render(&compiled.bytecode, args.format);
    write_output(args.output.as_deref(), &bytes).unwrap_or_else(|err| fail(err));
}

/// Encode a program for `bin` or `hex` output.
pub fn render(bytecode: &[u8], format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Bin => bytecode.to_vec(),
        OutputFormat::Hex | OutputFormat::Json => {
            let mut hex = to_hex(bytecode);
            hex.push('\n');
            hex.into_bytes()
        }
    }
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Write to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> io::Result<()> {
    tracing::debug!(len = bytes.len(), to_file = path.is_some(), "writing output");
    match path {
        Some(path) => fs::write(path, bytes),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()
        }
    }
}
