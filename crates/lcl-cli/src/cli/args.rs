//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern file, or `-` for stdin (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Pattern file (intent text or JSON), or - for stdin")
}

/// Inline pattern text (-t/--text).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline pattern text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("hex")
        .value_parser(["bin", "hex", "json"])
        .help("Output format")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Input is compiled bytecode, not a pattern (--binary).
pub fn binary_arg() -> Arg {
    Arg::new("binary")
        .long("binary")
        .action(ArgAction::SetTrue)
        .conflicts_with("input_text")
        .help("Read INPUT as compiled bytecode")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}
