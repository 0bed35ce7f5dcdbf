//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::spec::SpecArgs;

pub struct CompileParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            format: parse_format(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            format: p.format,
            output: p.output,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub binary: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            binary: m.get_flag("binary"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            binary: p.binary,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SpecParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub compact: bool,
}

impl SpecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<SpecParams> for SpecArgs {
    fn from(p: SpecParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            compact: p.compact,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("bin") => OutputFormat::Bin,
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Hex,
    }
}
