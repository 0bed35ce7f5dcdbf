//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the pattern input args every command takes.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg()).arg(input_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("lcl")
        .about("Compile LED pattern intents to LCL bytecode")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(spec_command())
}

/// Compile a pattern to bytecode.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile a pattern to bytecode")
        .override_usage(
            "\
  lcl compile <INPUT> [--format bin|hex|json] [-o <FILE>]
  lcl compile -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  lcl compile fire.lcl                    # hex on stdout
  lcl compile fire.lcl --format bin -o fire.bin
  lcl compile pattern.json --format json  # success/warnings report
  lcl compile -t 'effect: rainbow'        # inline intent"#,
        );

    with_input_args(cmd)
        .arg(format_arg())
        .arg(output_file_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Validate a pattern without writing bytecode.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .override_usage(
            "\
  lcl check <INPUT>
  lcl check -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  lcl check fire.lcl              # errors only
  lcl check fire.lcl --strict     # warnings fail too
  cat fire.lcl | lcl check -      # from stdin"#,
        );

    with_input_args(cmd).arg(strict_arg()).arg(color_arg())
}

/// Show a decoded program.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show compiled bytecode field by field")
        .override_usage(
            "\
  lcl dump <INPUT>
  lcl dump -t <TEXT>
  lcl dump --binary <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  lcl dump fire.lcl               # compile, then dump
  lcl dump --binary fire.bin      # dump existing bytecode"#,
        );

    with_input_args(cmd).arg(binary_arg()).arg(color_arg())
}

/// Print the resolved pattern IR.
pub fn spec_command() -> Command {
    let cmd = Command::new("spec")
        .about("Print the resolved pattern as JSON")
        .override_usage(
            "\
  lcl spec <INPUT>
  lcl spec -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  lcl spec fire.lcl               # pretty JSON
  lcl spec fire.lcl --compact     # one line"#,
        );

    with_input_args(cmd).arg(compact_arg())
}
