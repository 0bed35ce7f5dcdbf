use std::path::PathBuf;

use lcl_compiler::Source;

use super::input_loader::load_input;
use super::{fail, print_warnings};

pub struct SpecArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub compact: bool,
}

pub fn run(args: SpecArgs) {
    let text = load_input(args.input_path.as_deref(), args.input_text.as_deref())
        .unwrap_or_else(|err| fail(err));

    let (spec, warnings) = Source::detect(&text).to_spec().unwrap_or_else(|err| fail(err));
    print_warnings(&warnings, false);

    let json = if args.compact {
        serde_json::to_string(&spec)
    } else {
        serde_json::to_string_pretty(&spec)
    };
    println!("{}", json.unwrap_or_else(|err| fail(err)));
}
