use std::path::PathBuf;

use lcl_bytecode::{Module, dump};
use lcl_core::Styles;

use super::input_loader::{load_bytecode, load_input};
use super::{fail, print_warnings};

pub struct DumpArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub binary: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let styles = Styles::new(args.color);

    let (bytecode, name) = if args.binary {
        let bytes = load_bytecode(args.input_path.as_deref()).unwrap_or_else(|err| fail(err));
        (bytes, None)
    } else {
        let text = load_input(args.input_path.as_deref(), args.input_text.as_deref())
            .unwrap_or_else(|err| fail(err));
        let compiled = lcl_compiler::compile(&text).unwrap_or_else(|err| fail(err));
        print_warnings(&compiled.warnings, args.color);
        (compiled.bytecode, compiled.spec.name)
    };

    let module = Module::from_bytes(bytecode).unwrap_or_else(|err| fail(err));

    if let Some(name) = name {
        println!("{}; {name}{}", styles.dim, styles.reset);
    }
    print!("{}", dump(&module, styles));
}
