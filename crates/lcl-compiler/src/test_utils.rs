//! Test helpers shared by the compiler test modules.

use lcl_bytecode::Module;

use crate::{Compiled, compile};

/// Compile input that must succeed.
pub fn compile_ok(text: &str) -> Compiled {
    match compile(text) {
        Ok(compiled) => compiled,
        Err(err) => panic!("expected {text:?} to compile, got: {err}"),
    }
}

/// Compile and decode in one step. The decoder re-checks every format invariant.
pub fn module(text: &str) -> Module {
    let compiled = compile_ok(text);
    match Module::from_bytes(compiled.bytecode) {
        Ok(module) => module,
        Err(err) => panic!("compiled program for {text:?} does not decode: {err}"),
    }
}

/// Uppercase hex, eight bytes per row.
pub fn hex_rows(bytes: &[u8]) -> String {
    bytes
        .chunks(8)
        .map(|row| {
            row.iter()
                .map(|b| format!("{b:02X}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
