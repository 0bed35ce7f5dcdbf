pub mod check;
pub mod compile;
pub mod dump;
pub mod input_loader;
pub mod spec;


use std::fmt::Display;

use lcl_core::Styles;

/// Print warnings to stderr, one per line.
pub fn print_warnings<W: Display>(warnings: impl IntoIterator<Item = W>, color: bool) {
    let s = Styles::new(color);
    for warning in warnings {
        eprintln!("{}warning:{} {warning}", s.blue, s.reset);
    }
}

/// Print an error to stderr and exit with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}
