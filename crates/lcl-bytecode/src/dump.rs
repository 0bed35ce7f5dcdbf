//! Human-readable program dump for debugging.
//!
//! One `label value ; comment` line per field, grouped into the same three blocks
//! as the binary layout.

use std::fmt::Write as _;

use lcl_core::{Rgb, Styles};

use super::module::Module;

/// Generate a human-readable dump of a decoded program.
pub fn dump(module: &Module, styles: Styles) -> String {
    let mut out = String::new();

    dump_header(&mut out, module, &styles);
    out.push('\n');
    dump_core(&mut out, module, &styles);
    out.push('\n');
    dump_colors(&mut out, module, &styles);

    out
}

fn dump_header(out: &mut String, module: &Module, s: &Styles) {
    let h = module.header();
    section(out, s, "header");
    field(out, s, "magic", &String::from_utf8_lossy(&h.magic), None);
    field(out, s, "version", &h.version.to_string(), None);
    field(out, s, "length", &h.payload_len.to_string(), None);
    field(out, s, "checksum", &format!("0x{:02X}", h.checksum), None);
    field(out, s, "flags", &format!("0x{:02X}", h.flags), None);
}

fn dump_core(out: &mut String, module: &Module, s: &Styles) {
    let effect = module.effect();
    section(out, s, "core");
    field(
        out,
        s,
        "effect",
        effect.name(),
        Some(format!("id 0x{:02X}", effect.id())),
    );
    field(out, s, "brightness", &module.brightness().to_string(), None);
    field(out, s, "speed", &module.speed().to_string(), None);

    let params = module.params();
    for (i, (value, label)) in params.iter().zip(effect.param_labels()).enumerate() {
        let comment = if i == 3 {
            Some(direction_comment(module))
        } else {
            label.map(str::to_string)
        };
        field(out, s, &format!("param{}", i + 1), &value.to_string(), comment);
    }

    let mode = module.color_mode();
    field(
        out,
        s,
        "color_mode",
        &mode.to_string(),
        Some(color_mode_name(mode).to_string()),
    );
}

fn dump_colors(out: &mut String, module: &Module, s: &Styles) {
    section(out, s, "colors");
    color_field(out, s, "primary", module.primary());
    color_field(out, s, "secondary", module.secondary());
    field(out, s, "palette", &module.palette_len().to_string(), None);
    for (i, color) in module.palette().into_iter().enumerate() {
        color_field(out, s, &format!("  [{i}]"), color);
    }
}

fn section(out: &mut String, s: &Styles, name: &str) {
    writeln!(out, "{}[{name}]{}", s.blue, s.reset).unwrap();
}

fn field(out: &mut String, s: &Styles, label: &str, value: &str, comment: Option<String>) {
    write!(out, "{label:<11} {}{value}{}", s.green, s.reset).unwrap();
    if let Some(comment) = comment {
        write!(out, "{}  ; {comment}{}", s.dim, s.reset).unwrap();
    }
    out.push('\n');
}

fn color_field(out: &mut String, s: &Styles, label: &str, color: Rgb) {
    write!(out, "{label:<11} {}{color}{}", s.green, s.reset).unwrap();
    if s.is_enabled() {
        write!(out, " {}", s.swatch(color)).unwrap();
    }
    out.push('\n');
}

fn direction_comment(module: &Module) -> String {
    let direction = if module.direction() == 0 {
        "forward"
    } else {
        "reverse"
    };
    format!("direction {direction}")
}

fn color_mode_name(mode: u8) -> &'static str {
    match mode {
        0 => "palette",
        1 => "dual",
        2 => "texture",
        _ => "reserved",
    }
}
