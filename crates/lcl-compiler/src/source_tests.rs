use indoc::indoc;

use lcl_bytecode::{EffectId, checksum};
use lcl_core::Rgb;

use crate::test_utils::{compile_ok, hex_rows, module};
use crate::{Error, Source, compile, describe, validate};

#[test]
fn detect_structured_input() {
    assert!(Source::detect(r#"  {"effect":"fire"}"#).is_structured());
    assert!(!Source::detect("effect: fire").is_structured());
    assert!(!Source::detect("").is_structured());
}

#[test]
fn semantic_solid_round_trip() {
    let module = module(indoc! {"
        effect: solid
        appearance:
          color: red
          brightness: bright
    "});

    assert_eq!(module.effect(), EffectId::Solid);
    assert_eq!(module.effect().id(), 1);
    assert_eq!(module.primary(), Rgb::new(255, 0, 0));
    assert_eq!(module.brightness(), 200);
}

#[test]
fn structured_scanner_round_trip() {
    let module =
        module(r##"{"effect":"scanner","colors":["#FF0000"],"eye_size":3,"tail_length":8}"##);

    assert_eq!(module.effect().id(), 11);
    assert_eq!(module.params()[1], 3);
    assert_eq!(module.params()[2], 8);
    assert_eq!(module.palette_len(), 1);
}

#[test]
fn structured_fire_defaults() {
    let module = module(r#"{"effect": "fire"}"#);
    assert_eq!(module.params()[0], 55);
    assert_eq!(module.params()[1], 120);
}

#[test]
fn structured_brightness_clamps() {
    let module = module(r#"{"effect":"solid","brightness":300,"speed":-5}"#);
    assert_eq!(module.brightness(), 255);
    assert_eq!(module.speed(), 128);
}

#[test]
fn breathe_equals_pulse() {
    let breathe = compile_ok("effect: breathe").bytecode;
    let pulse = compile_ok("effect: pulse").bytecode;
    assert_eq!(breathe, pulse);
}

#[test]
fn compile_is_deterministic() {
    let text = indoc! {"
        effect: sparkle
        behavior:
          density: dense
        appearance:
          colors: gold, teal, coral
    "};
    assert_eq!(compile_ok(text), compile_ok(text));
}

#[test]
fn checksum_matches_payload() {
    for text in [
        "effect: rainbow",
        r#"{"effect":"wave","wave_count":7,"colors":["blue","cyan"]}"#,
        "effect: candle\nappearance:\n  color_scheme: warm_orange",
    ] {
        let bytes = compile_ok(text).bytecode;
        assert_eq!(bytes[6], checksum(&bytes[8..]), "{text}");
    }
}

#[test]
fn semantic_solid_bytes() {
    let compiled = compile_ok(indoc! {"
        effect: solid
        appearance:
          color: red
          brightness: bright
    "});

    insta::assert_snapshot!(hex_rows(&compiled.bytecode), @r"
    4C 43 4C 04 00 1A 48 00
    01 C8 80 00 00 00 00 00
    00 00 00 00 00 00 00 00
    FF 00 00 00 00 00 01 FF
    00 00
    ");
}

#[test]
fn semantic_fire_bytes() {
    let compiled = compile_ok(indoc! {"
        effect: fire
        behavior:
          flame_height: tall      # cooling 40
          spark_frequency: frequent
        appearance:
          color_scheme: classic_fire
    "});

    insta::assert_snapshot!(hex_rows(&compiled.bytecode), @r"
    4C 43 4C 04 00 26 40 00
    07 C8 80 28 78 00 00 00
    00 00 00 00 00 00 00 00
    00 00 00 00 00 00 05 00
    00 00 FF 00 00 FF A5 00
    FF FF 00 FF FF FF
    ");
}

#[test]
fn compile_collects_parser_and_encoder_warnings() {
    let compiled = compile_ok(indoc! {"
        effect: sparkle
        behavior:
          density: cloudy
        appearance:
          colors: red, mauve
    "});

    assert_eq!(
        compiled.warnings.messages(),
        vec![
            r#"unknown density value "cloudy", using 128"#.to_string(),
            r#"color "mauve" ignored (invalid hex digits in color: "mauve"), using #FFFFFF"#
                .to_string(),
        ]
    );
}

#[test]
fn missing_effect() {
    assert!(matches!(
        compile("appearance:\n  color: red"),
        Err(Error::MissingEffect)
    ));
    assert!(matches!(compile("{}"), Err(Error::MissingEffect)));
    assert!(matches!(
        compile(r#"{"effect": "  "}"#),
        Err(Error::MissingEffect)
    ));
}

#[test]
fn malformed_structured_input() {
    let err = compile(r#"{"effect": "fire""#).unwrap_err();
    assert!(matches!(err, Error::StructuredParse(_)));
    assert!(err.to_string().starts_with("structured input parse error: "));
}

#[test]
fn structured_type_mismatch_is_a_parse_error() {
    assert!(matches!(
        compile(r#"{"effect":"fire","cooling":"tall"}"#),
        Err(Error::StructuredParse(_))
    ));
}

#[test]
fn structured_nulls_read_as_absent() {
    let compiled = compile_ok(r#"{"effect":"fire","colors":null,"brightness":null}"#);
    let nulls = lcl_bytecode::Module::from_bytes(compiled.bytecode).unwrap();
    let absent = module(r#"{"effect":"fire"}"#);

    assert_eq!(nulls.brightness(), 200);
    assert_eq!(nulls.palette(), vec![Rgb::WHITE]);
    assert_eq!(nulls.params(), absent.params());
    assert!(compiled.warnings.is_empty());

    let module = module(r#"{"effect":"scanner","speed":null,"direction":null,"eye_size":null}"#);
    assert_eq!(module.speed(), 128);
    assert_eq!(module.params()[1], 2);
    assert_eq!(module.params()[3], 0);
}

#[test]
fn style_never_reaches_param4() {
    let structured = module(r#"{"effect":"scanner","style":1}"#);
    assert_eq!(structured.params()[3], 0);

    let semantic = module("effect: scanner\nspatial:\n  style: bounce");
    assert_eq!(semantic.params()[3], 0);

    let reversed = module(r#"{"effect":"scanner","style":1,"direction":1}"#);
    assert_eq!(reversed.params()[3], 1);
}

#[test]
fn validate_reports_success_and_warnings() {
    assert_eq!(validate("effect: solid"), (true, vec![]));

    let (ok, messages) = validate("effect: solid\nappearance:\n  color: mauve");
    assert!(ok);
    assert_eq!(messages.len(), 1);
}

#[test]
fn validate_reports_failure() {
    assert_eq!(
        validate("effect: strobe"),
        (false, vec!["unknown effect type: strobe".to_string()])
    );
    assert_eq!(
        validate("timing:\n  speed: fast"),
        (false, vec!["missing required field: effect".to_string()])
    );
}

#[test]
fn describe_reads_name_from_either_encoding() {
    assert_eq!(
        describe("name: Night light\neffect: solid").as_deref(),
        Some("Night light")
    );
    assert_eq!(
        describe(r#"{"effect":"fire","name":"Hearth"}"#).as_deref(),
        Some("Hearth")
    );
    assert_eq!(describe("effect: solid"), None);
    assert_eq!(describe("not a pattern"), None);
}
