use crate::{
    ColorFormatError, NAMED_COLORS, Rgb, color_scheme, parse_hex_color, resolve_color,
    resolve_color_scheme,
};

#[test]
fn resolve_named_color() {
    assert_eq!(resolve_color("red"), "#FF0000");
    assert_eq!(resolve_color("  Warm_White "), "#FFF4E5");
    assert_eq!(resolve_color("cool_white"), "#F4FFFA");
}

#[test]
fn named_table_size() {
    assert_eq!(NAMED_COLORS.len(), 18);
}

#[test]
fn resolve_bare_hex_gets_prefix() {
    assert_eq!(resolve_color("ff8800"), "#ff8800");
    assert_eq!(resolve_color("F80"), "#f80");
}

#[test]
fn resolve_passes_through_everything_else() {
    assert_eq!(resolve_color("#00ff00"), "#00ff00");
    assert_eq!(resolve_color("chartreuse"), "chartreuse");
    // Six letters but not hex digits
    assert_eq!(resolve_color("orchid"), "orchid");
}

#[test]
fn scheme_palettes() {
    assert_eq!(resolve_color_scheme("rainbow").len(), 7);
    assert_eq!(resolve_color_scheme("sunset").len(), 4);
    assert_eq!(resolve_color_scheme("classic_fire"), resolve_color_scheme("fire"));
    assert_eq!(resolve_color_scheme("knight_rider"), vec!["#FF0000"]);
    assert_eq!(
        resolve_color_scheme("warm_orange"),
        vec!["#8B4500", "#D2691E", "#FFA500", "#FFD700"]
    );
}

#[test]
fn unknown_scheme_is_white() {
    assert_eq!(resolve_color_scheme("plaid"), vec!["#FFFFFF"]);
}

#[test]
fn parse_six_digit() {
    assert_eq!(parse_hex_color("#FF8800"), Ok(Rgb::new(255, 136, 0)));
    assert_eq!(parse_hex_color("0a0B0c"), Ok(Rgb::new(10, 11, 12)));
}

#[test]
fn parse_shorthand_doubles_digits() {
    assert_eq!(parse_hex_color("#f80"), Ok(Rgb::new(255, 136, 0)));
    assert_eq!(parse_hex_color("abc"), Ok(Rgb::new(0xAA, 0xBB, 0xCC)));
}

#[test]
fn parse_rejects_bad_length() {
    assert_eq!(
        parse_hex_color("#FFFF"),
        Err(ColorFormatError::InvalidLength(4))
    );
    assert_eq!(parse_hex_color(""), Err(ColorFormatError::InvalidLength(0)));
}

#[test]
fn parse_rejects_bad_digits() {
    assert!(matches!(
        parse_hex_color("#GGHHII"),
        Err(ColorFormatError::InvalidDigit(_))
    ));
    assert!(matches!(
        parse_hex_color("chartreuse"),
        Err(ColorFormatError::InvalidDigit(_))
    ));
}

#[test]
fn rgb_display_is_uppercase_hex() {
    assert_eq!(Rgb::new(255, 0, 16).to_string(), "#FF0010");
    assert_eq!(Rgb::from_bytes([1, 2, 3]).to_bytes(), [1, 2, 3]);
}

#[test]
fn scheme_lookup_reports_unknown() {
    assert!(color_scheme("Ocean").is_some());
    assert!(color_scheme("plaid").is_none());
}
