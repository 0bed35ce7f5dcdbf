//! Color names, color schemes and hex parsing.
//!
//! Resolution is string to string (`"red"` to `"#ff0000"`), parsing is string to
//! [`Rgb`]. The two steps are separate because intent text and structured input
//! both carry colors as strings until the encoder needs bytes.

use std::fmt;

/// An 8-bit RGB triple as stored in bytecode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A color string that could not be parsed as hex.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorFormatError {
    #[error("invalid hex color length: {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),
    #[error("invalid hex digits in color: {0:?}")]
    InvalidDigit(String),
}

/// Named colors accepted by [`resolve_color`].
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("red", "#FF0000"),
    ("green", "#00FF00"),
    ("blue", "#0000FF"),
    ("yellow", "#FFFF00"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("pink", "#FFC0CB"),
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("warm_white", "#FFF4E5"),
    ("cool_white", "#F4FFFA"),
    ("gold", "#FFD700"),
    ("teal", "#008080"),
    ("crimson", "#DC143C"),
    ("coral", "#FF7F50"),
    ("navy", "#000080"),
];

/// Resolve a color token to a hex string.
///
/// Named colors map through [`NAMED_COLORS`]. A bare run of 3 or 6 hex digits gets
/// a `#` prefix. Anything else comes back normalized (trimmed, lowercase) but
/// otherwise untouched; [`parse_hex_color`] decides later whether it is usable.
pub fn resolve_color(token: &str) -> String {
    let token = token.trim().to_ascii_lowercase();

    if let Some((_, hex)) = NAMED_COLORS.iter().find(|(name, _)| *name == token) {
        return (*hex).to_string();
    }

    let bare_hex = matches!(token.len(), 3 | 6) && token.bytes().all(|b| b.is_ascii_hexdigit());
    if bare_hex {
        return format!("#{token}");
    }

    token
}

/// Palette for a named color scheme, if the name is known.
pub fn color_scheme(name: &str) -> Option<&'static [&'static str]> {
    let palette: &[&str] = match name.trim().to_ascii_lowercase().as_str() {
        "rainbow" => &[
            "#FF0000", "#FFA500", "#FFFF00", "#00FF00", "#00FFFF", "#0000FF", "#800080",
        ],
        "sunset" => &["#FFA500", "#FFC0CB", "#800080", "#00008B"],
        "ocean" => &["#00008B", "#0000FF", "#00FFFF", "#008080"],
        "forest" => &["#006400", "#008000", "#32CD32", "#FFFF00"],
        "fire" | "classic_fire" => &["#000000", "#FF0000", "#FFA500", "#FFFF00", "#FFFFFF"],
        "ice" => &["#FFFFFF", "#00FFFF", "#0000FF", "#00008B"],
        "party" => &["#FF00FF", "#00FFFF", "#FFFF00", "#FF00FF"],
        "warm_orange" => &["#8B4500", "#D2691E", "#FFA500", "#FFD700"],
        "blue_gas" => &["#000000", "#00008B", "#0000FF", "#00FFFF", "#FFFFFF"],
        "knight_rider" | "scanner_red" => &["#FF0000"],
        _ => return None,
    };
    Some(palette)
}

/// Resolve a named color scheme to its ordered palette.
///
/// Unknown schemes resolve to a single white entry.
pub fn resolve_color_scheme(name: &str) -> Vec<String> {
    color_scheme(name)
        .unwrap_or(&["#FFFFFF"])
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` into an [`Rgb`].
pub fn parse_hex_color(s: &str) -> Result<Rgb, ColorFormatError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::InvalidDigit(s.to_string()));
    }

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    if expanded.len() != 6 {
        return Err(ColorFormatError::InvalidLength(digits.len()));
    }

    // All bytes are ASCII hex digits here, so slicing and parsing cannot fail.
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).unwrap_or(0);
    Ok(Rgb::new(channel(0), channel(2), channel(4)))
}
