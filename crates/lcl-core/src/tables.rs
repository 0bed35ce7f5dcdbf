//! Semantic value tables.
//!
//! Each [`Family`] maps a closed set of words to numbers and falls back to its
//! default for anything it does not know. Decimal strings pass through as-is;
//! range clamping is the encoder's job, not the table's.

/// A word family such as `speed` or `flame_height`.
#[derive(Clone, Copy, Debug)]
pub struct Family {
    pub name: &'static str,
    pub words: &'static [(&'static str, i32)],
    pub default: i32,
}

/// Outcome of resolving a value through a [`Family`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A known word.
    Word(i32),
    /// A decimal number given directly.
    Number(i32),
    /// Neither; the family default was used.
    Fallback(i32),
}

impl Resolved {
    pub fn value(self) -> i32 {
        match self {
            Self::Word(v) | Self::Number(v) | Self::Fallback(v) => v,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl Family {
    /// Look up a known word only.
    pub fn word(&self, word: &str) -> Option<i32> {
        self.words
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, v)| *v)
    }

    pub fn resolve(&self, value: &str) -> Resolved {
        let value = value.trim().to_ascii_lowercase();
        if let Some(v) = self.word(&value) {
            return Resolved::Word(v);
        }
        match value.parse::<i32>() {
            Ok(v) => Resolved::Number(v),
            Err(_) => Resolved::Fallback(self.default),
        }
    }
}

pub const SPEED: Family = Family {
    name: "speed",
    words: &[
        ("frozen", 0),
        ("glacial", 20),
        ("very_slow", 40),
        ("slow", 70),
        ("medium", 128),
        ("fast", 180),
        ("very_fast", 220),
        ("frantic", 255),
    ],
    default: 128,
};

pub const BRIGHTNESS: Family = Family {
    name: "brightness",
    words: &[
        ("dim", 64),
        ("low", 64),
        ("medium", 128),
        ("bright", 200),
        ("high", 200),
        ("full", 255),
        ("max", 255),
    ],
    default: 200,
};

/// Fire flame height, stored as cooling: taller flames cool less.
pub const FLAME_HEIGHT: Family = Family {
    name: "flame_height",
    words: &[
        ("very_short", 120),
        ("tiny", 120),
        ("short", 80),
        ("small", 80),
        ("medium", 55),
        ("tall", 40),
        ("large", 40),
        ("high", 40),
        ("very_tall", 20),
        ("huge", 20),
    ],
    default: 55,
};

pub const SPARK_FREQUENCY: Family = Family {
    name: "spark_frequency",
    words: &[
        ("rare", 50),
        ("few", 50),
        ("occasional", 80),
        ("some", 80),
        ("frequent", 120),
        ("high", 170),
        ("many", 170),
        ("intense", 220),
        ("lots", 220),
    ],
    default: 120,
};

pub const DENSITY: Family = Family {
    name: "density",
    words: &[
        ("sparse", 30),
        ("light", 60),
        ("medium", 128),
        ("dense", 200),
        ("packed", 255),
    ],
    default: 128,
};

pub const WAVE_COUNT: Family = Family {
    name: "wave_count",
    words: &[("one", 1), ("few", 2), ("several", 4), ("many", 8)],
    default: 3,
};

/// Breathing rhythm words. The values are speeds, not rhythm bytes.
pub const RHYTHM: Family = Family {
    name: "rhythm",
    words: &[
        ("calm", 70),
        ("relaxed", 100),
        ("steady", 128),
        ("energetic", 180),
        ("frantic", 220),
    ],
    default: 128,
};

pub const EYE_SIZE: Family = Family {
    name: "eye_size",
    words: &[
        ("tiny", 1),
        ("small", 2),
        ("medium", 3),
        ("large", 5),
        ("huge", 8),
    ],
    default: 3,
};

pub const TAIL_LENGTH: Family = Family {
    name: "tail_length",
    words: &[
        ("none", 0),
        ("short", 2),
        ("medium", 4),
        ("long", 8),
        ("ghost", 16),
    ],
    default: 4,
};

pub const DIRECTION: Family = Family {
    name: "direction",
    words: &[
        ("forward", 0),
        ("up", 0),
        ("right", 0),
        ("clockwise", 0),
        ("outward", 0),
        ("backward", 1),
        ("reverse", 1),
        ("down", 1),
        ("left", 1),
        ("counterclockwise", 1),
        ("inward", 1),
    ],
    default: 0,
};
