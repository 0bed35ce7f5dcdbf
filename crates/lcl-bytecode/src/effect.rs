//! Effect identifiers.
//!
//! Values must match the firmware's effect table. They are not contiguous
//! (there is no 3 or 6) and must never be renumbered.

/// Effect type stored at [`offset::EFFECT`](crate::offset::EFFECT).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectId {
    Solid = 0x01,
    Pulse = 0x02,
    Sparkle = 0x04,
    Gradient = 0x05,
    Fire = 0x07,
    Candle = 0x08,
    Wave = 0x09,
    Rainbow = 0x0A,
    Scanner = 0x0B,
    Wipe = 0x0C,
}

impl EffectId {
    pub const ALL: [Self; 10] = [
        Self::Solid,
        Self::Pulse,
        Self::Sparkle,
        Self::Gradient,
        Self::Fire,
        Self::Candle,
        Self::Wave,
        Self::Rainbow,
        Self::Scanner,
        Self::Wipe,
    ];

    /// Look up an effect by name, case-insensitively.
    ///
    /// `breathe` and `chase` are legacy spellings of `pulse` and `wave`.
    pub fn from_name(name: &str) -> Option<Self> {
        let effect = match name.trim().to_ascii_lowercase().as_str() {
            "solid" => Self::Solid,
            "pulse" | "breathe" => Self::Pulse,
            "sparkle" => Self::Sparkle,
            "gradient" => Self::Gradient,
            "fire" => Self::Fire,
            "candle" => Self::Candle,
            "wave" | "chase" => Self::Wave,
            "rainbow" => Self::Rainbow,
            "scanner" => Self::Scanner,
            "wipe" => Self::Wipe,
            _ => return None,
        };
        Some(effect)
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|e| *e as u8 == v)
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Canonical name (never a legacy synonym).
    pub fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Pulse => "pulse",
            Self::Sparkle => "sparkle",
            Self::Gradient => "gradient",
            Self::Fire => "fire",
            Self::Candle => "candle",
            Self::Wave => "wave",
            Self::Rainbow => "rainbow",
            Self::Scanner => "scanner",
            Self::Wipe => "wipe",
        }
    }

    /// What param1..param4 mean for this effect; `None` for unused slots.
    pub fn param_labels(self) -> [Option<&'static str>; 4] {
        let direction = Some("direction");
        match self {
            Self::Sparkle => [Some("density"), None, None, direction],
            Self::Pulse => [Some("rhythm"), None, None, direction],
            Self::Fire | Self::Candle => [Some("cooling"), Some("sparking"), None, direction],
            Self::Wave => [
                Some("wave_count"),
                Some("eye_size"),
                Some("tail_length"),
                direction,
            ],
            Self::Scanner => [None, Some("eye_size"), Some("tail_length"), direction],
            Self::Solid | Self::Gradient | Self::Rainbow | Self::Wipe => {
                [None, None, None, direction]
            }
        }
    }
}
