use super::pitches::*;

/// One physical key: the serial byte that triggers it and the half
/// period of the pitch it sounds.
pub struct KeyMapping {
    pub trigger: u8,
    pub period_us: u16,
}

/// Keyboard layout, one octave and a half up from middle C. Triggers
/// must be pairwise distinct; scan order is priority order.
pub const KEYMAP: [KeyMapping; 18] = [
    KeyMapping { trigger: b'a', period_us: C6 },
    KeyMapping { trigger: b'w', period_us: CS6 },
    KeyMapping { trigger: b's', period_us: D6 },
    KeyMapping { trigger: b'e', period_us: DS6 },
    KeyMapping { trigger: b'd', period_us: E6 },
    KeyMapping { trigger: b'f', period_us: F6 },
    KeyMapping { trigger: b't', period_us: FS6 },
    KeyMapping { trigger: b'g', period_us: G6 },
    KeyMapping { trigger: b'y', period_us: GS6 },
    KeyMapping { trigger: b'h', period_us: A6 },
    KeyMapping { trigger: b'u', period_us: AS6 },
    KeyMapping { trigger: b'j', period_us: B6 },
    KeyMapping { trigger: b'k', period_us: C7 },
    KeyMapping { trigger: b'o', period_us: CS7 },
    KeyMapping { trigger: b'l', period_us: D7 },
    KeyMapping { trigger: b'p', period_us: DS7 },
    KeyMapping { trigger: b';', period_us: E7 },
    KeyMapping { trigger: b'\'', period_us: F7 },
];

/// First matching entry wins.
pub fn period_for_key(trigger: u8) -> Option<u16> {
    KEYMAP
        .iter()
        .find(|mapping| mapping.trigger == trigger)
        .map(|mapping| mapping.period_us)
}
