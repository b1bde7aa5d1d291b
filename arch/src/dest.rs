use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::EnumIter;

/// Destination registers. The discriminant is the `d1 d2 d3` (A D M) field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    IntoPrimitive,
    TryFromPrimitive,
)]
#[repr(u8)]
pub enum Dest {
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    /// Parses a set of destination registers. Letters may appear in any
    /// order, each at most once.
    pub fn parse(s: &str) -> Option<Dest> {
        if s.is_empty() {
            return None;
        }
        let mut bits = 0u8;
        for c in s.chars() {
            let bit = match c {
                'A' => 0b100,
                'D' => 0b010,
                'M' => 0b001,
                _ => return None,
            };
            if bits & bit != 0 {
                return None;
            }
            bits |= bit;
        }
        Dest::try_from(bits).ok()
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Dest::Null => "",
            Dest::M => "M",
            Dest::D => "D",
            Dest::MD => "MD",
            Dest::A => "A",
            Dest::AM => "AM",
            Dest::AD => "AD",
            Dest::AMD => "AMD",
        }
    }
}

impl std::fmt::Display for Dest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
