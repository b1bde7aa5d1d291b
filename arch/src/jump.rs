use num_enum::IntoPrimitive;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Jump condition. The discriminant is the `j1 j2 j3` (< = >) field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    IntoPrimitive,
)]
#[repr(u8)]
pub enum Jump {
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Jump> {
        match s.parse::<Jump>() {
            Ok(Jump::Null) | Err(_) => None,
            Ok(jump) => Some(jump),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Jump::Null => "",
            other => other.into(),
        }
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
