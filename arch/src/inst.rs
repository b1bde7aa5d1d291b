use crate::{alu::Comp, dest::Dest, jump::Jump};

use color_print::cformat;

/// Largest value an address instruction can load.
pub const ADDR_MAX: u16 = 0x7FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    A(u16),
    C { dest: Dest, comp: Comp, jump: Jump },
}

impl Inst {
    /// Address instruction, `None` when `value` does not fit in 15 bits.
    pub fn addr(value: u32) -> Option<Inst> {
        if value <= ADDR_MAX as u32 {
            Some(Inst::A(value as u16))
        } else {
            None
        }
    }

    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::A(value) => {
                debug_assert!(*value <= ADDR_MAX, "address out of range: {}", value);
                value & ADDR_MAX
            }
            Inst::C { dest, comp, jump } => {
                0b111 << 13 | comp.bits() << 6 | dest.bits() << 3 | jump.bits()
            }
        }
    }

    /// 16 characters of `0`/`1`, most significant bit first.
    pub fn to_word(&self) -> String {
        format!("{:016b}", self.to_bin())
    }
}

impl std::fmt::Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::A(value) => write!(f, "@{}", value),
            Inst::C { dest, comp, jump } => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    /// Binary word with each field colored.
    pub fn cformat_bin(&self) -> String {
        let word = self.to_word();
        match self {
            Inst::A(_) => cformat!("<blue>{}</><yellow>{}</>", &word[..1], &word[1..]),
            Inst::C { .. } => cformat!(
                "<red>{}</><green>{}</><cyan>{}</><magenta>{}</>",
                &word[..3],
                &word[3..10],
                &word[10..13],
                &word[13..]
            ),
        }
    }
}
