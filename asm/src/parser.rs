use arch::{alu::Comp, dest::Dest, inst::Inst, jump::Jump};
use color_print::cformat;

use crate::error::Error;

const COMMENT: &str = "//";

// ----------------------------------------------------------------------------
// Line

/// Strips comments and all whitespace. `None` means the line holds no
/// instruction.
pub fn normalize(raw: &str) -> Option<String> {
    let line = raw.trim();
    if line.starts_with(COMMENT) {
        return None;
    }
    let code = match line.split_once(COMMENT) {
        Some((code, _)) => code,
        None => line,
    };
    let code: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

#[derive(Debug, Clone)]
pub struct Line {
    idx: usize,
    raw: String,
    code: String,
}

impl Line {
    pub fn new(idx: usize, raw: &str) -> Option<Self> {
        normalize(raw).map(|code| Line {
            idx,
            raw: raw.to_string(),
            code,
        })
    }

    /// 0-based line index in the source text
    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Normalized lines of `source`, blank and comment-only lines dropped.
pub fn lines(source: &str) -> Vec<Line> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| Line::new(idx, raw))
        .collect()
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Addr(Target),
    Comp(Inst),
    Label(String),
}

impl Stmt {
    /// Classifies a normalized instruction.
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        if code.starts_with('(') {
            let label = code.trim_start_matches('(').trim_end_matches(')');
            if !code.ends_with(')') || label.is_empty() {
                return Err(Error::MalformedInstruction(code.to_string()));
            }
            return Ok(Stmt::Label(label.to_string()));
        }
        if let Some(target) = code.strip_prefix('@') {
            return Target::parse(target).map(Stmt::Addr);
        }
        if code.is_empty() {
            return Err(Error::MalformedInstruction(code.to_string()));
        }
        decode(code).map(|(dest, comp, jump)| Stmt::Comp(Inst::C { dest, comp, jump }))
    }

    pub fn cformat(&self) -> String {
        match self {
            Stmt::Addr(target) => cformat!("<blue>@</>{}", target.cfmt()),
            Stmt::Comp(inst) => cformat!("<red>{}</>", inst),
            Stmt::Label(label) => cformat!("<g>({})</>", label),
        }
    }
}

/// Splits `[dest=]comp[;jump]` and looks every field up in its table.
pub fn decode(code: &str) -> Result<(Dest, Comp, Jump), Error> {
    let (dest, rest) = match code.split_once('=') {
        Some((dest, rest)) => (
            Dest::parse(dest).ok_or_else(|| Error::UnknownDest(dest.to_string()))?,
            rest,
        ),
        None => (Dest::Null, code),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((comp, jump)) => (
            comp,
            Jump::parse(jump).ok_or_else(|| Error::UnknownJump(jump.to_string()))?,
        ),
        None => (rest, Jump::Null),
    };
    let comp = Comp::parse(comp).ok_or_else(|| Error::UnknownComputation(comp.to_string()))?;
    Ok((dest, comp, jump))
}

// ----------------------------------------------------------------------------
// Address target

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Literal(u16),
    Symbol(String),
}

impl Target {
    fn parse(s: &str) -> Result<Target, Error> {
        if s.is_empty() {
            return Err(Error::MalformedInstruction(format!("@{}", s)));
        }
        // `+` is the only sign a literal may carry
        let digits = s.strip_prefix('+').unwrap_or(s);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            let value = digits
                .parse::<u32>()
                .ok()
                .and_then(Inst::addr)
                .ok_or_else(|| Error::AddressOutOfRange(s.to_string()))?;
            return Ok(Target::Literal(value.to_bin()));
        }
        Ok(Target::Symbol(s.to_string()))
    }

    fn cfmt(&self) -> String {
        match self {
            Target::Literal(v) => cformat!("<y>{}</>", v),
            Target::Symbol(s) => cformat!("<c>{}</>", s),
        }
    }
}
