use arch::inst::Inst;
use log::{debug, trace};

use crate::{
    error::{AsmError, Error},
    parser::{self, Line, Stmt, Target},
    symbol::SymbolTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Pass1Scanning,
    Pass2Resolving,
    Done,
}

/// One classified source line.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub line: Line,
    pub stmt: Stmt,
}

/// One emitted word and where it came from.
#[derive(Debug, Clone)]
pub struct Encoded {
    pub line: Line,
    pub pc: u16,
    pub inst: Inst,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub parsed: Vec<Parsed>,
    pub encoded: Vec<Encoded>,
    pub symbols: SymbolTable,
}

impl Assembly {
    /// One binary word per line, no trailing newline.
    pub fn to_hack(&self) -> String {
        self.encoded
            .iter()
            .map(|enc| enc.inst.to_word())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct Assembler {
    parsed: Vec<Parsed>,
    symbols: SymbolTable,
    state: State,
    pc_end: u16,
}

impl Assembler {
    /// Normalizes and classifies every line of `source`.
    pub fn new(source: &str) -> Result<Self, AsmError> {
        let parsed = parser::lines(source)
            .into_iter()
            .map(|line| match Stmt::parse(line.code()) {
                Ok(stmt) => Ok(Parsed { line, stmt }),
                Err(error) => Err(AsmError::new(line.idx(), line.raw(), error)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Assembler {
            parsed,
            symbols: SymbolTable::new(),
            state: State::Pass1Scanning,
            pc_end: 0,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn run(mut self) -> Result<Assembly, AsmError> {
        self.bind_labels()?;
        let encoded = self.encode()?;
        Ok(Assembly {
            parsed: self.parsed,
            encoded,
            symbols: self.symbols,
        })
    }

    /// Pass 1: bind every label to the address of the next instruction.
    fn bind_labels(&mut self) -> Result<(), AsmError> {
        debug_assert_eq!(self.state, State::Pass1Scanning);
        let mut pc: u16 = 0;
        for Parsed { line, stmt } in &self.parsed {
            match stmt {
                Stmt::Label(label) => self
                    .symbols
                    .bind_label(label, pc, line.idx())
                    .map_err(|e| AsmError::new(line.idx(), line.raw(), e))?,
                Stmt::Addr(_) | Stmt::Comp(_) => pc = next_pc(pc, line)?,
            }
        }
        debug!("pass 1: {} instructions", pc);
        self.pc_end = pc;
        self.state = State::Pass2Resolving;
        Ok(())
    }

    /// Pass 2: resolve symbols, allocating variables on first use.
    fn encode(&mut self) -> Result<Vec<Encoded>, AsmError> {
        debug_assert_eq!(self.state, State::Pass2Resolving);
        let mut pc: u16 = 0;
        let mut encoded = Vec::with_capacity(self.pc_end as usize);
        for Parsed { line, stmt } in &self.parsed {
            let inst = match stmt {
                Stmt::Label(_) => continue,
                Stmt::Addr(target) => {
                    let value = resolve(&mut self.symbols, target, line.idx())
                        .map_err(|e| AsmError::new(line.idx(), line.raw(), e))?;
                    Inst::A(value)
                }
                Stmt::Comp(inst) => *inst,
            };
            trace!("{:04} {} {}", pc, inst.to_word(), inst);
            encoded.push(Encoded {
                line: line.clone(),
                pc,
                inst,
            });
            pc = next_pc(pc, line)?;
        }
        debug_assert_eq!(pc, self.pc_end);
        self.state = State::Done;
        Ok(encoded)
    }
}

fn resolve(symbols: &mut SymbolTable, target: &Target, idx: usize) -> Result<u16, Error> {
    match target {
        Target::Literal(value) => Ok(*value),
        Target::Symbol(name) => {
            if !symbols.contains(name) {
                symbols.bind_variable(name, idx)?;
            }
            let value = symbols.resolve(name)?;
            Inst::addr(value as u32)
                .map(|inst| inst.to_bin())
                .ok_or_else(|| Error::AddressOutOfRange(name.clone()))
        }
    }
}

/// The program counter after `line`. Programs longer than the address
/// space cannot be referenced by a label.
fn next_pc(pc: u16, line: &Line) -> Result<u16, AsmError> {
    match pc.checked_add(1) {
        Some(next) if next <= arch::inst::ADDR_MAX + 1 => Ok(next),
        _ => Err(AsmError::new(
            line.idx(),
            line.raw(),
            Error::AddressOutOfRange(pc.to_string()),
        )),
    }
}

/// Assembles `source` into newline separated binary words.
pub fn assemble(source: &str) -> Result<String, AsmError> {
    Assembler::new(source)?.run().map(|asm| asm.to_hack())
}
