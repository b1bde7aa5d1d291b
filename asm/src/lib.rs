//! Two-pass assembler for the Hack architecture.
//!
//! Pass 1 binds every `(LABEL)` to the address of the instruction that
//! follows it. Pass 2 resolves address symbols, allocating variables from
//! RAM address 16 on first use, and encodes one 16-bit word per
//! instruction.

pub mod assembler;
pub mod error;
pub mod parser;
pub mod symbol;
pub mod util;

pub use assembler::{assemble, Assembler, Assembly};
pub use error::{AsmError, CliError, Error};
