use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed instruction: `{0}`")]
    MalformedInstruction(String),

    #[error("Unknown computation: `{0}`")]
    UnknownComputation(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDest(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Re-defined label: `{0}`")]
    DuplicateLabel(String),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("Address out of range [0, 32767]: `{0}`")]
    AddressOutOfRange(String),
}

/// An [`Error`] located at a source line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {}: {error}", .idx + 1)]
pub struct AsmError {
    /// 0-based line index
    pub idx: usize,
    pub raw: String,
    #[source]
    pub error: Error,
}

impl AsmError {
    pub fn new(idx: usize, raw: &str, error: Error) -> Self {
        AsmError {
            idx,
            raw: raw.to_string(),
            error,
        }
    }

    /// Print error with the file location and line content
    pub fn print_diag(&self, file: &str) {
        cprintln!("<red,bold>error</>: {}", self.error);

        let line_num = self.idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, self.raw);
        cprintln!("      <blue>|</>");
    }
}

/// Failures of the command line shell around the assembler.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to render symbol map")]
    Map(#[source] serde_yaml::Error),
}
