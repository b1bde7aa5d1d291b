use crate::assembler::{Assembly, Parsed};
use crate::parser::Stmt;
use color_print::cformat;

const RULE: &str = "-------+------------------+-----------------------------------------";

/// Listing of every instruction and label with its address and word.
pub fn dump(path: &str, asm: &Assembly) -> Vec<String> {
    let mut out = vec![format!(
        "{}+------[{}]{}",
        "-".repeat(7),
        path,
        "-".repeat(40usize.saturating_sub(path.len()))
    )];
    let mut encoded = asm.encoded.iter().peekable();
    for Parsed { line, stmt } in &asm.parsed {
        let body = match stmt {
            Stmt::Label(_) => {
                format!("{:7}| {:16} | {:>4}: {}", "", "", line.no(), stmt.cformat())
            }
            Stmt::Addr(_) | Stmt::Comp(_) => {
                let (pc, bin) = match encoded.next_if(|enc| enc.line.idx() == line.idx()) {
                    Some(enc) => (format!("{:04X}", enc.pc), enc.inst.cformat_bin()),
                    None => ("????".to_string(), cformat!("<r,s>{}</>", "!".repeat(16))),
                };
                format!(
                    "[{}] | {} | {:>4}:   {}",
                    pc,
                    bin,
                    line.no(),
                    stmt.cformat()
                )
            }
        };
        out.push(body);
    }
    out.push(RULE.to_string());
    out
}

pub fn print_dump(path: &str, asm: &Assembly) {
    for line in dump(path, asm) {
        println!("{}", line);
    }
}
