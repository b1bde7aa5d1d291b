use std::path::{Path, PathBuf};

use color_print::{cformat, cprintln};
use hackasm::{Assembler, Assembly, CliError};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: PathBuf,

    /// Output file [default: <input>.hack]
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write the symbol table as YAML
    #[clap(short, long)]
    map: Option<PathBuf>,
}

fn main() {
    use clap::Parser;

    env_logger::init();
    let args: Args = Args::parse();
    let input = args.input.display().to_string();

    println!("Hack Assembler");

    println!("1. Read File");
    println!("  < {}", input);
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(e) => fail(CliError::FileRead(input.clone(), e)),
    };

    println!("2. Assemble");
    let asm = match Assembler::new(&source).and_then(Assembler::run) {
        Ok(asm) => asm,
        Err(e) => {
            e.print_diag(&input);
            std::process::exit(1);
        }
    };
    println!(
        "  {} words, {} symbols",
        asm.encoded.len(),
        asm.symbols.user_symbols().count()
    );

    println!("3. Write Binary");
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("hack"));
    if let Err(e) = write(&output, &asm, args.map.as_deref()) {
        fail(e);
    }

    if args.dump {
        hackasm::util::print_dump(&input, &asm);
    }
}

fn write(output: &Path, asm: &Assembly, map: Option<&Path>) -> Result<(), CliError> {
    println!("  > {}", output.display());
    std::fs::write(output, asm.to_hack())
        .map_err(|e| CliError::FileWrite(output.display().to_string(), e))?;
    if let Some(map) = map {
        println!("  > {}", map.display());
        let yaml = asm.symbols.to_yaml().map_err(CliError::Map)?;
        std::fs::write(map, yaml).map_err(|e| CliError::FileWrite(map.display().to_string(), e))?;
    }
    Ok(())
}

fn fail(e: CliError) -> ! {
    cprintln!("<red,bold>error</>: {}", e);
    if let Some(source) = std::error::Error::source(&e) {
        println!("{}", cformat!("  <blue>caused by</>: {}", source));
    }
    std::process::exit(1);
}
