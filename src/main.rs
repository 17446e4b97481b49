use anyhow::{Context, Result};
use env_logger::Builder;
use log::LevelFilter;
use solana_idl_codegen::{generate, loader, generator};
use std::io::Write;
use std::path::PathBuf;

// Simple CLI without clap
fn main() -> Result<()> {
    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap().as_secs(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --version command
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Solana IDL Codegen v{}", solana_idl_codegen::VERSION);
        return Ok(());
    }

    if args.len() < 3 {
        println!("Solana IDL Codegen v{}", solana_idl_codegen::VERSION);
        println!("\nUsage:");
        println!("  {} <PATH_TO_IDL_JSON> <OUTPUT_PATH> [--module NAME] [--binding NAME]", args[0]);
        println!("  {} --version", args[0]);
        println!("\nOptions:");
        println!("  --module, -m NAME    Crate path the generated file imports from (default: crate)");
        println!("  --binding, -b NAME   Name of the generated static (default: IDL)");
        println!("  --stdout             Print the generated source instead of writing the file");
        println!("  --version, -v        Show version information");
        return Ok(());
    }

    let input_path = PathBuf::from(&args[1]);
    let output_path = PathBuf::from(&args[2]);

    // Parse optional arguments
    let mut module_name = "crate".to_string();
    let mut binding_name = "IDL".to_string();
    let mut to_stdout = false;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--module" | "-m" => {
                if i + 1 < args.len() {
                    module_name = args[i + 1].clone();
                    i += 2;
                } else {
                    println!("Error: Missing value for --module");
                    return Ok(());
                }
            },
            "--binding" | "-b" => {
                if i + 1 < args.len() {
                    binding_name = args[i + 1].clone();
                    i += 2;
                } else {
                    println!("Error: Missing value for --binding");
                    return Ok(());
                }
            },
            "--stdout" => {
                to_stdout = true;
                i += 1;
            },
            _ => {
                println!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    let raw = std::fs::read(&input_path)
        .with_context(|| format!("Failed to read IDL file: {}", input_path.display()))?;

    if to_stdout {
        let source = generate(&raw, &module_name, &binding_name)?;
        println!("{}", source);
        return Ok(());
    }

    let idl = loader::load_idl(&raw)?;
    generator::write_source(&idl, &module_name, &binding_name, &output_path)?;

    println!("Successfully generated Rust file: {}", output_path.display());

    Ok(())
}
