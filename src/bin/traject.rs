use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use traject::{Mover as _, Program};

#[derive(Parser, Debug)]
#[command(name = "traject", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a program and print its canonical source form.
    Fmt(FmtArgs),
    /// Compile a program and print motion samples as JSON.
    Eval(EvalArgs),
    /// Print a program's editable control points as JSON.
    Handles(HandlesArgs),
}

#[derive(Parser, Debug)]
struct FmtArgs {
    /// Input program source.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input program source.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Sample at one elapsed time.
    #[arg(long, conflicts_with = "samples")]
    at: Option<f64>,

    /// Sample this many times uniformly over the total duration.
    #[arg(long, default_value_t = 10)]
    samples: u32,
}

#[derive(Parser, Debug)]
struct HandlesArgs {
    /// Input program source.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn load_program(path: &PathBuf) -> anyhow::Result<Program> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let program = traject::parse(&src)?;
    Ok(program)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Fmt(args) => {
            let program = load_program(&args.in_path)?;
            print!("{}", program.to_program_string());
        }
        Command::Eval(args) => {
            let program = load_program(&args.in_path)?;
            let mover = program.to_sequenced_mover();
            let times: Vec<f64> = match args.at {
                Some(t) => vec![t],
                None => {
                    let n = args.samples.max(1);
                    (0..=n)
                        .map(|i| mover.duration() * f64::from(i) / f64::from(n))
                        .collect()
                }
            };
            for t in times {
                let sample = mover.evaluate(t);
                let line = serde_json::json!({ "time": t, "sample": sample });
                println!("{line}");
            }
        }
        Command::Handles(args) => {
            let program = load_program(&args.in_path)?;
            let handles = program.to_control_points();
            println!("{}", serde_json::to_string_pretty(&handles)?);
        }
    }
    Ok(())
}
