use anyhow::Context;
use argh::FromArgs;
use library_inventory::{report, Interpreter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(FromArgs)]
/// Run library inventory commands from a file and write a report.
struct Args {
    #[argh(option, short = 'i', default = "PathBuf::from(\"input.txt\")")]
    /// file with one command per line
    input: PathBuf,

    #[argh(option, short = 'o', default = "PathBuf::from(\"output.txt\")")]
    /// where to write the report
    output: PathBuf,

    #[argh(switch)]
    /// read commands interactively instead of from the input file
    interactive: bool,

    #[argh(switch, short = 'v')]
    /// log every processed command
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.interactive {
        return Interpreter::default()
            .repl()
            .context("interactive session failed");
    }

    report::generate(&args.input, &args.output)?;
    println!("Output file generated successfully.");
    Ok(())
}
