use bank::service::{
    ScriptRunner, console::run_console, mock::generator, output_csv, write_journal,
};
use clap::{Parser, Subcommand};
use std::fs::File;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bank", version, about = "A reducer-driven bank account", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the action script (CSV with `type,payload` columns) to replay
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Also write the recorded transitions to this file as JSON lines
    #[arg(short, long, value_name = "FILE")]
    journal: Option<String>,

    /// Log every transition to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random action script to a file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "actions.csv", value_name = "FILE")]
        output: String,

        /// Number of actions to generate
        #[arg(short, long, default_value = "20", value_name = "COUNT")]
        count: usize,
    },
    /// Operate the account interactively
    Console,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Some(Commands::Generate { output, count }) => {
            generator(&output, count)?;
        }
        Some(Commands::Console) => {
            let stdin = std::io::stdin();
            run_console(stdin.lock(), std::io::stdout())?;
        }
        None => {
            let file = args
                .file
                .ok_or("Please provide a script file path or use a subcommand")?;

            let session = ScriptRunner::new().run_file(&file)?;
            output_csv(session.state(), std::io::stdout())?;

            if let Some(path) = args.journal {
                write_journal(session.journal(), File::create(path)?)?;
            }
        }
    }

    Ok(())
}
