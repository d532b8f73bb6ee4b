use anyhow::Result;
use clap::Parser;
use loco::config::{Config, DEFAULT_MAX_SHOWN};
use loco::{run, LocateCommand, ProcessLauncher};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Locate files by regex, pick one by number, and open it",
    long_about = None
)]
struct Args {
    /// Regular expression passed to `locate -i -r`, taken as-is even when it
    /// starts with `-` (use `--` before patterns like `-v` that spell our own flags)
    #[arg(index = 1, allow_hyphen_values = true)]
    pattern: String,

    /// Command to run on the selected file (defaults to the desktop opener)
    #[arg(index = 2, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,

    /// Maximum number of matches to list
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_SHOWN)]
    max_shown: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = Config::from_env(args.max_shown);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = run(
        &args.pattern,
        &args.command,
        &config,
        &LocateCommand::default(),
        &ProcessLauncher,
        &mut stdin.lock(),
        &mut stdout.lock(),
    ) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
