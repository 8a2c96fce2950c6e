use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use zcalc::{Config, logging, shell};

/// Interactive terminal calculator.
///
/// Reads keys from stdin line by line, e.g. `12.5 * 4 =`, and prints the
/// display after each line. Type `help` for the list of keys.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about, long_about = None)]
struct Cli {
    /// Path to the config file (default: <config dir>/zcalc/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Apply one line of keys, print the final display and exit
    #[arg(long, short = 'e', value_name = "KEYS")]
    eval: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    logging::init(if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    });
    tracing::debug!(?config, "configuration loaded");

    if let Some(keys) = cli.eval {
        let mut stdout = io::stdout().lock();
        let snapshot = shell::eval_line(&config, &keys, &mut stdout)?;
        if let Some(error) = &snapshot.error {
            eprintln!("{}", error);
        }
        writeln!(stdout, "{}", snapshot.display)?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("zcalc {} - type `help` for keys, `q` to quit", env!("CARGO_PKG_VERSION"));
    }

    let mut stdout = io::stdout().lock();
    shell::run(&config, stdin.lock(), &mut stdout).context("Shell loop failed")?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
