use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use std::fs;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;
use wordiff::cli::Cli;
use wordiff::header::file_header;
use wordiff::{render_diff, DiffStyle};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let file1 = cli.file1.as_deref().context("FILE1 is required")?;
    let file2 = cli.file2.as_deref().context("FILE2 is required")?;
    let lhs = fs::read_to_string(file1)
        .with_context(|| format!("failed to read {}", file1.display()))?;
    let rhs = fs::read_to_string(file2)
        .with_context(|| format!("failed to read {}", file2.display()))?;

    let style = cli.style();
    let diff = render_diff(&lhs, &rhs, style, &cli.options())?;
    if diff.is_empty() {
        return Ok(());
    }

    // File headers only make sense when there is a diff body to follow.
    match style {
        DiffStyle::Unified => {
            println!("{}", file_header(file1, "---")?);
            println!("{}", file_header(file2, "+++")?);
        }
        DiffStyle::Context => {
            println!("{}", file_header(file1, "***")?);
            println!("{}", file_header(file2, "---")?);
        }
        DiffStyle::Word | DiffStyle::Normal => {}
    }
    println!("{diff}");
    Ok(())
}

/// Route tracing output to stderr, honoring `WORDIFF_LOG` when set.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("WORDIFF_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
