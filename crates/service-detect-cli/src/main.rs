use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::Colorize;
use tracing::debug;

use service_detect_core::{detect, first_char, write_label, Detection, Result};

mod args;
mod logging;
use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        handle_completions(shell);
        return ExitCode::SUCCESS;
    }

    logging::init_logging(cli.verbose);

    // clap enforces presence unless --completions was given
    let id_string = cli.id_string.unwrap_or_default();

    // Undecodable bytes become U+FFFD rather than rejecting the input
    match handle_detect(&id_string.to_string_lossy(), &cli.output, cli.debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_detect(raw: &str, output: &Path, show_debug: bool) -> Result<()> {
    let detection = detect(raw);

    if show_debug {
        print_debug_block(&detection);
    }

    let classification = detection.classification;
    debug!(label = %classification.label, output = %output.display(), "detected");

    if show_debug {
        println!(
            "Detection result: {} ({})",
            classification.label, classification.reason
        );
    }

    write_label(output, classification.label)
}

fn print_debug_block(detection: &Detection) {
    println!("{}", "=== DEBUG ===".bold());
    println!("Raw input (repr): {:?}", detection.raw);
    println!("Cleaned input (repr): {:?}", detection.cleaned);
    if let Some(info) = first_char(&detection.cleaned) {
        println!("First char: {}", info);
    }
    println!("{}\n", "=============".bold());
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "service-detect", &mut io::stdout());
}
