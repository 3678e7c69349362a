//! tasksync CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use std::sync::atomic::Ordering;
use tasksync::cli::commands;
use tasksync::cli::{Cli, Commands, OutputFormat};
use tasksync::config::{Settings, resolve_settings};
use tasksync::error::Error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.dry_run {
        tasksync::DRY_RUN.store(true, Ordering::Relaxed);
    }
    if cli.format == OutputFormat::Csv {
        tasksync::CSV_OUTPUT.store(true, Ordering::Relaxed);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Resolve effective JSON mode: --json OR --format json OR non-TTY stdout
    // (an explicit --format csv keeps CSV)
    let json = cli.json
        || cli.format == OutputFormat::Json
        || (cli.format == OutputFormat::Table
            && !std::io::IsTerminal::is_terminal(&std::io::stdout()));

    let result = resolve_settings(cli.config.as_deref()).and_then(|settings| {
        init_tracing(cli.verbose, cli.quiet, settings.debug);
        run(&cli, &settings, json)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                eprintln!("{}", e.to_structured_json());
            } else if !cli.quiet {
                if let Some(hint) = e.hint() {
                    eprintln!("Error: {e}\n  Hint: {hint}");
                } else {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool, debug: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 if debug => EnvFilter::new("debug"),
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli, settings: &Settings, json: bool) -> Result<(), Error> {
    match &cli.command {
        Commands::Parse(args) => commands::parse::execute(args, settings, json),
        Commands::Format { input } => commands::format::execute(input, settings, json),
        Commands::Update { file, line, task } => {
            commands::update::execute(file, *line, task, settings, json)
        }
        Commands::Export { file, target } => {
            commands::convert::execute_export(file, *target, settings)
        }
        Commands::Import(args) => commands::convert::execute_import(args, settings, json),
        Commands::Map { file, output } => {
            commands::map::execute(file, output.as_deref(), settings)
        }
        Commands::Merge {
            local,
            remote,
            strategy,
        } => commands::merge::execute(local, remote, *strategy, settings, json),
        Commands::Recur { phrase } => commands::recur::execute(phrase, json),
        Commands::Version => commands::version::execute(cli.config.as_deref(), json),
        Commands::Completions { shell } => commands::completions::execute(shell),
    }
}
