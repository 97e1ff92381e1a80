//! Skills CLI
//!
//! Command-line interface for initialising, scaffolding, syncing and
//! validating a project's exploration skill.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands, RegionAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} skill documentation tooling", "skills".green().bold());
            println!();
            println!("Run {} for available commands.", "skills --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(verbose: bool) {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())
    };

    if installed.is_ok() {
        tracing::debug!(verbose, "tracing initialised");
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init {
            target,
            force,
            templates,
            json,
        } => commands::run_init(&target, force, templates, json),
        Commands::CreateModule {
            target,
            name,
            description,
            paths,
            json,
        } => commands::run_create_module(&target, &name, description, &paths, json),
        Commands::Sync {
            target,
            commit,
            dry_run,
            json,
        } => commands::run_sync(&target, commit, dry_run, json),
        Commands::ValidateInit { root, json } => commands::run_validate_init(&root, json),
        Commands::ValidateInkmon { file } => commands::run_validate_inkmon(&file),
        Commands::Region { action } => match action {
            RegionAction::Get { file, name, yaml } => commands::run_region_get(&file, &name, yaml),
            RegionAction::Set {
                file,
                name,
                content,
            } => commands::run_region_set(&file, &name, content),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "skills", &mut std::io::stdout());
            Ok(())
        }
    }
}
