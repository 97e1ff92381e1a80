//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Skills - keep a project's exploration skill in step with its code
#[derive(Parser, Debug)]
#[command(name = "skills")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy the skill, commands and notes skeleton into a project
    ///
    /// The project must already be a git repository. Existing files are
    /// left alone unless --force is given.
    ///
    /// Examples:
    ///   skills init                      # Initialise the current directory
    ///   skills init ../app --force       # Overwrite existing files
    ///   skills init --templates my-tpl/  # Copy a custom template tree
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        target: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Template directory to copy instead of the built-in set
        #[arg(long)]
        templates: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Create a module tracking document under references/
    ///
    /// Examples:
    ///   skills create-module . auth-system -d "User authentication" -p src/auth/
    ///   skills create-module . api-layer -p "src/api/,src/routes/"
    CreateModule {
        /// Project directory
        target: PathBuf,

        /// Module name in kebab-case
        name: String,

        /// Module description
        #[arg(short, long)]
        description: Option<String>,

        /// Tracked paths (repeatable or comma separated)
        #[arg(short, long = "paths")]
        paths: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Regenerate the References, Config and Core Modules parts of SKILL.md
    Sync {
        /// Project directory
        #[arg(default_value = ".")]
        target: PathBuf,

        /// Commit to record as last_tracked_commit
        #[arg(short, long)]
        commit: Option<String>,

        /// Preview changes without writing SKILL.md
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check an initialised project against the standard layout
    ValidateInit {
        /// Project directory
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate an InkMon design document
    ValidateInkmon {
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Read or replace a generated region of a markdown file
    Region {
        #[command(subcommand)]
        action: RegionAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Region actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RegionAction {
    /// Print the content of a region
    Get {
        /// Markdown file
        file: PathBuf,

        /// Region name, e.g. "Config"
        name: String,

        /// Parse the region's ```yaml block and print it as JSON
        #[arg(long)]
        yaml: bool,
    },

    /// Replace the content of a region
    Set {
        /// Markdown file
        file: PathBuf,

        /// Region name, e.g. "References"
        name: String,

        /// New content; read from stdin when omitted
        #[arg(long)]
        content: Option<String>,
    },
}
