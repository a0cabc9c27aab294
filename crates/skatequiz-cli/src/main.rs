//! skatequiz CLI — figure-skating judging rules trainer for the terminal.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::task::JoinHandle;

use skatequiz_core::routes::{Discipline, Mode};
use skatequiz_update::{spawn_update_check, GithubReleases, UpdateInfo};

use crate::config::SkatequizConfig;

mod commands;
mod config;
mod render;
mod session;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "skatequiz", version, about = "Figure-skating judging rules trainer")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the background check for a newer release
    #[arg(long, global = true)]
    no_update_check: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every quiz and whether it is available
    Menu,

    /// Recall the six positive GOE aspects of an element
    Recall {
        /// Discipline: pair, solo, etc
        #[arg(long, default_value = "pair")]
        discipline: Discipline,

        /// Category to quiz (asked interactively if omitted)
        #[arg(long)]
        category: Option<String>,

        /// Recall data file (overrides the configured data directory)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Random seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Multiple choice: pick the GOE reduction for each error
    Penalties {
        /// Discipline: pair, solo, etc
        #[arg(long, default_value = "pair")]
        discipline: Discipline,

        /// Category to quiz (asked interactively if omitted)
        #[arg(long)]
        category: Option<String>,

        /// Penalties data file (overrides the configured data directory)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Random seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Grade six recall answers read from a file, one per line
    Check {
        /// Discipline: pair, solo, etc
        #[arg(long, default_value = "pair")]
        discipline: Discipline,

        /// Recall data file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Category to grade against
        #[arg(long)]
        category: String,

        /// File with up to six answers, one per line
        #[arg(long)]
        answers: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the categories of a quiz
    Categories {
        /// Discipline: pair, solo, etc
        #[arg(long, default_value = "pair")]
        discipline: Discipline,

        /// recall or penalties (both if omitted)
        #[arg(long)]
        mode: Option<Mode>,

        /// Data file (requires --mode)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Check a data file and report every invalid category
    Validate {
        /// Data file to check
        #[arg(long)]
        data: PathBuf,

        /// How to read the file: recall or penalties
        #[arg(long, default_value = "recall")]
        mode: Mode,
    },

    /// Create a starter config and sample data files
    Init,

    /// Look for a newer release now
    CheckUpdate,
}

impl Commands {
    fn is_interactive(&self) -> bool {
        matches!(
            self,
            Commands::Menu | Commands::Recall { .. } | Commands::Penalties { .. }
        )
    }
}

fn start_update_check(config: &SkatequizConfig) -> Option<JoinHandle<Option<UpdateInfo>>> {
    if !config.check_updates {
        return None;
    }
    match GithubReleases::new(&config.update) {
        Ok(feed) => Some(spawn_update_check(
            Arc::new(feed),
            VERSION.to_string(),
            config.update.releases_page(),
        )),
        Err(e) => {
            tracing::debug!(error = %e, "update check unavailable");
            None
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = config::load_config_from(cli.config.as_deref())?;
    if cli.no_update_check {
        config.check_updates = false;
    }

    let pending_update = if cli.command.is_interactive() {
        start_update_check(&config)
    } else {
        None
    };

    match cli.command {
        Commands::Menu => commands::menu::execute()?,
        Commands::Recall {
            discipline,
            category,
            data,
            seed,
        } => commands::recall::execute(&config, discipline, category, data, seed)?,
        Commands::Penalties {
            discipline,
            category,
            data,
            seed,
        } => commands::penalties::execute(&config, discipline, category, data, seed)?,
        Commands::Check {
            discipline,
            data,
            category,
            answers,
            format,
        } => commands::check::execute(&config, discipline, data, category, answers, format)?,
        Commands::Categories {
            discipline,
            mode,
            data,
        } => commands::categories::execute(&config, discipline, mode, data)?,
        Commands::Validate { data, mode } => commands::validate::execute(data, mode)?,
        Commands::Init => commands::init::execute()?,
        Commands::CheckUpdate => commands::check_update::execute(&config, VERSION).await?,
    }

    if let Some(handle) = pending_update {
        if let Ok(Some(info)) = handle.await {
            println!("\n{}", info.notice());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "skatequiz=info".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
