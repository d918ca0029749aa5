//! sortkit CLI.
//!
//! Sorts numbers, text and linked lists through one positional
//! compare/swap contract.
//!
//! # Quick Start
//!
//! ```bash
//! # Run the built-in demo with both strategies
//! sortkit demo --strategy both
//!
//! # Sort your own input
//! sortkit numbers 10 3 -5 0
//! sortkit chars AsDfGh
//! sortkit list 10 3 -5 0 --stats
//! ```

mod commands;
mod style;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sortkit::Strategy;
use sortkit_config::{ConfigLoader, OutputFormat};

/// sortkit - one sort routine, three very different collections.
#[derive(Parser)]
#[command(name = "sortkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project directory to read sortkit.toml from.
    #[arg(short, long, global = true, default_value = ".")]
    project: String,

    /// How the sort is attached to the collection.
    #[arg(short, long, global = true, value_enum)]
    strategy: Option<StrategyArg>,

    /// Output format.
    #[arg(short, long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Print compare/swap counts.
    #[arg(long, global = true)]
    stats: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Sort the configured numbers, characters and linked list.
    Demo,

    /// Sort a sequence of integers.
    Numbers {
        /// Values to sort.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Sort the characters of a text, ignoring case.
    Chars {
        /// Text to sort.
        text: String,
    },

    /// Build a linked list from the values and sort it.
    List {
        /// Values to append, in order.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Rendering of the merged configuration.
        #[arg(short, long, value_enum, default_value = "text")]
        output: commands::config::ShowFormat,
    },

    /// Validate configuration files.
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Standalone,
    Inherited,
    /// Run standalone, then inherited.
    Both,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Standalone => vec![Strategy::Standalone],
            StrategyArg::Inherited => vec![Strategy::Inherited],
            StrategyArg::Both => Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let Cli {
        command,
        project,
        strategy,
        format,
        stats,
        no_color,
    } = Cli::parse();

    style::set_no_color(
        no_color || std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal(),
    );

    let sort_command = match command {
        Commands::Version => {
            init_logging("info");
            commands::version::run();
            return Ok(());
        }
        Commands::Config(cmd) => {
            init_logging("info");
            return match cmd {
                ConfigCommands::Show { output } => commands::config::show(&project, output),
                ConfigCommands::Validate => commands::config::validate(&project),
            };
        }
        Commands::Demo => commands::SortCommand::Demo,
        Commands::Numbers { values } => commands::SortCommand::Numbers(values),
        Commands::Chars { text } => commands::SortCommand::Chars(text),
        Commands::List { values } => commands::SortCommand::List(values),
    };

    let config = ConfigLoader::new()
        .with_project_dir(&project)
        .load()
        .context("Failed to load configuration")?;
    init_logging(&config.logging.level);

    let settings = commands::RunSettings {
        strategies: strategy.map_or_else(|| vec![config.sort.strategy], StrategyArg::strategies),
        format: format.map_or(config.output.format, OutputFormat::from),
        stats: stats || config.output.stats,
        config,
    };

    commands::run(&settings, sort_command)
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
