pub mod commands;
pub mod data;

use std::path::PathBuf;
use std::process::ExitCode;

use aisle_core::config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
use aisle_core::BlendPolicy;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "aisle",
    about = "Aisle recommendation CLI",
    long_about = "Score catalog and ratings snapshots into ranked product recommendations.",
    after_help = "Examples:\n  aisle top-rated --catalog catalog.csv\n  aisle content --catalog catalog.csv --item \"Wool Scarf\"\n  aisle hybrid --catalog catalog.csv --ratings ratings.csv --user u42 --item \"Wool Scarf\" --month 1"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to an aisle.toml config file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PreferArg {
    Content,
    Collaborative,
}

impl From<PreferArg> for BlendPolicy {
    fn from(value: PreferArg) -> Self {
        match value {
            PreferArg::Content => BlendPolicy::ContentFirst,
            PreferArg::Collaborative => BlendPolicy::CollaborativeFirst,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rank product identities by mean rating across the catalog")]
    TopRated {
        #[arg(long, help = "Catalog snapshot CSV")]
        catalog: PathBuf,
        #[arg(long, help = "Result size (defaults to engine.top_n)")]
        top: Option<usize>,
    },
    #[command(about = "Rank products by tag similarity to a seed item")]
    Content {
        #[arg(long, help = "Catalog snapshot CSV")]
        catalog: PathBuf,
        #[arg(long, help = "Display name of the seed item")]
        item: String,
        #[arg(long, help = "Result size (defaults to engine.top_n)")]
        top: Option<usize>,
    },
    #[command(about = "Rank products from similarly-behaving users' ratings")]
    Collaborative {
        #[arg(long, help = "Catalog snapshot CSV")]
        catalog: PathBuf,
        #[arg(long, help = "Ratings snapshot CSV")]
        ratings: PathBuf,
        #[arg(long, help = "Target user id")]
        user: String,
        #[arg(long, help = "Result size (defaults to engine.top_n)")]
        top: Option<usize>,
    },
    #[command(about = "Blend content and collaborative signals, narrowed to the season")]
    Hybrid {
        #[arg(long, help = "Catalog snapshot CSV")]
        catalog: PathBuf,
        #[arg(long, help = "Ratings snapshot CSV")]
        ratings: PathBuf,
        #[arg(long, help = "Target user id")]
        user: String,
        #[arg(long, help = "Display name of the seed item")]
        item: String,
        #[arg(long, help = "Calendar month 1-12 (defaults to the current month)")]
        month: Option<u32>,
        #[arg(long, help = "Result size (defaults to engine.top_n)")]
        top: Option<usize>,
        #[arg(long, value_enum, help = "Which signal wins dedup priority")]
        prefer: Option<PreferArg>,
    },
    #[command(about = "Print the effective configuration")]
    Config,
}

fn init_logging(config: &AppConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

/// Getting the config file into memory and what it says are different
/// failures; callers scripting against the JSON output can tell them apart.
fn config_error_class(error: &ConfigError) -> &'static str {
    match error {
        ConfigError::ReadFile { .. }
        | ConfigError::ParseFile { .. }
        | ConfigError::MissingConfigFile(_) => "config_load",
        ConfigError::InvalidEnvOverride { .. } | ConfigError::Validation(_) => "config_validation",
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        overrides: ConfigOverrides::default(),
    }) {
        Ok(config) => config,
        Err(error) => {
            let result = commands::CommandResult::failure(
                "config",
                config_error_class(&error),
                format!("configuration issue: {error}"),
                2,
            );
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Command::TopRated { catalog, top } => commands::top_rated::run(&config, &catalog, top),
        Command::Content { catalog, item, top } => {
            commands::content::run(&config, &catalog, &item, top)
        }
        Command::Collaborative { catalog, ratings, user, top } => {
            commands::collaborative::run(&config, &catalog, &ratings, &user, top)
        }
        Command::Hybrid { catalog, ratings, user, item, month, top, prefer } => {
            commands::hybrid::run(commands::hybrid::HybridArgs {
                config: &config,
                catalog: &catalog,
                ratings: &ratings,
                user: &user,
                item: &item,
                month,
                top,
                prefer: prefer.map(BlendPolicy::from),
            })
        }
        Command::Config => commands::config::run(&config),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
