use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use contact_book::{CommandDispatcher, Config, ConsoleAdapter, SessionService};

#[derive(Parser)]
#[command(name = "contact-book")]
#[command(about = "An in-memory contact address book", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_book(&cli.config),
        Commands::Version => {
            println!("contact-book v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => init_config(),
    }
}

fn load_config(config_path: &str) -> Config {
    if !Path::new(config_path).exists() {
        return Config::load_env();
    }

    match Config::load(config_path) {
        Ok(mut config) => {
            if let Err(e) = config.apply_env(|key| std::env::var(key).ok()) {
                tracing::warn!("Ignoring environment override: {}", e);
            }
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        }
    }
}

fn run_book(config_path: &str) -> ExitCode {
    let config = load_config(config_path);
    tracing::info!("Starting {}", config.book.name);

    let dispatcher = CommandDispatcher::new(config.book.case_insensitive);
    let mut session = SessionService::new(ConsoleAdapter::stdio(), dispatcher, config.book.prompt);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Session aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_config() -> ExitCode {
    match Config::default().to_yaml() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
