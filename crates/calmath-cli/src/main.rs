use calmath_core::error::CalendarError;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod util;
mod views;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() {
    let cli = cli::Cli::parse();

    let loaded = config::Config::new();
    let level = loaded
        .as_ref()
        .map_or_else(|_| "warn".to_string(), |c| c.log_level.clone());
    init_logging(&level);

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid configuration, using defaults");
        config::Config::default()
    });
    tracing::debug!(config = ?config, "Configuration loaded");

    let result = commands::Settings::resolve(&cli, &config).and_then(|settings| match cli.command {
        cli::Commands::Period(command) => commands::period::show_period(&settings, command),
        cli::Commands::Week(command) => commands::week::show_week(&settings, command),
        cli::Commands::Names(command) => commands::names::list_names(&settings, command),
        cli::Commands::Normalize(command) => commands::normalize::normalize_items(command),
        cli::Commands::Locale => commands::locale::show_locale(&settings),
    });

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.chain().find_map(|e| e.downcast_ref::<CalendarError>()) {
        Some(CalendarError::OutOfRange { .. }) => {
            eprintln!("{} {:#}", "Error:".style(error_style), err);
            eprintln!("{}", "Dates must fall within about 262,000 years of year 0.".yellow());
        }
        Some(CalendarError::InvalidComponent(component)) => {
            eprintln!("{} {:#}", "Error:".style(error_style), err);
            eprintln!("Component {} is too large for a date.", component.yellow());
        }
        None => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
