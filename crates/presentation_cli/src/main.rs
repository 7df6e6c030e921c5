//! Kiosk CLI
//!
//! Command-line front end for the registration form and the weather widget.

#![allow(clippy::print_stdout)]

mod console_view;
mod register;
mod validate;
mod weather;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::WeatherService;
use clap::{Parser, Subcommand};
use domain::FormState;
use infrastructure::{AppConfig, WeatherAdapter, init_logging};
use tracing::{debug, info};

/// Kiosk CLI
#[derive(Parser)]
#[command(name = "kiosk-cli")]
#[command(author, version, about = "Event registration and weather kiosk", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./kiosk.toml if present)
    #[arg(short, long, global = true, env = "KIOSK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a complete registration once
    ///
    /// Exits with status 1 if the form could not be submitted.
    /// Example: kiosk-cli validate --name "Jo Li" --email jo@example.com
    ///          --phone "(555) 123-4567" --age 30 --event keynote
    Validate {
        /// Full name (first and last)
        #[arg(long, default_value = "")]
        name: String,

        /// Email address
        #[arg(long, default_value = "")]
        email: String,

        /// Phone number (10 digits, any formatting)
        #[arg(long, default_value = "")]
        phone: String,

        /// Age in years
        #[arg(long, default_value = "")]
        age: String,

        /// Checked event (repeatable)
        #[arg(long = "event")]
        events: Vec<String>,

        /// Event options offered by the form (default: from configuration)
        #[arg(long, value_delimiter = ',')]
        events_available: Option<Vec<String>>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fill in the registration form interactively
    Register,

    /// Show current weather for a city
    Weather {
        /// City name (default: from configuration)
        city: Option<String>,

        /// Keep reading city names from stdin, one per line
        #[arg(short, long)]
        interactive: bool,
    },

    /// Print the effective configuration (secrets omitted)
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => AppConfig::load().context("Failed to load configuration"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;

    // Set up logging based on verbosity
    init_logging(log_filter_from_verbosity(cli.verbose), config.logging.format)?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Validate {
            name,
            email,
            phone,
            age,
            events,
            events_available,
            json,
        } => {
            let options = events_available.unwrap_or_else(|| config.form.events.clone());
            let input = validate::FormInput {
                name,
                email,
                phone,
                age,
                events,
            };

            let report = validate::validate(FormState::new(options), &input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }

            if !report.submittable {
                std::process::exit(1);
            }
        },

        Commands::Register => {
            println!("📝 Event registration (Ctrl-D to abort)");
            println!();

            let stdin = std::io::stdin();
            let outcome = register::run(config.form.new_form(), stdin.lock(), std::io::stdout())?;

            if let Some(registration) = outcome {
                info!(email = %registration.email, "Registration completed");
                println!();
                println!("✅ {}", registration.summary());
            }
        },

        Commands::Weather { city, interactive } => {
            let adapter = WeatherAdapter::with_config(config.weather.to_client_config())?;
            let service = WeatherService::new(Arc::new(adapter));
            let city = city.unwrap_or_else(|| config.weather.default_city.clone());

            let mut stdout = std::io::stdout();
            let found = weather::show(&service, &city, &mut stdout).await?;

            if interactive {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                weather::interactive(&service, stdin, &mut stdout).await?;
            } else if !found {
                std::process::exit(1);
            }
        },

        Commands::Config => {
            println!("# Effective configuration");
            if config.weather.has_api_key() {
                println!("# weather.api_key is set (not shown)");
            } else {
                println!("# weather.api_key is NOT set (use KIOSK_WEATHER__API_KEY)");
            }
            println!();
            print!("{}", config.to_toml()?);
        },
    }

    Ok(())
}
