//! `envmon` -- interactive environmental monitoring CLI.
//!
//! Fetches weather and air-quality data, logs it to a local SQLite
//! database, evaluates each reading against configurable safety
//! thresholds, and shows alerts plus health guidance.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                            | Description                          |
//! |-----------------------|----------|------------------------------------|--------------------------------------|
//! | `DATABASE_URL`        | no       | `sqlite://environmental_data.db`   | SQLite database location             |
//! | `OPENWEATHER_API_KEY` | no       | --                                 | Enables temperature/humidity fetch   |
//! | `AIRVISUAL_API_KEY`   | no       | --                                 | Enables particulate fetch            |
//! | `LATITUDE`            | no       | `0`                                | Location for provider queries        |
//! | `LONGITUDE`           | no       | `0`                                | Location for provider queries        |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use envmon_providers::FetchConfig;

mod commands;
mod menu;

/// Database location when `DATABASE_URL` is not set.
const DEFAULT_DATABASE_URL: &str = "sqlite://environmental_data.db";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "envmon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let fetch_config = FetchConfig {
        latitude: env_f64("LATITUDE"),
        longitude: env_f64("LONGITUDE"),
        openweather_api_key: std::env::var("OPENWEATHER_API_KEY").ok(),
        airvisual_api_key: std::env::var("AIRVISUAL_API_KEY").ok(),
    };

    let pool = envmon_db::create_pool(&database_url).await?;
    envmon_db::init_schema(&pool).await?;

    tracing::info!(database_url = %database_url, "envmon started");

    menu::print_header();
    loop {
        menu::print_menu();
        let choice = menu::prompt("Choose (1-6): ")?;

        let result = match choice.trim() {
            "1" => commands::fetch_and_log(&pool, &fetch_config).await,
            "2" => commands::show_latest(&pool).await,
            "3" => commands::query_historical(&pool).await,
            "4" => commands::set_thresholds(&pool).await,
            "5" => commands::view_tips(&pool).await,
            "6" => {
                println!("\nExiting. Stay safe!\n");
                break;
            }
            _ => {
                println!("\nInvalid choice. Please enter a number between 1 and 6.");
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::error!(error = %e, "command failed");
            println!("An error occurred: {e}");
        }
    }

    Ok(())
}

/// Read a float from the environment, defaulting to 0 (with a warning) when
/// unset or unparsable.
fn env_f64(name: &str) -> f64 {
    match std::env::var(name).ok().and_then(|v| v.parse().ok()) {
        Some(value) => value,
        None => {
            tracing::warn!("{name} not set or not a number — defaulting to 0");
            0.0
        }
    }
}
