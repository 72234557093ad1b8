use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use current_weather_core::{
    Config, Coordinate, ForecastPeriod, SimplifiedForecast, provider_from_config,
};
use inquire::{CustomType, Text};
use log::info;

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "current-weather", version, about = "Current weather summary service")]
pub struct Cli {
    /// Config file to use instead of the one in the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service.
    Serve {
        /// Address to listen on, e.g. "0.0.0.0:8080".
        #[arg(long)]
        listen: Option<SocketAddr>,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Print the current forecast summary for a location.
    Show {
        /// Latitude in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        long: f64,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Interactively edit and save the configuration.
    Configure,
}

/// Overrides for the forecast provider settings in the config file.
#[derive(Debug, Args)]
pub struct ProviderArgs {
    /// Forecast provider base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Timeout for each outbound request, in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl ProviderArgs {
    fn apply(self, mut config: Config) -> Config {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout_secs = secs;
        }
        config
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { config: config_path, command } = self;

        let config = match &config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match command {
            Command::Serve { listen, provider } => {
                let mut config = provider.apply(config);
                if let Some(listen) = listen {
                    config.listen_addr = listen;
                }

                let provider = provider_from_config(&config)?;
                server::serve(&config, provider).await
            }
            Command::Show { lat, long, provider } => {
                let config = provider.apply(config);
                show(&config, Coordinate::new(lat, long)).await
            }
            Command::Configure => configure(config, config_path.as_deref()),
        }
    }
}

async fn show(config: &Config, coordinate: Coordinate) -> anyhow::Result<()> {
    let provider = provider_from_config(config)?;
    let forecast = provider
        .get_forecast(coordinate)
        .await
        .with_context(|| format!("Failed to get forecast for {coordinate}"))?;

    let period = forecast.first_period().ok_or_else(|| anyhow!("no forecast data"))?;
    let summary = SimplifiedForecast::from_period(period);
    println!("{}", render(period, &summary));

    Ok(())
}

/// `Today: 72°F, Comfortably warm. Sunny`
fn render(period: &ForecastPeriod, summary: &SimplifiedForecast) -> String {
    format!(
        "{}: {}°F, {}. {}",
        period.name, summary.temperature, summary.perception, summary.short_forecast
    )
}

fn configure(mut config: Config, path: Option<&Path>) -> anyhow::Result<()> {
    let base_url = Text::new("Forecast provider base URL:")
        .with_default(&config.base_url)
        .prompt()
        .context("Failed to read base URL")?;
    config.base_url = base_url;

    config.listen_addr = CustomType::<SocketAddr>::new("Listen address:")
        .with_default(config.listen_addr)
        .with_error_message("Please enter an address such as 0.0.0.0:8080")
        .prompt()
        .context("Failed to read listen address")?;

    config.request_timeout_secs = CustomType::<u64>::new("Outbound request timeout (seconds):")
        .with_default(config.request_timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Failed to read request timeout")?;

    let user_agent = Text::new("User-Agent for outbound requests:")
        .with_default(&config.user_agent)
        .prompt()
        .context("Failed to read user agent")?;
    config.user_agent = user_agent;

    let saved_to = match path {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => config.save()?,
    };

    info!("configuration saved to {}", saved_to.display());
    println!("Saved configuration to {}", saved_to.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["current-weather", "show", "--lat", "47.6", "--long", "-122.3"])
            .unwrap();

        match cli.command {
            Command::Show { lat, long, .. } => {
                assert_eq!(lat, 47.6);
                assert_eq!(long, -122.3);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn serve_overrides_apply_on_top_of_config() {
        let cli = Cli::try_parse_from([
            "current-weather",
            "serve",
            "--listen",
            "127.0.0.1:9090",
            "--base-url",
            "http://localhost:1234",
            "--timeout-secs",
            "3",
        ])
        .unwrap();

        let Command::Serve { listen, provider } = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(listen, Some("127.0.0.1:9090".parse().unwrap()));

        let config = provider.apply(Config::default());
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["current-weather", "configure", "--config", "/tmp/cw.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cw.toml")));
        assert!(matches!(cli.command, Command::Configure));
    }

    #[test]
    fn render_prints_one_summary_line() {
        let period = ForecastPeriod {
            number: 1,
            name: "Today".to_string(),
            temperature: 72,
            short_forecast: "Sunny".to_string(),
            start_time: None,
            end_time: None,
            is_daytime: Some(true),
        };
        let summary = SimplifiedForecast::from_period(&period);

        assert_eq!(render(&period, &summary), "Today: 72°F, Comfortably warm. Sunny");
    }

    #[test]
    fn bad_coordinate_is_rejected() {
        assert!(Cli::try_parse_from(["current-weather", "show", "--lat", "abc", "--long", "1"]).is_err());
    }
}
