use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomType, Select, Text};
use sunshine_core::{
    Config, ForecastPresenter, LocalePreference, UnitPreference, classify_condition,
    compass::{CompassGeometry, MeasureSpec},
    date::{day_name, month_day_label},
    format_wind,
    source::{geo_uri, source_from_config},
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "sunshine", version, about = "Sunshine weather forecast")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set location, units, locale and layout.
    Configure,

    /// Show the forecast list for the configured location.
    Show {
        /// JSON forecast file; defaults to the configured data file.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Override the configured units ("metric" or "imperial").
        #[arg(long, value_parser = parse_units)]
        units: Option<UnitPreference>,

        /// Override the configured locale ("default" or "uk_ru").
        #[arg(long, value_parser = parse_locale)]
        locale: Option<LocalePreference>,

        /// Reference time in epoch milliseconds; if absent, means "now".
        #[arg(long)]
        now: Option<i64>,
    },

    /// Show details for one row of the forecast list.
    Detail {
        /// Zero-based row index.
        index: usize,

        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long)]
        now: Option<i64>,
    },

    /// Classify a provider condition code.
    Classify {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },

    /// Print a geo: URI for the configured location.
    Map {
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn parse_units(value: &str) -> Result<UnitPreference, String> {
    UnitPreference::try_from(value).map_err(|e| e.to_string())
}

fn parse_locale(value: &str) -> Result<LocalePreference, String> {
    LocalePreference::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };
        let config = Config::load_from(&config_path)?;

        match self.command {
            Command::Configure => configure(config, &config_path)?,
            Command::Show { file, units, locale, now } => {
                show(&config, file, units, locale, now).await?
            }
            Command::Detail { index, file, now } => detail(&config, index, file, now).await?,
            Command::Classify { code } => {
                println!("{}", render::condition_summary(code, classify_condition(code)));
            }
            Command::Map { file } => map(&config, file).await?,
        }

        Ok(())
    }
}

fn now_millis(now: Option<i64>) -> i64 {
    now.unwrap_or_else(|| chrono::Utc::now().timestamp_millis())
}

fn configure(mut config: Config, path: &std::path::Path) -> anyhow::Result<()> {
    let location = Text::new("Location:").with_default(&config.location).prompt()?;
    config.set_location(&location)?;

    let units = UnitPreference::all().to_vec();
    let cursor = units.iter().position(|u| *u == config.units).unwrap_or(0);
    config.units = Select::new("Units:", units).with_starting_cursor(cursor).prompt()?;

    let locales = LocalePreference::all().to_vec();
    let cursor = locales.iter().position(|l| *l == config.locale).unwrap_or(0);
    config.locale = Select::new("Locale:", locales).with_starting_cursor(cursor).prompt()?;

    config.utc_offset_seconds = CustomType::<i32>::new("Day boundary, seconds east of UTC:")
        .with_default(config.utc_offset_seconds)
        .prompt()?;
    config.day_boundary()?;

    config.use_today_layout = Confirm::new("Highlight today's row?")
        .with_default(config.use_today_layout)
        .prompt()?;

    let current_file = config
        .data_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let data_file = Text::new("Forecast data file (empty for none):")
        .with_default(&current_file)
        .prompt()?;
    config.data_file = match data_file.trim() {
        "" => None,
        path => Some(PathBuf::from(path)),
    };

    config.save_to(path)?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

async fn show(
    config: &Config,
    file: Option<PathBuf>,
    units: Option<UnitPreference>,
    locale: Option<LocalePreference>,
    now: Option<i64>,
) -> anyhow::Result<()> {
    let mut prefs = config.preferences()?;
    if let Some(units) = units {
        prefs.units = units;
    }
    if let Some(locale) = locale {
        prefs.locale = locale;
    }

    let now = now_millis(now);
    let source = source_from_config(file, config)?;
    let records = source.fetch(&config.location, now, prefs.day_boundary).await?;

    println!("{}", render::forecast_header(&config.location));
    if records.is_empty() {
        println!("No forecast available.");
        return Ok(());
    }

    tracing::debug!("Presenting {} forecast rows for {}", records.len(), config.location);
    let presenter = ForecastPresenter::new(prefs).with_today_layout(config.use_today_layout);
    for row in presenter.present(&records, now)? {
        println!("{}", render::forecast_line(&row));
    }

    Ok(())
}

async fn detail(
    config: &Config,
    index: usize,
    file: Option<PathBuf>,
    now: Option<i64>,
) -> anyhow::Result<()> {
    let prefs = config.preferences()?;
    let now = now_millis(now);
    let source = source_from_config(file, config)?;
    let records = source.fetch(&config.location, now, prefs.day_boundary).await?;

    let record = records.get(index).ok_or_else(|| {
        anyhow!(
            "No forecast row {index} for '{}' ({} rows available).",
            config.location,
            records.len()
        )
    })?;

    let date = record.date_epoch_millis;
    println!(
        "{}, {}",
        day_name(date, now, prefs.locale, prefs.day_boundary)?,
        month_day_label(date, prefs.locale, prefs.day_boundary)?,
    );

    let row = ForecastPresenter::new(prefs).present_row(index, record, now)?;
    println!("{}", row.description);
    println!("High: {}  Low: {}", row.high, row.low);
    println!("{}", format_wind(record.wind_speed_mps, record.wind_direction_deg, prefs.units));

    let geometry = CompassGeometry::measured(
        MeasureSpec::AtMost(u32::MAX),
        MeasureSpec::AtMost(u32::MAX),
        record.wind_direction_deg,
    );
    println!("{}", render::compass_line(&geometry));

    Ok(())
}

async fn map(config: &Config, file: Option<PathBuf>) -> anyhow::Result<()> {
    let source = source_from_config(file, config)?;
    let (lat, long) = source
        .coordinates(&config.location)
        .await?
        .with_context(|| format!("No coordinates stored for location '{}'", config.location))?;

    println!("{}", geo_uri(lat, long));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_overrides() {
        let cli = Cli::try_parse_from([
            "sunshine", "show", "--file", "f.json", "--units", "IMPERIAL", "--locale", "uk_ru",
        ])
        .unwrap();

        match cli.command {
            Command::Show { file, units, locale, now } => {
                assert_eq!(file, Some(PathBuf::from("f.json")));
                assert_eq!(units, Some(UnitPreference::Imperial));
                assert_eq!(locale, Some(LocalePreference::UkRu));
                assert_eq!(now, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_units() {
        let err = Cli::try_parse_from(["sunshine", "show", "--units", "kelvin"]).unwrap_err();
        assert!(err.to_string().contains("Unknown units"));
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["sunshine", "classify", "800", "--config", "c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }
}
