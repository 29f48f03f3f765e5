use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Debug,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    date::julian_day,
    model::{DayBoundary, WeatherRecord},
};

/// One stored forecast day for a location, as kept by the data-access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub location: String,
    pub coord_lat: f64,
    pub coord_long: f64,
    #[serde(flatten)]
    pub record: WeatherRecord,
}

#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    /// All stored entries, in storage order.
    async fn entries(&self) -> Result<Vec<ForecastEntry>>;

    /// Records for `location` from today onwards, oldest first.
    async fn fetch(
        &self,
        location: &str,
        now_epoch_millis: i64,
        boundary: DayBoundary,
    ) -> Result<Vec<WeatherRecord>> {
        let entries = self.entries().await?;
        Ok(select_forecast(entries, location, now_epoch_millis, boundary))
    }

    /// Latitude and longitude stored with `location`, if it has any entries.
    async fn coordinates(&self, location: &str) -> Result<Option<(f64, f64)>> {
        let entries = self.entries().await?;
        Ok(entries
            .iter()
            .find(|e| e.location == location)
            .map(|e| (e.coord_lat, e.coord_long)))
    }
}

/// Keep entries for `location` whose day is not before today, sorted by date.
pub fn select_forecast(
    entries: Vec<ForecastEntry>,
    location: &str,
    now_epoch_millis: i64,
    boundary: DayBoundary,
) -> Vec<WeatherRecord> {
    let today = julian_day(now_epoch_millis, boundary);

    let mut records: Vec<WeatherRecord> = entries
        .into_iter()
        .filter(|e| e.location == location)
        .map(|e| e.record)
        .filter(|r| julian_day(r.date_epoch_millis, boundary) >= today)
        .collect();

    records.sort_by_key(|r| r.date_epoch_millis);
    records
}

/// URI that map applications open at the given coordinates.
pub fn geo_uri(lat: f64, long: f64) -> String {
    format!("geo:{lat},{long}")
}

/// Entries stored as a JSON array in a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ForecastSource for JsonFileSource {
    async fn entries(&self) -> Result<Vec<ForecastEntry>> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read forecast file: {}", self.path.display()))?;

        let entries: Vec<ForecastEntry> = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse forecast file: {}", self.path.display()))?;

        tracing::debug!("Read {} forecast entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }
}

/// Entries held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<ForecastEntry>,
}

impl StaticSource {
    pub fn new(entries: Vec<ForecastEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl ForecastSource for StaticSource {
    async fn entries(&self) -> Result<Vec<ForecastEntry>> {
        Ok(self.entries.clone())
    }
}

/// Construct a source from an explicit path, falling back to the configured data file.
pub fn source_from_config(
    path: Option<PathBuf>,
    config: &Config,
) -> Result<Box<dyn ForecastSource>> {
    let path = path.or_else(|| config.data_file.clone()).ok_or_else(|| {
        anyhow!(
            "No forecast data file given.\n\
             Hint: pass `--file <PATH>` or run `sunshine configure` and set a data file."
        )
    })?;

    Ok(Box::new(JsonFileSource::new(path)))
}
