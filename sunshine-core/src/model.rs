use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One forecast day as supplied by the data-access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub condition_code: i32,
    pub date_epoch_millis: i64,
    pub short_description: String,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub wind_speed_mps: f64,
    pub wind_direction_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    #[default]
    Metric,
    Imperial,
}

impl UnitPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitPreference::Metric => "metric",
            UnitPreference::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [UnitPreference] {
        &[UnitPreference::Metric, UnitPreference::Imperial]
    }
}

impl fmt::Display for UnitPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitPreference {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(UnitPreference::Metric),
            "imperial" => Ok(UnitPreference::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown units '{value}'. Supported units: metric, imperial."
            )),
        }
    }
}

/// Locale family used for date ordering and condition descriptions.
///
/// `UkRu` covers the Ukrainian and Russian layouts, which put the day
/// before the month and show the localized condition description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalePreference {
    #[default]
    Default,
    UkRu,
}

impl LocalePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocalePreference::Default => "default",
            LocalePreference::UkRu => "uk_ru",
        }
    }

    pub const fn all() -> &'static [LocalePreference] {
        &[LocalePreference::Default, LocalePreference::UkRu]
    }

    /// Whether dates in this locale put the day of month first.
    pub fn day_first(&self) -> bool {
        matches!(self, LocalePreference::UkRu)
    }
}

impl fmt::Display for LocalePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LocalePreference {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "default" => Ok(LocalePreference::Default),
            "uk_ru" | "uk" | "ru" => Ok(LocalePreference::UkRu),
            _ => Err(anyhow::anyhow!(
                "Unknown locale '{value}'. Supported locales: default, uk_ru."
            )),
        }
    }
}

/// Fixed UTC offset that decides where one calendar day ends and the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBoundary {
    offset: FixedOffset,
}

impl DayBoundary {
    pub fn utc() -> Self {
        Self::from(Utc.fix())
    }

    /// Returns `None` unless `seconds` lies strictly within one day of UTC.
    pub fn from_offset_seconds(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(Self::from)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }
}

impl Default for DayBoundary {
    fn default() -> Self {
        Self::utc()
    }
}

impl From<FixedOffset> for DayBoundary {
    fn from(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

/// Everything the presenter needs besides the records themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub units: UnitPreference,
    pub locale: LocalePreference,
    pub day_boundary: DayBoundary,
}
