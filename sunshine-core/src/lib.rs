//! Presentation core for the `sunshine` forecast viewer.
//!
//! This crate defines:
//! - Classification of provider condition codes into icon/art/description keys
//! - Temperature, wind and day-label formatting driven by explicit preferences
//! - Forecast list rows and wind compass geometry
//! - Configuration and the forecast source abstraction
//!
//! Everything in `condition`, `format`, `date`, `row` and `compass` is pure and
//! takes its preferences as arguments, so it can be called from any thread.

pub mod compass;
pub mod condition;
pub mod config;
pub mod date;
pub mod error;
pub mod format;
pub mod model;
pub mod row;
pub mod source;

pub use condition::{WeatherCategory, WeatherCondition, classify_condition};
pub use config::Config;
pub use date::{day_name, format_date, friendly_day_label, julian_day, month_day_label};
pub use error::{PresentationError, PresentationResult};
pub use format::{CompassDirection, format_temperature, format_wind};
pub use model::{DayBoundary, LocalePreference, Preferences, UnitPreference, WeatherRecord};
pub use row::{ForecastPresenter, ForecastRow, ImageKey, RowLayout};
pub use source::{ForecastEntry, ForecastSource, JsonFileSource, StaticSource};
