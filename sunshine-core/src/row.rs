use serde::Serialize;

use crate::{
    condition::{WeatherCondition, classify_condition},
    date::friendly_day_label,
    error::PresentationResult,
    format::format_temperature,
    model::{LocalePreference, Preferences, WeatherRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLayout {
    /// Highlighted first row with large artwork.
    Today,
    FutureDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "key")]
pub enum ImageKey {
    Art(&'static str),
    Icon(&'static str),
    /// The condition code could not be classified; the renderer picks its own placeholder.
    Unknown,
}

impl ImageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKey::Art(key) | ImageKey::Icon(key) => key,
            ImageKey::Unknown => "unknown",
        }
    }
}

/// Display-ready values for one forecast list row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    pub layout: RowLayout,
    pub image: ImageKey,
    pub day_label: String,
    pub description: String,
    pub high: String,
    pub low: String,
    pub condition: Option<WeatherCondition>,
}

#[derive(Debug, Clone, Copy)]
pub struct ForecastPresenter {
    prefs: Preferences,
    use_today_layout: bool,
}

impl ForecastPresenter {
    pub fn new(prefs: Preferences) -> Self {
        Self { prefs, use_today_layout: true }
    }

    /// Two-pane screens show every row the same way.
    pub fn with_today_layout(mut self, use_today_layout: bool) -> Self {
        self.use_today_layout = use_today_layout;
        self
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn layout_for(&self, position: usize) -> RowLayout {
        if position == 0 && self.use_today_layout {
            RowLayout::Today
        } else {
            RowLayout::FutureDay
        }
    }

    pub fn present_row(
        &self,
        position: usize,
        record: &WeatherRecord,
        now_epoch_millis: i64,
    ) -> PresentationResult<ForecastRow> {
        let layout = self.layout_for(position);

        let condition = match classify_condition(record.condition_code) {
            Ok(condition) => Some(condition),
            Err(err) => {
                tracing::warn!(position, "{err}; using fallback image and description");
                None
            }
        };

        let image = match (condition, layout) {
            (Some(c), RowLayout::Today) => ImageKey::Art(c.art_key()),
            (Some(c), RowLayout::FutureDay) => ImageKey::Icon(c.icon_key()),
            (None, _) => ImageKey::Unknown,
        };

        let description = match (self.prefs.locale, condition) {
            (LocalePreference::UkRu, Some(c)) => c.description_key().to_string(),
            _ => record.short_description.clone(),
        };

        let day_label = friendly_day_label(
            record.date_epoch_millis,
            now_epoch_millis,
            self.prefs.locale,
            self.prefs.day_boundary,
        )?;

        Ok(ForecastRow {
            layout,
            image,
            day_label,
            description,
            high: format_temperature(record.max_temp_c, self.prefs.units),
            low: format_temperature(record.min_temp_c, self.prefs.units),
            condition,
        })
    }

    pub fn present(
        &self,
        records: &[WeatherRecord],
        now_epoch_millis: i64,
    ) -> PresentationResult<Vec<ForecastRow>> {
        records
            .iter()
            .enumerate()
            .map(|(position, record)| self.present_row(position, record, now_epoch_millis))
            .collect()
    }
}
