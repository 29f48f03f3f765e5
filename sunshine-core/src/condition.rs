//! Classification of provider condition codes.
//!
//! Codes follow the OpenWeatherMap condition table:
//! <https://openweathermap.org/weather-conditions>

use serde::Serialize;

use crate::error::{PresentationError, PresentationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    Storm,
    LightRain,
    Rain,
    Snow,
    Fog,
    Clear,
    LightClouds,
    Clouds,
}

impl WeatherCategory {
    pub const fn all() -> &'static [WeatherCategory] {
        &[
            WeatherCategory::Storm,
            WeatherCategory::LightRain,
            WeatherCategory::Rain,
            WeatherCategory::Snow,
            WeatherCategory::Fog,
            WeatherCategory::Clear,
            WeatherCategory::LightClouds,
            WeatherCategory::Clouds,
        ]
    }

    /// Key of the small list icon.
    pub fn icon_key(&self) -> &'static str {
        match self {
            WeatherCategory::Storm => "ic_storm",
            WeatherCategory::LightRain => "ic_light_rain",
            WeatherCategory::Rain => "ic_rain",
            WeatherCategory::Snow => "ic_snow",
            WeatherCategory::Fog => "ic_fog",
            WeatherCategory::Clear => "ic_clear",
            WeatherCategory::LightClouds => "ic_light_clouds",
            WeatherCategory::Clouds => "ic_cloudy",
        }
    }

    /// Key of the large artwork shown for today.
    pub fn art_key(&self) -> &'static str {
        match self {
            WeatherCategory::Storm => "art_storm",
            WeatherCategory::LightRain => "art_light_rain",
            WeatherCategory::Rain => "art_rain",
            WeatherCategory::Snow => "art_snow",
            WeatherCategory::Fog => "art_fog",
            WeatherCategory::Clear => "art_clear",
            WeatherCategory::LightClouds => "art_light_clouds",
            WeatherCategory::Clouds => "art_clouds",
        }
    }

    /// Key of the translatable description string.
    pub fn description_key(&self) -> &'static str {
        match self {
            WeatherCategory::Storm => "storm",
            WeatherCategory::LightRain => "light_rain",
            WeatherCategory::Rain => "rain",
            WeatherCategory::Snow => "snow",
            WeatherCategory::Fog => "fog",
            WeatherCategory::Clear => "clear",
            WeatherCategory::LightClouds => "light_clouds",
            WeatherCategory::Clouds => "clouds",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCategory::Storm => "Storm",
            WeatherCategory::LightRain => "Light Rain",
            WeatherCategory::Rain => "Rain",
            WeatherCategory::Snow => "Snow",
            WeatherCategory::Fog => "Fog",
            WeatherCategory::Clear => "Clear",
            WeatherCategory::LightClouds => "Light Clouds",
            WeatherCategory::Clouds => "Clouds",
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description_key())
    }
}

/// A condition code together with the bucket it was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCondition {
    pub code: i32,
    pub category: WeatherCategory,
}

impl WeatherCondition {
    pub fn icon_key(&self) -> &'static str {
        self.category.icon_key()
    }

    pub fn art_key(&self) -> &'static str {
        self.category.art_key()
    }

    pub fn description_key(&self) -> &'static str {
        self.category.description_key()
    }
}

/// Map a provider condition code to its presentation bucket.
///
/// Arms are disjoint, so 761 is fog and only 781 reaches the storm arm.
pub fn classify_condition(code: i32) -> PresentationResult<WeatherCondition> {
    let category = match code {
        200..=299 => WeatherCategory::Storm,
        300..=321 => WeatherCategory::LightRain,
        500..=504 | 520..=531 => WeatherCategory::Rain,
        511 | 600..=622 => WeatherCategory::Snow,
        701..=761 => WeatherCategory::Fog,
        781 => WeatherCategory::Storm,
        800 => WeatherCategory::Clear,
        801 => WeatherCategory::LightClouds,
        802..=804 => WeatherCategory::Clouds,
        _ => return Err(PresentationError::NotFound { code }),
    };

    Ok(WeatherCondition { code, category })
}
