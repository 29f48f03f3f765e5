use serde::Serialize;

use crate::model::UnitPreference;

const MPH_PER_KMH: f64 = 0.621_371_192_237_334;
const SECTOR_WIDTH_DEG: f64 = 45.0;

/// Compass points in sector order, starting with the sector centered on north.
const SECTORS: [CompassDirection; 8] = [
    CompassDirection::North,
    CompassDirection::NorthEast,
    CompassDirection::East,
    CompassDirection::SouthEast,
    CompassDirection::South,
    CompassDirection::SouthWest,
    CompassDirection::West,
    CompassDirection::NorthWest,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    /// Bucket a bearing into one of eight 45° sectors centered on the compass points.
    ///
    /// Any finite bearing is accepted and normalized into `[0, 360)` first.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }

        let normalized = degrees.rem_euclid(360.0);
        let shifted = normalized + SECTOR_WIDTH_DEG / 2.0;
        let index = (shifted / SECTOR_WIDTH_DEG).floor() as usize % SECTORS.len();
        Some(SECTORS[index])
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassDirection::North => "N",
            CompassDirection::NorthEast => "NE",
            CompassDirection::East => "E",
            CompassDirection::SouthEast => "SE",
            CompassDirection::South => "S",
            CompassDirection::SouthWest => "SW",
            CompassDirection::West => "W",
            CompassDirection::NorthWest => "NW",
        }
    }
}

impl std::fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn convert_temperature(celsius: f64, unit: UnitPreference) -> f64 {
    match unit {
        UnitPreference::Metric => celsius,
        UnitPreference::Imperial => celsius * 1.8 + 32.0,
    }
}

#[must_use]
pub fn convert_wind_speed(speed: f64, unit: UnitPreference) -> f64 {
    match unit {
        UnitPreference::Metric => speed,
        UnitPreference::Imperial => speed * MPH_PER_KMH,
    }
}

pub fn wind_speed_suffix(unit: UnitPreference) -> &'static str {
    match unit {
        UnitPreference::Metric => "km/h",
        UnitPreference::Imperial => "mph",
    }
}

/// Whole-degree temperature with a degree sign, e.g. `21°`.
#[must_use]
pub fn format_temperature(celsius: f64, unit: UnitPreference) -> String {
    format!("{}°", round_whole(convert_temperature(celsius, unit)))
}

/// Rounded speed, unit suffix and compass point, e.g. `Wind: 12 km/h NW`.
#[must_use]
pub fn format_wind(speed: f64, degrees: f64, unit: UnitPreference) -> String {
    let direction = CompassDirection::from_degrees(degrees)
        .map(|d| d.as_str())
        .unwrap_or("Unknown");

    format!(
        "Wind: {} {} {}",
        round_whole(convert_wind_speed(speed, unit)),
        wind_speed_suffix(unit),
        direction,
    )
}

// Half away from zero; the integer cast also folds -0.0 into 0.
fn round_whole(value: f64) -> i64 {
    value.round() as i64
}
