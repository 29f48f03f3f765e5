use sunshine_core::{
    ForecastRow, PresentationError, WeatherCondition, compass::CompassGeometry,
};

pub fn forecast_header(location: &str) -> String {
    format!("Forecast for {location}")
}

pub fn forecast_line(row: &ForecastRow) -> String {
    format!(
        "{:<18} {:<16} {:<16} {:>5} / {}",
        format!("[{}]", row.image.as_str()),
        row.day_label,
        row.description,
        row.high,
        row.low,
    )
}

pub fn condition_summary(code: i32, result: Result<WeatherCondition, PresentationError>) -> String {
    match result {
        Ok(cond) => format!(
            "{code}: {} (icon: {}, art: {}, description: {})",
            cond.category.label(),
            cond.icon_key(),
            cond.art_key(),
            cond.description_key(),
        ),
        Err(err) => format!("{code}: not found ({err})"),
    }
}

pub fn compass_line(geometry: &CompassGeometry) -> String {
    format!(
        "Compass: needle ({:.1}, {:.1}) from center ({:.1}, {:.1}), radius {}",
        geometry.needle_end.x,
        geometry.needle_end.y,
        geometry.center.x,
        geometry.center.y,
        geometry.radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunshine_core::{ImageKey, RowLayout, classify_condition};

    #[test]
    fn forecast_line_contains_all_columns() {
        let row = ForecastRow {
            layout: RowLayout::Today,
            image: ImageKey::Art("art_clear"),
            day_label: "Today, June 08".to_string(),
            description: "Clear".to_string(),
            high: "22°".to_string(),
            low: "12°".to_string(),
            condition: classify_condition(800).ok(),
        };

        let line = forecast_line(&row);
        assert!(line.starts_with("[art_clear]"));
        assert!(line.contains("Today, June 08"));
        assert!(line.ends_with("22° / 12°"));
    }

    #[test]
    fn condition_summary_for_known_and_unknown_codes() {
        let known = condition_summary(801, classify_condition(801));
        assert_eq!(
            known,
            "801: Light Clouds (icon: ic_light_clouds, art: art_light_clouds, description: light_clouds)"
        );

        let unknown = condition_summary(999, classify_condition(999));
        assert!(unknown.starts_with("999: not found"));
    }

    #[test]
    fn compass_line_rounds_coordinates() {
        let line = compass_line(&CompassGeometry::new(100, 100, 90.0));
        assert_eq!(line, "Compass: needle (100.0, 50.0) from center (50.0, 50.0), radius 50");
    }
}
