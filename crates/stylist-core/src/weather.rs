//! Weather snapshot and condition glyphs

use serde::{Deserialize, Serialize};

/// Condition shown before the weather collaborator has answered
pub const FALLBACK_CONDITION: &str = "Sunny";

/// Temperature shown before the weather collaborator has answered
pub const FALLBACK_TEMPERATURE: f64 = 22.0;

/// Query value sent for outfit recommendations when no snapshot is known
pub const UNKNOWN_WEATHER_QUERY: &str = "moderate";

/// Current conditions, fetched once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub condition: String,
    #[serde(rename = "temperature")]
    pub temperature_celsius: f64,
    #[serde(default)]
    pub location: String,
}

impl WeatherSnapshot {
    pub fn new(condition: impl Into<String>, temperature_celsius: f64) -> Self {
        Self {
            condition: condition.into(),
            temperature_celsius,
            location: String::new(),
        }
    }

    pub fn glyph(&self) -> WeatherGlyph {
        WeatherGlyph::for_condition(&self.condition)
    }

    /// `"22°C"`
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_celsius.round() as i64)
    }
}

/// Icon class for a condition string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherGlyph {
    Sun,
    Cloud,
    Rain,
    Snow,
    Drizzle,
}

impl WeatherGlyph {
    /// Checked in order: sun/clear, cloud, rain, snow, drizzle. Defaults to sun.
    pub fn for_condition(condition: &str) -> WeatherGlyph {
        let condition = condition.to_lowercase();
        if condition.contains("sun") || condition.contains("clear") {
            WeatherGlyph::Sun
        } else if condition.contains("cloud") {
            WeatherGlyph::Cloud
        } else if condition.contains("rain") {
            WeatherGlyph::Rain
        } else if condition.contains("snow") {
            WeatherGlyph::Snow
        } else if condition.contains("drizzle") {
            WeatherGlyph::Drizzle
        } else {
            WeatherGlyph::Sun
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherGlyph::Sun => "☀",
            WeatherGlyph::Cloud => "☁",
            WeatherGlyph::Rain => "☂",
            WeatherGlyph::Snow => "❄",
            WeatherGlyph::Drizzle => "☔",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_mapping() {
        assert_eq!(WeatherGlyph::for_condition("Clear sky"), WeatherGlyph::Sun);
        assert_eq!(WeatherGlyph::for_condition("Partly Cloudy"), WeatherGlyph::Cloud);
        assert_eq!(WeatherGlyph::for_condition("Light RAIN"), WeatherGlyph::Rain);
        assert_eq!(WeatherGlyph::for_condition("snow showers"), WeatherGlyph::Snow);
        assert_eq!(WeatherGlyph::for_condition("drizzle"), WeatherGlyph::Drizzle);
        assert_eq!(WeatherGlyph::for_condition("Fog"), WeatherGlyph::Sun);
    }

    #[test]
    fn test_sun_wins_over_later_matches() {
        assert_eq!(WeatherGlyph::for_condition("sunny with clouds"), WeatherGlyph::Sun);
    }

    #[test]
    fn test_snapshot_parses_server_payload() {
        let json = r#"{"location":"Vancouver","temperature":14.6,"condition":"Rain","humidity":80}"#;
        let snapshot: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.temperature_celsius, 14.6);
        assert_eq!(snapshot.temperature_label(), "15°C");
        assert_eq!(snapshot.glyph(), WeatherGlyph::Rain);
    }
}
