//! Message types for the Open-Meteo geocoding and forecast APIs.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

// =============================================================================
// Upstream response types
// =============================================================================

/// Geocoding name-search response.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    /// Absent entirely when the name matches nothing.
    #[serde(default)]
    pub results: Vec<GeocodingMatch>,
}

/// A single geocoding match.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Forecast response, current conditions plus daily blocks.
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current: CurrentConditions,
    pub daily: DailyBlock,
}

/// Current conditions at the requested coordinate.
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentConditions {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub precipitation: f64,
    pub wind_speed_10m: f64,
    pub weather_code: i64,
}

/// Daily forecast variables as parallel arrays, one slot per day.
#[derive(Debug, Deserialize)]
pub(crate) struct DailyBlock {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub weather_code: Vec<i64>,
}

impl DailyBlock {
    /// Reshape the parallel arrays into per-day records.
    ///
    /// The arrays must be index-aligned and equal in length; a mismatch means
    /// the upstream payload is broken and yields a defined error instead of
    /// an index panic.
    pub fn into_daily(self) -> AppResult<Vec<DailyForecast>> {
        let days = self.time.len();
        let lengths = [
            self.temperature_2m_max.len(),
            self.temperature_2m_min.len(),
            self.precipitation_sum.len(),
            self.weather_code.len(),
        ];
        if lengths.iter().any(|&len| len != days) {
            return Err(AppError::MalformedUpstream(format!(
                "daily forecast arrays are misaligned: {days} dates but {}/{}/{}/{} values",
                lengths[0], lengths[1], lengths[2], lengths[3]
            )));
        }

        let forecast = self
            .time
            .into_iter()
            .enumerate()
            .map(|(i, date)| DailyForecast {
                date,
                max_temp: self.temperature_2m_max[i],
                min_temp: self.temperature_2m_min[i],
                precipitation: self.precipitation_sum[i],
                weather_code: self.weather_code[i],
            })
            .collect();
        Ok(forecast)
    }
}

// =============================================================================
// Gateway response types
// =============================================================================

/// One day of the reshaped forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub max_temp: f64,
    pub min_temp: f64,
    pub precipitation: f64,
    pub weather_code: i64,
}

/// Weather lookup result returned to the client.
///
/// Built fresh per request, never cached. Unit labels are fixed: Open-Meteo
/// is queried with its metric defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: f64,
    pub humidity: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
    #[serde(default = "unit_temperature")]
    pub unit_temperature: String,
    #[serde(default = "unit_precipitation")]
    pub unit_precipitation: String,
    #[serde(default = "unit_wind")]
    pub unit_wind: String,
    pub forecast_daily: Vec<DailyForecast>,
    pub current_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
    pub weather_code: i64,
}

fn unit_temperature() -> String {
    "celsius".to_string()
}

fn unit_precipitation() -> String {
    "mm".to_string()
}

fn unit_wind() -> String {
    "km/h".to_string()
}

impl WeatherReport {
    /// Assemble a report from a geocoding match and forecast payload.
    pub(crate) fn from_upstream(
        place: GeocodingMatch,
        forecast: ForecastResponse,
    ) -> AppResult<Self> {
        let current = forecast.current;
        Ok(Self {
            temperature: current.temperature_2m,
            humidity: current.relative_humidity_2m,
            precipitation: current.precipitation,
            wind_speed: current.wind_speed_10m,
            unit_temperature: unit_temperature(),
            unit_precipitation: unit_precipitation(),
            unit_wind: unit_wind(),
            forecast_daily: forecast.daily.into_daily()?,
            current_time: current.time,
            latitude: place.latitude,
            longitude: place.longitude,
            location_name: place.name,
            weather_code: current.weather_code,
        })
    }
}
