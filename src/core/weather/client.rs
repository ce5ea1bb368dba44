//! Open-Meteo client.
//!
//! # API Reference
//!
//! - Geocoding: `GET https://geocoding-api.open-meteo.com/v1/search?name=<q>&count=1`
//! - Forecast: `GET https://api.open-meteo.com/v1/forecast` with fixed
//!   `current`/`daily` variable sets, `timezone=auto`, `forecast_days=7`
//! - No authentication on either endpoint

use tracing::debug;

use super::messages::{ForecastResponse, GeocodingResponse, WeatherReport};
use crate::errors::{AppError, AppResult};
use crate::utils::http::json_or_upstream_error;

/// Open-Meteo geocoding endpoint.
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Open-Meteo forecast endpoint.
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Current-conditions variables requested from the forecast API.
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation,wind_speed_10m,weather_code";

/// Daily variables requested from the forecast API.
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,weather_code";

/// Days of forecast requested.
const FORECAST_DAYS: &str = "7";

/// Client for the Open-Meteo geocoding and forecast APIs.
pub struct WeatherClient {
    geocoding_url: String,
    forecast_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
        }
    }
}

impl WeatherClient {
    /// Create a client against the public Open-Meteo endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client against alternate endpoints.
    pub fn with_urls(geocoding_url: impl Into<String>, forecast_url: impl Into<String>) -> Self {
        Self {
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        }
    }

    /// Look up current conditions and the 7-day forecast for a place name.
    ///
    /// Geocoding takes the first match only; an empty result set fails with
    /// `AppError::NotFound` and the forecast call is never made. The two
    /// upstream calls run sequentially. No retries.
    pub async fn current_and_forecast(&self, location: &str) -> AppResult<WeatherReport> {
        let client = reqwest::Client::new();

        let geocoding: GeocodingResponse = json_or_upstream_error(
            client
                .get(&self.geocoding_url)
                .query(&[("name", location), ("count", "1")])
                .send()
                .await?,
        )
        .await?;

        let Some(place) = geocoding.results.into_iter().next() else {
            return Err(AppError::NotFound(format!(
                "could not find coordinates for {location}"
            )));
        };
        debug!(
            location,
            resolved = %place.name,
            latitude = place.latitude,
            longitude = place.longitude,
            "geocoded location"
        );

        let forecast: ForecastResponse = json_or_upstream_error(
            client
                .get(&self.forecast_url)
                .query(&[
                    ("latitude", place.latitude.to_string().as_str()),
                    ("longitude", place.longitude.to_string().as_str()),
                    ("current", CURRENT_FIELDS),
                    ("daily", DAILY_FIELDS),
                    ("timezone", "auto"),
                    ("forecast_days", FORECAST_DAYS),
                ])
                .send()
                .await?,
        )
        .await?;

        WeatherReport::from_upstream(place, forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn geocoding_body() -> serde_json::Value {
        json!({
            "results": [
                {"latitude": 51.21989, "longitude": 4.40346, "name": "Antwerp", "country": "Belgium"},
                {"latitude": 41.35, "longitude": -85.07, "name": "Antwerp", "country": "United States"}
            ]
        })
    }

    fn forecast_body() -> serde_json::Value {
        json!({
            "latitude": 51.22,
            "longitude": 4.4,
            "current": {
                "time": "2026-08-07T11:15",
                "temperature_2m": 19.8,
                "relative_humidity_2m": 71,
                "precipitation": 0.0,
                "wind_speed_10m": 14.3,
                "weather_code": 3
            },
            "daily": {
                "time": ["2026-08-07", "2026-08-08", "2026-08-09", "2026-08-10",
                         "2026-08-11", "2026-08-12", "2026-08-13"],
                "temperature_2m_max": [22.1, 23.4, 20.9, 19.7, 21.2, 24.0, 25.3],
                "temperature_2m_min": [13.5, 14.0, 12.8, 11.9, 12.5, 14.4, 15.6],
                "precipitation_sum": [0.0, 0.2, 5.6, 1.1, 0.0, 0.0, 0.4],
                "weather_code": [3, 2, 61, 80, 1, 0, 2]
            }
        })
    }

    #[tokio::test]
    async fn lookup_geocodes_then_fetches_forecast() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("name", "Antwerp"))
            .and(query_param("count", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_body()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "51.21989"))
            .and(query_param("timezone", "auto"))
            .and(query_param("forecast_days", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = WeatherClient::with_urls(
            format!("{}/v1/search", server.uri()),
            format!("{}/v1/forecast", server.uri()),
        );
        let report = client.current_and_forecast("Antwerp").await.unwrap();

        // first geocoding match wins
        assert_eq!(report.location_name, "Antwerp");
        assert_eq!(report.latitude, 51.21989);
        assert_eq!(report.temperature, 19.8);
        assert_eq!(report.humidity, 71.0);
        assert_eq!(report.forecast_daily.len(), 7);
        assert_eq!(report.forecast_daily[0].date, "2026-08-07");
        assert_eq!(report.forecast_daily[6].weather_code, 2);
    }

    #[tokio::test]
    async fn unknown_location_fails_without_forecast_call() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"generationtime_ms": 0.5})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(0)
            .mount(&server)
            .await;

        let client = WeatherClient::with_urls(
            format!("{}/v1/search", server.uri()),
            format!("{}/v1/forecast", server.uri()),
        );
        let err = client.current_and_forecast("Atlantis").await.unwrap_err();

        match err {
            AppError::NotFound(message) => {
                assert_eq!(message, "could not find coordinates for Atlantis");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn misaligned_daily_arrays_fail_with_defined_error() {
        let server = MockServer::start().await;

        let mut body = forecast_body();
        body["daily"]["weather_code"] = json!([3, 2, 61]);

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = WeatherClient::with_urls(
            format!("{}/v1/search", server.uri()),
            format!("{}/v1/forecast", server.uri()),
        );
        let err = client.current_and_forecast("Antwerp").await.unwrap_err();
        assert!(matches!(err, AppError::MalformedUpstream(_)));
    }

    #[tokio::test]
    async fn upstream_error_status_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(
                ResponseTemplate::new(429).set_body_string("Minutely API request limit exceeded"),
            )
            .mount(&server)
            .await;

        let client = WeatherClient::with_urls(
            format!("{}/v1/search", server.uri()),
            format!("{}/v1/forecast", server.uri()),
        );
        let err = client.current_and_forecast("Antwerp").await.unwrap_err();

        match err {
            AppError::Upstream { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert!(body.contains("limit exceeded"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
