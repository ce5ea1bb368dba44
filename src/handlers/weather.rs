//! Weather tool endpoint.

use axum::Json;
use axum::extract::Path;

use crate::core::weather::{WeatherClient, WeatherReport};
use crate::errors::AppResult;

/// `GET /weather/{location}` - current conditions plus 7-day forecast.
pub async fn get_weather(Path(location): Path<String>) -> AppResult<Json<WeatherReport>> {
    let report = WeatherClient::new().current_and_forecast(&location).await?;
    Ok(Json(report))
}
