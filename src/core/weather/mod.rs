//! Open-Meteo weather adapter.
//!
//! Two sequential upstream calls per lookup: a geocoding name search (first
//! match only), then a current + 7-day forecast fetch at the resolved
//! coordinate. Neither API needs a credential.

mod client;
mod messages;

pub use client::{FORECAST_URL, GEOCODING_URL, WeatherClient};
pub use messages::{DailyForecast, WeatherReport};
