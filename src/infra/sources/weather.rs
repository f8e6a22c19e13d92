//! OpenWeatherMap current conditions and forecast.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use super::{get_json, FetchError, FetchResult, WeatherSource};
use crate::config::{FORECAST_MAX_ENTRIES, WEATHER_UNITS};
use crate::utils::text::{format_temperature, title_case};

#[derive(Debug, Deserialize)]
struct MainDto {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    description: String,
}

#[derive(Debug, Deserialize)]
struct CurrentDto {
    main: MainDto,
    weather: Vec<ConditionDto>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntryDto {
    main: MainDto,
    weather: Vec<ConditionDto>,
    dt_txt: String,
}

#[derive(Debug, Deserialize)]
struct ForecastDto {
    list: Vec<Value>,
}

/// Client for the OpenWeatherMap 2.5 API
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, city: &str) -> FetchResult<T> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;
        let url = format!("{}/data/2.5/{}", self.base_url, endpoint);
        let request = self.client.get(url).query(&[
            ("q", city),
            ("appid", api_key),
            ("units", WEATHER_UNITS),
        ]);
        get_json(request).await
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, city: &str) -> FetchResult<String> {
        let data: CurrentDto = self.fetch("weather", city).await?;
        let condition = first_condition(&data.weather)?;

        Ok(format!(
            "🌤️  Weather in {}: {}°F, {}",
            city,
            format_temperature(data.main.temp),
            title_case(&condition.description)
        ))
    }

    async fn forecast(&self, city: &str) -> FetchResult<Vec<String>> {
        let data: ForecastDto = self.fetch("forecast", city).await?;

        // Only the entries we keep have to be well formed
        data.list
            .into_iter()
            .take(FORECAST_MAX_ENTRIES)
            .map(|raw| -> FetchResult<String> {
                let entry: ForecastEntryDto = serde_json::from_value(raw)
                    .map_err(|e| FetchError::malformed(e.to_string()))?;
                let condition = first_condition(&entry.weather)?;
                Ok(format!(
                    "{}: {}°F, {}",
                    entry.dt_txt,
                    format_temperature(entry.main.temp),
                    condition.description
                ))
            })
            .collect()
    }
}

fn first_condition(conditions: &[ConditionDto]) -> FetchResult<&ConditionDto> {
    conditions
        .first()
        .ok_or_else(|| FetchError::malformed("empty weather array"))
}
