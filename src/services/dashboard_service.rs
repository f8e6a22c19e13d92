//! Dashboard aggregation - fan out to every source, substitute fallbacks.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::{DashboardView, TimeInfo};
use crate::errors::{AppError, AppResult};
use crate::infra::sources::{
    self, fallback, FallbackPicker, FetchError, JokeApiClient, JokeSource, OpenWeatherClient,
    QuotableClient, QuoteSource, RandomPicker, WeatherSource,
};

/// Builds [`DashboardView`]s. Every method resolves to display text; source
/// failures are logged at debug level and replaced by local content.
pub struct DashboardService {
    weather: Arc<dyn WeatherSource>,
    quotes: Arc<dyn QuoteSource>,
    jokes: Arc<dyn JokeSource>,
    picker: Arc<dyn FallbackPicker>,
    city: String,
}

impl DashboardService {
    pub fn new(
        weather: Arc<dyn WeatherSource>,
        quotes: Arc<dyn QuoteSource>,
        jokes: Arc<dyn JokeSource>,
        picker: Arc<dyn FallbackPicker>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            weather,
            quotes,
            jokes,
            picker,
            city: city.into(),
        }
    }

    /// Wire the real HTTP sources from configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = sources::http_client(config.http_timeout)
            .map_err(|e| AppError::internal(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self::new(
            Arc::new(OpenWeatherClient::new(
                client.clone(),
                config.weather_api_base.clone(),
                config.weather_api_key().map(str::to_owned),
            )),
            Arc::new(QuotableClient::new(client.clone(), config.quote_api_url.clone())),
            Arc::new(JokeApiClient::new(client, config.joke_api_url.clone())),
            Arc::new(RandomPicker),
            config.city.clone(),
        ))
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub async fn weather(&self) -> String {
        self.weather.current(&self.city).await.unwrap_or_else(|err| {
            log_fallback("weather", &err);
            if err.is_rejection() {
                fallback::WEATHER_REJECTED.to_string()
            } else {
                fallback::WEATHER_CONNECTION_ERROR.to_string()
            }
        })
    }

    pub async fn forecast(&self) -> Vec<String> {
        self.weather.forecast(&self.city).await.unwrap_or_else(|err| {
            log_fallback("forecast", &err);
            let text = if err.is_rejection() {
                fallback::FORECAST_REJECTED
            } else {
                fallback::FORECAST_CONNECTION_ERROR
            };
            vec![text.to_string()]
        })
    }

    pub async fn quote(&self) -> String {
        self.quotes.quote().await.unwrap_or_else(|err| {
            log_fallback("quote", &err);
            fallback::offline_quote(self.picker.as_ref())
        })
    }

    pub async fn joke(&self) -> String {
        self.jokes.joke().await.unwrap_or_else(|err| {
            log_fallback("joke", &err);
            fallback::offline_joke(self.picker.as_ref())
        })
    }

    pub fn programming_quote(&self) -> String {
        fallback::programming_quote(self.picker.as_ref())
    }

    pub fn fun_fact(&self) -> String {
        fallback::fun_fact(self.picker.as_ref())
    }

    /// Fetch everything. Sources are independent, so they run concurrently.
    pub async fn build(&self) -> DashboardView {
        let (weather, quote, joke, forecasts) =
            tokio::join!(self.weather(), self.quote(), self.joke(), self.forecast());

        DashboardView {
            time: TimeInfo::now(),
            weather,
            quote,
            programming_quote: self.programming_quote(),
            fun_fact: self.fun_fact(),
            joke,
            forecasts,
        }
    }
}

fn log_fallback(source: &str, err: &FetchError) {
    tracing::debug!(source, error = %err, "Source failed, using fallback");
}
