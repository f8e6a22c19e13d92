//! Integration tests for the remote data sources using wiremock.
//!
//! Each client is pointed at a local mock server; the dashboard service
//! tests at the bottom check that failures turn into fallback text.

use std::sync::Arc;
use std::time::Duration;

use daily_dashboard::infra::sources::{
    self, fallback, FetchError, FixedPicker, JokeApiClient, JokeSource, OpenWeatherClient,
    QuotableClient, QuoteSource, WeatherSource,
};
use daily_dashboard::services::DashboardService;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> reqwest::Client {
    sources::http_client(Duration::from_secs(5)).unwrap()
}

fn weather_client(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::new(client(), server.uri(), Some("test-key".to_string()))
}

fn forecast_entry(dt: &str, temp: f64, description: &str) -> serde_json::Value {
    serde_json::json!({
        "dt_txt": dt,
        "main": { "temp": temp },
        "weather": [{ "description": description }]
    })
}

#[tokio::test]
async fn test_current_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Houston"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 75 },
            "weather": [{ "description": "clear sky" }]
        })))
        .mount(&mock_server)
        .await;

    let weather = weather_client(&mock_server).current("Houston").await.unwrap();

    assert_eq!(weather, "🌤️  Weather in Houston: 75°F, Clear Sky");
}

#[tokio::test]
async fn test_current_weather_bad_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let result = weather_client(&mock_server).current("Houston").await;

    match result {
        Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 401),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_current_weather_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 75 },
            "weather": []
        })))
        .mount(&mock_server)
        .await;

    let result = weather_client(&mock_server).current("Houston").await;

    assert!(matches!(result, Err(FetchError::Malformed(_))));
}

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = OpenWeatherClient::new(client(), mock_server.uri(), None);

    assert!(matches!(
        client.current("Houston").await,
        Err(FetchError::MissingApiKey)
    ));
    assert!(matches!(
        client.forecast("Houston").await,
        Err(FetchError::MissingApiKey)
    ));
}

#[tokio::test]
async fn test_forecast_keeps_first_five_entries() {
    let mock_server = MockServer::start().await;

    let list: Vec<_> = (0..8)
        .map(|i| {
            forecast_entry(
                &format!("2026-10-16 {:02}:00:00", i * 3),
                70.0 + i as f64,
                "light rain",
            )
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("q", "Houston"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": list })),
        )
        .mount(&mock_server)
        .await;

    let forecast = weather_client(&mock_server).forecast("Houston").await.unwrap();

    assert_eq!(forecast.len(), 5);
    assert_eq!(forecast[0], "2026-10-16 00:00:00: 70°F, light rain");
    assert_eq!(forecast[4], "2026-10-16 12:00:00: 74°F, light rain");
}

#[tokio::test]
async fn test_forecast_shorter_list_is_kept_whole() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [forecast_entry("2026-10-16 21:00:00", 68.5, "few clouds")]
        })))
        .mount(&mock_server)
        .await;

    let forecast = weather_client(&mock_server).forecast("Houston").await.unwrap();

    assert_eq!(forecast, vec!["2026-10-16 21:00:00: 68.5°F, few clouds"]);
}

#[tokio::test]
async fn test_quote_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_id": "abc",
            "content": "Simplicity is prerequisite for reliability.",
            "author": "Edsger W. Dijkstra"
        })))
        .mount(&mock_server)
        .await;

    let client = QuotableClient::new(client(), format!("{}/random", mock_server.uri()));
    let quote = client.quote().await.unwrap();

    assert_eq!(
        quote,
        "💭 Quote: \"Simplicity is prerequisite for reliability.\" - Edsger W. Dijkstra"
    );
}

#[tokio::test]
async fn test_quote_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/random"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "content": "late", "author": "nobody" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = QuotableClient::new(
        sources::http_client(Duration::from_millis(50)).unwrap(),
        format!("{}/random", mock_server.uri()),
    );

    assert!(matches!(client.quote().await, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn test_joke_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/random_joke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "type": "general",
            "setup": "What do you call a fake noodle?",
            "punchline": "An impasta."
        })))
        .mount(&mock_server)
        .await;

    let client = JokeApiClient::new(client(), format!("{}/random_joke", mock_server.uri()));
    let joke = client.joke().await.unwrap();

    assert_eq!(joke, "😂 Joke: What do you call a fake noodle? An impasta.");
}

#[tokio::test]
async fn test_joke_non_json_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/random_joke"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = JokeApiClient::new(client(), format!("{}/random_joke", mock_server.uri()));

    assert!(matches!(client.joke().await, Err(FetchError::Malformed(_))));
}

/// Dashboard wired to a server that fails every request.
#[tokio::test]
async fn test_dashboard_uses_fallbacks_when_everything_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let http = client();
    let service = DashboardService::new(
        Arc::new(weather_client(&mock_server)),
        Arc::new(QuotableClient::new(
            http.clone(),
            format!("{}/random", mock_server.uri()),
        )),
        Arc::new(JokeApiClient::new(
            http,
            format!("{}/random_joke", mock_server.uri()),
        )),
        Arc::new(FixedPicker(2)),
        "Houston",
    );

    let view = service.build().await;

    assert_eq!(view.weather, fallback::WEATHER_REJECTED);
    assert_eq!(view.forecasts, vec![fallback::FORECAST_REJECTED.to_string()]);
    assert_eq!(
        view.quote,
        "💭 Quote: Life is what happens to you while you're busy making other plans. - John Lennon"
    );
    assert_eq!(
        view.joke,
        "😂 Joke: Why do programmers prefer dark mode? Because light attracts bugs."
    );
    assert_eq!(
        view.fun_fact,
        "🤔 Fun Fact: Octopuses have three hearts and blue blood!"
    );
}

/// Nothing listening at all: weather reports a connection error.
#[tokio::test]
async fn test_dashboard_connection_refused() {
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let http = client();
    let service = DashboardService::new(
        Arc::new(OpenWeatherClient::new(
            http.clone(),
            uri.clone(),
            Some("test-key".to_string()),
        )),
        Arc::new(QuotableClient::new(http.clone(), format!("{}/random", uri))),
        Arc::new(JokeApiClient::new(http, format!("{}/random_joke", uri))),
        Arc::new(FixedPicker(0)),
        "Houston",
    );

    assert_eq!(service.weather().await, fallback::WEATHER_CONNECTION_ERROR);
    assert_eq!(
        service.forecast().await,
        vec![fallback::FORECAST_CONNECTION_ERROR.to_string()]
    );
}
