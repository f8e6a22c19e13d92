//! Official Joke API random joke endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{get_json, FetchResult, JokeSource};

#[derive(Debug, Deserialize)]
struct JokeDto {
    setup: String,
    punchline: String,
}

#[derive(Clone)]
pub struct JokeApiClient {
    client: Client,
    url: String,
}

impl JokeApiClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl JokeSource for JokeApiClient {
    async fn joke(&self) -> FetchResult<String> {
        let data: JokeDto = get_json(self.client.get(&self.url)).await?;
        Ok(format!("😂 Joke: {} {}", data.setup, data.punchline))
    }
}
