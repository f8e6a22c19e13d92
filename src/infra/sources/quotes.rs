//! Quotable random quote endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{get_json, FetchResult, QuoteSource};

#[derive(Debug, Deserialize)]
struct QuoteDto {
    content: String,
    author: String,
}

#[derive(Clone)]
pub struct QuotableClient {
    client: Client,
    url: String,
}

impl QuotableClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuoteSource for QuotableClient {
    async fn quote(&self) -> FetchResult<String> {
        let data: QuoteDto = get_json(self.client.get(&self.url)).await?;
        Ok(format!("💭 Quote: \"{}\" - {}", data.content, data.author))
    }
}
