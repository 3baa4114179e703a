use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};

use crate::data_models::{SearchContentItem, SearchOptions, SearchType};
use crate::error::UpstreamError;

pub const DEFAULT_EXA_BASE_URL: &str = "https://api.exa.ai";

/// Keyword search that also returns the text content of each hit.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search_and_contents(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<SearchContentItem>, UpstreamError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaSearchRequest<'a> {
    query: &'a str,
    #[serde(rename = "type")]
    search_type: SearchType,
    use_autoprompt: bool,
    num_results: u32,
    contents: ExaContents,
}

#[derive(Debug, Serialize)]
struct ExaContents {
    text: bool,
}

#[derive(Debug, Deserialize)]
struct ExaSearchResponse {
    #[serde(default)]
    results: Vec<ExaResult>,
}

#[derive(Debug, Deserialize)]
struct ExaResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl From<ExaResult> for SearchContentItem {
    fn from(result: ExaResult) -> Self {
        SearchContentItem {
            title: result.title.unwrap_or_default(),
            url: result.url.unwrap_or_default(),
            content: result.text.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExaClient {
    base_url: String,
    client: Client,
}

impl ExaClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| UpstreamError::Malformed(format!("invalid api key header: {e}")))?,
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl SearchService for ExaClient {
    async fn search_and_contents(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<SearchContentItem>, UpstreamError> {
        let request = ExaSearchRequest {
            query,
            search_type: options.search_type,
            use_autoprompt: options.use_autoprompt,
            num_results: options.num_results,
            contents: ExaContents { text: options.text },
        };

        tracing::debug!(query, num_results = options.num_results, "exa search");

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status, body: text });
        }

        let parsed: ExaSearchResponse = serde_json::from_str(&text)
            .map_err(|e| UpstreamError::Malformed(format!("failed to parse search response: {e}")))?;

        Ok(parsed.results.into_iter().map(SearchContentItem::from).collect())
    }
}
