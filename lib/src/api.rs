//! Client for the remote scoring and statistics API.

use crate::catalog::Block;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{ApiResponse, ScoreRecord, StatisticsData, StatisticsMetadata, TopStudent};
use crate::statistics::StatisticsQuery;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// The scoring API as the dashboard consumes it. Implemented over HTTP by
/// [`HttpScoresClient`] and by mocks in tests.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ScoresApi {
    /// Look up one candidate. A 404 is reported as [`ApiError::NotFound`].
    async fn search_by_sbd(&self, sbd: &str) -> Result<ScoreRecord, ApiError>;

    async fn metadata(&self) -> Result<StatisticsMetadata, ApiError>;

    async fn filtered_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<StatisticsData, ApiError>;

    /// Top candidates for a block, already ranked by the server
    async fn top_students(&self, block: Block) -> Result<Vec<TopStudent>, ApiError>;
}

/// Which endpoint a response came from. Decides the 404 policy and the
/// fallback message when the server does not send one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Metadata,
    Statistics,
    TopStudents,
}

impl Endpoint {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Endpoint::Search => "Error fetching scores.",
            Endpoint::Metadata => "Failed to load statistics metadata.",
            Endpoint::Statistics => "Failed to load statistics.",
            Endpoint::TopStudents => "Failed to load top students.",
        }
    }
}

pub const NOT_FOUND_MESSAGE: &str = "Registration number not found.";

/// Map an HTTP status and raw body onto the typed payload or an error.
///
/// Non-2xx, `success: false`, missing `data` and undecodable bodies all
/// fail; the envelope `message` is preferred over the endpoint fallback.
pub fn interpret_response<T: DeserializeOwned>(
    endpoint: Endpoint,
    status: u16,
    body: &[u8],
) -> Result<T, ApiError> {
    if status == 404 && endpoint == Endpoint::Search {
        return Err(ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()));
    }

    let envelope = serde_json::from_slice::<ApiResponse<T>>(body);
    let server_message = |envelope: &ApiResponse<T>| {
        envelope
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    };

    if !(200..300).contains(&status) {
        let message = match &envelope {
            Ok(envelope) => server_message(envelope),
            Err(_) => None,
        };
        log::warn!("{endpoint:?} request failed with status {status}");
        return Err(ApiError::RequestFailed(
            message.unwrap_or_else(|| endpoint.fallback_message().to_string()),
        ));
    }

    let envelope = envelope.map_err(|e| {
        log::warn!("Failed to decode {endpoint:?} response: {e}");
        ApiError::RequestFailed(endpoint.fallback_message().to_string())
    })?;

    if envelope.success == Some(false) {
        return Err(ApiError::RequestFailed(
            server_message(&envelope).unwrap_or_else(|| endpoint.fallback_message().to_string()),
        ));
    }

    envelope.data.ok_or_else(|| {
        log::warn!("{endpoint:?} response carried no data");
        ApiError::RequestFailed(endpoint.fallback_message().to_string())
    })
}

/// reqwest-backed implementation of [`ScoresApi`]
#[derive(Debug, Clone)]
pub struct HttpScoresClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpScoresClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path below the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        interpret_response(endpoint, status, &body)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ScoresApi for HttpScoresClient {
    async fn search_by_sbd(&self, sbd: &str) -> Result<ScoreRecord, ApiError> {
        let url = self.url(&format!("scores/search/{}", urlencoding::encode(sbd)));
        log::debug!("GET {url}");
        self.get(Endpoint::Search, self.http.get(url)).await
    }

    async fn metadata(&self) -> Result<StatisticsMetadata, ApiError> {
        let url = self.url("statistics/metadata");
        log::debug!("GET {url}");
        self.get(Endpoint::Metadata, self.http.get(url)).await
    }

    async fn filtered_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<StatisticsData, ApiError> {
        let url = self.url("statistics/filter");
        let params = [
            ("subjects", query.subjects_param()),
            ("levels", query.levels_param()),
        ];
        log::debug!("GET {url} {params:?}");
        self.get(Endpoint::Statistics, self.http.get(url).query(&params))
            .await
    }

    async fn top_students(&self, block: Block) -> Result<Vec<TopStudent>, ApiError> {
        let url = self.url(&format!("find-top/top/{}", urlencoding::encode(block.key())));
        log::debug!("GET {url}");
        self.get(Endpoint::TopStudents, self.http.get(url)).await
    }
}
