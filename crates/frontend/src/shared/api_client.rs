//! Generic REST client for one paginated collection resource.
//!
//! Normalizes every list response into `ListPage { items, total_count }`
//! and every failure into the two-way taxonomy below. No retries here;
//! the user re-triggers via the refresh action.

use contracts::shared::list::{ErrorBody, ListEnvelope, ListPage, ListQuery};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

/// What went wrong talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No response received (connectivity, timeout).
    Network(String),
    /// Response received with a failure status or an unusable payload.
    Server { status: u16, message: String },
}

impl FetchError {
    /// User-facing message for the error banner.
    pub fn message(&self) -> String {
        match self {
            FetchError::Network(detail) => format!("Network error: {}", detail),
            FetchError::Server { message, .. } => message.clone(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Thin wrapper over one REST resource, e.g. `CollectionClient::new("/api/users")`.
#[derive(Debug, Clone, Copy)]
pub struct CollectionClient {
    base_path: &'static str,
}

impl CollectionClient {
    pub const fn new(base_path: &'static str) -> Self {
        Self { base_path }
    }

    fn item_url(&self, id: &str) -> String {
        api_url(&format!("{}/{}", self.base_path, urlencoding::encode(id)))
    }

    fn list_url(&self, pairs: &[(String, String)]) -> String {
        let query: Vec<String> = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        if query.is_empty() {
            api_url(self.base_path)
        } else {
            api_url(&format!("{}?{}", self.base_path, query.join("&")))
        }
    }

    /// Server-paginated listing: `GET {base}?page=&limit=&<filters>`.
    pub async fn list<T: DeserializeOwned>(
        &self,
        query: &ListQuery,
    ) -> Result<ListPage<T>, FetchError> {
        let response = Request::get(&self.list_url(&query.query_pairs()))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let response = check_status(response).await?;
        let envelope: ListEnvelope<T> = parse_body(response).await?;
        Ok(envelope.into())
    }

    /// Non-paginated listing (`GET {base}`, plain array) for screens
    /// that filter/sort/paginate in memory.
    pub async fn fetch_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, FetchError> {
        let response = Request::get(&api_url(self.base_path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let response = check_status(response).await?;
        parse_body(response).await
    }

    pub async fn create<T: DeserializeOwned, D: Serialize>(
        &self,
        data: &D,
    ) -> Result<T, FetchError> {
        let response = Request::post(&api_url(self.base_path))
            .header("Accept", "application/json")
            .json(data)
            .map_err(|e| FetchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let response = check_status(response).await?;
        parse_body(response).await
    }

    pub async fn update<T: DeserializeOwned, D: Serialize>(
        &self,
        id: &str,
        data: &D,
    ) -> Result<T, FetchError> {
        let response = Request::put(&self.item_url(id))
            .header("Accept", "application/json")
            .json(data)
            .map_err(|e| FetchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let response = check_status(response).await?;
        parse_body(response).await
    }

    pub async fn remove(&self, id: &str) -> Result<(), FetchError> {
        let response = Request::delete(&self.item_url(id))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }
}

/// Non-2xx responses carry `{success: false, message}` when the backend
/// produced the error; anything else falls back to the status line.
async fn check_status(response: Response) -> Result<Response, FetchError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => format!("HTTP {}", status),
    };
    Err(FetchError::Server { status, message })
}

/// A 2xx body that does not match the expected shape is surfaced as a
/// server error; the caller keeps whatever it was already showing.
async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    response.json::<T>().await.map_err(|_| FetchError::Server {
        status,
        message: "Invalid response shape from server".to_string(),
    })
}
