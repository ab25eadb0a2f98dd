use reqwest::StatusCode;

use crate::config::BuchClientConfig;
use crate::error::ApiError;
use crate::models::{BuchInput, BuchPage};
use crate::pagination::Pagination;
use crate::query::SearchFilter;

/// The one generic user-facing message for failed saves.
pub const SAVE_ERROR_MESSAGE: &str = "Backend-Fehler beim Speichern.";

/// HTTP client for the two catalog endpoints.
///
/// One outstanding request per call, no retries, no timeout beyond the
/// reqwest defaults. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    rest_path: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, rest_path: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            rest_path: rest_path.into(),
        }
    }

    pub fn from_config(config: &BuchClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.backend.accept_invalid_certs)
            .build()?;
        Ok(Self {
            http,
            base_url: config.backend.base_url.clone(),
            rest_path: config.backend.rest_path.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.rest_path)
    }

    /// Fetch one page of results for the current filter and pagination.
    ///
    /// A 404 comes back as [`ApiError::NotFound`]; the search screen and the
    /// CLI both treat it as "zero results", not as a failure.
    pub async fn search(
        &self,
        filter: &SearchFilter,
        pagination: &Pagination,
    ) -> Result<BuchPage, ApiError> {
        let params = filter.build_params(pagination.page, pagination.page_size);
        let url = self.endpoint();
        log::debug!("GET {url} with {} query parameters", params.len());

        let response = self.http.get(&url).query(&params).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if status.is_success() => Ok(response.json::<BuchPage>().await?),
            status => {
                log::warn!("search returned {status}");
                Err(ApiError::Status(status))
            }
        }
    }

    /// Post a new book. Any non-2xx answer surfaces as a save error.
    pub async fn create(&self, input: &BuchInput) -> Result<(), ApiError> {
        let url = self.endpoint();
        log::debug!("POST {url} for ISBN {}", input.isbn);

        let response = self.http.post(&url).json(input).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            log::warn!("create returned {status}");
            Err(ApiError::Status(status))
        }
    }
}
