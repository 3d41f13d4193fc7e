//! HTTP client for the link store service.
//!
//! Thin typed wrapper over the REST surface. No retries, no
//! timeouts: a failed request yields one error and the caller
//! decides what to surface.

use serde_json::json;

use crate::db::Link;
use crate::{Error, Result};

use super::state::LinkForm;

/// Client for the `/links` REST surface.
#[derive(Debug, Clone)]
pub struct LinkApi {
    base_url: String,
    http: reqwest::Client,
}

impl LinkApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full list of links.
    pub async fn list(&self) -> Result<Vec<Link>> {
        let response = self.http.get(self.url("/links")).send().await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }

    /// Create a link from the form's field values.
    pub async fn create(&self, form: &LinkForm) -> Result<Link> {
        let response = self
            .http
            .post(self.url("/links"))
            .json(form)
            .send()
            .await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }

    /// Update a link, replacing title/url/description wholesale.
    pub async fn update(&self, id: &str, form: &LinkForm) -> Result<Link> {
        let response = self
            .http
            .put(self.url(&format!("/links/{}", id)))
            .json(form)
            .send()
            .await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }

    /// Delete a link.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/links/{}", id)))
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    /// Submit a reorder batch of (id, order) pairs.
    pub async fn reorder(&self, pairs: &[(String, i64)]) -> Result<()> {
        let body = json!({
            "reorderedLinks": pairs
                .iter()
                .map(|(id, order)| json!({ "_id": id, "order": order }))
                .collect::<Vec<_>>(),
        });

        let response = self
            .http
            .put(self.url("/links/reorder"))
            .json(&body)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    /// Increment a link's click count. An unknown id yields None.
    pub async fn increment_click(&self, id: &str) -> Result<Option<Link>> {
        let response = self
            .http
            .put(self.url(&format!("/links/{}/click", id)))
            .send()
            .await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }
}

/// The client never distinguishes error kinds: any non-2xx response
/// is a generic failure.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(Error::Internal(format!(
            "request failed with status {}",
            response.status()
        )))
    }
}
