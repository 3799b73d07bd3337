//! HTTP adapter for the remote verification service
//!
//! Thin blocking client over the service's five endpoints. Its one real job
//! is normalization: every transport- and HTTP-level failure is classified
//! into an [`ApiFailure`] variant so the services above can apply their
//! per-operation fallback policy without inspecting reqwest errors.

use serde::Serialize;

use crate::config::API_PREFIX;
use crate::core::ports::{ApiFailure, RemoteApi};
use crate::models::{Post, PostMode, VerificationReport};

/// Blocking HTTP client for a configured backend endpoint
#[derive(Debug)]
pub struct HttpApi {
    client: reqwest::blocking::Client,
    base: String,
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

#[derive(Serialize)]
struct CreatePostRequest<'a> {
    verification_id: &'a str,
    post_mode: PostMode,
}

impl HttpApi {
    /// Create a client for the given endpoint base (no trailing slash)
    ///
    /// All requests are routed through the fixed `/api` prefix under the
    /// endpoint.
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base: format!("{}{API_PREFIX}", endpoint.trim_end_matches('/')),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<T, ApiFailure> {
        response.json().map_err(|e| ApiFailure::Decode(e.to_string()))
    }

    fn check_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ApiFailure> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.as_u16() == 422 {
            Err(ApiFailure::Unprocessable)
        } else {
            Err(ApiFailure::Status(status.as_u16()))
        }
    }
}

fn transport(e: &reqwest::Error) -> ApiFailure {
    ApiFailure::Transport(e.to_string())
}

impl RemoteApi for HttpApi {
    fn verify_article(
        &self,
        url: &str,
        comment: Option<&str>,
    ) -> Result<VerificationReport, ApiFailure> {
        let response = self
            .client
            .post(self.url("/verifyArticle"))
            .json(&VerifyRequest { url, comment })
            .send()
            .map_err(|e| transport(&e))?;
        Self::decode(Self::check_status(response)?)
    }

    fn create_post(&self, verification_id: &str, mode: PostMode) -> Result<Post, ApiFailure> {
        let response = self
            .client
            .post(self.url("/posts"))
            .json(&CreatePostRequest {
                verification_id,
                post_mode: mode,
            })
            .send()
            .map_err(|e| transport(&e))?;
        Self::decode(Self::check_status(response)?)
    }

    fn fetch_posts(&self) -> Result<Vec<Post>, ApiFailure> {
        let response = self.client.get(self.url("/posts")).send().map_err(|e| transport(&e))?;
        Self::decode(Self::check_status(response)?)
    }

    fn fetch_report(
        &self,
        verification_id: &str,
    ) -> Result<Option<VerificationReport>, ApiFailure> {
        let response = self
            .client
            .get(self.url(&format!("/reports/{verification_id}")))
            .send()
            .map_err(|e| transport(&e))?;
        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        Ok(Some(Self::decode(Self::check_status(response)?)?))
    }

    fn clear_posts(&self) -> Result<(), ApiFailure> {
        let response = self.client.delete(self.url("/posts")).send().map_err(|e| transport(&e))?;
        Self::check_status(response).map(|_| ())
    }
}
