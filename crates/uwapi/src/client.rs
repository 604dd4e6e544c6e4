//! `UwClient` - University of Waterloo Open Data API client implementation.

use serde_json::Value;
use tracing::instrument;

use crate::courses::Courses;
use crate::error::{Error, Result};
use crate::events::Events;
use crate::foodservices::FoodServices;
use crate::news::News;
use crate::services::Services;
use crate::terms::Terms;
use crate::weather::Weather;

/// Default base URL for the UW Open Data API v2.
const DEFAULT_BASE_URL: &str = "https://api.uwaterloo.ca/v2";

/// Default User-Agent when the host does not set one.
const DEFAULT_USER_AGENT: &str = concat!("uwapi/", env!("CARGO_PKG_VERSION"));

/// University of Waterloo Open Data API client.
///
/// Holds the immutable configuration (API key, base URL) and one blocking
/// HTTP client. The resource facades ([`FoodServices`], [`Courses`], ...)
/// borrow this client, so one instance serves every resource family.
#[derive(Debug)]
pub struct UwClient {
    /// HTTP client (reqwest, blocking, gzip enabled).
    http_client: reqwest::blocking::Client,
    /// Base URL, stored without a trailing slash.
    base_url: String,
    /// API key appended to every request URL.
    api_key: String,
}

/// Builder for [`UwClient`].
#[derive(Debug)]
pub struct UwClientBuilder {
    api_key: String,
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl UwClientBuilder {
    /// Creates a new builder holding the API key.
    const fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the User-Agent (default: `uwapi/<crate version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<UwClient> {
        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_owned();

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let http_client = reqwest::blocking::Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .map_err(Error::Transport)?;

        Ok(UwClient {
            http_client,
            base_url,
            api_key: self.api_key,
        })
    }
}

impl UwClient {
    /// Creates a new builder holding the API key.
    pub fn builder(api_key: impl Into<String>) -> UwClientBuilder {
        UwClientBuilder::new(api_key.into())
    }

    /// Creates a client for the production API with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Joins the base URL, path segments, and API key into a request URL:
    /// `<base>/<segments joined by "/">.json?key=<key>`.
    ///
    /// Segments are joined verbatim, with no escaping or validation;
    /// callers pass already-valid identifiers (subject codes, term ids).
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> String {
        format!(
            "{}/{}.json?key={}",
            self.base_url,
            segments.join("/"),
            self.api_key
        )
    }

    /// Sends one GET request for the given path segments and parses the
    /// body as JSON.
    ///
    /// The HTTP status code is deliberately not inspected: the remote
    /// service reports its own errors inside a JSON body, which comes back
    /// here as an ordinary document for the caller to interpret.
    #[instrument(skip_all)]
    pub(crate) fn get_json(&self, segments: &[&str]) -> Result<Value> {
        let url = self.endpoint_url(segments);
        tracing::debug!(%url, "UW API request");

        let response = self.http_client.get(&url).send().map_err(Error::Transport)?;

        let status = response.status();
        let body = response.text().map_err(Error::Transport)?;
        tracing::trace!(
            code = status.as_u16(),
            body_len = body.len(),
            "Response body received"
        );

        serde_json::from_str(&body).map_err(Error::Decode)
    }
}

/// Resource facade accessors.
impl UwClient {
    /// Food services endpoints (`foodservices/...`).
    #[must_use]
    pub const fn foodservices(&self) -> FoodServices<'_> {
        FoodServices { client: self }
    }

    /// Course catalog endpoints (`courses/...`).
    #[must_use]
    pub const fn courses(&self) -> Courses<'_> {
        Courses { client: self }
    }

    /// Campus events endpoints (`events/...`).
    #[must_use]
    pub const fn events(&self) -> Events<'_> {
        Events { client: self }
    }

    /// News endpoints (`news/...`).
    #[must_use]
    pub const fn news(&self) -> News<'_> {
        News { client: self }
    }

    /// Campus services endpoints (`services/...`).
    #[must_use]
    pub const fn services(&self) -> Services<'_> {
        Services { client: self }
    }

    /// Weather endpoints (`weather/...`).
    #[must_use]
    pub const fn weather(&self) -> Weather<'_> {
        Weather { client: self }
    }

    /// Academic terms endpoints (`terms/...`).
    #[must_use]
    pub const fn terms(&self) -> Terms<'_> {
        Terms { client: self }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn client_with_key(key: &str) -> UwClient {
        UwClient::builder(key).build().unwrap()
    }

    #[test]
    fn test_endpoint_url_joins_segments() {
        // Arrange
        let client = client_with_key("SAMPLE");

        // Act & Assert
        assert_eq!(
            client.endpoint_url(&["foodservices", "menu"]),
            "https://api.uwaterloo.ca/v2/foodservices/menu.json?key=SAMPLE"
        );
    }

    #[test]
    fn test_endpoint_url_single_segment() {
        let client = client_with_key("SAMPLE");

        assert_eq!(
            client.endpoint_url(&["events"]),
            "https://api.uwaterloo.ca/v2/events.json?key=SAMPLE"
        );
    }

    #[test]
    fn test_endpoint_url_course_by_catnum() {
        let client = client_with_key("K");

        assert_eq!(
            client.endpoint_url(&["courses", "cs", "341"]),
            "https://api.uwaterloo.ca/v2/courses/cs/341.json?key=K"
        );
    }

    #[test]
    fn test_endpoint_url_class_schedule_by_term() {
        let client = client_with_key("K");

        assert_eq!(
            client.endpoint_url(&["terms", "1239", "cs", "341", "schedule"]),
            "https://api.uwaterloo.ca/v2/terms/1239/cs/341/schedule.json?key=K"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = UwClient::builder("K")
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();

        assert_eq!(
            client.endpoint_url(&["weather", "current"]),
            "http://127.0.0.1:8080/weather/current.json?key=K"
        );
    }
}
