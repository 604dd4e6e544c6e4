//! News endpoints (`news/...`).

use serde_json::Value;

use crate::client::UwClient;
use crate::error::Result;

/// Read-only view over the `news` resource family.
///
/// Obtained from [`UwClient::news`].
#[derive(Debug, Clone, Copy)]
pub struct News<'a> {
    pub(crate) client: &'a UwClient,
}

impl News<'_> {
    /// All news items across sites (`news`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn all(&self) -> Result<Value> {
        self.client.get_json(&["news"])
    }

    /// News items for one site (`news/<site>`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn news_by_site(&self, site: &str) -> Result<Value> {
        self.client.get_json(&["news", site])
    }

    /// A single news item by site and id (`news/<site>/<id>`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn news_by_site_and_id(&self, site: &str, id: &str) -> Result<Value> {
        self.client.get_json(&["news", site, id])
    }
}
