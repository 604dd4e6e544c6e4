//! Campus events endpoints (`events/...`).

use serde_json::Value;

use crate::client::UwClient;
use crate::error::Result;

/// Read-only view over the `events` resource family.
///
/// Obtained from [`UwClient::events`].
#[derive(Debug, Clone, Copy)]
pub struct Events<'a> {
    pub(crate) client: &'a UwClient,
}

impl Events<'_> {
    /// All upcoming events across sites (`events`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn all(&self) -> Result<Value> {
        self.client.get_json(&["events"])
    }

    /// Events for one site (`events/<site>`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn events_by_site(&self, site: &str) -> Result<Value> {
        self.client.get_json(&["events", site])
    }

    /// A single event by site and id (`events/<site>/<id>`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn events_by_site_and_id(&self, site: &str, id: &str) -> Result<Value> {
        self.client.get_json(&["events", site, id])
    }

    /// University holidays (`events/holidays`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn holidays(&self) -> Result<Value> {
        self.client.get_json(&["events", "holidays"])
    }
}
