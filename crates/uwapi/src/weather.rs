//! Weather endpoints (`weather/...`).

use serde_json::Value;

use crate::client::UwClient;
use crate::error::Result;

/// Read-only view over the `weather` resource family.
#[derive(Debug, Clone, Copy)]
pub struct Weather<'a> {
    pub(crate) client: &'a UwClient,
}

impl Weather<'_> {
    /// Current readings from the campus weather station
    /// (`weather/current`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn current(&self) -> Result<Value> {
        self.client.get_json(&["weather", "current"])
    }
}
