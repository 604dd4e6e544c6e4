//! Campus services endpoints (`services/...`).

use serde_json::Value;

use crate::client::UwClient;
use crate::error::Result;

/// Read-only view over the `services` resource family.
#[derive(Debug, Clone, Copy)]
pub struct Services<'a> {
    pub(crate) client: &'a UwClient,
}

impl Services<'_> {
    /// Services offered by one site (`services/<site>`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn services_by_site(&self, site: &str) -> Result<Value> {
        self.client.get_json(&["services", site])
    }
}
