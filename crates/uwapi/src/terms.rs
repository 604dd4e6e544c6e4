//! Academic terms endpoints (`terms/...`).

use serde_json::Value;

use crate::client::UwClient;
use crate::error::Result;

/// Read-only view over the `terms` resource family.
///
/// Obtained from [`UwClient::terms`]. Term identifiers are four-digit
/// codes (`1239` is Fall 2023) and are passed through verbatim.
#[derive(Debug, Clone, Copy)]
pub struct Terms<'a> {
    pub(crate) client: &'a UwClient,
}

impl Terms<'_> {
    /// Current, previous, and next term listing (`terms/list`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn list(&self) -> Result<Value> {
        self.client.get_json(&["terms", "list"])
    }

    /// Exam schedule for a term (`terms/<term>/examschedule`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn exam_schedule_by_term(&self, term: &str) -> Result<Value> {
        self.client.get_json(&["terms", term, "examschedule"])
    }

    /// Schedule for every class in a subject during a term
    /// (`terms/<term>/<subject>/schedule`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn subject_schedule_by_term(&self, term: &str, subject: &str) -> Result<Value> {
        self.client.get_json(&["terms", term, subject, "schedule"])
    }

    /// Schedule for one class during a term
    /// (`terms/<term>/<subject>/<catnum>/schedule`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn class_schedule_by_term(&self, term: &str, subject: &str, catnum: &str) -> Result<Value> {
        self.client
            .get_json(&["terms", term, subject, catnum, "schedule"])
    }

    /// Employer info sessions for a term (`terms/<term>/infosessions`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn info_sessions_by_term(&self, term: &str) -> Result<Value> {
        self.client.get_json(&["terms", term, "infosessions"])
    }
}
