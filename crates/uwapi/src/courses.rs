//! Course catalog endpoints (`courses/...`).

use serde_json::Value;

use crate::client::UwClient;
use crate::error::Result;

/// Read-only view over the `courses` resource family.
///
/// Obtained from [`UwClient::courses`]. Subject codes and catalog numbers
/// are passed through verbatim, so `info_by_catnum("cs", "341")` requests
/// `courses/cs/341`.
#[derive(Debug, Clone, Copy)]
pub struct Courses<'a> {
    pub(crate) client: &'a UwClient,
}

impl Courses<'_> {
    /// All courses offered under a subject (`courses/<subject>`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn courses_by_subject(&self, subject: &str) -> Result<Value> {
        self.client.get_json(&["courses", subject])
    }

    /// Course information by course id (`courses/<course_id>`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn info_by_id(&self, course_id: &str) -> Result<Value> {
        self.client.get_json(&["courses", course_id])
    }

    /// Class schedule by class number (`courses/<classnum>/schedule`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn schedule_by_classnum(&self, classnum: &str) -> Result<Value> {
        self.client.get_json(&["courses", classnum, "schedule"])
    }

    /// Course information by subject and catalog number
    /// (`courses/<subject>/<catnum>`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn info_by_catnum(&self, subject: &str, catnum: &str) -> Result<Value> {
        self.client.get_json(&["courses", subject, catnum])
    }

    /// Class schedule by subject and catalog number
    /// (`courses/<subject>/<catnum>/schedule`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn schedule_by_catnum(&self, subject: &str, catnum: &str) -> Result<Value> {
        self.client.get_json(&["courses", subject, catnum, "schedule"])
    }

    /// Prerequisites by subject and catalog number
    /// (`courses/<subject>/<catnum>/prerequisites`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn prereqs_by_catnum(&self, subject: &str, catnum: &str) -> Result<Value> {
        self.client
            .get_json(&["courses", subject, catnum, "prerequisites"])
    }

    /// Exam schedule by subject and catalog number
    /// (`courses/<subject>/<catnum>/examschedule`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn exam_schedule_by_catnum(&self, subject: &str, catnum: &str) -> Result<Value> {
        self.client
            .get_json(&["courses", subject, catnum, "examschedule"])
    }
}
