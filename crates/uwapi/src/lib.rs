//! Client library for the University of Waterloo Open Data API v2.
//!
//! Builds `<base>/<path segments>.json?key=<key>` request URLs, performs
//! one blocking GET per method call, and returns the parsed JSON document
//! verbatim as a [`serde_json::Value`]. The response shape is defined
//! entirely by the remote service; no schema is imposed here, and the HTTP
//! status code is not inspected — the API reports its own errors inside
//! the JSON body.
//!
//! ```no_run
//! use uwapi::UwClient;
//!
//! # fn main() -> uwapi::Result<()> {
//! let client = UwClient::new("YOUR_API_KEY")?;
//! let menu = client.foodservices().menu()?;
//! let schedule = client.terms().class_schedule_by_term("1239", "cs", "341")?;
//! # let _ = (menu, schedule);
//! # Ok(())
//! # }
//! ```

mod client;
mod courses;
mod error;
mod events;
mod foodservices;
mod news;
mod services;
mod terms;
mod weather;

pub use client::{UwClient, UwClientBuilder};
pub use courses::Courses;
pub use error::{Error, Result};
pub use events::Events;
pub use foodservices::FoodServices;
pub use news::News;
pub use services::Services;
pub use terms::Terms;
pub use weather::Weather;
