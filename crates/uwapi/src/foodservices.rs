//! Food services endpoints (`foodservices/...`).
//!
//! Covers menus, outlet and location listings, WatCard balances, and the
//! dated variants that address a specific year and week.

use serde_json::Value;

use crate::client::UwClient;
use crate::error::Result;

/// Read-only view over the `foodservices` resource family.
///
/// Obtained from [`UwClient::foodservices`]. Every method issues one GET
/// and returns the parsed response document verbatim.
#[derive(Debug, Clone, Copy)]
pub struct FoodServices<'a> {
    pub(crate) client: &'a UwClient,
}

impl FoodServices<'_> {
    /// Current week's menu (`foodservices/menu`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn menu(&self) -> Result<Value> {
        self.client.get_json(&["foodservices", "menu"])
    }

    /// Additional notes for the current week (`foodservices/notes`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn notes(&self) -> Result<Value> {
        self.client.get_json(&["foodservices", "notes"])
    }

    /// Known diet types (`foodservices/diets`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn diets(&self) -> Result<Value> {
        self.client.get_json(&["foodservices", "diets"])
    }

    /// Food outlet listing (`foodservices/outlets`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn outlets(&self) -> Result<Value> {
        self.client.get_json(&["foodservices", "outlets"])
    }

    /// Outlet locations and hours (`foodservices/locations`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn locations(&self) -> Result<Value> {
        self.client.get_json(&["foodservices", "locations"])
    }

    /// WatCard vendor balance information (`foodservices/watcard`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn watcard(&self) -> Result<Value> {
        self.client.get_json(&["foodservices", "watcard"])
    }

    /// Food services announcements (`foodservices/announcements`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn announcements(&self) -> Result<Value> {
        self.client.get_json(&["foodservices", "announcements"])
    }

    /// Product details by product id (`foodservices/products/<id>`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn products(&self, product_id: &str) -> Result<Value> {
        self.client.get_json(&["foodservices", "products", product_id])
    }

    /// Menu for a given year and week (`foodservices/<year>/<week>/menu`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn menu_dated(&self, year: &str, week: &str) -> Result<Value> {
        self.client.get_json(&["foodservices", year, week, "menu"])
    }

    /// Notes for a given year and week (`foodservices/<year>/<week>/notes`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn notes_dated(&self, year: &str, week: &str) -> Result<Value> {
        self.client.get_json(&["foodservices", year, week, "notes"])
    }

    /// Announcements for a given year and week
    /// (`foodservices/<year>/<week>/announcements`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    pub fn announcements_dated(&self, year: &str, week: &str) -> Result<Value> {
        self.client
            .get_json(&["foodservices", year, week, "announcements"])
    }
}
