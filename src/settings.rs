// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Settings

use serde::Deserialize;
use url::Url;

/// Default location of the project list, relative to the page
pub const DEFAULT_RESOURCE_PATH: &str = "projects.json";

/// Default identifier of the grid container
pub const DEFAULT_GRID_ID: &str = "project-grid";

/// Default identifier of the footer year marker
pub const DEFAULT_FOOTER_ID: &str = "current-year";

/// Default message displayed when loading the project list fails
pub const DEFAULT_LOAD_ERROR_MESSAGE: &str = "Failed to load projects.";

/// Well-known identifiers and fixed strings of a page.
///
/// All fields are optional when deserialized and fall back to
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Location of the project list, relative to the page
    pub resource_path: String,

    /// Identifier of the grid container
    pub grid_id: String,

    /// Identifier of the footer year marker
    pub footer_id: String,

    /// Message displayed instead of the cards if loading fails
    pub load_error_message: String,
}

impl Settings {
    /// Resolve the location of the project list against the page URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource path cannot be joined with `page_url`.
    pub fn resource_location(&self, page_url: &Url) -> Result<Url, url::ParseError> {
        page_url.join(&self.resource_path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resource_path: DEFAULT_RESOURCE_PATH.to_owned(),
            grid_id: DEFAULT_GRID_ID.to_owned(),
            footer_id: DEFAULT_FOOTER_ID.to_owned(),
            load_error_message: DEFAULT_LOAD_ERROR_MESSAGE.to_owned(),
        }
    }
}
