// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Loading the project list
//!
//! A [`Loader`] performs exactly one request per [`Loader::load()`]
//! call. There are no retries, no timeouts and no caching.

use std::future::Future;

use url::Url;

use crate::{Error, ProjectRecord, Settings};

/// A response to a fetch request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fetched {
    /// The HTTP status code
    pub status: u16,

    /// The raw response body
    pub body: Vec<u8>,
}

impl Fetched {
    /// Check for a status in the range `200..=299`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}

/// Transport for fetching a resource.
pub trait Fetch {
    /// Request the resource at `location`.
    ///
    /// Non-success responses are not errors on this level. The returned
    /// future is not required to be `Send`. Transports of single-threaded
    /// hosts may hold thread-local handles across `.await`.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    fn fetch(&self, location: &Url) -> impl Future<Output = anyhow::Result<Fetched>>;
}

/// HTTP transport.
#[derive(Debug, Clone, Default)]
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    /// Create a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that shares an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetch {
    async fn fetch(&self, location: &Url) -> anyhow::Result<Fetched> {
        let response = self.client.get(location.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(Fetched { status, body })
    }
}

/// Loads the project list from a fixed location.
#[derive(Debug, Clone)]
pub struct Loader<F> {
    fetch: F,
    location: Url,
}

impl<F> Loader<F> {
    /// Create a loader for the given location.
    #[must_use]
    pub const fn new(fetch: F, location: Url) -> Self {
        Self { fetch, location }
    }

    /// Create a loader for the project list of a page.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured resource path cannot be resolved
    /// against `page_url`.
    pub fn for_page(fetch: F, page_url: &Url, settings: &Settings) -> Result<Self, url::ParseError> {
        let location = settings.resource_location(page_url)?;
        Ok(Self::new(fetch, location))
    }

    /// The location of the project list.
    #[must_use]
    pub const fn location(&self) -> &Url {
        &self.location
    }
}

impl<F> Loader<F>
where
    F: Fetch,
{
    /// Fetch and decode the project list.
    ///
    /// Records are returned in the order of the JSON array without any
    /// further validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if no response was received
    /// - [`Error::Fetch`] if the response status is not a success
    /// - [`Error::Parse`] if the body is not a JSON array
    pub async fn load(&self) -> crate::Result<Vec<ProjectRecord>> {
        log::debug!("Fetching project list from {}", self.location);
        let fetched = self
            .fetch
            .fetch(&self.location)
            .await
            .map_err(Error::Transport)?;
        if !fetched.is_success() {
            return Err(Error::Fetch {
                status: fetched.status,
            });
        }
        let records = decode_project_list(&fetched.body)?;
        log::debug!("Fetched {count} project(s)", count = records.len());
        Ok(records)
    }
}

/// Decode a project list from a JSON array.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `json` is not a JSON array.
pub fn decode_project_list(json: &[u8]) -> crate::Result<Vec<ProjectRecord>> {
    serde_json::from_slice(json).map_err(Error::Parse)
}

#[cfg(test)]
mod tests;
