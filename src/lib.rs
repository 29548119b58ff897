// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Renders a portfolio grid of project cards from a JSON project list.
//!
//! The project list is fetched once by a [`Loader`] and every
//! [`ProjectRecord`] is turned into a [`Card`] by [`render()`]. The
//! [`page`] module wires both to a host document through the
//! [`Document`] and [`Container`] traits.
//!
//! Refer to [`docs`] for an overview of the data format.

pub mod docs;

pub mod card;
pub mod header;
pub mod icon;
pub mod loader;
pub mod node;
pub mod page;
pub mod record;
pub mod settings;
pub mod speech;

use derive_more::{Display, Error};

pub use self::{
    card::{Card, render},
    header::Header,
    icon::Icon,
    loader::{Fetch, Fetched, HttpFetch, Loader},
    node::{Element, Image, ImageSource, Node},
    page::{Container, Document, MemoryContainer, MemoryDocument},
    record::ProjectRecord,
    settings::Settings,
};

/// Errors of the rendering pipeline
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The project list was answered with a non-success status.
    #[display("HTTP error! status: {status}")]
    Fetch {
        /// The response status
        status: u16,
    },

    /// The project list could not be requested at all.
    #[display("request failed: {_0}")]
    Transport(#[error(not(source))] anyhow::Error),

    /// The project list is not a JSON array.
    #[display("invalid project list: {_0}")]
    Parse(#[error(source)] serde_json::Error),

    /// The grid container does not exist in the document.
    #[display("container '{id}' not found")]
    MissingContainer {
        /// The identifier of the container
        id: String,
    },

    /// The platform does not provide speech synthesis.
    #[display("Speech synthesis is not supported in this browser.")]
    SpeechUnsupported,
}

/// Result type of the rendering pipeline
pub type Result<T> = std::result::Result<T, Error>;
