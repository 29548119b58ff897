// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Populating a host document
//!
//! The host document is only accessed through [`Document`] and
//! [`Container`]. [`MemoryDocument`] is a self-contained implementation
//! that keeps all nodes in memory and serializes them to HTML.

use std::{collections::BTreeMap, fmt};

use time::OffsetDateTime;

use crate::{
    Error, Settings,
    card::render,
    loader::{Fetch, Loader},
    node::{Element, Node},
};

const LOAD_ERROR_CLASS: &str = "text-red-500 col-span-full text-center";

/// An element of the host document that receives nodes.
pub trait Container {
    /// Remove all children.
    fn clear(&mut self);

    /// Append a child.
    fn append_child(&mut self, child: Node);

    /// Replace all children.
    fn replace_children(&mut self, children: Vec<Node>) {
        self.clear();
        for child in children {
            self.append_child(child);
        }
    }
}

/// The host document.
pub trait Document {
    /// Look up a container by its identifier.
    fn container_by_id(&mut self, id: &str) -> Option<&mut dyn Container>;
}

/// The node displayed instead of the cards if loading fails.
#[must_use]
pub fn load_error_node(message: &str) -> Node {
    Element::new("p")
        .with_class(LOAD_ERROR_CLASS)
        .with_child(Node::text(message))
        .into()
}

/// Load the project list and fill the container with one card per project.
///
/// On success the previous content of the container (e.g. a loading
/// indicator) is removed and the cards are appended in the order of the
/// project list. On failure the content is replaced by a single error
/// message and the error is returned.
///
/// Returns the number of cards.
///
/// # Errors
///
/// Returns the error of [`Loader::load()`].
pub async fn populate<F>(
    container: &mut dyn Container,
    loader: &Loader<F>,
    error_message: &str,
) -> crate::Result<usize>
where
    F: Fetch,
{
    match loader.load().await {
        Ok(records) => {
            container.clear();
            for record in &records {
                container.append_child(render(record).into());
            }
            log::debug!("Rendered {count} project card(s)", count = records.len());
            Ok(records.len())
        }
        Err(err) => {
            log::error!("Error loading projects: {err}");
            container.replace_children(vec![load_error_node(error_message)]);
            Err(err)
        }
    }
}

/// Display the year in the footer marker.
pub fn stamp_year(container: &mut dyn Container, year: i32) {
    container.replace_children(vec![Node::text(year.to_string())]);
}

/// The current year (UTC).
#[must_use]
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Initialize a page once it is ready.
///
/// Stamps the current year into the footer marker, if present, and
/// populates the grid container.
///
/// # Errors
///
/// Returns [`Error::MissingContainer`] without loading anything if the
/// grid container is absent. Otherwise returns the error of [`populate()`].
pub async fn start<D, F>(
    document: &mut D,
    loader: &Loader<F>,
    settings: &Settings,
) -> crate::Result<usize>
where
    D: Document + ?Sized,
    F: Fetch,
{
    if let Some(footer) = document.container_by_id(&settings.footer_id) {
        stamp_year(footer, current_year());
    }
    let Some(grid) = document.container_by_id(&settings.grid_id) else {
        log::error!("Project grid container '{id}' not found!", id = settings.grid_id);
        return Err(Error::MissingContainer {
            id: settings.grid_id.clone(),
        });
    };
    populate(grid, loader, &settings.load_error_message).await
}

/// A container that keeps its children in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryContainer {
    children: Vec<Node>,
}

impl MemoryContainer {
    /// Create a container with initial content.
    #[must_use]
    pub const fn with_children(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// The children.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The children, e.g. for forwarding image load failures.
    #[must_use]
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }
}

impl Container for MemoryContainer {
    fn clear(&mut self) {
        self.children.clear();
    }

    fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }
}

impl fmt::Display for MemoryContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.children {
            child.fmt(f)?;
        }
        Ok(())
    }
}

/// A document with containers that are kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    containers: BTreeMap<String, MemoryContainer>,
}

impl MemoryDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a container.
    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>, container: MemoryContainer) -> Self {
        self.containers.insert(id.into(), container);
        self
    }

    /// Look up a container.
    #[must_use]
    pub fn container(&self, id: &str) -> Option<&MemoryContainer> {
        self.containers.get(id)
    }

    /// Look up a container for modification.
    #[must_use]
    pub fn container_mut(&mut self, id: &str) -> Option<&mut MemoryContainer> {
        self.containers.get_mut(id)
    }
}

impl Document for MemoryDocument {
    fn container_by_id(&mut self, id: &str) -> Option<&mut dyn Container> {
        self.containers
            .get_mut(id)
            .map(|container| container as &mut dyn Container)
    }
}
