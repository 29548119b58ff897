// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Card headers

use crate::{
    ProjectRecord,
    icon::Icon,
    node::{Element, Image, Node},
};

/// Displayed instead of a project image that failed to load
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/600x400/e2e8f0/64748b?text=Image+Not+Found";

const IMAGE_CLASS: &str = "project-image w-full h-44 object-cover";

const ICON_CLASS: &str = "project-icon flex items-center justify-center h-44 w-full bg-gradient-to-br from-blue-50 to-gray-100";

/// The visual header of a card, selected by the shape of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header<'a> {
    /// A project image with a placeholder fallback
    Image {
        /// Primary source
        url: &'a str,

        /// Alternative text
        alt: &'a str,
    },

    /// A fixed vector icon
    Icon(Icon),
}

impl<'a> Header<'a> {
    /// Select the header for a record.
    ///
    /// Records with a non-blank image URL get an image header, all
    /// others an icon keyed by their id. Without an explicit alternative
    /// text the title is used.
    #[must_use]
    pub fn select(record: &'a ProjectRecord) -> Self {
        if let Some(url) = record.image_url() {
            let alt = record.alt_text.as_deref().unwrap_or_else(|| record.title());
            return Self::Image { url, alt };
        }
        Self::Icon(Icon::from_id(record.id.as_deref()))
    }

    /// Produce the header node.
    #[must_use]
    pub fn produce(self) -> Node {
        match self {
            Self::Image { url, alt } => {
                Image::new(url, alt, IMAGE_CLASS, PLACEHOLDER_IMAGE_URL).into()
            }
            Self::Icon(icon) => Element::new("div")
                .with_class(ICON_CLASS)
                .with_child(icon.markup())
                .into(),
        }
    }
}
