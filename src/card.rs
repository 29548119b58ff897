// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Project cards

use std::fmt;

use crate::{
    ProjectRecord,
    header::Header,
    node::{Element, Image, Node},
};

const CARD_CLASS: &str = "project-card bg-white rounded-2xl shadow-md overflow-hidden flex flex-col";

const CONTENT_CLASS: &str = "p-6 flex flex-col flex-grow";

const TITLE_CLASS: &str = "text-xl font-semibold text-gray-900 mb-2";

const DESCRIPTION_CONTAINER_CLASS: &str = "project-description-container mb-4";

// The three-line clamp is purely visual, the node keeps the full text.
const DESCRIPTION_CLASS: &str = "text-gray-700 text-sm line-clamp-3";

const LINK_BASE_CLASS: &str = "project-link mt-auto inline-block text-center text-white font-medium py-2 px-4 rounded-lg transition duration-150 ease-in-out focus:outline-none focus:ring-2 focus:ring-offset-2";

const LINK_DEFAULT_COLOR_CLASS: &str = "bg-gray-800 hover:bg-gray-900";

/// Browsing context of the call-to-action link
pub const LINK_TARGET: &str = "_blank";

/// Relationship of the call-to-action link.
///
/// Detaches the opened page from the opener and suppresses the referrer.
pub const LINK_REL: &str = "noopener noreferrer";

/// A rendered project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card(Element);

impl Card {
    /// The card element.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.0
    }

    /// The header node, i.e. either an image or an icon container.
    #[must_use]
    pub fn header(&self) -> Option<&Node> {
        self.0.children().first()
    }

    /// The call-to-action link.
    #[must_use]
    pub fn link(&self) -> Option<&Element> {
        self.content()?
            .children()
            .iter()
            .filter_map(Node::as_element)
            .find(|element| element.tag() == "a")
    }

    /// The title element.
    #[must_use]
    pub fn title(&self) -> Option<&Element> {
        self.content()?
            .children()
            .iter()
            .filter_map(Node::as_element)
            .find(|element| element.tag() == "h3")
    }

    fn content(&self) -> Option<&Element> {
        self.0.children().get(1)?.as_element()
    }

    /// The image of an image-based card.
    #[must_use]
    pub fn image(&self) -> Option<&Image> {
        self.header()?.as_image()
    }

    /// Forward a load failure of the card's image.
    ///
    /// Returns `true` if the image switched to the placeholder.
    pub fn on_image_error(&mut self) -> bool {
        self.0
            .images_mut()
            .into_iter()
            .next()
            .is_some_and(Image::on_error)
    }

    /// Unwrap the card element.
    #[must_use]
    pub fn into_element(self) -> Element {
        self.0
    }
}

impl From<Card> for Node {
    fn from(from: Card) -> Self {
        Self::Element(from.into_element())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Render a project record as a card.
///
/// The card consists of the header, the title, the description and
/// the call-to-action link, in this order. Missing fields result in
/// empty content, rendering never fails.
#[must_use]
pub fn render(record: &ProjectRecord) -> Card {
    let header = Header::select(record).produce();
    let title = Element::new("h3")
        .with_class(TITLE_CLASS)
        .with_child(Node::text(record.title()));
    let description = Element::new("div")
        .with_class(DESCRIPTION_CONTAINER_CLASS)
        .with_child(
            Element::new("p")
                .with_class(DESCRIPTION_CLASS)
                .with_attr("title", record.description())
                .with_child(Node::text(record.description())),
        );
    let content = Element::new("div")
        .with_class(CONTENT_CLASS)
        .with_child(title)
        .with_child(description)
        .with_child(render_link(record));
    Card(
        Element::new("div")
            .with_class(CARD_CLASS)
            .with_child(header)
            .with_child(content),
    )
}

fn render_link(record: &ProjectRecord) -> Element {
    let mut link = Element::new("a");
    if let Some(project_url) = record.project_url() {
        link.set_attr("href", project_url);
    }
    link.with_attr("target", LINK_TARGET)
        .with_attr("rel", LINK_REL)
        .with_class(link_class(record.button_classes()))
        .with_child(Node::text(record.button_text()))
}

fn link_class(button_classes: Option<&str>) -> String {
    let color_class = button_classes.unwrap_or(LINK_DEFAULT_COLOR_CLASS);
    itertools::join(
        LINK_BASE_CLASS
            .split_whitespace()
            .chain(color_class.split_whitespace()),
        " ",
    )
}
