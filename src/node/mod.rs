// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Rendered nodes
//!
//! A minimal element tree that is independent of any particular host.
//! Nodes serialize to HTML via [`fmt::Display`], with text content and
//! attribute values escaped. Only [`Markup`] is written verbatim and it
//! can only be created from static, crate-provided templates.

use std::fmt;

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content, never interpreted as markup
    Text(String),

    /// A regular element with children
    Element(Element),

    /// An image with a one-way source fallback
    Image(Image),

    /// Trusted static markup
    Markup(Markup),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Concatenated text content of this node and all its descendants.
    ///
    /// Trusted markup does not contribute any text.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, text: &mut String) {
        match self {
            Self::Text(content) => text.push_str(content),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(text);
                }
            }
            Self::Image(_) | Self::Markup(_) => (),
        }
    }

    /// Return the element, if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Return the image, if this node is one.
    #[must_use]
    pub const fn as_image(&self) -> Option<&Image> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(from: Element) -> Self {
        Self::Element(from)
    }
}

impl From<Image> for Node {
    fn from(from: Image) -> Self {
        Self::Image(from)
    }
}

impl From<Markup> for Node {
    fn from(from: Markup) -> Self {
        Self::Markup(from)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(content) => write_escaped(f, content, false),
            Self::Element(element) => element.fmt(f),
            Self::Image(image) => image.fmt(f),
            Self::Markup(markup) => markup.fmt(f),
        }
    }
}

/// Trusted markup from a static template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup(&'static str);

impl Markup {
    pub(crate) const fn trusted(markup: &'static str) -> Self {
        Self(markup)
    }

    /// The markup as written.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        if let Some((_, existing)) = self.attrs.iter_mut().find(|(key, _)| *key == name) {
            *existing = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// The tag name.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `class` attribute.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    /// The direct children.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text content of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            child.collect_text(&mut text);
        }
        text
    }

    /// All images in document order.
    #[must_use]
    pub fn images(&self) -> Vec<&Image> {
        let mut images = Vec::new();
        collect_images(&self.children, &mut images);
        images
    }

    /// All images in document order, for dispatching load failures.
    #[must_use]
    pub fn images_mut(&mut self) -> Vec<&mut Image> {
        let mut images = Vec::new();
        collect_images_mut(&mut self.children, &mut images);
        images
    }
}

fn collect_images<'a>(nodes: &'a [Node], images: &mut Vec<&'a Image>) {
    for node in nodes {
        match node {
            Node::Image(image) => images.push(image),
            Node::Element(element) => collect_images(&element.children, images),
            Node::Text(_) | Node::Markup(_) => (),
        }
    }
}

fn collect_images_mut<'a>(nodes: &'a mut [Node], images: &mut Vec<&'a mut Image>) {
    for node in nodes {
        match node {
            Node::Image(image) => images.push(image),
            Node::Element(element) => collect_images_mut(&mut element.children, images),
            Node::Text(_) | Node::Markup(_) => (),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write_attr(f, name, value)?;
        }
        f.write_str(">")?;
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Alternative text of an image after the fallback has been engaged
pub const IMAGE_NOT_FOUND_ALT_TEXT: &str = "Image Not Found";

/// Which source an [`Image`] currently displays.
///
/// The transition is one-way: once the fallback is active the image
/// ignores all further load failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSource {
    /// The source from the project record
    #[default]
    Primary,

    /// The placeholder source
    Fallback,
}

/// An image that swaps to a placeholder once when loading fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    src: String,
    alt: String,
    class: String,
    fallback_src: String,
    source: ImageSource,
}

impl Image {
    /// Create an image displaying its primary source.
    #[must_use]
    pub fn new(
        src: impl Into<String>,
        alt: impl Into<String>,
        class: impl Into<String>,
        fallback_src: impl Into<String>,
    ) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            class: class.into(),
            fallback_src: fallback_src.into(),
            source: ImageSource::Primary,
        }
    }

    /// The current source URL.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// The current alternative text.
    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// The `class` attribute.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The currently active source.
    #[must_use]
    pub const fn source(&self) -> ImageSource {
        self.source
    }

    /// Handle a load failure reported by the host.
    ///
    /// Returns `true` if the image switched to the placeholder and
    /// `false` if the fallback had already been engaged before.
    pub fn on_error(&mut self) -> bool {
        match self.source {
            ImageSource::Primary => {
                log::warn!(
                    "Failed to load image '{src}', falling back to '{fallback}'",
                    src = self.src,
                    fallback = self.fallback_src
                );
                self.src.clone_from(&self.fallback_src);
                IMAGE_NOT_FOUND_ALT_TEXT.clone_into(&mut self.alt);
                self.source = ImageSource::Fallback;
                true
            }
            ImageSource::Fallback => false,
        }
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<img")?;
        write_attr(f, "src", &self.src)?;
        write_attr(f, "alt", &self.alt)?;
        if !self.class.is_empty() {
            write_attr(f, "class", &self.class)?;
        }
        if self.source == ImageSource::Primary {
            // Hosts arm their error handler from this attribute.
            write_attr(f, "data-fallback-src", &self.fallback_src)?;
        }
        f.write_str(">")
    }
}

fn write_attr(f: &mut fmt::Formatter<'_>, name: &str, value: &str) -> fmt::Result {
    write!(f, " {name}=\"")?;
    write_escaped(f, value, true)?;
    f.write_str("\"")
}

fn write_escaped(f: &mut fmt::Formatter<'_>, input: &str, in_attr: bool) -> fmt::Result {
    let mut unescaped_start = 0;
    for (index, ch) in input.char_indices() {
        let escaped = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' if in_attr => "&quot;",
            _ => continue,
        };
        f.write_str(&input[unescaped_start..index])?;
        f.write_str(escaped)?;
        unescaped_start = index + ch.len_utf8();
    }
    f.write_str(&input[unescaped_start..])
}
