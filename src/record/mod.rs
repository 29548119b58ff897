// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Project records

use serde::Deserialize;
use serde_json::{Map, Value};

/// One portfolio entry as published in the project list.
///
/// Decoding never fails for a single entry. Every field is optional and
/// values of unexpected types are either converted to text (numbers and
/// booleans) or treated as absent, so that one malformed entry cannot
/// prevent the remaining entries from being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct ProjectRecord {
    /// Selects the icon variant of icon-based cards
    pub id: Option<String>,

    /// The title
    pub title: Option<String>,

    /// The description
    pub description: Option<String>,

    /// Target of the call-to-action link
    pub project_url: Option<String>,

    /// Text of the call-to-action link
    pub button_text: Option<String>,

    /// Source of image-based cards
    pub image_url: Option<String>,

    /// Alternative text of the image
    pub alt_text: Option<String>,

    /// Styling tokens of the call-to-action link
    pub button_classes: Option<String>,
}

impl ProjectRecord {
    /// The title or an empty string.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// The full description or an empty string.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// The call-to-action text or an empty string.
    #[must_use]
    pub fn button_text(&self) -> &str {
        self.button_text.as_deref().unwrap_or_default()
    }

    /// The link target, if any.
    #[must_use]
    pub fn project_url(&self) -> Option<&str> {
        self.project_url.as_deref()
    }

    /// The image source, if the record describes an image-based card.
    ///
    /// Blank values do not count.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|image_url| !image_url.trim().is_empty())
    }

    /// Check for an image-based card.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_url().is_some()
    }

    /// Non-blank styling tokens, if any.
    #[must_use]
    pub fn button_classes(&self) -> Option<&str> {
        self.button_classes
            .as_deref()
            .filter(|classes| !classes.trim().is_empty())
    }
}

impl From<Value> for ProjectRecord {
    fn from(from: Value) -> Self {
        let fields = match from {
            Value::Object(fields) => fields,
            other => {
                log::debug!("Project entry is not an object: {other}");
                return Self::default();
            }
        };
        Self {
            id: text_field(&fields, "id"),
            title: text_field(&fields, "title"),
            description: text_field(&fields, "description"),
            project_url: text_field(&fields, "projectUrl"),
            button_text: text_field(&fields, "buttonText"),
            image_url: text_field(&fields, "imageUrl"),
            alt_text: text_field(&fields, "altText"),
            button_classes: text_field(&fields, "buttonClasses"),
        }
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests;
