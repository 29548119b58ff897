// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Vector icons of icon-based cards

use crate::node::Markup;

/// A fixed icon template, selected by the project id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// `studysmarter`
    StudySmarter,

    /// `aitextviews`
    AiTextViews,

    /// `techlearning`
    TechLearning,

    /// `cricket`
    Cricket,

    /// `ailearning`
    AiLearning,

    /// Generic glyph for all other ids
    Unknown,
}

impl Icon {
    /// Select the icon for a project id.
    ///
    /// Ids are matched exactly. Missing or unrecognized ids
    /// map to [`Icon::Unknown`].
    #[must_use]
    pub fn from_id(id: Option<&str>) -> Self {
        match id {
            Some("studysmarter") => Self::StudySmarter,
            Some("aitextviews") => Self::AiTextViews,
            Some("techlearning") => Self::TechLearning,
            Some("cricket") => Self::Cricket,
            Some("ailearning") => Self::AiLearning,
            _ => Self::Unknown,
        }
    }

    /// The SVG markup.
    #[must_use]
    pub const fn svg(self) -> &'static str {
        match self {
            Self::StudySmarter => STUDYSMARTER_SVG,
            Self::AiTextViews => AITEXTVIEWS_SVG,
            Self::TechLearning => TECHLEARNING_SVG,
            Self::Cricket => CRICKET_SVG,
            Self::AiLearning => AILEARNING_SVG,
            Self::Unknown => UNKNOWN_SVG,
        }
    }

    pub(crate) const fn markup(self) -> Markup {
        Markup::trusted(self.svg())
    }
}

const STUDYSMARTER_SVG: &str = r##"<svg width="64" height="64" fill="none" viewBox="0 0 64 64"><rect width="64" height="64" rx="16" fill="#6366F1"/><path d="M20 44V20h24v24H20zm2-2h20V22H22v20zm4-8h12v2H26v-2zm0-6h12v2H26v-2z" fill="#fff"/></svg>"##;

const AITEXTVIEWS_SVG: &str = r##"<svg width="64" height="64" fill="none" viewBox="0 0 64 64"><rect width="64" height="64" rx="16" fill="#10B981"/><rect x="20" y="20" width="24" height="6" rx="2" fill="#fff"/><rect x="20" y="30" width="24" height="6" rx="2" fill="#fff"/><rect x="20" y="40" width="16" height="6" rx="2" fill="#fff"/></svg>"##;

const TECHLEARNING_SVG: &str = r##"<svg width="64" height="64" fill="none" viewBox="0 0 64 64"><rect width="64" height="64" rx="16" fill="#EC4899"/><circle cx="32" cy="32" r="12" fill="#fff"/><path d="M32 20v24M20 32h24" stroke="#EC4899" stroke-width="2" stroke-linecap="round"/></svg>"##;

const CRICKET_SVG: &str = r##"<svg width="64" height="64" fill="none" viewBox="0 0 64 64"><rect width="64" height="64" rx="16" fill="#F59E42"/><circle cx="32" cy="32" r="12" fill="#fff"/><path d="M40 24L24 40" stroke="#F59E42" stroke-width="2" stroke-linecap="round"/><circle cx="32" cy="32" r="4" fill="#F59E42"/></svg>"##;

const AILEARNING_SVG: &str = r##"<svg width="64" height="64" fill="none" viewBox="0 0 64 64"><rect width="64" height="64" rx="16" fill="#6366F1"/><path d="M32 20a12 12 0 100 24 12 12 0 000-24zm0 2a10 10 0 110 20 10 10 0 010-20zm-2 6h4v8h-4v-8zm0 10h4v2h-4v-2z" fill="#fff"/></svg>"##;

const UNKNOWN_SVG: &str = r##"<svg width="64" height="64" fill="none" viewBox="0 0 64 64"><rect width="64" height="64" rx="16" fill="#CBD5E1"/><text x="32" y="38" text-anchor="middle" fill="#64748B" font-size="18">?</text></svg>"##;
