// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_pagination::{ArticleIndexEntry, Company, Direction, Page, PageKind, SpreadLabel, Step};
use serde::{Deserialize, Serialize};

use crate::image::image_url;
use crate::layout::SpreadSides;

/// One page of a spread, ready to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// The page record.
    pub page: Page,
    /// The advertiser the page refers to, resolved from the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    /// Body text. Empty for cover pages.
    #[serde(default, alias = "loremParagraphs")]
    pub paragraphs: Vec<String>,
}

impl PageView {
    /// Background picture, for page kinds that carry one.
    #[must_use]
    pub fn background_image(&self) -> Option<String> {
        matches!(
            self.page.kind,
            PageKind::Cover | PageKind::Advert | PageKind::BackCover
        )
        .then(|| image_url(&self.page.id))
    }

    /// Returns `true` if the body text should be shown for this page.
    #[must_use]
    pub fn shows_body_text(&self) -> bool {
        matches!(
            self.page.kind,
            PageKind::Article | PageKind::Advert | PageKind::BackCover
        )
    }
}

/// Everything needed to show one spread.
///
/// Built by [`Document::spread`](crate::Document::spread), cached by label in
/// [`SpreadCache`](crate::SpreadCache) and immutable afterwards. The JSON form
/// is camelCase and is what crosses the network between the query surface
/// and the navigation controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadPayload {
    /// Pages of the spread in page-number order; one or two entries.
    pub view_data: Vec<PageView>,
    /// Document-wide table of contents.
    pub article_index: Vec<ArticleIndexEntry>,
    /// Label of the previous spread.
    #[serde(rename = "prevSpreadLabel")]
    pub prev_label: Option<SpreadLabel>,
    /// Label of the next spread.
    #[serde(rename = "nextSpreadLabel")]
    pub next_label: Option<SpreadLabel>,
    /// Canonical label of this spread.
    #[serde(rename = "spreadLabel")]
    pub label: SpreadLabel,
    /// Step this spread is shown at.
    #[serde(rename = "currentStep")]
    pub step: Step,
    /// 1-based position of the step.
    #[serde(rename = "currentPosition")]
    pub position: usize,
    /// Number of steps in the document.
    pub total_steps: usize,
    /// Label of the cover spread.
    #[serde(rename = "firstSpreadLabel")]
    pub first_label: SpreadLabel,
    /// Label of the final spread.
    #[serde(rename = "lastSpreadLabel")]
    pub last_label: SpreadLabel,
}

impl SpreadPayload {
    /// Label of the neighboring spread in `direction`.
    #[must_use]
    pub fn neighbor(&self, direction: Direction) -> Option<&SpreadLabel> {
        match direction {
            Direction::Prev => self.prev_label.as_ref(),
            Direction::Next => self.next_label.as_ref(),
        }
    }

    /// Returns `true` if this is the cover spread.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.label == self.first_label
    }

    /// Returns `true` if this is the final spread.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.label == self.last_label
    }

    /// Pages arranged into their left and right slots.
    #[must_use]
    pub fn sides(&self) -> SpreadSides<'_> {
        SpreadSides::split(&self.view_data)
    }

    /// Parses a payload received as JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the payload to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
