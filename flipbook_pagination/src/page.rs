// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page and company records.
//!
//! With the `serde` feature the records use camelCase field names and also
//! accept the snake_case names of older data exports (`page_number`,
//! `company_id`, ...).

use alloc::string::String;

/// Absolute, 0-based page number.
pub type PageNumber = u32;

/// What a page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PageKind {
    /// Front cover.
    Cover,
    /// Editorial article page.
    Article,
    /// Full-page advert.
    Advert,
    /// Index of advertisers.
    AdvertiserIndex,
    /// Table of contents.
    #[cfg_attr(feature = "serde", serde(alias = "Summary"))]
    Summary,
    /// Back cover.
    BackCover,
}

impl PageKind {
    /// Human-readable name used as a page kicker.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Cover => "Cover",
            Self::Article => "Article",
            Self::Advert => "Advertisement",
            Self::AdvertiserIndex => "Advertiser index",
            Self::Summary => "Contents",
            Self::BackCover => "Back cover",
        }
    }
}

/// Where a page sits in the printed layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PageSide {
    /// Shown alone as the first spread.
    Cover,
    /// Shown alone as the last spread.
    End,
    /// Left half of a spread.
    Left,
    /// Right half of a spread.
    Right,
}

/// One page of the document.
///
/// Pages are immutable once loaded. Within a document, `number` is unique and
/// dense starting at `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Page {
    /// Stable identifier; also the seed for generated filler text and images.
    #[cfg_attr(feature = "serde", serde(alias = "page_id"))]
    pub id: String,
    /// Absolute page number.
    #[cfg_attr(feature = "serde", serde(alias = "page_number"))]
    pub number: PageNumber,
    /// Content kind.
    #[cfg_attr(feature = "serde", serde(alias = "page_type"))]
    pub kind: PageKind,
    /// Layout side.
    #[cfg_attr(feature = "serde", serde(alias = "page_side"))]
    pub side: PageSide,
    /// Id of the advertiser this page belongs to, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "relatedTo", skip_serializing_if = "Option::is_none")
    )]
    pub related_company: Option<String>,
    /// Headline.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "titulo", skip_serializing_if = "Option::is_none")
    )]
    pub title: Option<String>,
    /// Standfirst under the headline.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "subtitulo", skip_serializing_if = "Option::is_none")
    )]
    pub subtitle: Option<String>,
}

impl Page {
    /// Creates a page with no title, subtitle or company.
    #[must_use]
    pub fn new(id: impl Into<String>, number: PageNumber, kind: PageKind, side: PageSide) -> Self {
        Self {
            id: id.into(),
            number,
            kind,
            side,
            related_company: None,
            title: None,
            subtitle: None,
        }
    }

    /// Sets the headline.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the standfirst.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Links the page to an advertiser.
    #[must_use]
    pub fn with_company(mut self, company_id: impl Into<String>) -> Self {
        self.related_company = Some(company_id.into());
        self
    }
}

/// An advertiser referenced by pages.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Company {
    /// Identifier referenced by [`Page::related_company`].
    #[cfg_attr(feature = "serde", serde(alias = "company_id"))]
    pub id: String,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(alias = "company_name"))]
    pub name: String,
    /// Contact email.
    #[cfg_attr(feature = "serde", serde(alias = "company_email"))]
    pub email: String,
    /// Contact phone.
    #[cfg_attr(feature = "serde", serde(alias = "company_phone"))]
    pub phone: String,
    /// Website URL.
    #[cfg_attr(feature = "serde", serde(alias = "company_web"))]
    pub website: String,
}
