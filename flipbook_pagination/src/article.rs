// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::page::{Page, PageKind, PageNumber};

/// One row of the article table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArticleIndexEntry {
    /// Page the article starts on.
    pub number: PageNumber,
    /// Article headline.
    pub title: String,
}

/// Builds the table of contents from `pages`.
///
/// One entry per distinct, non-empty title among [`PageKind::Article`] pages,
/// keeping the lowest page number for each title, ordered by page number.
#[must_use]
pub fn article_index(pages: &[Page]) -> Vec<ArticleIndexEntry> {
    let mut candidates: Vec<&Page> = pages
        .iter()
        .filter(|p| p.kind == PageKind::Article)
        .filter(|p| p.title.as_deref().is_some_and(|t| !t.is_empty()))
        .collect();
    candidates.sort_by_key(|p| p.number);

    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for page in candidates {
        let Some(title) = page.title.as_deref() else {
            continue;
        };
        if seen.insert(title) {
            out.push(ArticleIndexEntry {
                number: page.number,
                title: title.into(),
            });
        }
    }
    out
}
