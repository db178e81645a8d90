// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! URL-safe spread labels.

use alloc::string::{String, ToString};
use core::fmt;

use crate::page::PageNumber;

/// Canonical identifier of a spread, used in addressable locations.
///
/// Labels take one of three shapes:
/// - `"0"` for the cover,
/// - `"<n>"` for an unpaired final step,
/// - `"<n>_<n+1>"` for a two-page spread.
///
/// A `SpreadLabel` is only ever produced by [`crate::Pagination::label`] or
/// [`crate::Pagination::canonicalize`], so holding one means it was valid for
/// the pagination that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpreadLabel(String);

impl SpreadLabel {
    pub(crate) fn single(step: PageNumber) -> Self {
        Self(step.to_string())
    }

    pub(crate) fn pair(step: PageNumber) -> Self {
        Self(alloc::format!("{step}_{}", step + 1))
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the label, returning the owned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SpreadLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SpreadLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SpreadLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SpreadLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Parses a non-empty run of ASCII digits.
///
/// Signs, whitespace and trailing garbage are rejected.
pub(crate) fn parse_page_number(text: &str) -> Option<PageNumber> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
