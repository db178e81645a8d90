// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flipbook Pagination: steps and spread labels for two-page documents.
//!
//! A flipbook shows its pages as spreads: the cover alone, then pairs of
//! facing pages, then possibly a lone final page. This crate maps absolute
//! page numbers to the navigable positions ("steps") of that layout and to
//! the URL-safe labels used to address them.
//!
//! - [`Page`] / [`Company`]: immutable records loaded once per document.
//! - [`Pagination`]: the step sequence plus neighbor, label and parse queries.
//! - [`SpreadLabel`]: canonical spread identifier (`"0"`, `"1_2"`, `"15"`).
//! - [`article_index`]: the article table of contents.
//!
//! Every query is total. Numbers that are not steps and text that does not
//! parse produce `None` or an empty result rather than an error.
//!
//! ## Minimal example
//!
//! ```rust
//! use flipbook_pagination::{Page, PageKind, PageSide, Pagination};
//!
//! let pages = (0..16)
//!     .map(|n| Page::new(format!("p{n}"), n, PageKind::Article, PageSide::Left))
//!     .collect();
//! let pagination = Pagination::new(pages);
//!
//! assert_eq!(pagination.steps(), &[0, 1, 3, 5, 7, 9, 11, 13, 15]);
//! assert_eq!(pagination.label(1).unwrap().as_str(), "1_2");
//! assert_eq!(pagination.parse_label("4"), Some(3));
//!
//! // "4" is accepted but is not canonical: redirect to "3_4".
//! let (_, canonical) = pagination.canonicalize("4").unwrap();
//! assert_eq!(canonical.as_str(), "3_4");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod article;
mod label;
mod page;
mod pagination;

pub use article::{ArticleIndexEntry, article_index};
pub use label::SpreadLabel;
pub use page::{Company, Page, PageKind, PageNumber, PageSide};
pub use pagination::{Direction, Pagination, SpreadPages, Step};
