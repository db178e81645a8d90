// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flipbook Spread: the data, query and routing side of a flipbook.
//!
//! - [`Document`]: page and company records, loaded once and validated.
//! - [`Document::spread`]: label to [`SpreadPayload`], the query surface.
//! - [`Document::resolve`]: `/flipbook/<label>` routing with canonical
//!   redirects.
//! - [`SpreadCache`]: payloads already fetched this session.
//! - [`placeholder_paragraphs`] and [`image_url`]: deterministic filler
//!   content seeded by page id.
//! - [`effective_side`] and [`SpreadSides`]: which half of the spread a page
//!   is drawn in.
//!
//! ## Minimal example
//!
//! ```rust
//! use flipbook_spread::{Document, Route};
//!
//! let pages = r#"[
//!     {"id": "cover", "number": 0, "kind": "cover", "side": "cover"},
//!     {"id": "a1", "number": 1, "kind": "article", "side": "left", "title": "Float glass"},
//!     {"id": "a2", "number": 2, "kind": "article", "side": "right"},
//!     {"id": "back", "number": 3, "kind": "backCover", "side": "end"}
//! ]"#;
//! let doc = Document::from_json(pages, "[]").unwrap();
//!
//! let payload = doc.spread("1_2").unwrap();
//! assert_eq!(payload.view_data.len(), 2);
//! assert_eq!(payload.next_label.as_ref().unwrap().as_str(), "3");
//!
//! assert_eq!(doc.resolve("/flipbook/2"), Route::Redirect("/flipbook/1_2".into()));
//! assert_eq!(doc.resolve("/flipbook/9"), Route::NotFound);
//! ```

mod cache;
mod document;
mod image;
mod layout;
mod payload;
mod route;
mod seed;
mod text;

pub use cache::SpreadCache;
pub use document::{Document, LoadError};
pub use image::image_url;
pub use layout::{PAGE_ASPECT_RATIO, Slot, SpreadSides, effective_side};
pub use payload::{PageView, SpreadPayload};
pub use route::{ROUTE_PREFIX, Route, SpreadError, spread_location};
pub use text::{DEFAULT_PARAGRAPHS, placeholder_paragraphs};
