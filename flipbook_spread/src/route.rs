// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_pagination::{PageKind, SpreadLabel, Step};
use tracing::debug;

use crate::document::Document;
use crate::payload::{PageView, SpreadPayload};
use crate::text::{DEFAULT_PARAGRAPHS, placeholder_paragraphs};

/// Path prefix of spread locations.
pub const ROUTE_PREFIX: &str = "/flipbook/";

/// The routable location of a spread.
#[must_use]
pub fn spread_location(label: &SpreadLabel) -> String {
    format!("{ROUTE_PREFIX}{label}")
}

/// Why a spread query failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpreadError {
    /// The label does not name a spread of this document.
    #[error("no spread is labelled {0:?}")]
    NotFound(String),
}

/// Outcome of routing a `/flipbook/<label>` path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The path is canonical; render this spread.
    Show(Box<SpreadPayload>),
    /// The label is valid but not canonical; go to this location instead.
    Redirect(String),
    /// Nothing lives here.
    NotFound,
}

impl Document {
    /// Query surface: the payload for the spread named by `label`.
    ///
    /// Non-canonical labels that parse (`"4"` for `"3_4"`) are served as the
    /// spread they resolve to.
    pub fn spread(&self, label: &str) -> Result<SpreadPayload, SpreadError> {
        self.pagination()
            .parse_label(label)
            .and_then(|step| self.payload(step))
            .ok_or_else(|| SpreadError::NotFound(label.into()))
    }

    /// The payload for `step`, or `None` if it is not a step.
    #[must_use]
    pub fn payload(&self, step: Step) -> Option<SpreadPayload> {
        let pagination = self.pagination();
        let label = pagination.label(step)?;
        let position = pagination.position(step)?;
        let first_label = pagination.label(pagination.first_step()?)?;
        let last_label = pagination.label(pagination.last_step()?)?;

        let view_data = pagination
            .page_numbers_for_step(step)
            .iter()
            .filter_map(|&n| pagination.page(n))
            .map(|page| PageView {
                page: page.clone(),
                company: self.company_for(page).cloned(),
                paragraphs: if page.kind == PageKind::Cover {
                    Vec::new()
                } else {
                    placeholder_paragraphs(&page.id, DEFAULT_PARAGRAPHS)
                },
            })
            .collect();

        Some(SpreadPayload {
            view_data,
            article_index: pagination.article_index(),
            prev_label: pagination.prev_step(step).and_then(|s| pagination.label(s)),
            next_label: pagination.next_step(step).and_then(|s| pagination.label(s)),
            label,
            step,
            position,
            total_steps: pagination.len(),
            first_label,
            last_label,
        })
    }

    /// Routing surface for `/flipbook/<label>`.
    ///
    /// A trailing slash is tolerated. Valid labels that are not canonical
    /// redirect to the canonical location.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Route {
        let Some(param) = path.strip_prefix(ROUTE_PREFIX) else {
            return Route::NotFound;
        };
        let param = param.strip_suffix('/').unwrap_or(param);
        let Some((step, canonical)) = self.pagination().canonicalize(param) else {
            debug!(path, "no spread for path");
            return Route::NotFound;
        };
        if canonical != param {
            let location = spread_location(&canonical);
            debug!(from = param, to = %location, "redirecting to canonical label");
            return Route::Redirect(location);
        }
        match self.payload(step) {
            Some(payload) => Route::Show(Box::new(payload)),
            None => Route::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use flipbook_pagination::{Direction, Page, PageKind, PageSide};

    use super::{Route, SpreadError, spread_location};
    use crate::document::Document;

    fn document() -> Document {
        let pages = (0..16)
            .map(|n| {
                let (kind, side) = match n {
                    0 => (PageKind::Cover, PageSide::Cover),
                    15 => (PageKind::BackCover, PageSide::End),
                    n if n % 2 == 1 => (PageKind::Article, PageSide::Left),
                    _ => (PageKind::Article, PageSide::Right),
                };
                Page::new(format!("p{n}"), n, kind, side).with_title(format!("Story {}", n / 4))
            })
            .collect();
        Document::new(pages, vec![]).unwrap()
    }

    #[test]
    fn cover_payload() {
        let doc = document();
        let payload = doc.spread("0").unwrap();
        assert_eq!(payload.label, "0");
        assert_eq!(payload.position, 1);
        assert_eq!(payload.total_steps, 9);
        assert_eq!(payload.prev_label, None);
        assert_eq!(payload.neighbor(Direction::Next).map(|l| l.as_str()), Some("1_2"));
        assert_eq!(payload.view_data.len(), 1);
        assert!(payload.view_data[0].paragraphs.is_empty());
        assert!(payload.is_first());
        assert_eq!(payload.last_label, "15");
    }

    #[test]
    fn middle_payload_has_two_pages_with_text() {
        let doc = document();
        let payload = doc.spread("4").unwrap();
        assert_eq!(payload.label, "3_4");
        assert_eq!(payload.step, 3);
        let numbers: Vec<u32> = payload.view_data.iter().map(|v| v.page.number).collect();
        assert_eq!(numbers, [3, 4]);
        assert!(payload.view_data.iter().all(|v| v.paragraphs.len() == 3));
        assert_eq!(payload.prev_label.as_ref().map(|l| l.as_str()), Some("1_2"));
        assert_eq!(payload.next_label.as_ref().map(|l| l.as_str()), Some("5_6"));
        let sides = payload.sides();
        assert_eq!(sides.left.map(|v| v.page.number), Some(3));
        assert_eq!(sides.right.map(|v| v.page.number), Some(4));
    }

    #[test]
    fn unknown_labels_are_not_found() {
        let doc = document();
        for label in ["", "x", "-1", "2_3", "100", "16_17"] {
            assert_eq!(
                doc.spread(label),
                Err(SpreadError::NotFound(label.into())),
                "{label:?}"
            );
        }
    }

    #[test]
    fn routing() {
        let doc = document();
        assert_eq!(doc.resolve("/flipbook/2"), Route::Redirect("/flipbook/1_2".into()));
        assert_eq!(doc.resolve("/flipbook/3"), Route::Redirect("/flipbook/3_4".into()));
        assert_eq!(doc.resolve("/flipbook/nope"), Route::NotFound);
        assert_eq!(doc.resolve("/elsewhere/1_2"), Route::NotFound);
        match doc.resolve("/flipbook/15/") {
            Route::Show(payload) => {
                assert_eq!(payload.label, "15");
                assert!(payload.is_last());
                assert_eq!(payload.next_label, None);
            }
            other => panic!("expected a spread, got {other:?}"),
        }
    }

    #[test]
    fn location_format() {
        let doc = document();
        let label = doc.pagination().label(13).unwrap();
        assert_eq!(spread_location(&label), "/flipbook/13_14");
    }
}
