// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::article::{ArticleIndexEntry, article_index};
use crate::label::{SpreadLabel, parse_page_number};
use crate::page::{Page, PageNumber};

/// A page number that can be navigated to on its own.
pub type Step = PageNumber;

/// Page numbers shown together for one step: one or two entries.
pub type SpreadPages = SmallVec<[PageNumber; 2]>;

/// Direction of travel through the step sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the cover.
    Prev,
    /// Toward the back cover.
    Next,
}

/// Step and label model over an ordered page list.
///
/// The step sequence is `0`, then every odd page number below the last page,
/// then the last page number if it is not already included. Every query is
/// total: a number that is not a step yields `None` or an empty result.
#[derive(Clone, Debug, Default)]
pub struct Pagination {
    pages: Vec<Page>,
    steps: Vec<Step>,
}

impl Pagination {
    /// Builds the model from `pages`, sorting them by page number.
    #[must_use]
    pub fn new(mut pages: Vec<Page>) -> Self {
        pages.sort_by_key(|p| p.number);
        let steps = compute_steps(&pages);
        Self { pages, steps }
    }

    /// Pages in ascending page-number order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The navigable steps, strictly increasing.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` when there is nothing to navigate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the page with the given number.
    #[must_use]
    pub fn page(&self, number: PageNumber) -> Option<&Page> {
        self.pages
            .binary_search_by_key(&number, |p| p.number)
            .ok()
            .map(|idx| &self.pages[idx])
    }

    /// Returns `true` if `step` is in the step sequence.
    #[must_use]
    pub fn is_step(&self, step: Step) -> bool {
        self.index_of(step).is_some()
    }

    /// The first step (always `0` for a non-empty document).
    #[must_use]
    pub fn first_step(&self) -> Option<Step> {
        self.steps.first().copied()
    }

    /// The final step.
    #[must_use]
    pub fn last_step(&self) -> Option<Step> {
        self.steps.last().copied()
    }

    /// 1-based position of `step` in the sequence.
    #[must_use]
    pub fn position(&self, step: Step) -> Option<usize> {
        self.index_of(step).map(|idx| idx + 1)
    }

    /// The step after `step`.
    #[must_use]
    pub fn next_step(&self, step: Step) -> Option<Step> {
        let idx = self.index_of(step)?;
        self.steps.get(idx + 1).copied()
    }

    /// The step before `step`.
    #[must_use]
    pub fn prev_step(&self, step: Step) -> Option<Step> {
        let idx = self.index_of(step)?;
        idx.checked_sub(1).map(|prev| self.steps[prev])
    }

    /// The neighbor of `step` in `direction`.
    #[must_use]
    pub fn neighbor(&self, step: Step, direction: Direction) -> Option<Step> {
        match direction {
            Direction::Prev => self.prev_step(step),
            Direction::Next => self.next_step(step),
        }
    }

    /// Page numbers rendered for `step`.
    ///
    /// The cover and the final step are shown alone. Any other step is shown
    /// with its right-hand neighbor when that page exists.
    #[must_use]
    pub fn page_numbers_for_step(&self, step: Step) -> SpreadPages {
        let mut out = SpreadPages::new();
        if !self.is_step(step) {
            return out;
        }
        out.push(step);
        if step == 0 || Some(step) == self.last_page_number() {
            return out;
        }
        let right = step + 1;
        if self.page(right).is_some() {
            out.push(right);
        }
        out
    }

    /// The canonical label for `step`.
    #[must_use]
    pub fn label(&self, step: Step) -> Option<SpreadLabel> {
        if !self.is_step(step) {
            return None;
        }
        if step == 0 {
            return Some(SpreadLabel::single(0));
        }
        if Some(step) == self.last_step() && !self.is_step(step + 1) {
            return Some(SpreadLabel::single(step));
        }
        Some(SpreadLabel::pair(step))
    }

    /// Parses label text into a step.
    ///
    /// Accepted forms:
    /// - `"0"`;
    /// - `"<a>_<b>"` where `a` is a step (`b` is ignored);
    /// - a bare number equal to the last step;
    /// - a bare even number, normalized to the odd step before it;
    /// - a bare number that is itself a step.
    ///
    /// Anything else is rejected. Use [`Pagination::canonicalize`] to learn
    /// whether the text is already the canonical label.
    #[must_use]
    pub fn parse_label(&self, text: &str) -> Option<Step> {
        if text.is_empty() || self.steps.is_empty() {
            return None;
        }
        if text == "0" {
            return Some(0);
        }
        if let Some((left, _)) = text.split_once('_') {
            let first = parse_page_number(left)?;
            return self.is_step(first).then_some(first);
        }
        let n = parse_page_number(text)?;
        if Some(n) == self.last_step() {
            return Some(n);
        }
        if n > 0 && n % 2 == 0 {
            let start = n - 1;
            return self.is_step(start).then_some(start);
        }
        self.is_step(n).then_some(n)
    }

    /// Parses `text` and returns the step along with its canonical label.
    ///
    /// When the returned label differs from `text`, callers that expose
    /// addressable locations should redirect to it.
    #[must_use]
    pub fn canonicalize(&self, text: &str) -> Option<(Step, SpreadLabel)> {
        let step = self.parse_label(text)?;
        let label = self.label(step)?;
        Some((step, label))
    }

    /// Article table of contents.
    #[must_use]
    pub fn article_index(&self) -> Vec<ArticleIndexEntry> {
        article_index(&self.pages)
    }

    fn last_page_number(&self) -> Option<PageNumber> {
        self.pages.last().map(|p| p.number)
    }

    fn index_of(&self, step: Step) -> Option<usize> {
        self.steps.binary_search(&step).ok()
    }
}

fn compute_steps(sorted: &[Page]) -> Vec<Step> {
    let Some(last) = sorted.last() else {
        return Vec::new();
    };
    let mut steps = Vec::with_capacity(sorted.len() / 2 + 2);
    steps.push(0);
    let mut i = 1;
    while i + 1 < sorted.len() {
        steps.push(sorted[i].number);
        i += 2;
    }
    if last.number != 0 && steps.last() != Some(&last.number) {
        steps.push(last.number);
    }
    steps
}
