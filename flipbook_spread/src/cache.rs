// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use flipbook_pagination::SpreadLabel;
use hashbrown::HashMap;
use tracing::debug;

use crate::payload::SpreadPayload;

/// Session cache of fetched spreads, keyed by canonical label.
///
/// Unbounded: a flipbook has a few dozen spreads at most and every one that
/// was shown may be turned back to. Payloads are shared, so handing one to a
/// turn animation does not copy it.
#[derive(Clone, Debug, Default)]
pub struct SpreadCache {
    entries: HashMap<SpreadLabel, Arc<SpreadPayload>>,
}

impl SpreadCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached payload for `label`.
    #[must_use]
    pub fn get(&self, label: &SpreadLabel) -> Option<Arc<SpreadPayload>> {
        let hit = self.entries.get(label).cloned();
        debug!(%label, hit = hit.is_some(), "spread cache lookup");
        hit
    }

    /// Stores `payload` under its own label, replacing any previous entry.
    pub fn insert(&mut self, payload: impl Into<Arc<SpreadPayload>>) -> Arc<SpreadPayload> {
        let payload = payload.into();
        self.entries.insert(payload.label.clone(), Arc::clone(&payload));
        payload
    }

    /// Returns `true` if `label` is cached.
    #[must_use]
    pub fn contains(&self, label: &SpreadLabel) -> bool {
        self.entries.contains_key(label)
    }

    /// Number of cached spreads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
