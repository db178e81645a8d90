// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;

/// Handle to one outstanding per-frame callback.
///
/// Tokens are never reused within a [`FrameRequests`] registry, so a stale
/// token held by a superseded animation can never cancel a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

impl FrameToken {
    /// Raw id, for hosts that map tokens onto their own callback handles.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Registry of outstanding frame requests.
///
/// Each running animation stores the token it was given. Starting a
/// replacement cancels the old token; tearing down a component cancels every
/// token so no stale update can land afterwards.
#[derive(Debug, Default)]
pub struct FrameRequests {
    next: u64,
    pending: HashSet<FrameToken>,
}

impl FrameRequests {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new pending token.
    pub fn request(&mut self) -> FrameToken {
        let token = FrameToken(self.next);
        self.next += 1;
        self.pending.insert(token);
        token
    }

    /// Cancels `token`. Returns `true` if it was still pending.
    pub fn cancel(&mut self, token: FrameToken) -> bool {
        self.pending.remove(&token)
    }

    /// Marks `token` as delivered.
    ///
    /// Returns `true` if it was still pending. `false` means the callback
    /// belongs to a cancelled or already delivered request and must be
    /// ignored.
    pub fn complete(&mut self, token: FrameToken) -> bool {
        self.pending.remove(&token)
    }

    /// Cancels `slot`'s token, if any, and clears the slot.
    pub fn cancel_slot(&mut self, slot: &mut Option<FrameToken>) -> Option<FrameToken> {
        let token = slot.take()?;
        self.cancel(token).then_some(token)
    }

    /// Cancels every pending token.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Returns `true` if `token` has been issued and not cancelled.
    #[must_use]
    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.pending.contains(&token)
    }

    /// Number of pending tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::FrameRequests;

    #[test]
    fn tokens_are_unique_and_cancellable() {
        let mut frames = FrameRequests::new();
        let a = frames.request();
        let b = frames.request();
        assert_ne!(a, b);
        assert_eq!(frames.len(), 2);

        assert!(frames.cancel(a));
        assert!(!frames.cancel(a));
        assert!(!frames.is_pending(a));
        assert!(frames.is_pending(b));
    }

    #[test]
    fn cancel_slot_clears_the_slot() {
        let mut frames = FrameRequests::new();
        let mut slot = Some(frames.request());
        let cancelled = frames.cancel_slot(&mut slot);
        assert!(cancelled.is_some());
        assert!(slot.is_none());
        assert!(frames.is_empty());
        assert_eq!(frames.cancel_slot(&mut slot), None);
    }

    #[test]
    fn delivered_tokens_are_not_delivered_twice() {
        let mut frames = FrameRequests::new();
        let token = frames.request();
        assert!(frames.complete(token));
        assert!(!frames.complete(token));

        let cancelled = frames.request();
        frames.cancel(cancelled);
        assert!(!frames.complete(cancelled));
    }

    #[test]
    fn cancel_all_does_not_recycle_ids() {
        let mut frames = FrameRequests::new();
        let old = frames.request();
        frames.cancel_all();
        let fresh = frames.request();
        assert_ne!(old, fresh);
        assert!(!frames.is_pending(old));
    }
}
