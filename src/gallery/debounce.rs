// SPDX-License-Identifier: MPL-2.0
//! Single-slot coalescing buffer for external slide-change notifications.
//!
//! Each notification overwrites the buffered one and restarts the quiet
//! period. When the period elapses, only the latest notification is
//! released; intermediate ones are discarded, not queued.

use crate::domain::gallery::{DebounceDelay, MediaId};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct SlideChangeBuffer {
    delay: DebounceDelay,
    pending: Option<(MediaId, Instant)>,
}

impl SlideChangeBuffer {
    #[must_use]
    pub fn new(delay: DebounceDelay) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Buffers a notification, replacing any pending one.
    pub fn push(&mut self, media_id: MediaId, now: Instant) {
        if let Some((discarded, _)) = &self.pending {
            tracing::trace!(media_id = %discarded, "Coalescing slide change");
        }
        self.pending = Some((media_id, now + self.delay.as_duration()));
    }

    /// When the buffered notification becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Releases the buffered notification once its quiet period is over.
    pub fn poll(&mut self, now: Instant) -> Option<MediaId> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(id, _)| id),
            _ => None,
        }
    }
}
