// SPDX-License-Identifier: MPL-2.0
//! Selection controller: owns which media item is active.
//!
//! The controller holds the only mutable piece of gallery state, the active
//! identifier. Everything else (the active flag on items, the current
//! thumbnail) is derived from it by the subscribers of a [`Commit`].

use super::registry::Registry;
use crate::domain::gallery::MediaId;
use crate::error::GalleryIssue;

/// Gallery state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryState {
    /// Nothing selected yet.
    #[default]
    Idle,
    /// One item is active.
    Active(MediaId),
}

/// Outcome of a successful selection, handed to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The item that is now active.
    pub media_id: MediaId,
    /// The identifier the caller asked for.
    pub requested: MediaId,
    /// Ordinal of the active item in viewer order, after any reordering.
    pub ordinal: usize,
    /// Whether the item was moved to the front of its container.
    pub prepended: bool,
}

impl Commit {
    /// Whether the requested identifier was unknown and the first item was
    /// selected instead.
    #[must_use]
    pub fn fell_back(&self) -> bool {
        self.media_id != self.requested
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: GalleryState,
}

impl SelectionController {
    /// Creates a controller, already active when the markup marked an item.
    #[must_use]
    pub fn new(initial: Option<MediaId>) -> Self {
        Self {
            state: initial.map_or(GalleryState::Idle, GalleryState::Active),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    #[must_use]
    pub fn active(&self) -> Option<&MediaId> {
        match &self.state {
            GalleryState::Idle => None,
            GalleryState::Active(media_id) => Some(media_id),
        }
    }

    /// Makes `requested` the active item.
    ///
    /// Unknown identifiers fall back to the first registered item. With
    /// `prepend`, the resolved item and its thumbnail are moved to the front
    /// of their containers. Returns `None` only when no item is registered.
    pub fn set_active(
        &mut self,
        registry: &mut Registry,
        requested: &MediaId,
        prepend: bool,
    ) -> Option<Commit> {
        let media_id = if registry.contains(requested) {
            requested.clone()
        } else {
            let first = registry.first()?.clone();
            GalleryIssue::UnresolvedTarget(requested.clone()).report();
            first
        };

        if prepend {
            registry.move_to_front(&media_id);
        }

        let ordinal = registry.position(&media_id)?;
        self.state = GalleryState::Active(media_id.clone());
        tracing::debug!(media_id = %media_id, ordinal, prepend, "Committed active media");

        Some(Commit {
            media_id,
            requested: requested.clone(),
            ordinal,
            prepended: prepend,
        })
    }
}
