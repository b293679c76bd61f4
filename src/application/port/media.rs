// SPDX-License-Identifier: MPL-2.0
//! Media playback port definitions.
//!
//! Only one media item on a page should play at a time. The gallery enforces
//! this by asking [`MediaPlayback::pause_all_media`] to stop everything before
//! it starts deferred content. The pause is advisory: it only works if every
//! player on the page honors it.

use crate::domain::gallery::{DeferredKind, MediaId};

/// Port for the page-wide "stop every playing media" capability.
pub trait MediaPlayback {
    fn pause_all_media(&mut self);
}

/// Port for deferred content (video embeds, 3D models).
pub trait DeferredMedia {
    /// Starts loading (and playing) the deferred content of an item.
    ///
    /// `focus` mirrors the embed's own option of moving keyboard focus into
    /// the player once it is loaded.
    fn load_content(&mut self, media_id: &MediaId, kind: DeferredKind, focus: bool);
}
