// SPDX-License-Identifier: MPL-2.0
//! Page-wide "currently playing media" slot.
//!
//! Every gallery on a page shares one slot. Starting deferred content claims
//! it, pausing all media empties it. The handle is cheap to clone and meant
//! for the single-threaded event loop the galleries run on.

use crate::application::port::{DeferredMedia, MediaPlayback};
use crate::domain::gallery::{DeferredKind, MediaId};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct SlotState {
    playing: Option<(MediaId, DeferredKind)>,
    pause_requests: usize,
}

/// Shared handle on the playing slot.
#[derive(Debug, Clone, Default)]
pub struct PlaybackSlot {
    state: Rc<RefCell<SlotState>>,
}

impl PlaybackSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Media currently holding the slot.
    #[must_use]
    pub fn playing(&self) -> Option<MediaId> {
        self.state
            .borrow()
            .playing
            .as_ref()
            .map(|(media_id, _)| media_id.clone())
    }

    /// Number of pause-all requests received so far.
    #[must_use]
    pub fn pause_requests(&self) -> usize {
        self.state.borrow().pause_requests
    }
}

impl MediaPlayback for PlaybackSlot {
    fn pause_all_media(&mut self) {
        let mut state = self.state.borrow_mut();
        if let Some((media_id, _)) = state.playing.take() {
            tracing::debug!(media_id = %media_id, "Paused media");
        }
        state.pause_requests += 1;
    }
}

impl DeferredMedia for PlaybackSlot {
    fn load_content(&mut self, media_id: &MediaId, kind: DeferredKind, _focus: bool) {
        let mut state = self.state.borrow_mut();
        if let Some((previous, _)) = &state.playing {
            tracing::warn!(media_id = %previous, "Media still playing while starting another");
        }
        state.playing = Some((media_id.clone(), kind));
    }
}
