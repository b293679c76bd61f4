// SPDX-License-Identifier: MPL-2.0
//! Side-effect dispatcher: the non-visual consequences of a commit.
//!
//! For each commit, in order:
//!
//! 1. pause every playing media on the page
//! 2. start the new item's deferred content, if it has any
//! 3. suppress the sticky header's next reveal
//! 4. queue an accessibility announcement, emitted once the item's primary
//!    image reports that it finished loading
//!
//! Announcements are hidden again after a fixed delay. Clear timers are
//! never cancelled, so a clear scheduled by an earlier announcement can hide
//! a newer one early.

use super::collaborators::Collaborators;
use super::registry::Registry;
use super::selection::Commit;
use crate::application::port::LiveRegion;
use crate::domain::gallery::{AnnouncementDelay, MediaId};
use std::collections::HashMap;
use std::time::Instant;

/// Pending and scheduled live-region updates.
#[derive(Debug, Clone, Default)]
pub struct Announcer {
    delay: AnnouncementDelay,
    /// Announcement text per item, waiting for the primary image load.
    pending: HashMap<MediaId, String>,
    /// Scheduled hides.
    clear_at: Vec<Instant>,
}

impl Announcer {
    #[must_use]
    pub fn new(delay: AnnouncementDelay) -> Self {
        Self {
            delay,
            pending: HashMap::new(),
            clear_at: Vec::new(),
        }
    }

    /// Queues `text` until the item's primary image has loaded. A newer
    /// request for the same item replaces the older one.
    pub fn request(&mut self, media_id: MediaId, text: String) {
        self.pending.insert(media_id, text);
    }

    /// Emits the pending announcement of an item whose image just loaded.
    ///
    /// Returns `true` if something was announced.
    pub fn on_image_loaded(
        &mut self,
        media_id: &MediaId,
        live_region: &mut dyn LiveRegion,
        now: Instant,
    ) -> bool {
        let Some(text) = self.pending.remove(media_id) else {
            return false;
        };
        live_region.announce(&text);
        self.clear_at.push(now + self.delay.as_duration());
        true
    }

    /// Hides the live region for every clear timer that is due.
    pub fn tick(&mut self, now: Instant, live_region: &mut dyn LiveRegion) {
        let before = self.clear_at.len();
        self.clear_at.retain(|deadline| *deadline > now);
        for _ in self.clear_at.len()..before {
            live_region.hide();
        }
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.clear_at.iter().min().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SideEffectDispatcher {
    announcer: Announcer,
}

impl SideEffectDispatcher {
    #[must_use]
    pub fn new(delay: AnnouncementDelay) -> Self {
        Self {
            announcer: Announcer::new(delay),
        }
    }

    /// Runs the side effects of one commit.
    pub fn dispatch(&mut self, commit: &Commit, registry: &Registry, ports: &mut Collaborators) {
        let Some(item) = registry.get(&commit.media_id) else {
            return;
        };

        ports.playback.pause_all_media();
        if let Some(kind) = item.deferred() {
            ports.deferred.load_content(item.id(), kind, false);
        }

        if let Some(header) = ports.sticky_header.as_mut() {
            header.prevent_reveal();
        }

        if ports.live_region.is_none() || !item.has_primary_image() {
            return;
        }
        // Announcements carry the thumbnail's position label.
        let Some(thumbnail) = registry.thumbnail_for(item.id()) else {
            return;
        };
        let text = ports.strings.image_available(thumbnail.position());
        self.announcer.request(item.id().clone(), text);
        ports.viewer.reload_primary_image(item.id());
    }

    /// Forwards an image load completion to the announcer.
    pub fn image_loaded(&mut self, media_id: &MediaId, ports: &mut Collaborators, now: Instant) {
        if let Some(live_region) = ports.live_region.as_mut() {
            self.announcer
                .on_image_loaded(media_id, live_region.as_mut(), now);
        }
    }

    pub fn tick(&mut self, now: Instant, ports: &mut Collaborators) {
        if let Some(live_region) = ports.live_region.as_mut() {
            self.announcer.tick(now, live_region.as_mut());
        }
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.announcer.next_deadline()
    }
}
