// SPDX-License-Identifier: MPL-2.0
//! Thumbnail synchronizer: mirrors the selection onto the thumbnail strip.
//!
//! Syncing a thumbnail always runs the same sequence: clear the current
//! marker, set it on the target, then scroll the strip if and only if the
//! target is not fully visible.

use super::registry::Registry;
use crate::application::port::{ScrollRequest, ThumbnailStrip};
use crate::config::ScrollStrategy;
use crate::domain::gallery::{MediaId, VisibilityThreshold};
use crate::error::GalleryIssue;

/// What a sync did to the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncOutcome {
    /// The thumbnail was already fully visible.
    AlreadyVisible,
    /// The strip was asked to scroll.
    Scrolled(ScrollRequest),
    /// The thumbnail is hidden but the strip reported no geometry for it.
    NotLaidOut,
}

#[derive(Debug, Clone, Default)]
pub struct ThumbnailSync {
    current: Option<MediaId>,
    threshold: VisibilityThreshold,
    strategy: ScrollStrategy,
}

impl ThumbnailSync {
    #[must_use]
    pub fn new(threshold: VisibilityThreshold, strategy: ScrollStrategy) -> Self {
        Self {
            current: None,
            threshold,
            strategy,
        }
    }

    /// Target of the thumbnail currently marked as current.
    #[must_use]
    pub fn current(&self) -> Option<&MediaId> {
        self.current.as_ref()
    }

    /// Marks a thumbnail current without scrolling, used for the state the
    /// page was rendered in.
    pub fn restore(&mut self, registry: &Registry, strip: &mut dyn ThumbnailStrip, media_id: &MediaId) {
        if registry.thumbnail_for(media_id).is_some() {
            self.current = Some(media_id.clone());
            strip.set_current(media_id);
        }
    }

    /// Marks the thumbnail targeting `media_id` current and scrolls it into
    /// view when needed.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryIssue::MissingThumbnailMatch`] when no thumbnail
    /// mirrors the item; the current marker is left untouched in that case.
    pub fn set_active_thumbnail(
        &mut self,
        registry: &Registry,
        strip: &mut dyn ThumbnailStrip,
        media_id: &MediaId,
    ) -> Result<SyncOutcome, GalleryIssue> {
        if registry.thumbnail_for(media_id).is_none() {
            return Err(GalleryIssue::MissingThumbnailMatch(media_id.clone()));
        }

        // A single slot: replacing it clears the marker from every other thumbnail.
        self.current = Some(media_id.clone());
        strip.set_current(media_id);

        if strip.is_slide_visible(media_id, self.threshold.value()) {
            return Ok(SyncOutcome::AlreadyVisible);
        }

        let Some(span) = strip.slide_span(media_id) else {
            tracing::debug!(media_id = %media_id, "Thumbnail has no layout, skipping scroll");
            return Ok(SyncOutcome::NotLaidOut);
        };

        let request = match self.strategy {
            ScrollStrategy::AlignLeadingEdge => ScrollRequest::To { left: span.left },
            ScrollStrategy::ExactOffset => ScrollRequest::By {
                dx: span.left - strip.visible_span().left,
            },
        };
        strip.scroll(request);
        Ok(SyncOutcome::Scrolled(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::Span;
    use crate::markup::{GalleryMarkup, MediaNode, ThumbnailNode};

    /// Strip of fixed-width thumbnails laid out in markup order.
    struct FakeStrip {
        ids: Vec<MediaId>,
        width: f32,
        scroll_left: f32,
        requests: Vec<ScrollRequest>,
        marked: Option<MediaId>,
    }

    impl FakeStrip {
        fn new(ids: &[&str], width: f32) -> Self {
            Self {
                ids: ids.iter().map(|id| MediaId::from(*id)).collect(),
                width,
                scroll_left: 0.0,
                requests: Vec::new(),
                marked: None,
            }
        }
    }

    impl ThumbnailStrip for FakeStrip {
        fn slide_span(&self, media_id: &MediaId) -> Option<Span> {
            self.ids
                .iter()
                .position(|id| id == media_id)
                .map(|index| Span::new(index as f32 * 100.0, 100.0))
        }

        fn visible_span(&self) -> Span {
            Span::new(self.scroll_left, self.width)
        }

        fn scroll(&mut self, request: ScrollRequest) {
            match request {
                ScrollRequest::To { left } => self.scroll_left = left,
                ScrollRequest::By { dx } => self.scroll_left += dx,
            }
            self.requests.push(request);
        }

        fn set_current(&mut self, media_id: &MediaId) {
            self.marked = Some(media_id.clone());
        }

        fn move_to_front(&mut self, media_id: &MediaId) {
            if let Some(index) = self.ids.iter().position(|id| id == media_id) {
                let id = self.ids.remove(index);
                self.ids.insert(0, id);
            }
        }
    }

    fn registry(with_thumbnails: &[&str]) -> Registry {
        let markup = GalleryMarkup::new(
            vec![
                MediaNode::new("a"),
                MediaNode::new("b"),
                MediaNode::new("c"),
                MediaNode::new("d"),
            ],
            with_thumbnails
                .iter()
                .enumerate()
                .map(|(i, id)| ThumbnailNode::new(*id, (i + 1).to_string()))
                .collect(),
        );
        Registry::from_markup(&markup).expect("valid markup")
    }

    #[test]
    fn visible_thumbnail_is_marked_without_scrolling() {
        let registry = registry(&["a", "b", "c", "d"]);
        let mut strip = FakeStrip::new(&["a", "b", "c", "d"], 250.0);
        let mut sync = ThumbnailSync::default();

        let outcome = sync
            .set_active_thumbnail(&registry, &mut strip, &MediaId::from("b"))
            .expect("thumbnail exists");

        assert_eq!(outcome, SyncOutcome::AlreadyVisible);
        assert_eq!(sync.current(), Some(&MediaId::from("b")));
        assert_eq!(strip.marked, Some(MediaId::from("b")));
        assert!(strip.requests.is_empty());
    }

    #[test]
    fn hidden_thumbnail_aligns_to_leading_edge() {
        let registry = registry(&["a", "b", "c", "d"]);
        let mut strip = FakeStrip::new(&["a", "b", "c", "d"], 250.0);
        let mut sync = ThumbnailSync::default();

        let outcome = sync
            .set_active_thumbnail(&registry, &mut strip, &MediaId::from("d"))
            .expect("thumbnail exists");

        assert_eq!(outcome, SyncOutcome::Scrolled(ScrollRequest::To { left: 300.0 }));
        assert_eq!(strip.scroll_left, 300.0);
    }

    #[test]
    fn exact_offset_scrolls_by_distance() {
        let registry = registry(&["a", "b", "c", "d"]);
        let mut strip = FakeStrip::new(&["a", "b", "c", "d"], 250.0);
        strip.scroll_left = 300.0;
        let mut sync = ThumbnailSync::new(VisibilityThreshold::default(), ScrollStrategy::ExactOffset);

        let outcome = sync
            .set_active_thumbnail(&registry, &mut strip, &MediaId::from("a"))
            .expect("thumbnail exists");

        assert_eq!(outcome, SyncOutcome::Scrolled(ScrollRequest::By { dx: -300.0 }));
        assert_eq!(strip.scroll_left, 0.0);
    }

    #[test]
    fn threshold_forces_scroll_near_trailing_edge() {
        let registry = registry(&["a", "b", "c", "d"]);
        // "c" spans 200..300 and the strip shows 0..305: visible, but within
        // the 10px threshold of the trailing edge.
        let mut strip = FakeStrip::new(&["a", "b", "c", "d"], 305.0);
        let mut sync = ThumbnailSync::default();

        let outcome = sync
            .set_active_thumbnail(&registry, &mut strip, &MediaId::from("c"))
            .expect("thumbnail exists");

        assert_eq!(outcome, SyncOutcome::Scrolled(ScrollRequest::To { left: 200.0 }));
    }

    #[test]
    fn missing_thumbnail_keeps_previous_marker() {
        let registry = registry(&["a", "b"]);
        let mut strip = FakeStrip::new(&["a", "b"], 250.0);
        let mut sync = ThumbnailSync::default();
        sync.restore(&registry, &mut strip, &MediaId::from("a"));

        let result = sync.set_active_thumbnail(&registry, &mut strip, &MediaId::from("d"));

        assert_eq!(
            result,
            Err(GalleryIssue::MissingThumbnailMatch(MediaId::from("d")))
        );
        assert_eq!(sync.current(), Some(&MediaId::from("a")));
        assert_eq!(strip.marked, Some(MediaId::from("a")));
    }

    #[test]
    fn unlaid_thumbnail_is_marked_but_not_scrolled() {
        let registry = registry(&["a", "b", "c"]);
        let mut strip = FakeStrip::new(&["a", "b"], 250.0);
        let mut sync = ThumbnailSync::default();

        let outcome = sync
            .set_active_thumbnail(&registry, &mut strip, &MediaId::from("c"))
            .expect("thumbnail exists");

        assert_eq!(outcome, SyncOutcome::NotLaidOut);
        assert_eq!(sync.current(), Some(&MediaId::from("c")));
    }

    #[test]
    fn restore_marks_strip_without_scrolling() {
        let registry = registry(&["a", "b", "c", "d"]);
        let mut strip = FakeStrip::new(&["a", "b", "c", "d"], 250.0);
        let mut sync = ThumbnailSync::default();

        sync.restore(&registry, &mut strip, &MediaId::from("d"));

        assert_eq!(sync.current(), Some(&MediaId::from("d")));
        assert_eq!(strip.marked, Some(MediaId::from("d")));
        assert!(strip.requests.is_empty());
    }
}
