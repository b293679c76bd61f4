// SPDX-License-Identifier: MPL-2.0
//! Thumbnail strip port definition.
//!
//! The strip exposes its geometry in content coordinates: a slide's span is
//! its offset inside the scrollable content, the visible span is the current
//! scroll position plus the strip's client width.

use crate::domain::gallery::{MediaId, Span};

/// A scroll instruction for the thumbnail strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    /// Scroll so that the content offset `left` sits at the leading edge.
    To { left: f32 },
    /// Scroll by a relative horizontal distance.
    By { dx: f32 },
}

/// Port for the scrollable thumbnail strip.
pub trait ThumbnailStrip {
    /// Span of the thumbnail targeting `media_id`, if it is laid out.
    fn slide_span(&self, media_id: &MediaId) -> Option<Span>;

    /// Currently visible span of the strip.
    fn visible_span(&self) -> Span;

    /// Whether the thumbnail lies fully inside the visible span, with the
    /// trailing edge pulled in by `threshold` pixels.
    fn is_slide_visible(&self, media_id: &MediaId, threshold: f32) -> bool {
        self.slide_span(media_id)
            .is_some_and(|span| span.fits_within(self.visible_span(), threshold))
    }

    /// Applies a scroll instruction.
    fn scroll(&mut self, request: ScrollRequest);

    /// Marks the thumbnail targeting `media_id` as current and clears the
    /// marker from every other thumbnail.
    fn set_current(&mut self, media_id: &MediaId);

    /// Moves the thumbnail targeting `media_id` to the front of the strip.
    fn move_to_front(&mut self, media_id: &MediaId);
}
