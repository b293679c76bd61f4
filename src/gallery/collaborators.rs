// SPDX-License-Identifier: MPL-2.0
//! The set of collaborators a gallery is mounted with.

use crate::application::port::{
    DeferredMedia, LiveRegion, MediaPlayback, StickyHeader, ThumbnailStrip, ViewerSurface,
};
use crate::i18n::{AccessibilityStrings, TemplateStrings};

/// Handles to everything outside the gallery that it drives.
///
/// The sticky header and the live region are optional on a page; the gallery
/// skips the related side effects when they are absent.
pub struct Collaborators {
    pub viewer: Box<dyn ViewerSurface>,
    pub thumbnails: Box<dyn ThumbnailStrip>,
    pub playback: Box<dyn MediaPlayback>,
    pub deferred: Box<dyn DeferredMedia>,
    pub sticky_header: Option<Box<dyn StickyHeader>>,
    pub live_region: Option<Box<dyn LiveRegion>>,
    pub strings: Box<dyn AccessibilityStrings>,
}

impl Collaborators {
    /// Bundles the required collaborators; optional ones start absent and
    /// the default announcement template is used.
    pub fn new(
        viewer: impl ViewerSurface + 'static,
        thumbnails: impl ThumbnailStrip + 'static,
        playback: impl MediaPlayback + 'static,
        deferred: impl DeferredMedia + 'static,
    ) -> Self {
        Self {
            viewer: Box::new(viewer),
            thumbnails: Box::new(thumbnails),
            playback: Box::new(playback),
            deferred: Box::new(deferred),
            sticky_header: None,
            live_region: None,
            strings: Box::new(TemplateStrings::default()),
        }
    }

    #[must_use]
    pub fn with_sticky_header(mut self, header: impl StickyHeader + 'static) -> Self {
        self.sticky_header = Some(Box::new(header));
        self
    }

    #[must_use]
    pub fn with_live_region(mut self, region: impl LiveRegion + 'static) -> Self {
        self.live_region = Some(Box::new(region));
        self
    }

    #[must_use]
    pub fn with_strings(mut self, strings: impl AccessibilityStrings + 'static) -> Self {
        self.strings = Box::new(strings);
        self
    }
}
