// SPDX-License-Identifier: MPL-2.0
//! Core gallery value types.

use std::fmt;

/// Unique identifier of a media item, as carried by the viewer markup.
///
/// Thumbnails reference media through the same identifier, which is what
/// ties a thumbnail to exactly one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(String);

impl MediaId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MediaId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of content that only loads once its item is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredKind {
    /// Embedded video player.
    Video,
    /// 3D model viewer.
    Model,
}

/// A media item shown by the viewer.
///
/// Whether the item is active is not stored here: the selection controller
/// owns the single active identifier and everything else is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    id: MediaId,
    deferred: Option<DeferredKind>,
    has_primary_image: bool,
}

impl MediaItem {
    #[must_use]
    pub fn new(id: impl Into<MediaId>) -> Self {
        Self {
            id: id.into(),
            deferred: None,
            has_primary_image: true,
        }
    }

    /// Marks the item as embedding deferred content.
    #[must_use]
    pub fn with_deferred(mut self, kind: DeferredKind) -> Self {
        self.deferred = Some(kind);
        self
    }

    /// Sets whether the item carries a primary image (the one whose load
    /// completion triggers the accessibility announcement).
    #[must_use]
    pub fn with_primary_image(mut self, present: bool) -> Self {
        self.has_primary_image = present;
        self
    }

    #[must_use]
    pub fn id(&self) -> &MediaId {
        &self.id
    }

    #[must_use]
    pub fn deferred(&self) -> Option<DeferredKind> {
        self.deferred
    }

    #[must_use]
    pub fn has_primary_image(&self) -> bool {
        self.has_primary_image
    }
}

/// A thumbnail button mirroring one media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    target: MediaId,
    position: String,
}

impl Thumbnail {
    #[must_use]
    pub fn new(target: impl Into<MediaId>, position: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            position: position.into(),
        }
    }

    /// Identifier of the media item this thumbnail selects.
    #[must_use]
    pub fn target(&self) -> &MediaId {
        &self.target
    }

    /// Position label used in announcements (1-based, as rendered).
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }
}

/// Direction of a prev/next step through the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Forward distance covering one step in a ring of `count` items
    /// (`count` must be non-zero).
    #[must_use]
    pub fn offset(self, count: usize) -> usize {
        match self {
            Direction::Previous => count - 1,
            Direction::Next => 1,
        }
    }
}

/// Horizontal extent in strip content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub left: f32,
    pub width: f32,
}

impl Span {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Whether this span lies fully inside `view`.
    ///
    /// `threshold` shrinks the trailing edge of the view, so an element that
    /// only just touches the end of the strip still counts as hidden.
    #[must_use]
    pub fn fits_within(&self, view: Span, threshold: f32) -> bool {
        self.left >= view.left && self.right() <= view.right() - threshold
    }
}
