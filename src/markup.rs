// SPDX-License-Identifier: MPL-2.0
//! Gallery markup snapshot.
//!
//! The gallery is built once from a snapshot of the page's initial markup:
//! the viewer's media nodes (each carrying a media identifier) and the
//! thumbnail strip's nodes (each carrying the identifier it targets and a
//! position label). Hosts either build the snapshot in code or load it from
//! TOML:
//!
//! ```toml
//! desktop_layout = "thumbnail_slider"
//!
//! [[viewer.items]]
//! media_id = "m1"
//! active = true
//!
//! [[viewer.items]]
//! media_id = "m2"
//! deferred = "video"
//!
//! [[thumbnails.items]]
//! target = "m1"
//! position = "1"
//! ```

use crate::domain::gallery::DeferredKind;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeferredMarkup {
    Video,
    Model,
}

impl From<DeferredMarkup> for DeferredKind {
    fn from(kind: DeferredMarkup) -> Self {
        match kind {
            DeferredMarkup::Video => DeferredKind::Video,
            DeferredMarkup::Model => DeferredKind::Model,
        }
    }
}

/// A node inside the viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaNode {
    /// Media identifier attribute. Nodes without one are not media items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    /// Whether the node is rendered as the active item.
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deferred: Option<DeferredMarkup>,
    #[serde(default = "default_primary_image")]
    pub primary_image: bool,
}

impl MediaNode {
    #[must_use]
    pub fn new(media_id: impl Into<String>) -> Self {
        Self {
            media_id: Some(media_id.into()),
            active: false,
            deferred: None,
            primary_image: true,
        }
    }

    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    #[must_use]
    pub fn deferred(mut self, kind: DeferredMarkup) -> Self {
        self.deferred = Some(kind);
        self
    }

    #[must_use]
    pub fn without_primary_image(mut self) -> Self {
        self.primary_image = false;
        self
    }
}

fn default_primary_image() -> bool {
    true
}

/// A node inside the thumbnail strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThumbnailNode {
    /// Identifier of the media item the thumbnail selects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Position label, 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl ThumbnailNode {
    #[must_use]
    pub fn new(target: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            position: Some(position.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ViewerMarkup {
    #[serde(default)]
    pub items: Vec<MediaNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ThumbnailStripMarkup {
    #[serde(default)]
    pub items: Vec<ThumbnailNode>,
}

/// Snapshot of the gallery's initial markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GalleryMarkup {
    /// Desktop layout mode attribute of the gallery element.
    #[serde(default)]
    pub desktop_layout: String,
    /// Viewer root; `None` when the page has no viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<ViewerMarkup>,
    /// Thumbnail strip root; `None` when the page has no strip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailStripMarkup>,
}

impl GalleryMarkup {
    /// Builds a snapshot with both roots present.
    #[must_use]
    pub fn new(items: Vec<MediaNode>, thumbnails: Vec<ThumbnailNode>) -> Self {
        Self {
            desktop_layout: String::new(),
            viewer: Some(ViewerMarkup { items }),
            thumbnails: Some(ThumbnailStripMarkup { items: thumbnails }),
        }
    }

    #[must_use]
    pub fn with_desktop_layout(mut self, layout: impl Into<String>) -> Self {
        self.desktop_layout = layout.into();
        self
    }

    /// Parses a snapshot from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Markup(err.to_string()))
    }

    /// Loads a snapshot from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
