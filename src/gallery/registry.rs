// SPDX-License-Identifier: MPL-2.0
//! Media registry built once from the markup snapshot.
//!
//! Every lookup the gallery makes after mount goes through here: media items
//! and their thumbnails are keyed by identifier, and two order vectors keep
//! the viewer and strip orderings (which `prepend` may change).

use crate::domain::gallery::{DeferredKind, MediaId, MediaItem, Thumbnail};
use crate::error::GalleryIssue;
use crate::markup::GalleryMarkup;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry {
    item: MediaItem,
    thumbnail: Option<Thumbnail>,
}

/// Mapping from media identifier to its item and thumbnail.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: HashMap<MediaId, Entry>,
    item_order: Vec<MediaId>,
    thumbnail_order: Vec<MediaId>,
    initial_active: Option<MediaId>,
}

impl Registry {
    /// Builds the registry from the page's initial markup.
    ///
    /// # Errors
    ///
    /// Returns the fatal mount issue when the viewer or thumbnail strip root
    /// is missing, or when the viewer holds no media items.
    pub fn from_markup(markup: &GalleryMarkup) -> Result<Self, GalleryIssue> {
        let viewer = markup
            .viewer
            .as_ref()
            .ok_or(GalleryIssue::MissingElement("viewer"))?;
        let strip = markup
            .thumbnails
            .as_ref()
            .ok_or(GalleryIssue::MissingElement("thumbnails"))?;

        let mut entries = HashMap::new();
        let mut item_order = Vec::new();
        let mut initial_active = None;

        for node in &viewer.items {
            let Some(raw_id) = node.media_id.as_deref() else {
                continue;
            };
            let media_id = MediaId::from(raw_id);
            if entries.contains_key(&media_id) {
                tracing::warn!(media_id = %media_id, "Duplicate media identifier, keeping the first");
                continue;
            }

            let mut item = MediaItem::new(media_id.clone()).with_primary_image(node.primary_image);
            if let Some(kind) = node.deferred {
                item = item.with_deferred(DeferredKind::from(kind));
            }
            if node.active && initial_active.is_none() {
                initial_active = Some(media_id.clone());
            }

            entries.insert(
                media_id.clone(),
                Entry {
                    item,
                    thumbnail: None,
                },
            );
            item_order.push(media_id);
        }

        if item_order.is_empty() {
            return Err(GalleryIssue::MissingMediaItems);
        }

        let mut thumbnail_order = Vec::new();
        for (index, node) in strip.items.iter().enumerate() {
            let Some(target) = node.target.as_deref().map(MediaId::from) else {
                continue;
            };
            let Some(entry) = entries.get_mut(&target) else {
                tracing::warn!(media_id = %target, "Thumbnail targets unknown media, ignoring it");
                continue;
            };
            if entry.thumbnail.is_some() {
                tracing::warn!(media_id = %target, "Media already has a thumbnail, ignoring the duplicate");
                continue;
            }

            let position = node
                .position
                .clone()
                .unwrap_or_else(|| (index + 1).to_string());
            entry.thumbnail = Some(Thumbnail::new(target.clone(), position));
            thumbnail_order.push(target);
        }

        Ok(Self {
            entries,
            item_order,
            thumbnail_order,
            initial_active,
        })
    }

    /// Number of registered media items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.item_order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_order.is_empty()
    }

    /// Item the markup rendered as active, if any.
    #[must_use]
    pub fn initial_active(&self) -> Option<&MediaId> {
        self.initial_active.as_ref()
    }

    #[must_use]
    pub fn get(&self, media_id: &MediaId) -> Option<&MediaItem> {
        self.entries.get(media_id).map(|entry| &entry.item)
    }

    #[must_use]
    pub fn contains(&self, media_id: &MediaId) -> bool {
        self.entries.contains_key(media_id)
    }

    #[must_use]
    pub fn thumbnail_for(&self, media_id: &MediaId) -> Option<&Thumbnail> {
        self.entries
            .get(media_id)
            .and_then(|entry| entry.thumbnail.as_ref())
    }

    /// First item in viewer order.
    #[must_use]
    pub fn first(&self) -> Option<&MediaId> {
        self.item_order.first()
    }

    /// Ordinal of an item in viewer order.
    #[must_use]
    pub fn position(&self, media_id: &MediaId) -> Option<usize> {
        self.item_order.iter().position(|id| id == media_id)
    }

    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&MediaId> {
        self.item_order.get(index)
    }

    /// Media identifiers in viewer order.
    pub fn item_ids(&self) -> impl Iterator<Item = &MediaId> {
        self.item_order.iter()
    }

    /// Thumbnail targets in strip order.
    pub fn thumbnail_ids(&self) -> impl Iterator<Item = &MediaId> {
        self.thumbnail_order.iter()
    }

    /// Moves an item, and its thumbnail if it has one, to the front of their
    /// containers.
    pub fn move_to_front(&mut self, media_id: &MediaId) {
        move_to_front(&mut self.item_order, media_id);
        move_to_front(&mut self.thumbnail_order, media_id);
    }
}

fn move_to_front(order: &mut Vec<MediaId>, media_id: &MediaId) {
    if let Some(index) = order.iter().position(|id| id == media_id) {
        let id = order.remove(index);
        order.insert(0, id);
    }
}
