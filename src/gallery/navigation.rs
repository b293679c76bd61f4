// SPDX-License-Identifier: MPL-2.0
//! Navigation adapter: turns user intents into selection targets.
//!
//! Arrow clicks step through the viewer order with wrap-around, thumbnail
//! clicks select the thumbnail's target. Slide-change notifications from an
//! external slider do not come through here: they only move the thumbnail
//! marker (see [`SlideChangeBuffer`](super::debounce::SlideChangeBuffer)).

use super::registry::Registry;
use crate::domain::gallery::{Direction, MediaId};
use crate::error::GalleryIssue;

/// A navigation request from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Previous/next control clicked.
    Step(Direction),
    /// Thumbnail button clicked; carries the thumbnail's target identifier.
    ThumbnailClicked(MediaId),
}

/// A resolved selection request for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub media_id: MediaId,
    pub prepend: bool,
}

/// Resolves an intent against the registry and the active item.
///
/// # Errors
///
/// Returns [`GalleryIssue::NoActiveItem`] when stepping while nothing (or an
/// item the registry no longer knows) is active.
pub fn resolve(
    intent: Intent,
    registry: &Registry,
    active: Option<&MediaId>,
) -> Result<Target, GalleryIssue> {
    match intent {
        Intent::Step(direction) => {
            let media_id = step(registry, active, direction)?;
            Ok(Target {
                media_id,
                prepend: false,
            })
        }
        Intent::ThumbnailClicked(media_id) => Ok(Target {
            media_id,
            prepend: false,
        }),
    }
}

/// Item one step away from the active one, wrapping at both ends.
fn step(
    registry: &Registry,
    active: Option<&MediaId>,
    direction: Direction,
) -> Result<MediaId, GalleryIssue> {
    let index = active
        .and_then(|media_id| registry.position(media_id))
        .ok_or(GalleryIssue::NoActiveItem)?;

    let count = registry.len();
    let next = (index + direction.offset(count)) % count;

    registry
        .id_at(next)
        .cloned()
        .ok_or(GalleryIssue::NoActiveItem)
}
