// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Media items, the thumbnails that mirror them, horizontal geometry used for
//! scroll-into-view decisions, and the timing newtypes the gallery runs on.

mod newtypes;
mod types;

pub use newtypes::{timing_bounds, AnnouncementDelay, DebounceDelay, VisibilityThreshold};
pub use types::{DeferredKind, Direction, MediaId, MediaItem, Span, Thumbnail};
