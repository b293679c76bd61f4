// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the interfaces the gallery consumes. Hosts implement
//! them on top of whatever renders the page; tests implement them with
//! recording fakes.
//!
//! # Available Ports
//!
//! - [`viewer`]: The main viewer slider (active flag, ordering, pagination,
//!   list semantics, image reloads)
//! - [`thumbnails`]: The thumbnail strip slider (current marker, ordering,
//!   geometry and scrolling)
//! - [`media`]: Global media pause and deferred media start
//! - [`page`]: Page-level collaborators (sticky header, live region)
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Nothing here is `Send`: the gallery runs on a single-threaded event loop
//! - Calls are fire-and-forget; none of them can fail from the gallery's view

pub mod media;
pub mod page;
pub mod thumbnails;
pub mod viewer;

pub use media::{DeferredMedia, MediaPlayback};
pub use page::{LiveRegion, StickyHeader};
pub use thumbnails::{ScrollRequest, ThumbnailStrip};
pub use viewer::ViewerSurface;
