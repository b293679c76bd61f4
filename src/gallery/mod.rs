// SPDX-License-Identifier: MPL-2.0
//! Nested sub-components of the media gallery.
//!
//! Each sub-component owns one slice of state and exposes a small contract.
//! [`component::MediaGallery`] orchestrates them.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── registry      - Media/thumbnail lookup built from markup
//!     ├── selection     - Active item, the single source of truth
//!     ├── thumbnails    - Current-thumbnail marker + scroll-into-view
//!     ├── navigation    - Arrow and thumbnail intents → targets
//!     ├── debounce      - Slide-change coalescing buffer
//!     ├── effects       - Pause/deferred/header/announcement side effects
//!     └── playback      - Page-wide playing slot
//! ```

pub mod collaborators;
pub mod component;
pub mod debounce;
pub mod effects;
pub mod navigation;
pub mod playback;
pub mod registry;
pub mod selection;
pub mod thumbnails;

#[cfg(test)]
pub(crate) mod testing;

pub use collaborators::Collaborators;
pub use component::{MediaGallery, Message};
pub use playback::PlaybackSlot;
pub use registry::Registry;
pub use selection::{Commit, GalleryState};
