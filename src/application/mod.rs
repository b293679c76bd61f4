// SPDX-License-Identifier: MPL-2.0
//! Application layer - Collaborator interfaces.
//!
//! The gallery never touches the page directly. Everything it needs from the
//! outside world (the viewer slider, the thumbnail strip, media players, the
//! sticky header, the live region) is reached through the traits in
//! [`port`].
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Hosts implement the port traits
//! - The [`gallery`](crate::gallery) components only ever see the traits
//!
//! # Example
//!
//! ```ignore
//! use media_gallery::application::port::StickyHeader;
//!
//! struct PageHeader { suppressed: u32 }
//!
//! impl StickyHeader for PageHeader {
//!     fn prevent_reveal(&mut self) {
//!         self.suppressed += 1;
//!     }
//! }
//! ```

pub mod port;
