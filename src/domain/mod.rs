// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure value objects shared by every gallery
//! component. It depends on nothing but `std` so the types stay trivial to
//! construct in tests.
//!
//! # Modules
//!
//! - [`gallery`]: Media items, thumbnails and timing values
//!   ([`MediaId`](gallery::MediaId), [`Span`](gallery::Span),
//!   [`DebounceDelay`](gallery::DebounceDelay))

pub mod gallery;
