// SPDX-License-Identifier: MPL-2.0
//! `media_gallery` keeps a product media gallery consistent: the item shown
//! in the viewer, the highlighted and scrolled-to thumbnail, and the
//! deferred media that is playing all follow one active identifier.
//!
//! Hosts describe their page with a [`markup::GalleryMarkup`] snapshot,
//! implement the [`application::port`] traits over their rendering layer and
//! feed [`gallery::Message`]s into a [`gallery::MediaGallery`], directly or
//! through the [`runtime`] event loop.

#![doc(html_root_url = "https://docs.rs/media_gallery/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod markup;
pub mod runtime;
