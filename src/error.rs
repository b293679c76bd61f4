// SPDX-License-Identifier: MPL-2.0
//! Error types for the gallery crate.
//!
//! Two families live here:
//!
//! - [`Error`]: failures of the ambient plumbing (settings file, markup
//!   snapshot, translation bundles). These are returned as `Result`s.
//! - [`GalleryIssue`]: conditions the gallery runs into while synchronizing
//!   media. They are never returned to the host as failures; they are
//!   reported through [`GalleryIssue::report`] and the gallery carries on
//!   (or goes inert when the issue is fatal at mount time).

use crate::domain::gallery::MediaId;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid gallery markup: {0}")]
    Markup(String),

    #[error("translation error: {0}")]
    I18n(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Conditions reported while mounting or driving a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryIssue {
    /// A required root node (viewer or thumbnail strip) is absent.
    #[error("required gallery element is missing: {0}")]
    MissingElement(&'static str),

    /// The viewer holds no item carrying a media identifier.
    #[error("gallery viewer contains no media items")]
    MissingMediaItems,

    /// A selection asked for an identifier that is not registered.
    #[error("no media item matches `{0}`, falling back to the first item")]
    UnresolvedTarget(MediaId),

    /// No thumbnail mirrors the given media item.
    #[error("no thumbnail targets media `{0}`")]
    MissingThumbnailMatch(MediaId),

    /// Navigation was requested while nothing is active.
    #[error("navigation requested with no active media item")]
    NoActiveItem,
}

impl GalleryIssue {
    /// Fatal issues leave the gallery inert for the rest of the page's life.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GalleryIssue::MissingElement(_) | GalleryIssue::MissingMediaItems
        )
    }

    /// Logs the issue at a level matching its severity.
    pub fn report(&self) {
        match self {
            GalleryIssue::MissingElement(element) => {
                tracing::error!(element, "{self}");
            }
            GalleryIssue::MissingMediaItems => {
                tracing::error!("{self}");
            }
            GalleryIssue::UnresolvedTarget(media_id)
            | GalleryIssue::MissingThumbnailMatch(media_id) => {
                tracing::warn!(media_id = %media_id, "{self}");
            }
            GalleryIssue::NoActiveItem => {
                tracing::warn!("{self}");
            }
        }
    }
}
