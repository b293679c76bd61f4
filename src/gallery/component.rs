// SPDX-License-Identifier: MPL-2.0
//! Media gallery component.
//!
//! [`MediaGallery`] wires the sub-components together. Every selection goes
//! through one pipeline:
//!
//! ```text
//! intent ─► navigation::resolve ─► SelectionController::set_active ─► Commit
//!                                                                      │
//!       ┌──────────────────┬──────────────────┬────────────────────────┤
//!       ▼                  ▼                  ▼                        ▼
//!  host containers    ThumbnailSync     SideEffectDispatcher    commit observers
//!  (reorder, flag)    (marker, scroll)  (pause, deferred,
//!                                        header, a11y)
//! ```
//!
//! The pipeline runs to completion inside a single `update` call, so no
//! other gallery operation can observe a half-applied commit.

use super::collaborators::Collaborators;
use super::debounce::SlideChangeBuffer;
use super::effects::SideEffectDispatcher;
use super::navigation::{self, Intent};
use super::registry::Registry;
use super::selection::{Commit, GalleryState, SelectionController};
use super::thumbnails::ThumbnailSync;
use crate::config::{Config, THUMBNAIL_LAYOUT_KEYWORD};
use crate::domain::gallery::{Direction, MediaId};
use crate::error::GalleryIssue;
use crate::markup::GalleryMarkup;
use std::time::Instant;

/// Events the gallery reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The "previous" control was clicked.
    PreviousClicked,
    /// The "next" control was clicked.
    NextClicked,
    /// A thumbnail button was clicked; carries its target identifier.
    ThumbnailClicked(MediaId),
    /// The external slider moved to another slide.
    SlideChanged(MediaId),
    /// An item's primary image finished loading.
    ImageLoaded(MediaId),
    /// Timer wake-up; due timers also run before every other message.
    Tick,
}

type Observer = Box<dyn FnMut(&Commit)>;

struct Mounted {
    registry: Registry,
    selection: SelectionController,
    thumbnails: ThumbnailSync,
    slide_changes: SlideChangeBuffer,
    effects: SideEffectDispatcher,
    ports: Collaborators,
}

/// A mounted gallery instance.
///
/// A gallery whose markup is unusable is inert: it reports why once at
/// mount and ignores everything afterwards.
pub struct MediaGallery {
    mounted: Result<Mounted, GalleryIssue>,
    observers: Vec<Observer>,
}

impl MediaGallery {
    /// Mounts a gallery over its initial markup.
    pub fn mount(markup: &GalleryMarkup, config: &Config, mut ports: Collaborators) -> Self {
        let registry = match Registry::from_markup(markup) {
            Ok(registry) => registry,
            Err(issue) => {
                issue.report();
                return Self {
                    mounted: Err(issue),
                    observers: Vec::new(),
                };
            }
        };

        if config.layout.desktop
            && markup.desktop_layout.contains(THUMBNAIL_LAYOUT_KEYWORD)
            && ports.viewer.has_slider()
        {
            ports.viewer.remove_list_semantics();
        }

        let initial = registry.initial_active().cloned();
        let mut thumbnails = ThumbnailSync::new(
            config.visibility_threshold(),
            config.thumbnails.scroll_strategy,
        );
        if let Some(media_id) = &initial {
            thumbnails.restore(&registry, ports.thumbnails.as_mut(), media_id);
        }

        tracing::debug!(items = registry.len(), initial = ?initial, "Mounted media gallery");

        Self {
            mounted: Ok(Mounted {
                selection: SelectionController::new(initial),
                registry,
                thumbnails,
                slide_changes: SlideChangeBuffer::new(config.debounce_delay()),
                effects: SideEffectDispatcher::new(config.announcement_delay()),
                ports,
            }),
            observers: Vec::new(),
        }
    }

    /// Handles one event at time `now`.
    pub fn update(&mut self, message: Message, now: Instant) {
        if self.mounted.is_err() {
            return;
        }
        self.advance(now);

        match message {
            Message::PreviousClicked => {
                self.move_slide(Direction::Previous);
            }
            Message::NextClicked => {
                self.move_slide(Direction::Next);
            }
            Message::ThumbnailClicked(media_id) => {
                self.navigate(Intent::ThumbnailClicked(media_id));
            }
            Message::SlideChanged(media_id) => {
                if let Ok(mounted) = &mut self.mounted {
                    mounted.slide_changes.push(media_id, now);
                }
            }
            Message::ImageLoaded(media_id) => {
                if let Ok(mounted) = &mut self.mounted {
                    mounted
                        .effects
                        .image_loaded(&media_id, &mut mounted.ports, now);
                }
            }
            Message::Tick => {}
        }
    }

    /// Makes `media_id` the active item, falling back to the first item when
    /// it is unknown. Returns the item that became active.
    pub fn set_active(&mut self, media_id: &MediaId, prepend: bool) -> Option<MediaId> {
        let Ok(mounted) = &mut self.mounted else {
            return None;
        };

        let commit = mounted
            .selection
            .set_active(&mut mounted.registry, media_id, prepend)?;

        if commit.prepended {
            mounted.ports.viewer.move_to_front(&commit.media_id);
            if mounted.registry.thumbnail_for(&commit.media_id).is_some() {
                mounted.ports.thumbnails.move_to_front(&commit.media_id);
            }
            if mounted.ports.viewer.has_slider() {
                mounted.ports.viewer.reset_pages();
            }
        }
        mounted.ports.viewer.set_active(&commit.media_id);

        // A thumbnail mismatch must not undo the viewer change already made.
        if let Err(issue) = mounted.thumbnails.set_active_thumbnail(
            &mounted.registry,
            mounted.ports.thumbnails.as_mut(),
            &commit.media_id,
        ) {
            issue.report();
        }

        mounted
            .effects
            .dispatch(&commit, &mounted.registry, &mut mounted.ports);

        for observer in &mut self.observers {
            observer(&commit);
        }

        Some(commit.media_id)
    }

    /// Steps one item back or forth, wrapping at both ends.
    pub fn move_slide(&mut self, direction: Direction) -> Option<MediaId> {
        self.navigate(Intent::Step(direction))
    }

    fn navigate(&mut self, intent: Intent) -> Option<MediaId> {
        let Ok(mounted) = &self.mounted else {
            return None;
        };

        match navigation::resolve(intent, &mounted.registry, mounted.selection.active()) {
            Ok(target) => self.set_active(&target.media_id, target.prepend),
            Err(issue) => {
                issue.report();
                None
            }
        }
    }

    /// Runs every timer due at `now`.
    pub fn advance(&mut self, now: Instant) {
        let Ok(mounted) = &mut self.mounted else {
            return;
        };

        if let Some(media_id) = mounted.slide_changes.poll(now) {
            if let Err(issue) = mounted.thumbnails.set_active_thumbnail(
                &mounted.registry,
                mounted.ports.thumbnails.as_mut(),
                &media_id,
            ) {
                issue.report();
            }
        }

        mounted.effects.tick(now, &mut mounted.ports);
    }

    /// Earliest pending timer, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let mounted = self.mounted.as_ref().ok()?;
        [
            mounted.slide_changes.deadline(),
            mounted.effects.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Registers a closure called after every commit.
    pub fn subscribe(&mut self, observer: impl FnMut(&Commit) + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn state(&self) -> GalleryState {
        self.mounted
            .as_ref()
            .map(|mounted| mounted.selection.state().clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&MediaId> {
        self.mounted
            .as_ref()
            .ok()
            .and_then(|mounted| mounted.selection.active())
    }

    /// Target of the thumbnail currently marked as current.
    #[must_use]
    pub fn current_thumbnail(&self) -> Option<&MediaId> {
        self.mounted
            .as_ref()
            .ok()
            .and_then(|mounted| mounted.thumbnails.current())
    }

    #[must_use]
    pub fn registry(&self) -> Option<&Registry> {
        self.mounted.as_ref().ok().map(|mounted| &mounted.registry)
    }

    /// Why the gallery is inert, if it is.
    #[must_use]
    pub fn inert_issue(&self) -> Option<&GalleryIssue> {
        self.mounted.as_ref().err()
    }

    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.mounted.is_err()
    }
}
