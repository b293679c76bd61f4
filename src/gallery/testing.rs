// SPDX-License-Identifier: MPL-2.0
//! Recording fakes for the gallery ports, shared by the unit tests.

use super::collaborators::Collaborators;
use super::playback::PlaybackSlot;
use crate::application::port::{LiveRegion, ScrollRequest, StickyHeader, ThumbnailStrip, ViewerSurface};
use crate::domain::gallery::{MediaId, Span};
use crate::markup::{GalleryMarkup, MediaNode, ThumbnailNode};
use std::cell::RefCell;
use std::rc::Rc;

/// Ordered record of every port call, shared between fakes.
pub type SharedLog = Rc<RefCell<Vec<String>>>;

pub fn entries(log: &SharedLog, prefix: &str) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|entry| entry.starts_with(prefix))
        .cloned()
        .collect()
}

pub struct RecordingViewer {
    pub log: SharedLog,
    pub has_slider: bool,
}

impl ViewerSurface for RecordingViewer {
    fn has_slider(&self) -> bool {
        self.has_slider
    }

    fn move_to_front(&mut self, media_id: &MediaId) {
        self.log.borrow_mut().push(format!("viewer:front:{media_id}"));
    }

    fn reset_pages(&mut self) {
        self.log.borrow_mut().push("viewer:reset_pages".into());
    }

    fn set_active(&mut self, media_id: &MediaId) {
        self.log.borrow_mut().push(format!("viewer:active:{media_id}"));
    }

    fn remove_list_semantics(&mut self) {
        self.log.borrow_mut().push("viewer:list_semantics".into());
    }

    fn reload_primary_image(&mut self, media_id: &MediaId) {
        self.log.borrow_mut().push(format!("viewer:reload:{media_id}"));
    }
}

/// Strip of 100px thumbnails, laid out in the order given and reordered on
/// request.
pub struct RecordingStrip {
    pub log: SharedLog,
    pub layout: Vec<MediaId>,
    pub width: f32,
    pub scroll_left: f32,
}

impl ThumbnailStrip for RecordingStrip {
    fn slide_span(&self, media_id: &MediaId) -> Option<Span> {
        self.layout
            .iter()
            .position(|id| id == media_id)
            .map(|index| Span::new(index as f32 * 100.0, 100.0))
    }

    fn visible_span(&self) -> Span {
        Span::new(self.scroll_left, self.width)
    }

    fn scroll(&mut self, request: ScrollRequest) {
        match request {
            ScrollRequest::To { left } => {
                self.scroll_left = left;
                self.log.borrow_mut().push(format!("strip:scroll_to:{left}"));
            }
            ScrollRequest::By { dx } => {
                self.scroll_left += dx;
                self.log.borrow_mut().push(format!("strip:scroll_by:{dx}"));
            }
        }
    }

    fn set_current(&mut self, media_id: &MediaId) {
        self.log.borrow_mut().push(format!("strip:current:{media_id}"));
    }

    fn move_to_front(&mut self, media_id: &MediaId) {
        if let Some(index) = self.layout.iter().position(|id| id == media_id) {
            let id = self.layout.remove(index);
            self.layout.insert(0, id);
        }
        self.log.borrow_mut().push(format!("strip:front:{media_id}"));
    }
}

pub struct RecordingHeader {
    pub log: SharedLog,
}

impl StickyHeader for RecordingHeader {
    fn prevent_reveal(&mut self) {
        self.log.borrow_mut().push("header:prevent_reveal".into());
    }
}

pub struct RecordingRegion {
    pub log: SharedLog,
}

impl LiveRegion for RecordingRegion {
    fn announce(&mut self, text: &str) {
        self.log.borrow_mut().push(format!("live:announce:{text}"));
    }

    fn hide(&mut self) {
        self.log.borrow_mut().push("live:hide".into());
    }
}

/// Three-item markup `m1..m3` with matching thumbnails and `m1` active.
pub fn three_items() -> GalleryMarkup {
    GalleryMarkup::new(
        vec![
            MediaNode::new("m1").active(),
            MediaNode::new("m2"),
            MediaNode::new("m3"),
        ],
        vec![
            ThumbnailNode::new("m1", "1"),
            ThumbnailNode::new("m2", "2"),
            ThumbnailNode::new("m3", "3"),
        ],
    )
}

/// Full set of recording collaborators over a strip showing `width` pixels.
pub fn collaborators(log: &SharedLog, slot: &PlaybackSlot, layout: &[&str], width: f32) -> Collaborators {
    Collaborators::new(
        RecordingViewer {
            log: log.clone(),
            has_slider: true,
        },
        RecordingStrip {
            log: log.clone(),
            layout: layout.iter().map(|id| MediaId::from(*id)).collect(),
            width,
            scroll_left: 0.0,
        },
        slot.clone(),
        slot.clone(),
    )
    .with_sticky_header(RecordingHeader { log: log.clone() })
    .with_live_region(RecordingRegion { log: log.clone() })
}
