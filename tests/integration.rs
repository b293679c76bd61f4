// SPDX-License-Identifier: MPL-2.0
use media_gallery::application::port::{
    LiveRegion, ScrollRequest, StickyHeader, ThumbnailStrip, ViewerSurface,
};
use media_gallery::config::{self, Config, ScrollStrategy};
use media_gallery::domain::gallery::{MediaId, Span};
use media_gallery::gallery::{Collaborators, GalleryState, MediaGallery, Message, PlaybackSlot};
use media_gallery::i18n::fluent::I18n;
use media_gallery::i18n::AccessibilityStrings;
use media_gallery::markup::{DeferredMarkup, GalleryMarkup, MediaNode, ThumbnailNode};
use media_gallery::runtime;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;
use tokio::sync::mpsc;

type Log = Rc<RefCell<Vec<String>>>;

fn matching(log: &Log, prefix: &str) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|entry| entry.starts_with(prefix))
        .cloned()
        .collect()
}

struct Viewer(Log);

impl ViewerSurface for Viewer {
    fn has_slider(&self) -> bool {
        true
    }

    fn move_to_front(&mut self, media_id: &MediaId) {
        self.0.borrow_mut().push(format!("viewer:front:{media_id}"));
    }

    fn reset_pages(&mut self) {
        self.0.borrow_mut().push("viewer:reset_pages".into());
    }

    fn set_active(&mut self, media_id: &MediaId) {
        self.0.borrow_mut().push(format!("viewer:active:{media_id}"));
    }

    fn remove_list_semantics(&mut self) {
        self.0.borrow_mut().push("viewer:list_semantics".into());
    }

    fn reload_primary_image(&mut self, media_id: &MediaId) {
        self.0.borrow_mut().push(format!("viewer:reload:{media_id}"));
    }
}

/// 100px thumbnails, initially in markup order, 250px visible.
struct Strip {
    log: Log,
    layout: Vec<MediaId>,
    scroll_left: f32,
}

impl ThumbnailStrip for Strip {
    fn slide_span(&self, media_id: &MediaId) -> Option<Span> {
        self.layout
            .iter()
            .position(|id| id == media_id)
            .map(|index| Span::new(index as f32 * 100.0, 100.0))
    }

    fn visible_span(&self) -> Span {
        Span::new(self.scroll_left, 250.0)
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

struct Header(Log);

impl StickyHeader for Header {
    fn prevent_reveal(&mut self) {
        self.0.borrow_mut().push("header:prevent_reveal".into());
    }
}

struct Region(Log);

impl LiveRegion for Region {
    fn announce(&mut self, text: &str) {
        self.0.borrow_mut().push(format!("live:announce:{text}"));
    }

    fn hide(&mut self) {
        self.0.borrow_mut().push("live:hide".into());
    }
}

fn product_markup() -> GalleryMarkup {
    GalleryMarkup::new(
        vec![
            MediaNode::new("m1").active(),
            MediaNode::new("m2").deferred(DeferredMarkup::Video),
            MediaNode::new("m3"),
        ],
        vec![
            ThumbnailNode::new("m1", "1"),
            ThumbnailNode::new("m2", "2"),
            ThumbnailNode::new("m3", "3"),
        ],
    )
}

fn mount(log: &Log, slot: &PlaybackSlot, config: &Config) -> MediaGallery {
    let ports = Collaborators::new(
        Viewer(log.clone()),
        Strip {
            log: log.clone(),
            layout: ["m1", "m2", "m3"].into_iter().map(MediaId::from).collect(),
            scroll_left: 0.0,
        },
        slot.clone(),
        slot.clone(),
    )
    .with_sticky_header(Header(log.clone()))
    .with_live_region(Region(log.clone()));
    MediaGallery::mount(&product_markup(), config, ports)
}

#[test]
fn arrow_navigation_keeps_viewer_thumbnails_and_playback_in_step() {
    let log = Log::default();
    let slot = PlaybackSlot::new();
    let mut gallery = mount(&log, &slot, &Config::default());
    let start = Instant::now();

    assert_eq!(gallery.state(), GalleryState::Active(MediaId::from("m1")));
    assert_eq!(gallery.current_thumbnail(), Some(&MediaId::from("m1")));

    gallery.update(Message::NextClicked, start);
    assert_eq!(gallery.active_id(), Some(&MediaId::from("m2")));
    assert_eq!(gallery.current_thumbnail(), Some(&MediaId::from("m2")));
    assert_eq!(slot.playing(), Some(MediaId::from("m2")));
    assert_eq!(matching(&log, "header:").len(), 1);
    assert_eq!(matching(&log, "viewer:reload:"), vec!["viewer:reload:m2"]);

    gallery.update(Message::ImageLoaded(MediaId::from("m2")), start);
    assert_eq!(
        matching(&log, "live:"),
        vec!["live:announce:Image 2 is now available in gallery view"]
    );

    // Leaving the video pauses it; m3 is outside the 250px strip.
    gallery.update(Message::NextClicked, start + Duration::from_millis(100));
    assert_eq!(slot.playing(), None);
    assert_eq!(matching(&log, "strip:scroll"), vec!["strip:scroll_to:200"]);

    gallery.update(Message::NextClicked, start + Duration::from_millis(200));
    assert_eq!(gallery.active_id(), Some(&MediaId::from("m1")));

    gallery.update(Message::Tick, start + Duration::from_millis(2000));
    assert_eq!(matching(&log, "live:hide").len(), 1);
}

#[test]
fn product_page_scenario_runs_in_order() {
    let log = Log::default();
    let slot = PlaybackSlot::new();
    let mut gallery = mount(&log, &slot, &Config::default());
    let start = Instant::now();

    gallery.update(Message::NextClicked, start);
    assert_eq!(gallery.active_id(), Some(&MediaId::from("m2")));
    assert_eq!(gallery.current_thumbnail(), Some(&MediaId::from("m2")));
    assert_eq!(matching(&log, "viewer:active"), vec!["viewer:active:m2"]);
    assert_eq!(
        matching(&log, "strip:current"),
        vec!["strip:current:m1", "strip:current:m2"]
    );
    assert_eq!(slot.pause_requests(), 1);
    gallery.update(Message::ImageLoaded(MediaId::from("m2")), start);
    assert_eq!(
        matching(&log, "live:announce"),
        vec!["live:announce:Image 2 is now available in gallery view"]
    );

    gallery.update(Message::NextClicked, start + Duration::from_millis(100));
    gallery.update(Message::NextClicked, start + Duration::from_millis(200));
    assert_eq!(gallery.state(), GalleryState::Active(MediaId::from("m1")));
    assert_eq!(gallery.current_thumbnail(), Some(&MediaId::from("m1")));

    gallery.update(
        Message::ThumbnailClicked(MediaId::from("m3")),
        start + Duration::from_millis(300),
    );
    assert_eq!(gallery.active_id(), Some(&MediaId::from("m3")));
    assert_eq!(gallery.current_thumbnail(), Some(&MediaId::from("m3")));
    assert_eq!(
        matching(&log, "viewer:active"),
        vec![
            "viewer:active:m2",
            "viewer:active:m3",
            "viewer:active:m1",
            "viewer:active:m3",
        ]
    );
    // Thumbnail clicks keep the container order.
    assert!(matching(&log, "viewer:front").is_empty());
    assert!(matching(&log, "strip:front").is_empty());
    assert!(matching(&log, "viewer:reset_pages").is_empty());
    assert_eq!(slot.pause_requests(), 4);
}

#[test]
fn prepend_reorders_host_containers_before_scrolling() {
    let log = Log::default();
    let slot = PlaybackSlot::new();
    let mut gallery = mount(&log, &slot, &Config::default());

    // m3 sits at 200..300, past the 250px view; after the move it leads.
    gallery.set_active(&MediaId::from("m3"), true);

    assert_eq!(
        *log.borrow(),
        vec![
            "strip:current:m1",
            "viewer:front:m3",
            "strip:front:m3",
            "viewer:reset_pages",
            "viewer:active:m3",
            "strip:current:m3",
            "header:prevent_reveal",
            "viewer:reload:m3",
        ]
    );
    let registry = gallery.registry().expect("mounted");
    let order: Vec<_> = registry.thumbnail_ids().map(MediaId::as_str).collect();
    assert_eq!(order, vec!["m3", "m1", "m2"]);
}

#[test]
fn thumbnail_click_on_unknown_target_falls_back_to_first_item() {
    let log = Log::default();
    let slot = PlaybackSlot::new();
    let mut gallery = mount(&log, &slot, &Config::default());
    let now = Instant::now();

    gallery.update(Message::ThumbnailClicked(MediaId::from("m3")), now);
    assert_eq!(gallery.active_id(), Some(&MediaId::from("m3")));

    gallery.update(Message::ThumbnailClicked(MediaId::from("gone")), now);
    assert_eq!(gallery.active_id(), Some(&MediaId::from("m1")));
    assert_eq!(gallery.current_thumbnail(), Some(&MediaId::from("m1")));
}

#[test]
fn playback_slot_is_shared_between_galleries() {
    let slot = PlaybackSlot::new();
    let first_log = Log::default();
    let second_log = Log::default();
    let mut first = mount(&first_log, &slot, &Config::default());
    let mut second = mount(&second_log, &slot, &Config::default());
    let now = Instant::now();

    first.update(Message::NextClicked, now);
    assert_eq!(slot.playing(), Some(MediaId::from("m2")));

    // Any commit on the page pauses whatever is playing.
    second.update(Message::PreviousClicked, now);
    assert_eq!(second.active_id(), Some(&MediaId::from("m3")));
    assert_eq!(slot.playing(), None);
    assert_eq!(slot.pause_requests(), 2);
}

#[test]
fn settings_round_trip_and_drive_scroll_strategy() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.timing.slide_change_debounce_ms = Some(250);
    settings.thumbnails.scroll_strategy = ScrollStrategy::ExactOffset;
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, settings);

    let log = Log::default();
    let slot = PlaybackSlot::new();
    let mut gallery = mount(&log, &slot, &loaded);
    gallery.update(Message::PreviousClicked, Instant::now());
    assert_eq!(matching(&log, "strip:scroll"), vec!["strip:scroll_by:200"]);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}

#[test]
fn announcement_language_follows_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(
        i18n.image_available("2"),
        "L'image 2 est maintenant disponible dans la galerie"
    );

    let english = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(
        english.image_available("2"),
        "Image 2 is now available in gallery view"
    );
}

#[tokio::test(start_paused = true)]
async fn event_loop_coalesces_slide_changes() {
    let log = Log::default();
    let slot = PlaybackSlot::new();
    let mut gallery = mount(&log, &slot, &Config::default());

    let (sender, receiver) = mpsc::unbounded_channel();
    let producer = async move {
        for id in ["m2", "m3", "m2", "m3"] {
            sender
                .send(Message::SlideChanged(MediaId::from(id)))
                .expect("event loop is running");
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    };
    tokio::join!(runtime::run(&mut gallery, receiver), producer);

    assert_eq!(matching(&log, "strip:scroll"), vec!["strip:scroll_to:200"]);
    assert_eq!(gallery.current_thumbnail(), Some(&MediaId::from("m3")));
    // Swipes only move the thumbnail marker.
    assert_eq!(gallery.active_id(), Some(&MediaId::from("m1")));
    assert_eq!(slot.pause_requests(), 0);
}

#[tokio::test(start_paused = true)]
async fn event_loop_hides_announcements_after_sender_closes() {
    let log = Log::default();
    let slot = PlaybackSlot::new();
    let mut gallery = mount(&log, &slot, &Config::default());

    let (sender, receiver) = mpsc::unbounded_channel();
    sender.send(Message::NextClicked).expect("receiver alive");
    sender
        .send(Message::ImageLoaded(MediaId::from("m2")))
        .expect("receiver alive");
    drop(sender);

    runtime::run(&mut gallery, receiver).await;

    assert_eq!(
        matching(&log, "live:"),
        vec![
            "live:announce:Image 2 is now available in gallery view".to_string(),
            "live:hide".to_string(),
        ]
    );
    assert_eq!(gallery.next_deadline(), None);
}
