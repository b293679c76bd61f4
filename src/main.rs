// SPDX-License-Identifier: MPL-2.0
//! Command-line driver: mounts a gallery from a markup file and replays a
//! script of events against console collaborators.
//!
//! ```text
//! media-gallery --markup demos/gallery.toml [--script demos/session.txt]
//!               [--lang fr] [--config-dir DIR] [--desktop]
//! ```
//!
//! Script lines: `next`, `prev`, `thumb <id>`, `slide <id>`, `loaded <id>`,
//! `wait <ms>`. Blank lines and `#` comments are skipped. Without
//! `--script`, lines are read from standard input.

use media_gallery::application::port::{
    LiveRegion, ScrollRequest, StickyHeader, ThumbnailStrip, ViewerSurface,
};
use media_gallery::config;
use media_gallery::domain::gallery::{MediaId, Span};
use media_gallery::gallery::{Collaborators, MediaGallery, Message, PlaybackSlot};
use media_gallery::i18n::fluent::I18n;
use media_gallery::markup::GalleryMarkup;
use media_gallery::runtime;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tokio::sync::mpsc;

const THUMBNAIL_WIDTH: f32 = 80.0;
const STRIP_WIDTH: f32 = 240.0;

struct Flags {
    markup: PathBuf,
    script: Option<PathBuf>,
    lang: Option<String>,
    config_dir: Option<PathBuf>,
    desktop: bool,
}

enum Step {
    Send(Message),
    Wait(Duration),
}

struct ConsoleViewer;

impl ViewerSurface for ConsoleViewer {
    fn has_slider(&self) -> bool {
        true
    }

    fn move_to_front(&mut self, media_id: &MediaId) {
        tracing::info!(media_id = %media_id, "viewer: slide moved to front");
    }

    fn reset_pages(&mut self) {
        tracing::info!("viewer: pagination reset");
    }

    fn set_active(&mut self, media_id: &MediaId) {
        tracing::info!(media_id = %media_id, "viewer: active item");
    }

    fn remove_list_semantics(&mut self) {
        tracing::info!("viewer: list semantics removed");
    }

    fn reload_primary_image(&mut self, media_id: &MediaId) {
        tracing::info!(media_id = %media_id, "viewer: reloading primary image");
    }
}

struct ConsoleStrip {
    layout: Vec<MediaId>,
    scroll_left: f32,
}

impl ThumbnailStrip for ConsoleStrip {
    fn slide_span(&self, media_id: &MediaId) -> Option<Span> {
        self.layout
            .iter()
            .position(|id| id == media_id)
            .map(|index| Span::new(index as f32 * THUMBNAIL_WIDTH, THUMBNAIL_WIDTH))
    }

    fn visible_span(&self) -> Span {
        Span::new(self.scroll_left, STRIP_WIDTH)
    }

    fn scroll(&mut self, request: ScrollRequest) {
        self.scroll_left = match request {
            ScrollRequest::To { left } => left,
            ScrollRequest::By { dx } => self.scroll_left + dx,
        };
        tracing::info!(scroll_left = self.scroll_left, "thumbnails: scrolled");
    }

    fn set_current(&mut self, media_id: &MediaId) {
        tracing::info!(media_id = %media_id, "thumbnails: current marker");
    }

    fn move_to_front(&mut self, media_id: &MediaId) {
        if let Some(index) = self.layout.iter().position(|id| id == media_id) {
            let id = self.layout.remove(index);
            self.layout.insert(0, id);
        }
    }
}

struct ConsoleHeader;

impl StickyHeader for ConsoleHeader {
    fn prevent_reveal(&mut self) {
        tracing::debug!("header: reveal suppressed");
    }
}

struct ConsoleRegion;

impl LiveRegion for ConsoleRegion {
    fn announce(&mut self, text: &str) {
        println!("[live] {text}");
    }

    fn hide(&mut self) {
        println!("[live] (hidden)");
    }
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        desktop: args.contains("--desktop"),
        markup: args
            .opt_value_from_str("--markup")?
            .unwrap_or_else(|| PathBuf::from("demos/gallery.toml")),
        script: args.opt_value_from_str("--script")?,
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "Ignoring unexpected arguments");
    }
    Ok(flags)
}

fn parse_script(source: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    for (line_no, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let argument = words.next();

        let step = match (command, argument) {
            ("next", None) => Step::Send(Message::NextClicked),
            ("prev", None) => Step::Send(Message::PreviousClicked),
            ("thumb", Some(id)) => Step::Send(Message::ThumbnailClicked(MediaId::from(id))),
            ("slide", Some(id)) => Step::Send(Message::SlideChanged(MediaId::from(id))),
            ("loaded", Some(id)) => Step::Send(Message::ImageLoaded(MediaId::from(id))),
            ("wait", Some(ms)) => match ms.parse::<u64>() {
                Ok(ms) => Step::Wait(Duration::from_millis(ms)),
                Err(_) => {
                    tracing::warn!(line = line_no + 1, "Invalid wait duration");
                    continue;
                }
            },
            _ => {
                tracing::warn!(line = line_no + 1, command, "Unknown script command");
                continue;
            }
        };
        steps.push(step);
    }
    steps
}

fn read_script(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("media_gallery=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(error = %err, "Invalid arguments");
            return ExitCode::FAILURE;
        }
    };

    let (mut settings, warning) = config::load_with_override(flags.config_dir.clone());
    if let Some(warning) = warning {
        tracing::warn!(%warning, "Using default settings");
    }
    settings.layout.desktop |= flags.desktop;

    let markup = match GalleryMarkup::load(&flags.markup) {
        Ok(markup) => markup,
        Err(err) => {
            tracing::error!(path = %flags.markup.display(), error = %err, "Cannot load markup");
            return ExitCode::FAILURE;
        }
    };
    let script = match read_script(flags.script.as_ref()) {
        Ok(source) => parse_script(&source),
        Err(err) => {
            tracing::error!(error = %err, "Cannot read script");
            return ExitCode::FAILURE;
        }
    };

    let layout = markup
        .thumbnails
        .iter()
        .flat_map(|strip| strip.items.iter())
        .filter_map(|node| node.target.as_deref().map(MediaId::from))
        .collect();
    let slot = PlaybackSlot::new();
    let ports = Collaborators::new(
        ConsoleViewer,
        ConsoleStrip {
            layout,
            scroll_left: 0.0,
        },
        slot.clone(),
        slot.clone(),
    )
    .with_sticky_header(ConsoleHeader)
    .with_live_region(ConsoleRegion)
    .with_strings(I18n::new(flags.lang, &settings));

    let mut gallery = MediaGallery::mount(&markup, &settings, ports);
    if gallery.is_inert() {
        return ExitCode::FAILURE;
    }
    gallery.subscribe(|commit| {
        if commit.fell_back() {
            println!("[commit] {} (requested {})", commit.media_id, commit.requested);
        } else {
            println!("[commit] {} at {}", commit.media_id, commit.ordinal + 1);
        }
    });

    let event_loop = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(event_loop) => event_loop,
        Err(err) => {
            tracing::error!(error = %err, "Cannot start event loop");
            return ExitCode::FAILURE;
        }
    };

    event_loop.block_on(async {
        let (sender, receiver) = mpsc::unbounded_channel();
        let producer = async move {
            for step in script {
                match step {
                    Step::Send(message) => {
                        if sender.send(message).is_err() {
                            break;
                        }
                    }
                    Step::Wait(duration) => tokio::time::sleep(duration).await,
                }
                tokio::task::yield_now().await;
            }
        };
        tokio::join!(runtime::run(&mut gallery, receiver), producer);
    });

    let active = gallery
        .active_id()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    let current = gallery
        .current_thumbnail()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    println!("active: {active}");
    println!("current thumbnail: {current}");
    println!(
        "playing: {}",
        slot.playing()
            .map_or_else(|| "-".to_string(), |media_id| media_id.to_string())
    );
    ExitCode::SUCCESS
}
