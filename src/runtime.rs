// SPDX-License-Identifier: MPL-2.0
//! Single-threaded event loop driving a gallery.
//!
//! Messages arrive over an unbounded channel; between messages the loop
//! sleeps until the gallery's next timer and wakes it with
//! [`Message::Tick`]. All handling happens on the current task, so commits
//! never interleave.
//!
//! ```ignore
//! let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
//! sender.send(Message::NextClicked)?;
//! drop(sender);
//! media_gallery::runtime::run(&mut gallery, receiver).await;
//! ```

use crate::gallery::{MediaGallery, Message};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep_until, Instant};

fn now() -> std::time::Instant {
    Instant::now().into_std()
}

async fn wait_for(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => sleep_until(Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Runs the gallery until the sending side of `messages` is dropped, then
/// lets every pending timer fire before returning.
pub async fn run(gallery: &mut MediaGallery, mut messages: UnboundedReceiver<Message>) {
    loop {
        let deadline = gallery.next_deadline();
        tokio::select! {
            received = messages.recv() => match received {
                Some(message) => gallery.update(message, now()),
                None => break,
            },
            () = wait_for(deadline) => gallery.update(Message::Tick, now()),
        }
    }

    while let Some(deadline) = gallery.next_deadline() {
        wait_for(Some(deadline)).await;
        gallery.update(Message::Tick, now());
    }
    tracing::debug!("Gallery event loop finished");
}
