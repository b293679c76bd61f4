// SPDX-License-Identifier: MPL-2.0
//! Viewer surface port definition.

use crate::domain::gallery::MediaId;

/// Port for the primary viewer and the slider it may be wrapped in.
pub trait ViewerSurface {
    /// Whether the viewer is wrapped in a paginated slider.
    fn has_slider(&self) -> bool;

    /// Moves an item's slide to the front of the viewer container.
    fn move_to_front(&mut self, media_id: &MediaId);

    /// Resets the slider's pagination after the item order changed.
    fn reset_pages(&mut self);

    /// Flags `media_id` as the active item and clears the flag from every
    /// other item.
    fn set_active(&mut self, media_id: &MediaId);

    /// Drops list semantics from the slider and its slides (presentation
    /// role), used by desktop thumbnail layouts.
    fn remove_list_semantics(&mut self);

    /// Re-requests the primary image of an item so that its load completion
    /// is observed again. The host reports completion back with
    /// `Message::ImageLoaded`.
    fn reload_primary_image(&mut self, media_id: &MediaId);
}
