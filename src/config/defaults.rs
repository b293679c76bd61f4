// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Slide-change coalescing and announcement lifetime
//! - **Thumbnails**: Visibility threshold for scroll-into-view

pub use crate::domain::gallery::timing_bounds::{
    DEFAULT_ANNOUNCEMENT_MS, DEFAULT_DEBOUNCE_MS, DEFAULT_THRESHOLD_PX, MAX_ANNOUNCEMENT_MS,
    MAX_DEBOUNCE_MS, MAX_THRESHOLD_PX, MIN_ANNOUNCEMENT_MS,
};

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Layout-mode keyword that turns the viewer's list semantics off on desktop.
pub const THUMBNAIL_LAYOUT_KEYWORD: &str = "thumbnail";

// ==========================================================================
// Accessibility Defaults
// ==========================================================================

/// Fallback announcement template, `[index]` is the 1-based position.
pub const DEFAULT_IMAGE_AVAILABLE_TEMPLATE: &str = "Image [index] is now available in gallery view";

/// Placeholder replaced with the item position in announcement templates.
pub const INDEX_PLACEHOLDER: &str = "[index]";
