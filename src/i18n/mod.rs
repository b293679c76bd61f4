// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for gallery announcements.
//!
//! This module provides the strings read out to assistive technology when
//! the active media changes. Two sources are available:
//!
//! - [`fluent::I18n`]: Fluent bundles embedded at build time, with locale
//!   resolution from CLI, config or system settings
//! - [`TemplateStrings`]: a plain template carrying an `[index]`
//!   placeholder, for hosts that hand the gallery their own string table

pub mod fluent;

use crate::config::{DEFAULT_IMAGE_AVAILABLE_TEMPLATE, INDEX_PLACEHOLDER};

/// Source of the accessibility strings used by the gallery.
pub trait AccessibilityStrings {
    /// Announcement for a newly available image at a 1-based `position`.
    fn image_available(&self, position: &str) -> String;
}

/// Accessibility strings backed by a single placeholder template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStrings {
    image_available: String,
}

impl TemplateStrings {
    #[must_use]
    pub fn new(image_available: impl Into<String>) -> Self {
        Self {
            image_available: image_available.into(),
        }
    }
}

impl Default for TemplateStrings {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_AVAILABLE_TEMPLATE)
    }
}

impl AccessibilityStrings for TemplateStrings {
    fn image_available(&self, position: &str) -> String {
        self.image_available.replace(INDEX_PLACEHOLDER, position)
    }
}
