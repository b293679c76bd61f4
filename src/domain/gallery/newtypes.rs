// SPDX-License-Identifier: MPL-2.0
//! Gallery timing and geometry newtypes.
//!
//! Each wrapper clamps its value into the accepted range on construction, so
//! the components never have to re-validate what the settings file says.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Accepted ranges for gallery timing and geometry values.
pub mod timing_bounds {
    /// Default coalescing window for external slide-change notifications.
    pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
    /// Maximum coalescing window.
    pub const MAX_DEBOUNCE_MS: u64 = 5_000;

    /// Default delay before an announcement is hidden again.
    pub const DEFAULT_ANNOUNCEMENT_MS: u64 = 2_000;
    /// Minimum announcement delay.
    pub const MIN_ANNOUNCEMENT_MS: u64 = 100;
    /// Maximum announcement delay.
    pub const MAX_ANNOUNCEMENT_MS: u64 = 30_000;

    /// Default trailing-edge threshold for thumbnail visibility, in pixels.
    pub const DEFAULT_THRESHOLD_PX: f32 = 10.0;
    /// Maximum visibility threshold.
    pub const MAX_THRESHOLD_PX: f32 = 200.0;
}

// =============================================================================
// DebounceDelay
// =============================================================================

/// Quiet period after which a burst of slide-change notifications is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceDelay(u64);

impl DebounceDelay {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.min(timing_bounds::MAX_DEBOUNCE_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DebounceDelay {
    fn default() -> Self {
        Self(timing_bounds::DEFAULT_DEBOUNCE_MS)
    }
}

// =============================================================================
// AnnouncementDelay
// =============================================================================

/// How long an accessibility announcement stays exposed before it is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnouncementDelay(u64);

impl AnnouncementDelay {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(
            timing_bounds::MIN_ANNOUNCEMENT_MS,
            timing_bounds::MAX_ANNOUNCEMENT_MS,
        ))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AnnouncementDelay {
    fn default() -> Self {
        Self(timing_bounds::DEFAULT_ANNOUNCEMENT_MS)
    }
}

// =============================================================================
// VisibilityThreshold
// =============================================================================

/// Pixels trimmed from the strip's trailing edge when testing visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityThreshold(f32);

impl VisibilityThreshold {
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(0.0, timing_bounds::MAX_THRESHOLD_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self(timing_bounds::DEFAULT_THRESHOLD_PX)
    }
}
