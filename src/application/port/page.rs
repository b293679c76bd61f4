// SPDX-License-Identifier: MPL-2.0
//! Page-level collaborator ports.

/// Port for a sticky site header that would otherwise reveal itself when
/// the gallery scrolls.
pub trait StickyHeader {
    /// Suppresses the next header reveal.
    fn prevent_reveal(&mut self);
}

/// Port for the accessibility live region.
pub trait LiveRegion {
    /// Replaces the region's text and exposes it to assistive technology.
    fn announce(&mut self, text: &str);

    /// Hides the region from assistive technology again.
    fn hide(&mut self);
}
