// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flag words carried alongside resolved values.

bitflags::bitflags! {
    /// Type-spec flags describing an attribute's visibility.
    ///
    /// These are reported by the provider per entry and surfaced unchanged
    /// to callers; theme lookups that traverse an indirection chain OR the
    /// flags of every hop together.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SpecFlags: u32 {
        /// The attribute is part of the container's public API surface.
        const PUBLIC        = 1 << 30;
        /// The attribute is staged to become public in a future container
        /// revision.
        const STAGED_PUBLIC = 1 << 29;
    }
}

bitflags::bitflags! {
    /// Device-configuration axes a resolved value is sensitive to.
    ///
    /// A set bit means a change along that axis could select a different
    /// variant of the value. Themes aggregate the masks of every entry they
    /// hold so embedders can decide when applied styling must be rebuilt.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ConfigMask: u32 {
        /// Mobile country code.
        const MCC                  = 0x0001;
        /// Mobile network code.
        const MNC                  = 0x0002;
        /// Locale (language and region).
        const LOCALE               = 0x0004;
        /// Touchscreen kind.
        const TOUCHSCREEN          = 0x0008;
        /// Keyboard kind.
        const KEYBOARD             = 0x0010;
        /// Keyboard availability.
        const KEYBOARD_HIDDEN      = 0x0020;
        /// Navigation method.
        const NAVIGATION           = 0x0040;
        /// Screen orientation.
        const ORIENTATION          = 0x0080;
        /// Screen density.
        const DENSITY              = 0x0100;
        /// Screen dimensions.
        const SCREEN_SIZE          = 0x0200;
        /// Platform version.
        const VERSION              = 0x0400;
        /// Screen layout (size class, long/notlong).
        const SCREEN_LAYOUT        = 0x0800;
        /// UI mode (night mode, device class).
        const UI_MODE              = 0x1000;
        /// Smallest screen dimension.
        const SMALLEST_SCREEN_SIZE = 0x2000;
        /// Layout direction.
        const LAYOUT_DIR           = 0x4000;
        /// Wide color gamut / HDR.
        const COLOR_MODE           = 0x10000;
    }
}
