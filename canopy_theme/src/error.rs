// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Failure taxonomy for theme mutations.

use core::fmt;

use canopy_resource::ResourceId;

/// Why a theme mutation failed.
///
/// Every failing operation leaves the theme exactly as it was: style
/// application buffers the whole resolved chain before its first write, and
/// [`set_to`](crate::Theme::set_to) checks provider identity before copying.
/// Attribute lookup has no failure channel of its own — an unresolvable or
/// cyclic indirection chain reports `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThemeError {
    /// The style identifier does not resolve to any resource.
    StyleNotFound(ResourceId),
    /// The parent chain revisited a style or exceeded the chain bound.
    CyclicStyleChain(ResourceId),
    /// The identifier resolves to a resource that is not a well-formed
    /// style.
    MalformedStyle(ResourceId),
    /// `set_to` was given a theme bound to a different provider instance.
    ProviderMismatch,
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StyleNotFound(id) => write!(f, "style {id} not found"),
            Self::CyclicStyleChain(id) => {
                write!(f, "style parent chain through {id} is cyclic or too deep")
            }
            Self::MalformedStyle(id) => write!(f, "resource {id} is not a well-formed style"),
            Self::ProviderMismatch => {
                f.write_str("themes are bound to different resource providers")
            }
        }
    }
}

impl core::error::Error for ThemeError {}
