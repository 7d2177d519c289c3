//! Error type for screen registration and navigation.

use core::fmt;

/// Failure of a [`ScreenHost`](crate::host::ScreenHost) operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiError {
    /// No screen is registered under the requested name or index.
    NotFound,
    /// A screen with the same name is already registered.
    DuplicateName,
    /// The fixed-capacity registry has no free slot.
    RegistryFull,
}

impl fmt::Display for UiError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("screen not found"),
            Self::DuplicateName => f.write_str("duplicate screen name"),
            Self::RegistryFull => f.write_str("screen registry full"),
        }
    }
}

impl core::error::Error for UiError {}
