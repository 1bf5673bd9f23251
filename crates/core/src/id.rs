// SPDX-License-Identifier: MIT

//!
//! Identity for things whose other fields can change (e.g. a keyframe that is
//! moved along the timeline is still the same keyframe)
//!

use uuid::Uuid;

/// Which keyframe this is, independent of where it sits on the timeline or
/// whether it is active.  Copies of a keyframe share it, which is how an
/// action's copy finds the live keyframe again.
///
/// A UUIDv4, so a freshly made keyframe never takes the identity of one that
/// is still referenced elsewhere (e.g. by an undo history).
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UniqueId(Uuid);

impl UniqueId {
    /// A fresh identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Restore an identity from its text form (e.g. a saved document)
    pub fn from<S: ToString>(string: S) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(&string.to_string())?))
    }
}

impl Default for UniqueId {
    fn default() -> Self {
        Self::new()
    }
}
