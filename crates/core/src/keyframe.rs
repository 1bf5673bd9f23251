// SPDX-License-Identifier: MIT

//!
//! The OpenKeyframe keyframe type
//!

use crate::{Time, UniqueId, WaypointModel};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A marker recording the state of the animation at a point in time
///
/// A keyframe can have a description, be enabled or disabled, and carry a
/// [`WaypointModel`].  When disabled it acts as a plain time marker.
///
/// Keyframes are ordered by time (see [`Keyframe::cmp_time`]) and identified
/// by [`UniqueId`] (see [`Keyframe::same_identity`]).  There is deliberately
/// no `PartialEq` between keyframes, so the two are never mixed up.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Keyframe {
    /// The keyframe's identity (survives changes to the time)
    id: UniqueId,

    /// Where the keyframe sits on the timeline
    time: Time,

    /// Free-form description
    description: String,

    /// `true` if the keyframe is active, `false` if it is to be skipped
    active: bool,

    /// The associated waypoint model
    model: WaypointModel,

    /// `true` once a model has been applied
    has_model: bool,
}

impl Keyframe {
    /// Create an active keyframe with a new identity
    pub fn new(time: Time) -> Self {
        Keyframe {
            id: UniqueId::new(),
            time,
            description: String::new(),
            active: true,
            model: WaypointModel::new(),
            has_model: false,
        }
    }

    /// Get the keyframe's [`Time`]
    pub fn time(&self) -> Time {
        self.time
    }

    /// Set the keyframe's [`Time`].  A keyframe already in a
    /// [`crate::KeyframeList`] must be followed by a call to
    /// [`crate::KeyframeList::sync`].
    pub fn set_time(&mut self, time: Time) {
        self.time = time;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description<S: ToString>(&mut self, description: S) {
        self.description = description.to_string();
    }

    /// Get the keyframe's identity
    pub fn id(&self) -> UniqueId {
        self.id
    }

    /// Overwrite the identity.  Only for restoring a keyframe that existed
    /// before (e.g. undoing its removal).
    pub fn set_id(&mut self, id: UniqueId) {
        self.id = id;
    }

    /// Enable the keyframe, making it active
    pub fn enable(&mut self) {
        self.set_active(true);
    }

    /// Disable the keyframe.  It then acts as a simple time marker.
    pub fn disable(&mut self) {
        self.set_active(false);
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Whether the keyframe is active
    pub fn active(&self) -> bool {
        self.active
    }

    /// Keep a trace of the associated waypoint model.  Merges into any model
    /// applied earlier.
    pub fn apply_model(&mut self, model: &WaypointModel) {
        self.model.apply(model);
        self.has_model = true;
    }

    /// Whether a model has ever been applied
    pub fn has_model(&self) -> bool {
        self.has_model
    }

    pub fn model(&self) -> &WaypointModel {
        &self.model
    }

    /// Order by time only
    pub fn cmp_time(&self, other: &Keyframe) -> Ordering {
        self.time.cmp(&other.time)
    }

    /// Whether both are the same keyframe, regardless of their other fields
    pub fn same_identity(&self, other: &Keyframe) -> bool {
        self.id == other.id
    }
}

impl PartialEq<Time> for Keyframe {
    fn eq(&self, time: &Time) -> bool {
        self.time == *time
    }
}

impl PartialOrd<Time> for Keyframe {
    fn partial_cmp(&self, time: &Time) -> Option<Ordering> {
        Some(self.time.cmp(time))
    }
}
