// SPDX-License-Identifier: MIT

//!
//! The waypoint model a keyframe can carry.  This crate doesn't evaluate
//! animation, it only stores the settings so they can be restored later.
//!

use serde::{Deserialize, Serialize};

/// How a waypoint is approached or left
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interpolation {
    Clamped,
    Tcb,
    Constant,
    Ease,
    Linear,
}

/// A partial set of waypoint settings.  Each field is `None` until set.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct WaypointModel {
    priority: Option<i32>,
    before: Option<Interpolation>,
    after: Option<Interpolation>,
    tension: Option<f64>,
    continuity: Option<f64>,
    bias: Option<f64>,
    temporal_tension: Option<f64>,
}

impl WaypointModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy every field that is set in `other` into this model.  Fields not
    /// set in `other` are left alone.
    pub fn apply(&mut self, other: &WaypointModel) {
        if other.priority.is_some() {
            self.priority = other.priority;
        }
        if other.before.is_some() {
            self.before = other.before;
        }
        if other.after.is_some() {
            self.after = other.after;
        }
        if other.tension.is_some() {
            self.tension = other.tension;
        }
        if other.continuity.is_some() {
            self.continuity = other.continuity;
        }
        if other.bias.is_some() {
            self.bias = other.bias;
        }
        if other.temporal_tension.is_some() {
            self.temporal_tension = other.temporal_tension;
        }
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = Some(priority);
    }

    pub fn before(&self) -> Option<Interpolation> {
        self.before
    }

    pub fn set_before(&mut self, interpolation: Interpolation) {
        self.before = Some(interpolation);
    }

    pub fn after(&self) -> Option<Interpolation> {
        self.after
    }

    pub fn set_after(&mut self, interpolation: Interpolation) {
        self.after = Some(interpolation);
    }

    pub fn tension(&self) -> Option<f64> {
        self.tension
    }

    pub fn set_tension(&mut self, tension: f64) {
        self.tension = Some(tension);
    }

    pub fn continuity(&self) -> Option<f64> {
        self.continuity
    }

    pub fn set_continuity(&mut self, continuity: f64) {
        self.continuity = Some(continuity);
    }

    pub fn bias(&self) -> Option<f64> {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = Some(bias);
    }

    pub fn temporal_tension(&self) -> Option<f64> {
        self.temporal_tension
    }

    pub fn set_temporal_tension(&mut self, temporal_tension: f64) {
        self.temporal_tension = Some(temporal_tension);
    }
}
