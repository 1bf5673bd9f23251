// SPDX-License-Identifier: MIT

//!
//! The OpenKeyframe time type
//!

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{Add, Sub};
use thiserror::Error;

/// The earliest frame allowed on an OpenKeyframe timeline
pub const MIN_TIME: i64 = -16_777_216;

/// The latest frame allowed on an OpenKeyframe timeline
pub const MAX_TIME: i64 = 16_777_216;

/// Errors that can arise in relation to a [`Time`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// The frame is outside [`MIN_TIME`] <= frame <= [`MAX_TIME`]
    #[error("Frame `{0}` is outside the timeline")]
    OutOfRange(i64),

    /// Frame rates must be finite and positive
    #[error("Frame rate `{0}` is not allowed")]
    InvalidFps(f64),
}

/// The OpenKeyframe time type: a signed frame number on the timeline
///
/// Valid times lie between [`Time::begin`] and [`Time::end`].  One value
/// outside that range, [`Time::undefined`], marks a time that hasn't been set
/// yet.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Time(i64);

impl Time {
    /// The start of the timeline
    pub fn begin() -> Self {
        Time(MIN_TIME)
    }

    /// The end of the timeline
    pub fn end() -> Self {
        Time(MAX_TIME)
    }

    /// The "not yet set" sentinel, one frame before [`Time::begin`]
    pub fn undefined() -> Self {
        Time(MIN_TIME - 1)
    }

    /// Whether this is the [`Time::undefined`] sentinel
    pub fn is_undefined(&self) -> bool {
        *self == Self::undefined()
    }

    /// Get the frame number
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Convert seconds to the nearest frame at the given frame rate
    pub fn from_seconds(seconds: f64, fps: f64) -> Result<Self, TimeError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(TimeError::InvalidFps(fps));
        }
        let frame = (seconds * fps).round();
        if !frame.is_finite() || frame < MIN_TIME as f64 || frame > MAX_TIME as f64 {
            return Err(TimeError::OutOfRange(frame as i64));
        }
        Time::try_from(frame as i64)
    }

    /// Convert to seconds at the given frame rate
    pub fn as_seconds(&self, fps: f64) -> Result<f64, TimeError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(TimeError::InvalidFps(fps));
        }
        Ok(self.0 as f64 / fps)
    }
}

impl TryFrom<i64> for Time {
    type Error = TimeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_TIME..=MAX_TIME).contains(&value) {
            Ok(Time(value))
        } else {
            Err(TimeError::OutOfRange(value))
        }
    }
}

/// Offsets saturate at the `i64` limits rather than overflow.  The result
/// is not range checked: use [`Time::try_from`] on [`Time::value`] for that.
impl Add<i64> for Time {
    type Output = Time;
    fn add(self, frames: i64) -> Time {
        Time(self.0.saturating_add(frames))
    }
}

impl Sub<i64> for Time {
    type Output = Time;
    fn sub(self, frames: i64) -> Time {
        Time(self.0.saturating_sub(frames))
    }
}

/// The signed number of frames between two times
impl Sub for Time {
    type Output = i64;
    fn sub(self, other: Time) -> i64 {
        self.0.saturating_sub(other.0)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Time::try_from(value).map_err(serde::de::Error::custom)
    }
}
