// SPDX-License-Identifier: MIT

//!
//! *Part of the wider OpenKeyframe project*
//!
//! This crate defines the basic datatypes of an animation timeline: the
//! [`Time`] a marker sits at, the [`UniqueId`] that identifies it, the
//! [`Keyframe`] marker itself, and the sorted [`KeyframeList`] with its
//! neighbour searches.
//!
//! It is used by the `actions` crate (reversible edits) and the command line
//! tool.
//!

mod id;
mod keyframe;
mod keyframe_list;
mod time;
mod waypoint_model;

pub use id::*;
pub use keyframe::*;
pub use keyframe_list::*;
pub use time::*;
pub use waypoint_model::*;
