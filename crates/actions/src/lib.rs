// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider OpenKeyframe project*
//!
//! This library crate provides reversible edits ("actions") on an animation
//! document.  It does the following:
//!
//! - Declares the parameters an action accepts and checks the values bound to
//! them
//! - Defines the action lifecycle (bind, prepare, perform, undo) and the state
//! shared by every action that edits a canvas
//! - Provides the canvas (the document owning the keyframe list) and the
//! signal used to tell the rest of the application about keyframe changes
//! - Implements the keyframe toggle action
//!
//! The undo stack that sequences actions is up to the application.
//!
//! This crate makes use of the basic OpenKeyframe `core` crate for primitive
//! types.
//!

mod action;
mod canvas;
mod error;
mod keyframe_toggle;
mod param;

pub use action::*;
pub use canvas::*;
pub use error::*;
pub use keyframe_toggle::*;
pub use param::*;
