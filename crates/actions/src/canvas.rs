// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The document that actions edit, and the channel used to tell the rest of
//! the application about those edits
//!

use log::warn;
use open_keyframe_core::{Keyframe, KeyframeList};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A canvas shared between the application and the actions editing it.
/// Single threaded: only the command dispatch thread touches it.
pub type SharedCanvas = Rc<RefCell<Canvas>>;

/// The document owning the keyframe list
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    keyframes: KeyframeList,
}

impl Canvas {
    /// Create a canvas with no keyframes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas holding the given keyframes
    pub fn from_keyframes(keyframes: KeyframeList) -> Self {
        Self { keyframes }
    }

    /// Wrap the canvas so it can be handed to actions
    pub fn into_shared(self) -> SharedCanvas {
        Rc::new(RefCell::new(self))
    }

    pub fn keyframe_list(&self) -> &KeyframeList {
        &self.keyframes
    }

    pub fn keyframe_list_mut(&mut self) -> &mut KeyframeList {
        &mut self.keyframes
    }
}

/// Implementing types want to hear about keyframe edits made by actions
pub trait CanvasInterface {
    /// Called synchronously with the action's copy of the keyframe.  Match
    /// it to the live keyframe by [`Keyframe::id`].
    fn signal_keyframe_changed(&self, keyframe: &Keyframe);
}

type Slot = Rc<dyn Fn(&Keyframe)>;

/// A [`CanvasInterface`] that fans each change out to every connected slot,
/// in the order they were connected
#[derive(Default)]
pub struct KeyframeChangedSignal {
    slots: RefCell<Vec<Slot>>,
}

impl KeyframeChangedSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `slot` on every future change
    pub fn connect<F>(&self, slot: F)
    where
        F: Fn(&Keyframe) + 'static,
    {
        self.slots.borrow_mut().push(Rc::new(slot));
    }

    /// Number of connected slots
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl CanvasInterface for KeyframeChangedSignal {
    fn signal_keyframe_changed(&self, keyframe: &Keyframe) {
        // Slots may connect further slots, which only hear later changes
        let slots = self.slots.borrow().clone();
        for slot in slots {
            slot(keyframe);
        }
    }
}

impl fmt::Debug for KeyframeChangedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyframeChangedSignal")
            .field("slots", &self.len())
            .finish()
    }
}

/// Who an action reports its keyframe changes to
#[derive(Clone, Default)]
pub enum KeyframeObserver {
    Attached(Rc<dyn CanvasInterface>),
    #[default]
    Detached,
}

impl KeyframeObserver {
    pub fn is_attached(&self) -> bool {
        matches!(self, KeyframeObserver::Attached(_))
    }

    /// Pass the change on.  With nothing attached, only a warning is logged.
    pub fn keyframe_changed(&self, keyframe: &Keyframe) {
        match self {
            KeyframeObserver::Attached(interface) => interface.signal_keyframe_changed(keyframe),
            KeyframeObserver::Detached => warn!("CanvasInterface not set on action"),
        }
    }
}

impl fmt::Debug for KeyframeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyframeObserver::Attached(_) => write!(f, "Attached(..)"),
            KeyframeObserver::Detached => write!(f, "Detached"),
        }
    }
}
