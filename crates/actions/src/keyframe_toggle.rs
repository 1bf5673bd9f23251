// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Activate/deactivate a keyframe
//!

use crate::{
    Action, ActionError, ActionInfo, ActionState, CanvasSpecific, Category, Param, ParamDesc,
    ParamKind, ParamVocab, Result,
};
use log::debug;
use open_keyframe_core::{Keyframe, Time};

const INFO: ActionInfo = ActionInfo {
    name: "KeyframeToggl",
    local_name: "Activate/Deactivate Keyframe",
    task: "disconnect",
    category: Category::Keyframe,
    priority: 0,
    version: "0.0",
};

/// Flip a keyframe between active and disabled
///
/// The action works on its own copy of the keyframe, bound with the
/// `keyframe` parameter.  Performing flips the copy and writes the new flag
/// onto the keyframe with the same identity in the canvas.  Undoing flips it
/// again, so perform and undo are the same involution.
#[derive(Debug)]
pub struct KeyframeToggle {
    base: CanvasSpecific,
    keyframe: Keyframe,
}

impl KeyframeToggle {
    pub fn new() -> Self {
        let mut base = CanvasSpecific::new();
        base.set_dirty(true);
        Self {
            base,
            keyframe: Keyframe::new(Time::undefined()),
        }
    }

    /// The action's copy of the keyframe
    pub fn keyframe(&self) -> &Keyframe {
        &self.keyframe
    }

    /// Flip the copy, and flip the live keyframe with the same identity on
    /// its own, so both are involutions even if they have drifted apart.  If
    /// the live keyframe has gone since prepare, only the copy changes.
    /// Nothing changes if the canvas is in use.
    fn toggle(&mut self) -> Result<()> {
        let mut canvas = self
            .base
            .canvas()?
            .try_borrow_mut()
            .map_err(|_| ActionError::CanvasBorrowed)?;

        self.keyframe.set_active(!self.keyframe.active());
        match canvas.keyframe_list_mut().find_mut(self.keyframe.id()) {
            Some(live) => live.set_active(!live.active()),
            None => debug!("keyframe {} gone since prepare", self.keyframe.id()),
        }
        Ok(())
    }

    /// Fail unless [`KeyframeToggle::toggle`] could borrow the canvas now
    fn check_canvas_free(&self) -> Result<()> {
        self.base
            .canvas()?
            .try_borrow_mut()
            .map(drop)
            .map_err(|_| ActionError::CanvasBorrowed)
    }
}

impl Default for KeyframeToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for KeyframeToggle {
    fn info(&self) -> &'static ActionInfo {
        &INFO
    }

    fn param_vocab(&self) -> ParamVocab {
        let mut vocab = CanvasSpecific::param_vocab();
        vocab.push(
            ParamDesc::new("keyframe", ParamKind::Keyframe)
                .set_local_name("Keyframe")
                .set_desc("Keyframe to be activated or deactivated"),
        );
        vocab
    }

    fn set_param(&mut self, name: &str, param: Param) -> Result<()> {
        match (name, param) {
            ("keyframe", Param::Keyframe(keyframe)) => {
                self.base.check_not_performed()?;
                self.keyframe = keyframe;
                self.base.bound();
                Ok(())
            }
            (name, param) => self.base.set_param(name, param),
        }
    }

    fn is_ready(&self) -> bool {
        !self.keyframe.time().is_undefined() && self.base.is_ready()
    }

    fn is_dirty(&self) -> bool {
        self.base.is_dirty()
    }

    fn state(&self) -> ActionState {
        self.base.state()
    }

    fn prepare(&mut self) -> Result<()> {
        self.base.check_not_performed()?;
        if !self.is_ready() {
            return Err(ActionError::NotReady);
        }
        self.base.clear();

        let found = self
            .base
            .canvas()?
            .try_borrow()
            .map_err(|_| ActionError::CanvasBorrowed)?
            .keyframe_list()
            .find(self.keyframe.id())
            .is_some();
        if !found {
            return Err(ActionError::NotFound(
                "Unable to find the given keyframe".to_string(),
            ));
        }

        self.base.prepared();
        Ok(())
    }

    fn perform(&mut self) -> Result<()> {
        if !self.is_ready() {
            return Err(ActionError::NotReady);
        }
        self.base.perform(&INFO)?;

        // Observers see the keyframe as it was before the toggle, and only if
        // the toggle can go ahead
        let result = self.check_canvas_free().and_then(|()| {
            self.base.observer().keyframe_changed(&self.keyframe);
            self.toggle()
        });
        if result.is_err() {
            self.base.prepared();
        }
        result
    }

    fn undo(&mut self) -> Result<()> {
        self.base.undo(&INFO)?;
        if let Err(error) = self.toggle() {
            self.base.performed();
            return Err(error);
        }
        self.base.observer().keyframe_changed(&self.keyframe);
        Ok(())
    }
}
