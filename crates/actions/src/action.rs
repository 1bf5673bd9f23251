// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The reversible action protocol and the base shared by actions that edit a
//! canvas
//!

use crate::{
    ActionError, KeyframeObserver, Param, ParamDesc, ParamKind, ParamList, ParamVocab, Result,
    SharedCanvas, candidate_check,
};
use log::debug;

/// What part of the document an action works on
#[derive(derive_more::Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Canvas,
    Keyframe,
}

/// Static description of an action kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionInfo {
    /// Name used to look the action up
    pub name: &'static str,

    /// Name shown to the user
    pub local_name: &'static str,

    /// Icon/task hint for front ends
    pub task: &'static str,

    pub category: Category,

    /// Higher priority actions are listed first
    pub priority: i32,

    pub version: &'static str,
}

/// Where an action is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActionState {
    /// Nothing bound yet
    #[default]
    Unbound,

    /// Parameters bound, not (or no longer) prepared
    Bound,

    /// Checked against the document, can be performed
    Prepared,

    /// Performed, can be undone
    Performed,
}

/// Implementing types are reversible edits to a document
///
/// The lifecycle is: bind parameters ([`Action::set_param`]), check
/// [`Action::is_ready`], [`Action::prepare`], [`Action::perform`], then
/// [`Action::undo`] and [`Action::perform`] again to redo.
pub trait Action {
    /// Static description of the action kind
    fn info(&self) -> &'static ActionInfo;

    /// The parameters this action accepts
    fn param_vocab(&self) -> ParamVocab;

    /// Whether the action could be built from `list`
    fn is_candidate(&self, list: &ParamList) -> bool {
        candidate_check(&self.param_vocab(), list)
    }

    /// Bind one parameter.  A rejected parameter leaves the action unchanged,
    /// as does any parameter while the action is performed.
    fn set_param(&mut self, name: &str, param: Param) -> Result<()>;

    /// Bind every parameter in `list` this action accepts, returning how many
    /// were bound
    fn set_param_list(&mut self, list: &ParamList) -> usize {
        list.iter()
            .filter(|(name, param)| self.set_param(name, (*param).clone()).is_ok())
            .count()
    }

    /// Whether enough is bound to prepare
    fn is_ready(&self) -> bool;

    /// Whether performing the action modifies the document
    fn is_dirty(&self) -> bool;

    fn state(&self) -> ActionState;

    /// Check the bound parameters against the live document.  On error the
    /// document is untouched.  Fails while the action is performed.
    fn prepare(&mut self) -> Result<()>;

    fn perform(&mut self) -> Result<()>;

    /// Exactly reverse [`Action::perform`]
    fn undo(&mut self) -> Result<()>;
}

/// The state shared by actions that edit a canvas: the canvas itself, who to
/// notify about changes, and the lifecycle state
#[derive(Debug, Default)]
pub struct CanvasSpecific {
    canvas: Option<SharedCanvas>,
    observer: KeyframeObserver,
    dirty: bool,
    state: ActionState,
}

impl CanvasSpecific {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parameters every canvas action accepts
    pub fn param_vocab() -> ParamVocab {
        vec![
            ParamDesc::new("canvas", ParamKind::Canvas)
                .set_local_name("Canvas")
                .set_desc("Selected canvas"),
            ParamDesc::new("canvas_interface", ParamKind::CanvasInterface)
                .set_local_name("Canvas Interface")
                .set_desc("Canvas interface")
                .optional(),
        ]
    }

    /// Bind `canvas` or `canvas_interface`, rejecting anything else
    pub fn set_param(&mut self, name: &str, param: Param) -> Result<()> {
        self.check_not_performed()?;
        match (name, param) {
            ("canvas", Param::Canvas(canvas)) => self.canvas = Some(canvas),
            ("canvas_interface", Param::CanvasInterface(interface)) => {
                self.observer = KeyframeObserver::Attached(interface)
            }
            (name, param) => {
                return Err(ActionError::ParamRejected {
                    name: name.to_string(),
                    kind: param.kind(),
                });
            }
        }
        self.bound();
        Ok(())
    }

    /// Whether a canvas is bound
    pub fn is_ready(&self) -> bool {
        self.canvas.is_some()
    }

    pub fn canvas(&self) -> Result<&SharedCanvas> {
        self.canvas.as_ref().ok_or(ActionError::NotReady)
    }

    pub fn observer(&self) -> &KeyframeObserver {
        &self.observer
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    /// Fail if the action is performed.  A performed action keeps its
    /// parameters and preparation until it is undone.
    pub fn check_not_performed(&self) -> Result<()> {
        match self.state {
            ActionState::Performed => Err(ActionError::AlreadyPerformed),
            _ => Ok(()),
        }
    }

    /// Record that a parameter was (re)bound, so a new prepare is needed
    pub fn bound(&mut self) {
        self.state = ActionState::Bound;
    }

    /// Drop any result of an earlier prepare
    pub fn clear(&mut self) {
        if self.state == ActionState::Prepared {
            self.state = ActionState::Bound;
        }
    }

    /// Record a successful prepare (or roll back a failed perform)
    pub fn prepared(&mut self) {
        self.state = ActionState::Prepared;
    }

    /// Record a successful perform (or roll back a failed undo)
    pub fn performed(&mut self) {
        self.state = ActionState::Performed;
    }

    /// Check the action may be performed, and record that it has been
    pub fn perform(&mut self, info: &ActionInfo) -> Result<()> {
        if self.state != ActionState::Prepared {
            return Err(ActionError::NotPrepared);
        }
        debug!("perform {}", info.name);
        self.performed();
        Ok(())
    }

    /// Check the action may be undone, and record that it has been
    pub fn undo(&mut self, info: &ActionInfo) -> Result<()> {
        if self.state != ActionState::Performed {
            return Err(ActionError::NotPerformed);
        }
        debug!("undo {}", info.name);
        self.prepared();
        Ok(())
    }
}
