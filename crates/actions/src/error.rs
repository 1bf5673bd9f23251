// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Action errors
//!

use crate::ParamKind;
use thiserror::Error;

/// Result type for action operations
pub type Result<T> = std::result::Result<T, ActionError>;

/// Errors that can arise while binding, preparing, performing or undoing an
/// action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Prepare/perform was called before the action was ready (a usage
    /// error, not something to show the user)
    #[error("Action not ready")]
    NotReady,

    /// The document no longer holds what the action refers to
    #[error("{0}")]
    NotFound(String),

    /// Perform was called without a successful prepare
    #[error("Action has not been prepared")]
    NotPrepared,

    /// Undo was called on an action that hasn't been performed
    #[error("Action has not been performed")]
    NotPerformed,

    /// Prepare or a parameter change was attempted on a performed action
    /// (undo it first)
    #[error("Action has already been performed")]
    AlreadyPerformed,

    /// The action has no parameter of this name and kind
    #[error("Parameter `{name}` of kind {kind} is not accepted")]
    ParamRejected { name: String, kind: ParamKind },

    /// The canvas is already borrowed (e.g. by an observer that is still
    /// running)
    #[error("The canvas is in use")]
    CanvasBorrowed,
}
