// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Action parameters and the vocabulary (schema) actions declare for them
//!

use crate::{CanvasInterface, SharedCanvas};
use open_keyframe_core::{Keyframe, Time};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// The kinds of value an action parameter can hold
#[derive(derive_more::Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Canvas,
    CanvasInterface,
    Keyframe,
    Time,
    String,
    Bool,
}

/// A parameter value
#[derive(Clone)]
pub enum Param {
    Canvas(SharedCanvas),
    CanvasInterface(Rc<dyn CanvasInterface>),
    Keyframe(Keyframe),
    Time(Time),
    String(String),
    Bool(bool),
}

impl Param {
    /// The kind of value held
    pub fn kind(&self) -> ParamKind {
        match self {
            Param::Canvas(_) => ParamKind::Canvas,
            Param::CanvasInterface(_) => ParamKind::CanvasInterface,
            Param::Keyframe(_) => ParamKind::Keyframe,
            Param::Time(_) => ParamKind::Time,
            Param::String(_) => ParamKind::String,
            Param::Bool(_) => ParamKind::Bool,
        }
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Canvas(_) => write!(f, "Canvas(..)"),
            Param::CanvasInterface(_) => write!(f, "CanvasInterface(..)"),
            Param::Keyframe(keyframe) => f.debug_tuple("Keyframe").field(keyframe).finish(),
            Param::Time(time) => f.debug_tuple("Time").field(time).finish(),
            Param::String(string) => f.debug_tuple("String").field(string).finish(),
            Param::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
        }
    }
}

/// Describes one parameter an action accepts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDesc {
    name: &'static str,
    kind: ParamKind,
    local_name: String,
    desc: String,
    optional: bool,
}

impl ParamDesc {
    /// A required parameter, labelled with its name until
    /// [`ParamDesc::set_local_name`] is used
    pub fn new(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            local_name: name.to_string(),
            desc: String::new(),
            optional: false,
        }
    }

    pub fn set_local_name<S: ToString>(mut self, local_name: S) -> Self {
        self.local_name = local_name.to_string();
        self
    }

    pub fn set_desc<S: ToString>(mut self, desc: S) -> Self {
        self.desc = desc.to_string();
        self
    }

    /// Mark the parameter as not needed for [`candidate_check`]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// The parameters an action accepts
pub type ParamVocab = Vec<ParamDesc>;

/// A set of named parameter values, e.g. what the user has selected
pub type ParamList = BTreeMap<String, Param>;

/// Whether `list` holds a value of the right kind for every required
/// parameter in `vocab`
pub fn candidate_check(vocab: &ParamVocab, list: &ParamList) -> bool {
    vocab.iter().filter(|desc| !desc.is_optional()).all(|desc| {
        list.get(desc.name())
            .is_some_and(|param| param.kind() == desc.kind())
    })
}
