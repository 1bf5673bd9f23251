// SPDX-License-Identifier: MIT

//!
//! The sorted keyframe list and its timeline searches
//!

use crate::{Keyframe, Time, UniqueId};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// A list of [`Keyframe`]s sorted by time
///
/// The list is sorted after every [`KeyframeList::add`] and
/// [`KeyframeList::sync`].  The searches assume it is sorted, so anything
/// that moves a keyframe in place (e.g. via [`KeyframeList::iter_mut`]) must
/// call [`KeyframeList::sync`] afterwards.
///
/// Searches never fail: "not found" is `None`.
#[rustfmt::skip]
#[derive(derive_more::IntoIterator, derive_more::Index, Serialize, Deserialize, Default, Clone, Debug)]
#[into_iterator(owned, ref, ref_mut)]
pub struct KeyframeList(Vec<Keyframe>);

impl KeyframeList {
    /// Create an empty `KeyframeList`
    pub fn new() -> Self {
        KeyframeList(Vec::new())
    }

    /// Add a keyframe and sort the list.  Keyframes sharing a time are all
    /// kept.
    pub fn add(&mut self, keyframe: Keyframe) {
        debug!("add keyframe {} at {}", keyframe.id(), keyframe.time());
        self.0.push(keyframe);
        self.sync();
    }

    /// Remove the keyframe with the given ID.  Nothing happens if not found.
    pub fn erase(&mut self, id: UniqueId) {
        if let Some(index) = self.position(id) {
            debug!("erase keyframe {id}");
            self.0.remove(index);
        }
    }

    /// Index of the keyframe with the given ID
    pub fn position(&self, id: UniqueId) -> Option<usize> {
        self.0.iter().position(|keyframe| keyframe.id() == id)
    }

    /// Find the keyframe with the given ID
    pub fn find(&self, id: UniqueId) -> Option<&Keyframe> {
        self.0.iter().find(|keyframe| keyframe.id() == id)
    }

    /// Find the keyframe with the given ID, for editing
    pub fn find_mut(&mut self, id: UniqueId) -> Option<&mut Keyframe> {
        self.0.iter_mut().find(|keyframe| keyframe.id() == id)
    }

    /// Find the first keyframe at exactly the given time
    pub fn find_by_time(&self, time: Time) -> Option<&Keyframe> {
        self.0.iter().find(|keyframe| **keyframe == time)
    }

    /// Find the first keyframe at exactly the given time, for editing
    pub fn find_by_time_mut(&mut self, time: Time) -> Option<&mut Keyframe> {
        self.0.iter_mut().find(|keyframe| **keyframe == time)
    }

    /// Find the first keyframe after `time` (a keyframe at `time` itself is
    /// not included).  With `ignore_disabled`, disabled keyframes are skipped.
    pub fn find_next(&self, time: Time, ignore_disabled: bool) -> Option<&Keyframe> {
        let found = self
            .0
            .iter()
            .filter(|keyframe| !ignore_disabled || keyframe.active())
            .find(|keyframe| **keyframe > time);
        trace!("next after {time}: {:?}", found.map(Keyframe::time));
        found
    }

    /// Find the nearest keyframe before `time` (a keyframe at `time` itself
    /// is not included).  With `ignore_disabled`, disabled keyframes are
    /// skipped.
    pub fn find_prev(&self, time: Time, ignore_disabled: bool) -> Option<&Keyframe> {
        let found = self
            .0
            .iter()
            .rev()
            .filter(|keyframe| !ignore_disabled || keyframe.active())
            .find(|keyframe| **keyframe < time);
        trace!("prev before {time}: {:?}", found.map(Keyframe::time));
        found
    }

    /// The times of the keyframes either side of `time`, as used to bound an
    /// interval around it.
    ///
    /// Unlike [`KeyframeList::find_prev`] and [`KeyframeList::find_next`]
    /// this always yields times: [`Time::begin`] when there is no keyframe
    /// before, and [`Time::end`] when there is none after.
    pub fn find_prev_next(&self, time: Time, ignore_disabled: bool) -> (Time, Time) {
        let prev = self
            .find_prev(time, ignore_disabled)
            .map_or(Time::begin(), Keyframe::time);
        let next = self
            .find_next(time, ignore_disabled)
            .map_or(Time::end(), Keyframe::time);
        (prev, next)
    }

    /// Sort the list.  Must be called after changing the time of a keyframe
    /// that is already in the list.
    pub fn sync(&mut self) {
        debug!("resort {} keyframes", self.0.len());
        self.0.sort_by(Keyframe::cmp_time);
    }

    /// Whether the list is currently sorted by time
    pub fn is_sorted(&self) -> bool {
        self.0.is_sorted_by(|a, b| a.time() <= b.time())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Keyframe> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.0.iter()
    }

    /// Iterate for editing in place.  Call [`KeyframeList::sync`] afterwards
    /// if any time was changed.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Keyframe> {
        self.0.iter_mut()
    }

    /// Log every keyframe at debug level
    pub fn dump(&self) {
        debug!("keyframe list ({} entries)", self.0.len());
        for (index, keyframe) in self.0.iter().enumerate() {
            debug!(
                "  #{index} time={} active={} id={} description={:?}",
                keyframe.time(),
                keyframe.active(),
                keyframe.id(),
                keyframe.description()
            );
        }
    }
}

impl FromIterator<Keyframe> for KeyframeList {
    fn from_iter<T: IntoIterator<Item = Keyframe>>(iter: T) -> Self {
        let mut list = KeyframeList(iter.into_iter().collect());
        list.sync();
        list
    }
}
