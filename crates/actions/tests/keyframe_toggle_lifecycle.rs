// SPDX-License-Identifier: GPL-3.0-or-later

//! Lifecycle scenarios for the keyframe toggle action against a live canvas

use open_keyframe_actions::{
    Action, ActionError, ActionState, Canvas, KeyframeChangedSignal, KeyframeToggle, Param,
    ParamList, SharedCanvas,
};
use open_keyframe_core::{Keyframe, KeyframeList, Time};
use open_keyframe_macros::time;
use std::cell::RefCell;
use std::rc::Rc;

/// Canvas with active keyframes at 0, 5 and 10
fn canvas() -> SharedCanvas {
    let keyframes: KeyframeList = [time!(0), time!(5), time!(10)]
        .into_iter()
        .map(|time| {
            let mut keyframe = Keyframe::new(time);
            keyframe.set_description(format!("at {time}"));
            keyframe
        })
        .collect();
    Canvas::from_keyframes(keyframes).into_shared()
}

fn keyframe_at(canvas: &SharedCanvas, time: Time) -> Keyframe {
    canvas
        .borrow()
        .keyframe_list()
        .find_by_time(time)
        .unwrap()
        .clone()
}

fn toggle_for(canvas: &SharedCanvas, keyframe: &Keyframe) -> KeyframeToggle {
    let mut action = KeyframeToggle::new();
    action
        .set_param("keyframe", Param::Keyframe(keyframe.clone()))
        .unwrap();
    action
        .set_param("canvas", Param::Canvas(Rc::clone(canvas)))
        .unwrap();
    action
}

#[test]
fn perform_then_undo_restores_everything() {
    let canvas = canvas();
    let before = keyframe_at(&canvas, time!(5));

    let mut action = toggle_for(&canvas, &before);
    action.prepare().unwrap();
    action.perform().unwrap();
    assert!(!keyframe_at(&canvas, time!(5)).active());

    action.undo().unwrap();
    let after = keyframe_at(&canvas, time!(5));
    assert_eq!(after.active(), before.active());
    assert_eq!(after.time(), before.time());
    assert_eq!(after.description(), before.description());
    assert_eq!(after.id(), before.id());
    assert_eq!(action.keyframe().active(), before.active());
}

#[test]
fn redo_matches_single_perform() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(10));

    let mut action = toggle_for(&canvas, &keyframe);
    action.prepare().unwrap();
    action.perform().unwrap();
    let once = keyframe_at(&canvas, time!(10)).active();

    action.undo().unwrap();
    action.perform().unwrap();
    assert_eq!(keyframe_at(&canvas, time!(10)).active(), once);
    assert_eq!(action.state(), ActionState::Performed);
}

#[test]
fn toggling_a_disabled_keyframe_enables_it() {
    let canvas = canvas();
    canvas
        .borrow_mut()
        .keyframe_list_mut()
        .find_by_time_mut(time!(0))
        .unwrap()
        .disable();
    let keyframe = keyframe_at(&canvas, time!(0));

    let mut action = toggle_for(&canvas, &keyframe);
    action.prepare().unwrap();
    action.perform().unwrap();
    assert!(keyframe_at(&canvas, time!(0)).active());
    action.undo().unwrap();
    assert!(!keyframe_at(&canvas, time!(0)).active());
}

#[test]
fn prepare_fails_for_missing_keyframe() {
    let canvas = canvas();
    let stranger = Keyframe::new(time!(5));

    let mut action = toggle_for(&canvas, &stranger);
    let error = action.prepare().unwrap_err();
    assert_eq!(
        error,
        ActionError::NotFound("Unable to find the given keyframe".to_string())
    );
    assert_eq!(error.to_string(), "Unable to find the given keyframe");

    // Nothing was touched and nothing can be performed
    assert!(canvas.borrow().keyframe_list().iter().all(Keyframe::active));
    assert_eq!(action.perform(), Err(ActionError::NotPrepared));
    assert!(canvas.borrow().keyframe_list().iter().all(Keyframe::active));
}

#[test]
fn prepare_fails_after_keyframe_erased() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));
    canvas.borrow_mut().keyframe_list_mut().erase(keyframe.id());

    let mut action = toggle_for(&canvas, &keyframe);
    assert!(matches!(action.prepare(), Err(ActionError::NotFound(_))));
}

#[test]
fn last_prepared_wins_when_keyframe_erased_after_prepare() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));

    let mut action = toggle_for(&canvas, &keyframe);
    action.prepare().unwrap();
    canvas.borrow_mut().keyframe_list_mut().erase(keyframe.id());

    // Perform doesn't re-check the document
    action.perform().unwrap();
    assert!(!action.keyframe().active());
    assert_eq!(canvas.borrow().keyframe_list().len(), 2);
}

#[test]
fn missing_observer_does_not_stop_the_edit() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));

    let mut action = toggle_for(&canvas, &keyframe);
    action.prepare().unwrap();
    action.perform().unwrap();
    assert!(!keyframe_at(&canvas, time!(5)).active());
}

#[test]
fn observer_can_reconcile_by_identity() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));
    let signal = Rc::new(KeyframeChangedSignal::new());

    // The slot reads the live keyframe while it is being told about the change
    let seen = Rc::new(RefCell::new(Vec::new()));
    let slot_canvas = Rc::clone(&canvas);
    let slot_seen = Rc::clone(&seen);
    signal.connect(move |changed: &Keyframe| {
        let live_active = slot_canvas
            .borrow()
            .keyframe_list()
            .find(changed.id())
            .map(Keyframe::active);
        slot_seen.borrow_mut().push((changed.active(), live_active));
    });

    let mut action = toggle_for(&canvas, &keyframe);
    action
        .set_param("canvas_interface", Param::CanvasInterface(signal))
        .unwrap();
    action.prepare().unwrap();
    action.perform().unwrap();
    action.undo().unwrap();

    // Perform: told before the toggle.  Undo: told after toggling back.
    assert_eq!(*seen.borrow(), vec![(true, Some(true)), (true, Some(true))]);
}

#[test]
fn undo_requires_perform() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));

    let mut action = toggle_for(&canvas, &keyframe);
    assert_eq!(action.undo(), Err(ActionError::NotPerformed));
    action.prepare().unwrap();
    assert_eq!(action.undo(), Err(ActionError::NotPerformed));
    action.perform().unwrap();
    action.undo().unwrap();
    assert_eq!(action.undo(), Err(ActionError::NotPerformed));
}

#[test]
fn rebinding_needs_a_new_prepare() {
    let canvas = canvas();
    let first = keyframe_at(&canvas, time!(0));
    let second = keyframe_at(&canvas, time!(10));

    let mut action = toggle_for(&canvas, &first);
    action.prepare().unwrap();
    action
        .set_param("keyframe", Param::Keyframe(second.clone()))
        .unwrap();
    assert_eq!(action.state(), ActionState::Bound);
    assert_eq!(action.perform(), Err(ActionError::NotPrepared));

    action.prepare().unwrap();
    action.perform().unwrap();
    assert!(keyframe_at(&canvas, time!(0)).active());
    assert!(!keyframe_at(&canvas, time!(10)).active());
}

#[test]
fn busy_canvas_leaves_action_prepared() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));
    let signal = Rc::new(KeyframeChangedSignal::new());
    let notified = Rc::new(RefCell::new(0));
    let slot_notified = Rc::clone(&notified);
    signal.connect(move |_: &Keyframe| *slot_notified.borrow_mut() += 1);

    let mut action = toggle_for(&canvas, &keyframe);
    action
        .set_param("canvas_interface", Param::CanvasInterface(signal))
        .unwrap();
    action.prepare().unwrap();

    let held = canvas.borrow();
    assert_eq!(action.perform(), Err(ActionError::CanvasBorrowed));
    drop(held);

    // A failed perform is not observable
    assert_eq!(*notified.borrow(), 0);
    assert_eq!(action.state(), ActionState::Prepared);
    assert!(action.keyframe().active());
    assert!(keyframe_at(&canvas, time!(5)).active());

    action.perform().unwrap();
    assert_eq!(*notified.borrow(), 1);
    assert!(!keyframe_at(&canvas, time!(5)).active());

    // Same for a failed undo
    let held = canvas.borrow();
    assert_eq!(action.undo(), Err(ActionError::CanvasBorrowed));
    drop(held);
    assert_eq!(*notified.borrow(), 1);
    assert_eq!(action.state(), ActionState::Performed);
    assert!(!keyframe_at(&canvas, time!(5)).active());
}

#[test]
fn undo_restores_keyframe_changed_after_binding() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));

    let mut action = toggle_for(&canvas, &keyframe);
    action.prepare().unwrap();

    // The live keyframe no longer matches the action's copy
    canvas
        .borrow_mut()
        .keyframe_list_mut()
        .find_mut(keyframe.id())
        .unwrap()
        .disable();

    action.perform().unwrap();
    assert!(keyframe_at(&canvas, time!(5)).active());
    assert!(!action.keyframe().active());

    action.undo().unwrap();
    assert!(!keyframe_at(&canvas, time!(5)).active());
    assert!(action.keyframe().active());
}

#[test]
fn performed_action_cannot_be_prepared_again() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));

    let mut action = toggle_for(&canvas, &keyframe);
    action.prepare().unwrap();
    action.perform().unwrap();

    assert_eq!(action.prepare(), Err(ActionError::AlreadyPerformed));
    assert_eq!(action.state(), ActionState::Performed);
    assert_eq!(action.perform(), Err(ActionError::NotPrepared));
    assert!(!keyframe_at(&canvas, time!(5)).active());

    action.undo().unwrap();
    assert!(keyframe_at(&canvas, time!(5)).active());

    // Undone, it can be prepared again
    action.prepare().unwrap();
    assert_eq!(action.state(), ActionState::Prepared);
}

#[test]
fn performed_action_keeps_its_params() {
    let canvas = canvas();
    let first = keyframe_at(&canvas, time!(5));
    let second = keyframe_at(&canvas, time!(10));

    let mut action = toggle_for(&canvas, &first);
    action.prepare().unwrap();
    action.perform().unwrap();

    assert_eq!(
        action.set_param("keyframe", Param::Keyframe(second.clone())),
        Err(ActionError::AlreadyPerformed)
    );
    assert_eq!(
        action.set_param("canvas", Param::Canvas(Rc::clone(&canvas))),
        Err(ActionError::AlreadyPerformed)
    );
    assert!(action.keyframe().same_identity(&first));
    assert_eq!(action.state(), ActionState::Performed);

    action.undo().unwrap();
    assert!(keyframe_at(&canvas, time!(5)).active());
    assert!(keyframe_at(&canvas, time!(10)).active());
}

#[test]
fn bind_from_param_list() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));
    let mut action = KeyframeToggle::new();

    let mut list = ParamList::new();
    list.insert("keyframe".to_string(), Param::Keyframe(keyframe));
    assert!(!action.is_candidate(&list));

    list.insert("canvas".to_string(), Param::Canvas(Rc::clone(&canvas)));
    list.insert("ignored".to_string(), Param::Bool(true));
    assert!(action.is_candidate(&list));

    assert_eq!(action.set_param_list(&list), 2);
    assert!(action.is_ready());
    action.prepare().unwrap();
    action.perform().unwrap();
    assert!(!keyframe_at(&canvas, time!(5)).active());
}

#[test]
fn neighbour_search_follows_toggles() {
    let canvas = canvas();
    let keyframe = keyframe_at(&canvas, time!(5));

    let mut action = toggle_for(&canvas, &keyframe);
    action.prepare().unwrap();
    action.perform().unwrap();
    assert_eq!(
        canvas.borrow().keyframe_list().find_prev_next(time!(7), true),
        (time!(0), time!(10))
    );

    action.undo().unwrap();
    assert_eq!(
        canvas.borrow().keyframe_list().find_prev_next(time!(7), true),
        (time!(5), time!(10))
    );
}
