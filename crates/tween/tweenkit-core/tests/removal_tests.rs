use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tweenkit_core::{Action, ActionValue, Config, Engine, TweenId};

type Handle = Rc<RefCell<f32>>;

fn value(raw: f32) -> Handle {
    Rc::new(RefCell::new(raw))
}

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn add(
    engine: &mut Engine<Handle>,
    target: &Handle,
    by: f32,
    duration: f32,
    queued: bool,
    completions: &Rc<Cell<u32>>,
) -> Action<Handle> {
    let mut action = engine.acquire_action();
    action.target = Some(target.clone());
    action.duration = duration;
    action.queued = queued;
    let counter = completions.clone();
    action.on_complete = Some(Box::new(move |_| counter.set(counter.get() + 1)));
    action.push_value(
        ActionValue::new(|t: &mut Handle| *t.borrow(), |t: &mut Handle, v| {
            *t.borrow_mut() = v
        })
        .value(by),
    );
    action
}

/// it should cancel a running action silently: no terminal write, no
/// completion callback
#[test]
fn remove_running_action_is_silent() {
    let mut engine: Engine<Handle> = Engine::new(Config::default());
    let target = value(0.0);
    let completions = Rc::new(Cell::new(0u32));

    let action = add(&mut engine, &target, 10.0, 2.0, false, &completions);
    let action_id = action.id;
    let id = engine.run_actions(vec![action], None);

    engine.update(1.0);
    approx(*target.borrow(), 5.0, 1e-4);

    assert!(engine.try_remove_action(id, action_id));
    assert!(!engine.has_action(id));
    assert_eq!(completions.get(), 0);

    // The value stays wherever the last frame left it.
    engine.update(1.0);
    approx(*target.borrow(), 5.0, 1e-4);
    assert_eq!(completions.get(), 0);
    assert_eq!(engine.target_count(), 0);
}

/// it should free the queue's turn when the active queued action is removed,
/// so the next pending action activates on the following update
#[test]
fn removing_active_queued_action_frees_the_turn() {
    let mut engine: Engine<Handle> = Engine::new(Config::default());
    let target = value(0.0);
    let completions = Rc::new(Cell::new(0u32));

    let a = add(&mut engine, &target, 10.0, 1.0, true, &completions);
    let b = add(&mut engine, &target, 100.0, 1.0, true, &completions);
    let a_id = a.id;
    let id = engine.run_actions(vec![a, b], None);

    engine.update(0.5);
    approx(*target.borrow(), 5.0, 1e-4);

    assert!(engine.try_remove_action(id, a_id));
    assert_eq!(completions.get(), 0);
    assert!(engine.has_action(id));

    // B resolves against the value A left behind (5.0) and takes over.
    engine.update(1.0);
    assert_eq!(*target.borrow(), 105.0);
    assert_eq!(completions.get(), 1);
}

#[test]
fn removing_from_queue_preserves_fifo_of_rest() {
    let mut engine: Engine<Handle> = Engine::new(Config::default());
    let target = value(0.0);
    let completions = Rc::new(Cell::new(0u32));

    let a = add(&mut engine, &target, 1.0, 1.0, true, &completions);
    let b = add(&mut engine, &target, 10.0, 1.0, true, &completions);
    let c = add(&mut engine, &target, 100.0, 1.0, true, &completions);
    let b_id = b.id;
    let id = engine.run_actions(vec![a, b, c], None);

    assert!(engine.try_remove_action(id, b_id));

    engine.update(1.0);
    engine.update(1.0);
    // A then C ran; B contributed nothing.
    assert_eq!(*target.borrow(), 101.0);
    assert_eq!(completions.get(), 2);
    assert!(!engine.has_action(id));
}

#[test]
fn remove_misses_are_soft() {
    let mut engine: Engine<Handle> = Engine::new(Config::default());
    let target = value(0.0);
    let completions = Rc::new(Cell::new(0u32));

    let action = add(&mut engine, &target, 10.0, 1.0, false, &completions);
    let action_id = action.id;
    let id = engine.run_actions(vec![action], None);

    assert!(!engine.try_remove_action(TweenId(999), action_id));
    assert!(!engine.try_remove_all_actions(TweenId(999)));
    assert!(!engine.try_complete_all_actions(TweenId(999), true));
    assert!(!engine.has_action(TweenId(999)));

    // Right identity, stale action handle.
    engine.update(1.0);
    assert!(!engine.try_remove_action(id, action_id));
}

/// it should drop three running and two queued actions in one call, with no
/// callbacks, and hand all five back to the pool
#[test]
fn remove_all_actions_is_silent_and_recycles() {
    let mut engine: Engine<Handle> = Engine::new(Config::default());
    let target = value(0.0);
    let completions = Rc::new(Cell::new(0u32));

    let mut batch = Vec::new();
    for _ in 0..3 {
        batch.push(add(&mut engine, &target, 10.0, 5.0, false, &completions));
    }
    for _ in 0..2 {
        batch.push(add(&mut engine, &target, 10.0, 5.0, true, &completions));
    }
    let id = engine.run_actions(batch, None);
    assert!(engine.has_action(id));

    assert!(engine.try_remove_all_actions(id));
    assert!(!engine.has_action(id));
    assert_eq!(completions.get(), 0);
    assert_eq!(engine.free_action_count(), 5);

    // The emptied state stays in the map until the next pass reclaims it.
    assert_eq!(engine.target_count(), 1);
    engine.update(1.0);
    assert_eq!(engine.target_count(), 0);
    assert_eq!(completions.get(), 0);
}

/// it should resolve a never-activated queued action during forced
/// completion and call its setter and callback exactly once
#[test]
fn complete_all_resolves_pending_queued_action() {
    let mut engine: Engine<Handle> = Engine::new(Config::default());
    let target = value(5.0);
    let completions = Rc::new(Cell::new(0u32));
    let writes = Rc::new(Cell::new(0u32));

    let mut action = engine.acquire_action();
    action.target = Some(target.clone());
    action.duration = 3.0;
    action.queued = true;
    let write_counter = writes.clone();
    action.push_value(
        ActionValue::new(
            |t: &mut Handle| *t.borrow(),
            move |t: &mut Handle, v| {
                write_counter.set(write_counter.get() + 1);
                *t.borrow_mut() = v;
            },
        )
        .value(10.0),
    );
    let counter = completions.clone();
    action.on_complete = Some(Box::new(move |_| counter.set(counter.get() + 1)));

    let id = engine.run_actions(vec![action], None);

    // Never updated: the action is still pending when completion is forced.
    assert!(engine.try_complete_all_actions(id, true));
    assert_eq!(*target.borrow(), 15.0);
    assert_eq!(writes.get(), 1);
    assert_eq!(completions.get(), 1);
    assert!(!engine.has_action(id));
}

#[test]
fn complete_all_without_callbacks_still_sets_values() {
    let mut engine: Engine<Handle> = Engine::new(Config::default());
    let target = value(0.0);
    let completions = Rc::new(Cell::new(0u32));

    let a = add(&mut engine, &target, 10.0, 4.0, false, &completions);
    let b = add(&mut engine, &target, 100.0, 4.0, true, &completions);
    let id = engine.run_actions(vec![a, b], None);

    assert!(engine.try_complete_all_actions(id, false));

    // Immediate resolved against 0, queued resolved at forced completion
    // against the immediate's terminal 10, so the chain still composes.
    assert_eq!(*target.borrow(), 110.0);
    assert_eq!(completions.get(), 0);
    assert!(!engine.has_action(id));
}

/// it should fire forced-completion callbacks in submission order, running
/// actions before pending ones
#[test]
fn complete_all_callback_order_is_submission_order() {
    let mut engine: Engine<Handle> = Engine::new(Config::default());
    let target = value(0.0);
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let mut batch = Vec::new();
    for name in ["first", "second"] {
        let mut action = engine.acquire_action();
        action.target = Some(target.clone());
        action.duration = 1.0;
        action.queued = false;
        let log = order.clone();
        action.on_complete = Some(Box::new(move |_| log.borrow_mut().push(name)));
        batch.push(action);
    }
    for name in ["third", "fourth"] {
        let mut action = engine.acquire_action();
        action.target = Some(target.clone());
        action.duration = 1.0;
        action.queued = true;
        let log = order.clone();
        action.on_complete = Some(Box::new(move |_| log.borrow_mut().push(name)));
        batch.push(action);
    }

    let id = engine.run_actions(batch, None);
    assert!(engine.try_complete_all_actions(id, true));
    assert_eq!(
        order.borrow().as_slice(),
        &["first", "second", "third", "fourth"]
    );
}
