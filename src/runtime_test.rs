use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_make = Rc::clone(&log);
    let make = move |label: &'static str| -> Task {
        let log = Rc::clone(&log_for_make);
        Box::new(move || log.borrow_mut().push(label))
    };
    (log, make)
}

#[test]
fn timers_fire_only_once_deadline_is_reached() {
    let rt = ManualRuntime::new();
    let (log, make) = recorder();
    rt.schedule(100, make("a"));
    rt.advance(99);
    assert!(log.borrow().is_empty());
    rt.advance(1);
    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(rt.pending_timers(), 0);
    assert_eq!(rt.now_ms(), 100);
}

#[test]
fn timers_fire_in_deadline_then_schedule_order() {
    let rt = ManualRuntime::new();
    let (log, make) = recorder();
    rt.schedule(50, make("late"));
    rt.schedule(10, make("early"));
    rt.schedule(10, make("early-second"));
    rt.advance(1000);
    assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
}

#[test]
fn nested_timer_runs_relative_to_parent_deadline() {
    let rt = Rc::new(ManualRuntime::new());
    let fired_at = Rc::new(Cell::new(0));
    let rt_for_cb = Rc::clone(&rt);
    let fired_for_cb = Rc::clone(&fired_at);
    rt.schedule(
        5000,
        Box::new(move || {
            let rt_inner = Rc::clone(&rt_for_cb);
            rt_for_cb.schedule(300, Box::new(move || fired_for_cb.set(rt_inner.now_ms())));
        }),
    );
    rt.advance(5299);
    assert_eq!(fired_at.get(), 0);
    rt.advance(1);
    assert_eq!(fired_at.get(), 5300);
}

#[test]
fn spawned_tasks_run_when_polled() {
    let rt = ManualRuntime::new();
    let done = Rc::new(Cell::new(false));
    let done_for_task = Rc::clone(&done);
    rt.spawn(Box::pin(async move { done_for_task.set(true) }));
    assert!(!done.get());
    rt.run_until_stalled();
    assert!(done.get());
}
