//! Cancellable timers and trailing debounce.
//!
//! Dropping a handle returned by a [`Scheduler`] cancels the task. A
//! [`TimerSlot`] holds at most one pending task per purpose and cancels the
//! previous one before scheduling the next.

use std::cell::RefCell;

pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct TimerSlot<S: Scheduler> {
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> TimerSlot<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: RefCell::new(None),
        }
    }

    pub fn replace(&self, delay_ms: u32, task: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.scheduler.schedule(delay_ms, Box::new(task));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

pub struct Debouncer<S: Scheduler> {
    slot: TimerSlot<S>,
    wait_ms: u32,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait_ms: u32) -> Self {
        Self {
            slot: TimerSlot::new(scheduler),
            wait_ms,
        }
    }

    pub fn call(&self, task: impl FnOnce() + 'static) {
        self.slot.replace(self.wait_ms, task);
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    struct ScheduledTask {
        id: u64,
        due_ms: u64,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct VirtualClock {
        now_ms: u64,
        next_id: u64,
        tasks: Vec<ScheduledTask>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<VirtualClock>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due_ms = clock.now_ms + u64::from(delay_ms);
            clock.tasks.push(ScheduledTask {
                id,
                due_ms,
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle { cancelled }
        }
    }

    impl ManualScheduler {
        pub fn now_ms(&self) -> u64 {
            self.clock.borrow().now_ms
        }

        pub fn pending(&self) -> usize {
            self.clock
                .borrow()
                .tasks
                .iter()
                .filter(|task| !task.cancelled.get())
                .count()
        }

        pub fn advance(&self, delta_ms: u64) {
            let target = self.now_ms() + delta_ms;

            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let position = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due_ms <= target)
                        .min_by_key(|(_, task)| (task.due_ms, task.id))
                        .map(|(index, _)| index);
                    position.map(|index| {
                        let task = clock.tasks.remove(index);
                        clock.now_ms = task.due_ms;
                        task
                    })
                };

                let Some(next) = next else {
                    break;
                };

                if !next.cancelled.get() {
                    (next.task)();
                }
            }

            self.clock.borrow_mut().now_ms = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce()>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let handle = calls.clone();
        let make = move |value: u32| -> Box<dyn FnOnce()> {
            let calls = handle.clone();
            Box::new(move || calls.borrow_mut().push(value))
        };
        (calls, make)
    }

    #[test]
    fn slot_runs_task_after_delay() {
        let scheduler = ManualScheduler::default();
        let slot = TimerSlot::new(scheduler.clone());
        let (calls, make) = recorder();

        slot.replace(400, make(1));
        scheduler.advance(399);
        assert!(calls.borrow().is_empty());

        scheduler.advance(1);
        assert_eq!(*calls.borrow(), vec![1]);
    }

    #[test]
    fn replacing_cancels_the_previous_task() {
        let scheduler = ManualScheduler::default();
        let slot = TimerSlot::new(scheduler.clone());
        let (calls, make) = recorder();

        slot.replace(3_000, make(1));
        scheduler.advance(1_000);
        slot.replace(3_000, make(2));
        scheduler.advance(2_500);
        assert!(calls.borrow().is_empty());

        scheduler.advance(500);
        assert_eq!(*calls.borrow(), vec![2]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancel_prevents_the_task() {
        let scheduler = ManualScheduler::default();
        let slot = TimerSlot::new(scheduler.clone());
        let (calls, make) = recorder();

        slot.replace(10, make(7));
        slot.cancel();
        scheduler.advance(100);

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn debouncer_fires_once_after_quiet_period() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 100);
        let (calls, make) = recorder();

        for value in 0..5 {
            debouncer.call(make(value));
            scheduler.advance(40);
        }
        assert!(calls.borrow().is_empty());

        scheduler.advance(60);
        assert_eq!(*calls.borrow(), vec![4]);
    }

    #[test]
    fn debouncer_fires_per_separated_burst() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 100);
        let (calls, make) = recorder();

        debouncer.call(make(1));
        scheduler.advance(150);
        debouncer.call(make(2));
        scheduler.advance(150);

        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn tasks_scheduled_from_tasks_run_in_the_same_advance() {
        let scheduler = ManualScheduler::default();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let inner_calls = calls.clone();
        let _outer = scheduler.schedule(
            10,
            Box::new(move || {
                inner_calls.borrow_mut().push(inner_scheduler.now_ms());
                let nested_calls = inner_calls.clone();
                let nested_clock = inner_scheduler.clone();
                std::mem::forget(inner_scheduler.schedule(
                    5,
                    Box::new(move || nested_calls.borrow_mut().push(nested_clock.now_ms())),
                ));
            }),
        );

        scheduler.advance(20);
        assert_eq!(*calls.borrow(), vec![10, 15]);
        assert_eq!(scheduler.now_ms(), 20);
    }
}
