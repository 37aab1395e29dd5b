//! Virtual timer queue. Time only moves when a test calls [`ManualClock::advance`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use activity_board::banner::Scheduler;

struct Task {
    due_ms: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Option<Box<dyn FnOnce()>>,
}

#[derive(Default)]
struct Inner {
    now_ms: Cell<u64>,
    tasks: RefCell<Vec<Task>>,
}

#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Rc<Inner>,
}

/// Cancels its task when dropped, like `gloo_timers::callback::Timeout`.
pub struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl ManualClock {
    pub fn now_ms(&self) -> u64 {
        self.inner.now_ms.get()
    }

    /// Tasks that are scheduled, not cancelled and not yet fired.
    pub fn pending(&self) -> usize {
        self.inner
            .tasks
            .borrow()
            .iter()
            .filter(|t| !t.cancelled.get() && t.callback.is_some())
            .count()
    }

    /// Moves time forward and runs every live task that has come due, in
    /// due order.
    pub fn advance(&self, ms: u64) {
        let now = self.now_ms() + ms;
        self.inner.now_ms.set(now);

        let mut due: Vec<(u64, Box<dyn FnOnce()>)> = self
            .inner
            .tasks
            .borrow_mut()
            .iter_mut()
            .filter(|t| t.due_ms <= now && !t.cancelled.get())
            .filter_map(|t| t.callback.take().map(|cb| (t.due_ms, cb)))
            .collect();
        due.sort_by_key(|(at, _)| *at);

        for (_, callback) in due {
            callback();
        }
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.inner.tasks.borrow_mut().push(Task {
            due_ms: self.now_ms() + u64::from(delay_ms),
            cancelled: cancelled.clone(),
            callback: Some(callback),
        });
        ManualHandle(cancelled)
    }
}
