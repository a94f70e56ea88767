use std::cell::{Cell, RefCell};
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once `delay` has passed. Tasks with equal due times run in
/// the order they were scheduled.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

struct Pending {
    due: Duration,
    order: u64,
    task: Task,
}

/// Task queue over a virtual clock that only moves when told to.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_order: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward, running every task that falls due on the way.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now.get() + by;
        let mut ran = 0;
        while let Some(pending) = self.pop_due(target) {
            if pending.due > self.now.get() {
                self.now.set(pending.due);
            }
            (pending.task)();
            ran += 1;
        }
        self.now.set(target);
        ran
    }

    /// Run zero-delay work without moving the clock
    pub fn run_ready(&self) -> usize {
        self.advance(Duration::ZERO)
    }

    /// Drain the queue, including tasks scheduled while draining
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.next_due() {
            let by = due.saturating_sub(self.now.get());
            ran += self.advance(by);
        }
        ran
    }

    fn next_due(&self) -> Option<Duration> {
        self.queue.borrow().iter().map(|p| p.due).min()
    }

    fn pop_due(&self, limit: Duration) -> Option<Pending> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= limit)
            .min_by_key(|(_, p)| (p.due, p.order))
            .map(|(i, _)| i)?;
        Some(queue.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let order = self.next_order.get();
        self.next_order.set(order + 1);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + delay,
            order,
            task,
        });
    }
}
