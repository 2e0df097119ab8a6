//! Main-thread task queue.
//!
//! Background work never touches component state directly. It posts a task
//! here and the UI loop runs it on the thread that owns the component tree.

use std::time::Duration;
use tokio::sync::mpsc;

pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Consumer side, owned by whoever drives the UI loop.
pub struct MainScheduler {
    tx: mpsc::UnboundedSender<UiTask>,
    rx: mpsc::UnboundedReceiver<UiTask>,
}

/// Cloneable producer side handed to components and background tasks.
#[derive(Clone)]
pub struct MainHandle {
    tx: mpsc::UnboundedSender<UiTask>,
}

impl MainScheduler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn handle(&self) -> MainHandle {
        MainHandle {
            tx: self.tx.clone(),
        }
    }

    /// Run every task queued so far without blocking. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.rx.try_recv() {
            task();
            ran += 1;
        }
        ran
    }

    /// Keep running tasks until none arrives for `quiet`.
    pub async fn settle(&mut self, quiet: Duration) -> usize {
        let mut ran = 0;
        while let Ok(Some(task)) = tokio::time::timeout(quiet, self.rx.recv()).await {
            task();
            ran += 1;
        }
        ran
    }
}

impl Default for MainScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl MainHandle {
    /// Queue a task for the main thread. Returns `false` once the scheduler is gone.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) -> bool {
        self.tx.send(Box::new(task)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn run_pending_preserves_post_order() {
        let mut scheduler = MainScheduler::new();
        let handle = scheduler.handle();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let seen = Arc::clone(&seen);
            assert!(handle.post(move || seen.lock().push(i)));
        }

        assert_eq!(scheduler.run_pending(), 5);
        assert_eq!(*seen.lock(), vec![0, 1, 2, 3, 4]);
        assert_eq!(scheduler.run_pending(), 0);
    }

    #[test]
    fn post_fails_after_scheduler_dropped() {
        let scheduler = MainScheduler::new();
        let handle = scheduler.handle();
        drop(scheduler);
        assert!(!handle.post(|| {}));
    }

    #[tokio::test]
    async fn settle_runs_tasks_posted_from_background() {
        let mut scheduler = MainScheduler::new();
        let handle = scheduler.handle();
        let hit = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&hit);

        tokio::spawn(async move {
            handle.post(move || *flag.lock() = true);
        });

        scheduler.settle(Duration::from_millis(20)).await;
        assert!(*hit.lock());
    }
}
