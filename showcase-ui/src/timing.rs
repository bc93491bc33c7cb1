//! Simulated latency and scope-owned cancellable tasks

use dioxus::core::Task;
use dioxus::prelude::*;
use std::future::Future;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Holds at most one running task for a component.
///
/// Starting a new task cancels the previous one, and the task is cancelled
/// when the owning component unmounts, so nothing writes to state after
/// teardown.
#[derive(Clone, Copy)]
pub struct TaskSlot {
    task: Signal<Option<Task>>,
}

impl TaskSlot {
    pub fn start(&mut self, fut: impl Future<Output = ()> + 'static) {
        self.cancel();
        let task = spawn(fut);
        self.task.set(Some(task));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.write().take() {
            task.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.read().is_some()
    }

    /// Call at the end of the task body so `is_running` reflects completion
    pub fn finish(&mut self) {
        self.task.set(None);
    }
}

pub fn use_task_slot() -> TaskSlot {
    let task = use_signal(|| None::<Task>);
    use_drop(move || {
        if let Ok(current) = task.try_peek() {
            if let Some(task) = *current {
                task.cancel();
            }
        }
    });
    TaskSlot { task }
}
