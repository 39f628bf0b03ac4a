//! Async task lifecycle tracking for in-flight operations

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Tasks currently running
static ACTIVE_TASKS: AtomicU64 = AtomicU64::new(0);

/// Monotonic id source for spawned tasks
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Completion time after which a task is reported as slow
const SLOW_TASK_THRESHOLD: Duration = Duration::from_secs(30);

/// Get current number of active tasks
pub fn active_task_count() -> u64 {
    ACTIVE_TASKS.load(Ordering::Relaxed)
}

/// Decrements the active count even if the task panics
struct ActiveGuard;

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE_TASKS.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Spawn an instrumented async task with lifecycle tracking
///
/// # Arguments
///
/// * `name` - Task name for logging (usually the operation name, e.g. "validate_account")
/// * `future` - The async task to execute
///
/// # Returns
///
/// JoinHandle that can be awaited or detached. Must be called from within a Tokio runtime.
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    ACTIVE_TASKS.fetch_add(1, Ordering::Relaxed);
    let start = Instant::now();

    tracing::debug!(task = %name, task_id, "Task spawned");

    tokio::spawn(async move {
        let _active = ActiveGuard;
        let result = future.await;
        let duration = start.elapsed();

        if duration > SLOW_TASK_THRESHOLD {
            tracing::warn!(
                task = %name,
                task_id,
                duration_ms = duration.as_millis(),
                "Task took very long (potential hang)"
            );
        } else {
            tracing::debug!(
                task = %name,
                task_id,
                duration_ms = duration.as_millis(),
                "Task completed"
            );
        }

        result
    })
}
