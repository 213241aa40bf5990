use std::future::Future;
use std::sync::Arc;

/// Shared tokio runtime for background work. Refresh tasks are spawned here
/// so the interactive thread never blocks on the package query.
pub struct AsyncExecutor {
    runtime: Arc<tokio::runtime::Runtime>,
}

impl AsyncExecutor {
    pub fn new() -> Self {
        Self {
            runtime: Arc::new(
                tokio::runtime::Runtime::new().expect("failed to create tokio runtime"),
            ),
        }
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.runtime.spawn(future);
    }
}

impl Clone for AsyncExecutor {
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
        }
    }
}

impl Default for AsyncExecutor {
    fn default() -> Self {
        Self::new()
    }
}
