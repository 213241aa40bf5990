use crate::domain::entities::AppRow;
use std::sync::{Arc, Mutex};

/// A background refresh in flight. The worker fills the slot when done; the
/// UI thread polls it each frame. Overlapping refreshes are allowed and run
/// to completion independently; the generation number lets the publish step
/// ignore the ones that were superseded.
pub enum AsyncTask {
    RefreshList {
        generation: u64,
        rows: Arc<Mutex<Option<anyhow::Result<Vec<AppRow>>>>>,
    },
}

pub struct CompletedRefresh {
    pub generation: u64,
    pub rows: Vec<AppRow>,
}

#[derive(Default)]
pub struct TaskResult {
    pub refreshes: Vec<CompletedRefresh>,
    pub failures: usize,
    pub logs: Vec<String>,
}

pub struct AsyncTaskManager {
    active_tasks: Vec<AsyncTask>,
}

impl AsyncTaskManager {
    pub fn new() -> Self {
        Self {
            active_tasks: Vec::new(),
        }
    }

    pub fn set_active_task(&mut self, task: AsyncTask) {
        self.active_tasks.push(task);
    }

    pub fn has_active_tasks(&self) -> bool {
        !self.active_tasks.is_empty()
    }

    pub fn poll(&mut self) -> TaskResult {
        let mut result = TaskResult::default();
        let mut tasks_to_keep = Vec::new();

        for task in self.active_tasks.drain(..) {
            match task {
                AsyncTask::RefreshList { generation, rows } => {
                    let should_put_back = match rows.try_lock() {
                        Ok(mut slot) => match slot.take() {
                            Some(Ok(list)) => {
                                result.refreshes.push(CompletedRefresh {
                                    generation,
                                    rows: list,
                                });
                                false
                            }
                            Some(Err(e)) => {
                                let msg = format!("Refresh failed: {e}");
                                tracing::error!("{}", msg);
                                result.logs.push(msg);
                                result.failures += 1;
                                false
                            }
                            None => true,
                        },
                        Err(_) => true,
                    };

                    if should_put_back {
                        tasks_to_keep.push(AsyncTask::RefreshList { generation, rows });
                    }
                }
            }
        }

        self.active_tasks = tasks_to_keep;
        result
    }
}

impl Default for AsyncTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pkg: &str) -> AppRow {
        AppRow {
            package_name: pkg.to_string(),
            label: pkg.to_string(),
            icon: None,
        }
    }

    #[test]
    fn pending_task_stays_active() {
        let mut manager = AsyncTaskManager::new();
        manager.set_active_task(AsyncTask::RefreshList {
            generation: 1,
            rows: Arc::new(Mutex::new(None)),
        });
        let result = manager.poll();
        assert!(result.refreshes.is_empty());
        assert!(manager.has_active_tasks());
    }

    #[test]
    fn completed_task_is_drained_once() {
        let mut manager = AsyncTaskManager::new();
        let slot = Arc::new(Mutex::new(Some(Ok(vec![row("pkg.a")]))));
        manager.set_active_task(AsyncTask::RefreshList {
            generation: 3,
            rows: slot,
        });

        let result = manager.poll();
        assert_eq!(result.refreshes.len(), 1);
        assert_eq!(result.refreshes[0].generation, 3);
        assert!(!manager.has_active_tasks());
    }

    #[test]
    fn failed_task_surfaces_a_log_line() {
        let mut manager = AsyncTaskManager::new();
        let slot = Arc::new(Mutex::new(Some(Err(anyhow::anyhow!("no device")))));
        manager.set_active_task(AsyncTask::RefreshList {
            generation: 1,
            rows: slot,
        });

        let result = manager.poll();
        assert!(result.refreshes.is_empty());
        assert_eq!(result.failures, 1);
        assert_eq!(result.logs.len(), 1);
        assert!(result.logs[0].contains("no device"));
    }
}
