pub mod async_executor;
mod async_task_manager;
pub mod event_bus;
pub mod log_capture;

pub use async_executor::AsyncExecutor;
pub use async_task_manager::{AsyncTask, AsyncTaskManager};
pub use event_bus::{AppListEvent, EventBus};
