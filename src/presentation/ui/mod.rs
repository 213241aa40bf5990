pub mod app;

pub use app::{AppListScreen, ScreenConfig};
