pub mod app_list;
pub mod filter_state;
pub mod log_manager;
pub mod selection_state;

pub use app_list::AppList;
pub use filter_state::FilterState;
pub use log_manager::LogManager;
pub use selection_state::{SelectionChange, SelectionState};
