pub mod app_list_operations;

pub use app_list_operations::*;
