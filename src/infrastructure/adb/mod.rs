pub mod command;
pub mod repository;

pub use repository::AdbAppRepository;
