pub mod app;
pub mod filter;

pub use app::{AppIcon, AppRecord, AppRow, DisplayCategory};
pub use filter::{AppComparator, AppPredicate, FilterSnapshot, accept_all, label_comparator};
