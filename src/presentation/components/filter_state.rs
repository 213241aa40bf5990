use crate::domain::entities::{AppComparator, AppPredicate, DisplayCategory, FilterSnapshot};
use std::sync::{Arc, Mutex};

/// Filter configuration shared between the UI thread (setters) and refresh
/// tasks (snapshot reads). A single mutex serializes all access; the lock is
/// only ever held to copy fields, never across the package query or the sort.
#[derive(Clone)]
pub struct FilterState {
    inner: Arc<Mutex<FilterSnapshot>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FilterSnapshot::new())),
        }
    }

    pub fn set_search_text(&self, search_text: String) {
        self.inner.lock().unwrap().search_text = search_text;
    }

    pub fn set_display_category(&self, category: DisplayCategory) {
        self.inner.lock().unwrap().category = category;
    }

    pub fn set_custom_filter(&self, custom_filter: AppPredicate) {
        self.inner.lock().unwrap().custom_filter = custom_filter;
    }

    pub fn set_comparator(&self, comparator: AppComparator) {
        self.inner.lock().unwrap().comparator = comparator;
    }

    pub fn display_category(&self) -> DisplayCategory {
        self.inner.lock().unwrap().category
    }

    /// Atomic copy of the whole configuration. A setter that completed before
    /// this call is always visible to the returned snapshot.
    pub fn snapshot(&self) -> FilterSnapshot {
        self.inner.lock().unwrap().clone()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}
