use super::app::{AppRecord, DisplayCategory};
use std::cmp::Ordering;
use std::sync::Arc;

/// Caller-supplied inclusion predicate over package records.
pub type AppPredicate = Arc<dyn Fn(&AppRecord) -> bool + Send + Sync>;

/// Caller-supplied ordering for the displayed list.
pub type AppComparator = Arc<dyn Fn(&AppRecord, &AppRecord) -> Ordering + Send + Sync>;

pub fn accept_all() -> AppPredicate {
    Arc::new(|_| true)
}

/// Default ordering: alphabetical by display label, package name as
/// tie-breaker so equal labels still sort deterministically.
pub fn label_comparator() -> AppComparator {
    Arc::new(|a, b| {
        a.label
            .to_lowercase()
            .cmp(&b.label.to_lowercase())
            .then_with(|| a.package_name.cmp(&b.package_name))
    })
}

/// Atomic snapshot of the filter configuration, taken under the filter lock
/// and passed by value into a refresh run. The snapshot is authoritative for
/// that run even if the live configuration changes while it executes.
#[derive(Clone)]
pub struct FilterSnapshot {
    pub search_text: String,
    pub category: DisplayCategory,
    pub custom_filter: AppPredicate,
    pub comparator: AppComparator,
}

impl FilterSnapshot {
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            category: DisplayCategory::UserOnly,
            custom_filter: accept_all(),
            comparator: label_comparator(),
        }
    }

    /// Whether a record survives all three filters: category, the custom
    /// predicate, and a case-insensitive substring match on the label.
    /// An empty search text matches every label.
    pub fn retains(&self, record: &AppRecord) -> bool {
        self.category.matches(record)
            && (self.custom_filter)(record)
            && record
                .label
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
    }
}

impl Default for FilterSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_app(pkg: &str, label: &str) -> AppRecord {
        AppRecord::new(pkg.to_string(), label.to_string())
    }

    #[test]
    fn empty_search_matches_everything() {
        let snapshot = FilterSnapshot::new();
        assert!(snapshot.retains(&user_app("com.example.cam", "Camera")));
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut snapshot = FilterSnapshot::new();
        snapshot.search_text = "CAM".to_string();
        assert!(snapshot.retains(&user_app("com.example.cam", "camera")));
        assert!(!snapshot.retains(&user_app("com.example.calc", "Calculator")));
    }

    #[test]
    fn category_gates_system_apps() {
        let mut snapshot = FilterSnapshot::new();
        let system = user_app("com.sys", "Shell").set_system(true);
        let user = user_app("com.user", "Notes");

        snapshot.category = DisplayCategory::UserOnly;
        assert!(!snapshot.retains(&system));
        assert!(snapshot.retains(&user));

        snapshot.category = DisplayCategory::SystemOnly;
        assert!(snapshot.retains(&system));
        assert!(!snapshot.retains(&user));

        snapshot.category = DisplayCategory::Both;
        assert!(snapshot.retains(&system));
        assert!(snapshot.retains(&user));
    }

    #[test]
    fn custom_filter_is_applied() {
        let mut snapshot = FilterSnapshot::new();
        snapshot.custom_filter = Arc::new(|app| app.package_name.starts_with("org."));
        assert!(snapshot.retains(&user_app("org.fdroid.client", "F-Droid")));
        assert!(!snapshot.retains(&user_app("com.vendor.tool", "Tool")));
    }

    #[test]
    fn label_comparator_sorts_case_insensitively() {
        let cmp = label_comparator();
        let a = user_app("com.a", "alpha");
        let b = user_app("com.b", "Beta");
        assert_eq!(cmp(&a, &b), Ordering::Less);
    }
}
