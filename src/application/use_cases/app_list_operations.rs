use crate::domain::{
    entities::{AppRecord, AppRow, FilterSnapshot},
    repositories::AppRepository,
};
use anyhow::Result;
use std::sync::Arc;

/// Filter and sort a package snapshot according to a filter snapshot.
/// Split out from the use case so the core of the pipeline is testable
/// without a repository.
pub fn apply_filters(records: Vec<AppRecord>, snapshot: &FilterSnapshot) -> Vec<AppRecord> {
    let mut retained: Vec<AppRecord> = records
        .into_iter()
        .filter(|record| snapshot.retains(record))
        .collect();
    retained.sort_by(|a, b| (snapshot.comparator)(a, b));
    retained
}

/// The refresh pipeline: query the package manager, filter, sort, and map to
/// row view-models. The caller takes the `FilterSnapshot` under its lock and
/// hands it in by value, so a concurrent configuration change never affects a
/// run that has already started.
pub struct BuildAppList {
    repository: Arc<dyn AppRepository>,
}

impl BuildAppList {
    pub fn new(repository: Arc<dyn AppRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, snapshot: FilterSnapshot) -> Result<Vec<AppRow>> {
        let records = self.repository.installed_apps().await?;
        let total = records.len();

        let retained = apply_filters(records, &snapshot);
        tracing::debug!(
            "Refresh retained {} of {} installed apps (category {}, search {:?})",
            retained.len(),
            total,
            snapshot.category,
            snapshot.search_text
        );

        Ok(retained.iter().map(AppRow::from_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DisplayCategory;
    use async_trait::async_trait;
    use std::cmp::Ordering;

    struct FixedRepository {
        apps: Vec<AppRecord>,
    }

    #[async_trait]
    impl AppRepository for FixedRepository {
        async fn installed_apps(&self) -> Result<Vec<AppRecord>> {
            Ok(self.apps.clone())
        }
    }

    fn sample_apps() -> Vec<AppRecord> {
        vec![
            AppRecord::new("com.example.camera".into(), "Camera".into()),
            AppRecord::new("com.example.calc".into(), "Calculator".into()),
            AppRecord::new("com.sys.shell".into(), "Shell".into()).set_system(true),
        ]
    }

    #[test]
    fn search_narrows_by_label_substring() {
        let mut snapshot = FilterSnapshot::new();
        snapshot.search_text = "cam".into();
        let result = apply_filters(sample_apps(), &snapshot);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].label, "Camera");
    }

    #[test]
    fn user_only_hides_system_packages() {
        let snapshot = FilterSnapshot::new();
        let result = apply_filters(sample_apps(), &snapshot);
        assert!(result.iter().all(|app| !app.system));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn every_retained_record_satisfies_all_filters() {
        let mut snapshot = FilterSnapshot::new();
        snapshot.category = DisplayCategory::Both;
        snapshot.search_text = "l".into();
        snapshot.custom_filter = Arc::new(|app| app.package_name.contains('.'));
        for app in apply_filters(sample_apps(), &snapshot) {
            assert!(snapshot.retains(&app));
        }
    }

    #[test]
    fn output_follows_the_snapshot_comparator() {
        let mut snapshot = FilterSnapshot::new();
        snapshot.category = DisplayCategory::Both;
        // Reverse alphabetical, so the default ordering would be wrong here.
        snapshot.comparator = Arc::new(|a: &AppRecord, b: &AppRecord| {
            b.label.to_lowercase().cmp(&a.label.to_lowercase())
        });
        let labels: Vec<String> = apply_filters(sample_apps(), &snapshot)
            .into_iter()
            .map(|app| app.label)
            .collect();
        assert_eq!(labels, vec!["Shell", "Camera", "Calculator"]);
    }

    #[test]
    fn default_order_is_alphabetical_by_label() {
        let labels: Vec<String> = apply_filters(sample_apps(), &FilterSnapshot::new())
            .into_iter()
            .map(|app| app.label)
            .collect();
        assert_eq!(labels, vec!["Calculator", "Camera"]);
    }

    #[test]
    fn comparator_replaced_after_snapshot_does_not_affect_the_run() {
        let mut snapshot = FilterSnapshot::new();
        let taken = snapshot.clone();
        snapshot.comparator = Arc::new(|_: &AppRecord, _: &AppRecord| Ordering::Equal);
        let labels: Vec<String> = apply_filters(sample_apps(), &taken)
            .into_iter()
            .map(|app| app.label)
            .collect();
        assert_eq!(labels, vec!["Calculator", "Camera"]);
    }

    #[tokio::test]
    async fn rows_carry_the_record_icon() {
        use crate::domain::entities::AppIcon;

        let icon = AppIcon::new(1, 1, vec![10, 20, 30, 255]);
        let repository = Arc::new(FixedRepository {
            apps: vec![
                AppRecord::new("com.example.gallery".into(), "Gallery".into())
                    .with_icon(icon.clone()),
            ],
        });
        let rows = BuildAppList::new(repository)
            .execute(FilterSnapshot::new())
            .await
            .unwrap();

        assert_eq!(rows[0].icon.as_ref(), Some(&icon));
    }

    #[tokio::test]
    async fn pipeline_maps_records_to_rows() {
        let repository = Arc::new(FixedRepository {
            apps: sample_apps(),
        });
        let use_case = BuildAppList::new(repository);

        let mut snapshot = FilterSnapshot::new();
        snapshot.search_text = "cam".into();
        let rows = use_case.execute(snapshot).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].package_name, "com.example.camera");
        assert_eq!(rows[0].label, "Camera");
    }
}
