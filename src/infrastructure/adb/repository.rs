use crate::domain::{entities::AppRecord, repositories::AppRepository};
use crate::infrastructure::adb::command::AdbCommand;
use anyhow::Result;
use async_trait::async_trait;

pub struct AdbAppRepository;

impl AdbAppRepository {
    pub fn new() -> Self {
        Self
    }

    /// `pm list packages` exposes no display labels, so the label falls back
    /// to the trailing segment of the package name, capitalized.
    fn label_for(package_name: &str) -> String {
        let segment = package_name
            .rsplit('.')
            .next()
            .unwrap_or(package_name);
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => package_name.to_string(),
        }
    }

    fn fetch_scope(system: bool) -> Result<Vec<AppRecord>> {
        let output = AdbCommand::list_packages(system)?;
        Ok(AdbCommand::parse_package_lines(&output)
            .into_iter()
            .map(|package_name| {
                let label = Self::label_for(&package_name);
                AppRecord::new(package_name, label).set_system(system)
            })
            .collect())
    }
}

impl Default for AdbAppRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppRepository for AdbAppRepository {
    async fn installed_apps(&self) -> Result<Vec<AppRecord>> {
        // The adb binary is blocking; keep it off the async workers.
        let records = tokio::task::spawn_blocking(|| -> Result<Vec<AppRecord>> {
            let mut records = Self::fetch_scope(true)?;
            records.extend(Self::fetch_scope(false)?);
            Ok(records)
        })
        .await??;

        tracing::info!("Fetched {} installed packages over adb", records.len());
        Ok(records)
    }
}
