use crate::domain::entities::AppRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Package-manager seam. Implementations return a complete snapshot of the
/// installed applications on every call; the refresh pipeline never mutates
/// what it is given.
#[async_trait]
pub trait AppRepository: Send + Sync {
    async fn installed_apps(&self) -> Result<Vec<AppRecord>>;
}
