use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Checked set in a shape suitable for handing to other tools via the
/// clipboard. Nothing is written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionExport {
    pub packages: Vec<String>,
    pub exported_at: String,
}

impl SelectionExport {
    pub fn new(packages: Vec<String>) -> Self {
        Self {
            packages,
            exported_at: Utc::now().to_rfc3339(),
        }
    }
}
