use std::fmt;

/// Which class of installed applications the list should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayCategory {
    SystemOnly,
    UserOnly,
    Both,
}

impl DisplayCategory {
    pub fn matches(&self, app: &AppRecord) -> bool {
        match self {
            DisplayCategory::SystemOnly => app.system,
            DisplayCategory::UserOnly => !app.system,
            DisplayCategory::Both => true,
        }
    }
}

impl fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayCategory::SystemOnly => write!(f, "System apps"),
            DisplayCategory::UserOnly => write!(f, "User apps"),
            DisplayCategory::Both => write!(f, "All apps"),
        }
    }
}

/// Application icon as decoded RGBA pixels, ready for texture upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIcon {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl AppIcon {
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }
}

/// One installed application as reported by the package manager.
/// Immutable per refresh; a new snapshot is fetched every time.
#[derive(Debug, Clone)]
pub struct AppRecord {
    pub package_name: String,
    pub label: String,
    pub system: bool,
    pub icon: Option<AppIcon>,
}

impl AppRecord {
    pub fn new(package_name: String, label: String) -> Self {
        Self {
            package_name,
            label,
            system: false,
            icon: None,
        }
    }

    pub fn set_system(mut self, system: bool) -> Self {
        self.system = system;
        self
    }

    pub fn with_icon(mut self, icon: AppIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Row view-model published to the list widget. Content equality covers every
/// field; row identity (for diffing against a previous publish) is the
/// package name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRow {
    pub package_name: String,
    pub label: String,
    pub icon: Option<AppIcon>,
}

impl AppRow {
    pub fn from_record(record: &AppRecord) -> Self {
        Self {
            package_name: record.package_name.clone(),
            label: record.label.clone(),
            icon: record.icon.clone(),
        }
    }
}
