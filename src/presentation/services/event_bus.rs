use std::sync::{Arc, Mutex};

/// Selection and lifecycle notifications delivered to the embedding caller.
/// `SelectionUpdated` carries the full checked list after a toggle;
/// `SelectionToggled` carries just the affected row.
#[derive(Clone)]
pub enum AppListEvent {
    AppSelected(String),
    AppDeselected(String),
    SelectionToggled {
        package_name: String,
        checked: bool,
    },
    SelectionUpdated(Vec<String>),
    StatusUpdate(String),
    LoadingStateChange(bool),
}

pub struct EventBus {
    listeners: Arc<Mutex<Vec<Box<dyn Fn(&AppListEvent) + Send + Sync>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn publish(&self, event: AppListEvent) {
        let listeners = self.listeners.lock().unwrap();
        for listener in listeners.iter() {
            listener(&event);
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AppListEvent) + Send + Sync + 'static,
    {
        self.listeners.lock().unwrap().push(Box::new(listener));
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
