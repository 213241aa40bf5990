use crate::application::UseCaseContainer;
use crate::application::dto::SelectionExport;
use crate::domain::entities::{AppComparator, AppPredicate, DisplayCategory};
use crate::presentation::components::{AppList, FilterState, LogManager, SelectionState};
use crate::presentation::services::{
    AppListEvent, AsyncExecutor, AsyncTask, AsyncTaskManager, EventBus,
};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What an embedding caller supplies up front: the screen title, the packages
/// that start out checked, and the optional filter/sort configuration.
pub struct ScreenConfig {
    pub title: String,
    pub initial_checked: Vec<String>,
    pub display_category: DisplayCategory,
    pub custom_filter: Option<AppPredicate>,
    pub comparator: Option<AppComparator>,
}

#[allow(dead_code)]
impl ScreenConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            initial_checked: Vec::new(),
            display_category: DisplayCategory::UserOnly,
            custom_filter: None,
            comparator: None,
        }
    }

    pub fn with_initial_checked(mut self, packages: Vec<String>) -> Self {
        self.initial_checked = packages;
        self
    }

    pub fn with_display_category(mut self, category: DisplayCategory) -> Self {
        self.display_category = category;
        self
    }

    pub fn with_custom_filter(mut self, filter: AppPredicate) -> Self {
        self.custom_filter = Some(filter);
        self
    }

    pub fn with_comparator(mut self, comparator: AppComparator) -> Self {
        self.comparator = Some(comparator);
        self
    }
}

pub struct AppListScreen {
    title: String,

    filter_state: FilterState,
    selection: SelectionState,
    app_list: AppList,
    log_manager: LogManager,
    log_rx: Receiver<String>,

    event_bus: EventBus,
    task_manager: AsyncTaskManager,
    use_cases: Arc<UseCaseContainer>,
    executor: AsyncExecutor,

    search_input: String,
    next_generation: u64,
    refreshes_in_flight: usize,
    initialized: bool,
    status_message: String,
}

impl AppListScreen {
    pub fn new(
        config: ScreenConfig,
        use_cases: Arc<UseCaseContainer>,
        log_rx: Receiver<String>,
    ) -> Self {
        let filter_state = FilterState::new();
        filter_state.set_display_category(config.display_category);
        if let Some(filter) = config.custom_filter {
            filter_state.set_custom_filter(filter);
        }
        if let Some(comparator) = config.comparator {
            filter_state.set_comparator(comparator);
        }

        Self {
            title: config.title,
            filter_state,
            selection: SelectionState::new(config.initial_checked),
            app_list: AppList::new(),
            log_manager: LogManager::new(),
            log_rx,
            event_bus: EventBus::new(),
            task_manager: AsyncTaskManager::new(),
            use_cases,
            executor: AsyncExecutor::new(),
            search_input: String::new(),
            next_generation: 0,
            refreshes_in_flight: 0,
            initialized: false,
            status_message: String::new(),
        }
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Kick off a refresh. The filter snapshot is taken under the lock, the
    /// lock is released, and the query/filter/sort runs on the worker pool.
    /// Overlapping calls are fine; the generation number decides which result
    /// ends up rendered.
    pub fn refresh(&mut self) {
        self.next_generation += 1;
        let generation = self.next_generation;
        let snapshot = self.filter_state.snapshot();

        let slot = Arc::new(Mutex::new(None));
        self.task_manager.set_active_task(AsyncTask::RefreshList {
            generation,
            rows: Arc::clone(&slot),
        });
        self.refreshes_in_flight += 1;
        self.event_bus.publish(AppListEvent::LoadingStateChange(true));
        tracing::debug!("Refresh {} started", generation);

        let use_case = Arc::clone(&self.use_cases.build_app_list);
        self.executor.spawn(async move {
            let result = use_case.execute(snapshot).await;
            *slot.lock().unwrap() = Some(result);
        });
    }

    fn toggle_row(&mut self, package_name: &str) {
        let change = self.selection.toggle(package_name);
        if change.checked {
            self.event_bus
                .publish(AppListEvent::AppSelected(change.package_name.clone()));
        } else {
            self.event_bus
                .publish(AppListEvent::AppDeselected(change.package_name.clone()));
        }
        self.event_bus.publish(AppListEvent::SelectionToggled {
            package_name: change.package_name,
            checked: change.checked,
        });
        self.event_bus
            .publish(AppListEvent::SelectionUpdated(self.selection.checked_list()));
    }

    fn drain_background_work(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            self.log_manager.push(line);
        }

        let result = self.task_manager.poll();
        self.log_manager.extend(result.logs);
        let finished_any = !result.refreshes.is_empty() || result.failures > 0;
        self.refreshes_in_flight = self.refreshes_in_flight.saturating_sub(result.failures);
        if result.failures > 0 {
            self.status_message = "Refresh failed, see output".to_string();
        }

        for completed in result.refreshes {
            self.refreshes_in_flight = self.refreshes_in_flight.saturating_sub(1);
            if self.app_list.submit(completed.generation, completed.rows) {
                self.status_message = format!("{} apps", self.app_list.rows().len());
                self.event_bus.publish(AppListEvent::StatusUpdate(
                    self.status_message.clone(),
                ));
            }
            tracing::debug!("Refresh {} published", completed.generation);
        }

        if finished_any && self.refreshes_in_flight == 0 && !self.task_manager.has_active_tasks() {
            self.event_bus
                .publish(AppListEvent::LoadingStateChange(false));
        }
    }

    fn copy_selection(&mut self, ctx: &egui::Context) {
        let export = SelectionExport::new(self.selection.checked_list());
        match serde_json::to_string_pretty(&export) {
            Ok(json) => {
                ctx.copy_text(json);
                self.status_message = format!("Copied {} packages", export.packages.len());
            }
            Err(e) => {
                tracing::error!("Failed to serialize selection: {}", e);
                self.status_message = "Copy failed".to_string();
            }
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            let response = ui.text_edit_singleline(&mut self.search_input);
            if response.changed() {
                self.filter_state.set_search_text(self.search_input.clone());
                self.refresh();
            }

            ui.separator();

            let previous = self.filter_state.display_category();
            let mut category = previous;
            egui::ComboBox::new("display_category", "")
                .selected_text(category.to_string())
                .show_ui(ui, |ui| {
                    for option in [
                        DisplayCategory::UserOnly,
                        DisplayCategory::SystemOnly,
                        DisplayCategory::Both,
                    ] {
                        ui.selectable_value(&mut category, option, option.to_string());
                    }
                });
            if category != previous {
                self.filter_state.set_display_category(category);
                self.refresh();
            }

            ui.separator();

            if ui.button("Refresh").clicked() {
                self.refresh();
            }
            if ui.button("Copy selection").clicked() {
                self.copy_selection(ctx);
            }

            if self.refreshes_in_flight > 0 {
                ui.spinner();
            }
        });
    }
}

/// Configuration hooks for the embedding caller. Each takes effect on the
/// next refresh; an in-flight refresh keeps the snapshot it started with.
#[allow(dead_code)]
impl AppListScreen {
    pub fn set_display_category(&self, category: DisplayCategory) {
        self.filter_state.set_display_category(category);
    }

    pub fn set_custom_filter(&self, filter: AppPredicate) {
        self.filter_state.set_custom_filter(filter);
    }

    pub fn set_comparator(&self, comparator: AppComparator) {
        self.filter_state.set_comparator(comparator);
    }
}

impl eframe::App for AppListScreen {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.initialized {
            self.initialized = true;
            self.refresh();
        }

        self.drain_background_work();

        if self.task_manager.has_active_tasks() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.heading(&self.title);
            self.show_toolbar(ui, ctx);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.separator();
                ui.label(format!("{} selected", self.selection.count()));
            });
            egui::CollapsingHeader::new("Output")
                .default_open(false)
                .show(ui, |ui| {
                    if ui.button("Clear").clicked() {
                        self.log_manager.clear();
                    }
                    egui::ScrollArea::vertical()
                        .max_height(140.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for line in self.log_manager.all_logs() {
                                ui.monospace(line);
                            }
                        });
                });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.app_list.is_empty() && self.refreshes_in_flight > 0 {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            let toggled = self.app_list.show(ui, &self.selection);
            for package_name in toggled {
                self.toggle_row(&package_name);
            }
        });
    }
}
