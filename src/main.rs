mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::UseCaseContainer;
use domain::entities::DisplayCategory;
use domain::repositories::AppRepository;
use infrastructure::adb::AdbAppRepository;
use presentation::services::{AppListEvent, log_capture};
use presentation::ui::{AppListScreen, ScreenConfig};
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    let log_rx = log_capture::init_log_capture();

    let repository: Arc<dyn AppRepository> = Arc::new(AdbAppRepository::new());
    let use_cases = Arc::new(UseCaseContainer::new(repository));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let config = ScreenConfig::new("Pkgpick - Installed Apps")
        .with_display_category(DisplayCategory::UserOnly);

    let screen = AppListScreen::new(config, use_cases, log_rx);
    screen.event_bus().subscribe(|event| match event {
        AppListEvent::AppSelected(pkg) => tracing::info!("Selected {}", pkg),
        AppListEvent::AppDeselected(pkg) => tracing::info!("Deselected {}", pkg),
        AppListEvent::SelectionUpdated(list) => {
            tracing::info!("Selection now holds {} packages", list.len())
        }
        _ => {}
    });

    eframe::run_native(
        "Pkgpick",
        options,
        Box::new(move |_cc| Ok(Box::new(screen))),
    )
}
