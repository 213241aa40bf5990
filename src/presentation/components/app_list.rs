use crate::domain::entities::AppRow;
use crate::presentation::components::SelectionState;
use egui::{Align2, Color32, FontId, RichText, ScrollArea, Sense, TextureHandle, vec2};
use std::collections::HashMap;

/// Rendered list state. Publishes are gated by a generation counter: a
/// refresh that was superseded before it finished publishes with an older
/// generation and is discarded, so the newest request always determines the
/// final visible list.
pub struct AppList {
    rows: Vec<AppRow>,
    generation: u64,
    icon_textures: HashMap<String, TextureHandle>,
}

impl AppList {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            generation: 0,
            icon_textures: HashMap::new(),
        }
    }

    /// Replace the visible rows. Idempotent on equal content, stale-safe on
    /// out-of-order generations. Returns whether anything changed.
    pub fn submit(&mut self, generation: u64, rows: Vec<AppRow>) -> bool {
        if generation < self.generation {
            tracing::debug!(
                "Discarding stale list publish (generation {} < {})",
                generation,
                self.generation
            );
            return false;
        }
        self.generation = generation;
        if self.rows == rows {
            return false;
        }
        self.icon_textures
            .retain(|package, _| rows.iter().any(|row| &row.package_name == package));
        self.rows = rows;
        true
    }

    pub fn rows(&self) -> &[AppRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn monogram_color(package_name: &str) -> Color32 {
        let hash: u32 = package_name
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
        let palette = [
            Color32::from_rgb(66, 133, 244),
            Color32::from_rgb(219, 68, 55),
            Color32::from_rgb(244, 180, 0),
            Color32::from_rgb(15, 157, 88),
            Color32::from_rgb(171, 71, 188),
            Color32::from_rgb(0, 172, 193),
        ];
        palette[(hash as usize) % palette.len()]
    }

    fn show_icon(&mut self, ui: &mut egui::Ui, row: &AppRow) {
        if let Some(icon) = &row.icon {
            let texture = self
                .icon_textures
                .entry(row.package_name.clone())
                .or_insert_with(|| {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [icon.width, icon.height],
                        &icon.rgba,
                    );
                    ui.ctx().load_texture(
                        format!("app-icon-{}", row.package_name),
                        image,
                        egui::TextureOptions::LINEAR,
                    )
                });
            ui.image(egui::load::SizedTexture::new(texture.id(), vec2(28.0, 28.0)));
            return;
        }

        let (rect, _) = ui.allocate_exact_size(vec2(28.0, 28.0), Sense::hover());
        let initial = row
            .label
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string());
        ui.painter()
            .circle_filled(rect.center(), 14.0, Self::monogram_color(&row.package_name));
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            initial,
            FontId::proportional(15.0),
            Color32::WHITE,
        );
    }

    /// Render all rows and report the packages whose switch was toggled this
    /// frame. The caller owns the selection mutation and event fan-out.
    pub fn show(&mut self, ui: &mut egui::Ui, selection: &SelectionState) -> Vec<String> {
        let mut toggled = Vec::new();

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("app_list_grid")
                    .striped(true)
                    .spacing([10.0, 8.0])
                    .min_col_width(40.0)
                    .show(ui, |ui| {
                        let rows = self.rows.clone();
                        for row in &rows {
                            self.show_icon(ui, row);

                            ui.vertical(|ui| {
                                ui.label(RichText::new(&row.label).strong());
                                ui.label(
                                    RichText::new(&row.package_name)
                                        .small()
                                        .color(Color32::GRAY),
                                );
                            });

                            let mut checked = selection.is_checked(&row.package_name);
                            if ui.checkbox(&mut checked, "").changed() {
                                toggled.push(row.package_name.clone());
                            }

                            ui.end_row();
                        }
                    });
            });

        toggled
    }
}

impl Default for AppList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pkg: &str, label: &str) -> AppRow {
        AppRow {
            package_name: pkg.to_string(),
            label: label.to_string(),
            icon: None,
        }
    }

    #[test]
    fn newer_generation_replaces_the_list() {
        let mut list = AppList::new();
        assert!(list.submit(1, vec![row("a", "A")]));
        assert!(list.submit(2, vec![row("b", "B")]));
        assert_eq!(list.rows()[0].package_name, "b");
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut list = AppList::new();
        assert!(list.submit(2, vec![row("b", "B")]));
        assert!(!list.submit(1, vec![row("a", "A")]));
        assert_eq!(list.rows()[0].package_name, "b");
    }

    #[test]
    fn resubmitting_equal_rows_is_a_no_op() {
        let mut list = AppList::new();
        assert!(list.submit(1, vec![row("a", "A")]));
        assert!(!list.submit(2, vec![row("a", "A")]));
    }
}
