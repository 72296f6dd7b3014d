//! Settings panel: theme cards, preference toggles, and simulated sync

use std::time::Duration;

use eframe::egui;

use crate::app::ReadletApp;
use crate::core::reading::Theme;

/// Settings panel
pub struct SettingsPanel;

impl SettingsPanel {
    pub fn show(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.heading("Settings");
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("settings_scroll")
            .show(ui, |ui| {
                Self::appearance(ui, app);
                ui.add_space(16.0);
                Self::preferences(ui, app);
                ui.add_space(16.0);
                Self::data(ui, app);
            });
    }

    /// Theme option cards; exactly one is active
    fn appearance(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.strong("Appearance");
        ui.horizontal(|ui| {
            for theme in Theme::ALL {
                ui.group(|ui| {
                    ui.set_width(110.0);
                    ui.vertical_centered(|ui| {
                        let swatch = theme.visuals().panel_fill;
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(80.0, 40.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 4.0, swatch);
                        if ui
                            .selectable_label(app.reading.theme == theme, theme.label())
                            .clicked()
                        {
                            app.reading.set_theme(theme);
                        }
                    });
                });
            }
        });
    }

    /// Toggle switches; changes are recorded in the log only
    fn preferences(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.strong("Preferences");
        if ui
            .checkbox(&mut app.preferences.auto_sync, "Sync automatically")
            .changed()
        {
            tracing::debug!("Toggle changed: auto_sync = {}", app.preferences.auto_sync);
        }
        if ui
            .checkbox(&mut app.preferences.page_animation, "Page turn animation")
            .changed()
        {
            tracing::debug!(
                "Toggle changed: page_animation = {}",
                app.preferences.page_animation
            );
        }
        if ui
            .checkbox(&mut app.preferences.notifications, "Reading reminders")
            .changed()
        {
            tracing::debug!(
                "Toggle changed: notifications = {}",
                app.preferences.notifications
            );
        }
    }

    /// Simulated cloud sync: acknowledge now, report completion later
    fn data(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.strong("Data");
        ui.horizontal(|ui| {
            if ui.button("Sync now").clicked() {
                tracing::info!("Syncing data to the cloud");
                app.toasts.show("Syncing data to the cloud\u{2026}");
                app.toasts
                    .show_after(Duration::from_secs(2), "Sync complete");
            }
            ui.weak("Last synced: never");
        });
    }
}
