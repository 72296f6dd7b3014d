//! Notes and bookmarks manager with tab switching and stubbed actions

use std::time::Duration;

use eframe::egui;

use crate::app::{NotesTab, ReadletApp};

/// Filter buttons shown under each tab; selection is visual only
pub const NOTE_FILTERS: &[&str] = &["All", "Highlights", "Thoughts"];
pub const BOOKMARK_FILTERS: &[&str] = &["All", "Recent"];

/// Notes and bookmarks panel
pub struct NotesPanel;

impl NotesPanel {
    pub fn show(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.horizontal(|ui| {
            ui.heading("Notes & Bookmarks");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Export").clicked() {
                    Self::export(app);
                }
            });
        });
        ui.separator();

        // Exactly one tab is active at a time
        ui.horizontal(|ui| {
            for (tab, label) in [(NotesTab::Notes, "Notes"), (NotesTab::Bookmarks, "Bookmarks")] {
                if ui.selectable_label(app.notes_tab == tab, label).clicked() {
                    app.notes_tab = tab;
                }
            }
        });

        match app.notes_tab {
            NotesTab::Notes => Self::filter_row(ui, NOTE_FILTERS, &mut app.note_filter),
            NotesTab::Bookmarks => {
                Self::filter_row(ui, BOOKMARK_FILTERS, &mut app.bookmark_filter)
            }
        }
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("notes_scroll")
            .show(ui, |ui| match app.notes_tab {
                NotesTab::Notes => Self::notes_tab(ui, app),
                NotesTab::Bookmarks => Self::bookmarks_tab(ui, app),
            });
    }

    /// Exactly one filter button is active within its sibling group
    fn filter_row(ui: &mut egui::Ui, filters: &[&str], active: &mut usize) {
        ui.horizontal(|ui| {
            for (index, filter) in filters.iter().enumerate() {
                if ui.selectable_label(*active == index, *filter).clicked() {
                    *active = index;
                    tracing::debug!("Filtering entries by: {filter}");
                }
            }
        });
    }

    fn notes_tab(ui: &mut egui::Ui, app: &mut ReadletApp) {
        if app.library.notes.is_empty() {
            Self::show_empty(ui, "No notes yet");
            return;
        }

        let mut stub_action = None;
        for note in &app.library.notes {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(&note.book);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("\u{1F5D1}").on_hover_text("Delete").clicked() {
                            stub_action = Some("Delete");
                        }
                        if ui.button("\u{270E}").on_hover_text("Edit").clicked() {
                            stub_action = Some("Edit");
                        }
                        ui.weak(&note.created);
                    });
                });
                ui.label(egui::RichText::new(format!("\u{201C}{}\u{201D}", note.excerpt)).italics());
                ui.label(&note.note);
            });
            ui.add_space(8.0);
        }
        if let Some(action) = stub_action {
            app.toasts.show(format!("{action} is not implemented yet"));
        }
    }

    fn bookmarks_tab(ui: &mut egui::Ui, app: &mut ReadletApp) {
        if app.library.bookmarks.is_empty() {
            Self::show_empty(ui, "No bookmarks yet");
            return;
        }

        let mut stub_action = None;
        for bookmark in &app.library.bookmarks {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(&bookmark.book);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("\u{1F5D1}").on_hover_text("Delete").clicked() {
                            stub_action = Some("Delete");
                        }
                        ui.weak(&bookmark.created);
                    });
                });
                ui.label(&bookmark.chapter);
                ui.weak(format!("Read {}", bookmark.progress));
            });
            ui.add_space(8.0);
        }
        if let Some(action) = stub_action {
            app.toasts.show(format!("{action} is not implemented yet"));
        }
    }

    /// Simulated export: acknowledge now, report completion a bit later
    fn export(app: &mut ReadletApp) {
        tracing::info!("Exporting notes and bookmarks");
        app.toasts.show("Exporting notes\u{2026}");
        app.toasts
            .show_after(Duration::from_millis(1500), "Export complete");
    }

    fn show_empty(ui: &mut egui::Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label(message);
        });
    }
}
