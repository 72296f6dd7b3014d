//! Library browser panel: category tabs, list/grid views, batch selection

use eframe::egui;

use crate::app::{Page, ReadletApp};
use crate::core::library::{BrowserView, CATEGORY_TABS};

/// Columns used by the grid view
const GRID_COLUMNS: usize = 4;

pub const SORT_OPTIONS: &[&str] = &["Title", "Author", "Size"];

/// File browser panel
pub struct BrowserPanel;

impl BrowserPanel {
    pub fn show(ui: &mut egui::Ui, app: &mut ReadletApp) {
        Self::header(ui, app);
        ui.separator();
        Self::category_tabs(ui, app);

        if app.library.batch_active() {
            Self::batch_toolbar(ui, app);
        }
        ui.separator();

        let mut open_book = false;
        egui::ScrollArea::vertical()
            .id_salt("browser_scroll")
            .show(ui, |ui| {
                if app.library.books.is_empty() {
                    Self::show_empty(ui);
                } else {
                    match app.library.view {
                        BrowserView::List => open_book = Self::list_view(ui, app),
                        BrowserView::Grid => open_book = Self::grid_view(ui, app),
                    }
                }
            });

        if open_book {
            app.page = Page::Reader;
        }
    }

    /// Heading, search, sort, import, and the list/grid switch
    fn header(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.horizontal(|ui| {
            ui.heading("Library");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Import").clicked() {
                    tracing::info!("File operation: import");
                    app.toasts.show("Import is not implemented yet");
                }

                let grid = ui
                    .selectable_label(app.library.view == BrowserView::Grid, "\u{25A6}")
                    .on_hover_text("Grid view");
                if grid.clicked() {
                    app.library.view = BrowserView::Grid;
                }
                let list = ui
                    .selectable_label(app.library.view == BrowserView::List, "\u{2630}")
                    .on_hover_text("List view");
                if list.clicked() {
                    app.library.view = BrowserView::List;
                }

                egui::ComboBox::from_id_salt("sort_by")
                    .selected_text(SORT_OPTIONS[app.sort_by])
                    .show_ui(ui, |ui| {
                        for (index, option) in SORT_OPTIONS.iter().enumerate() {
                            if ui.selectable_label(app.sort_by == index, *option).clicked() {
                                app.sort_by = index;
                                // Reordering itself is not implemented
                                tracing::debug!("Sorting files by: {option}");
                            }
                        }
                    });

                let search = egui::TextEdit::singleline(&mut app.search_query)
                    .hint_text("Search")
                    .desired_width(160.0);
                if ui.add(search).changed() {
                    // Filtering itself is not implemented
                    tracing::debug!("Searching files for: {}", app.search_query);
                }
            });
        });
    }

    /// Exactly one category tab is active at a time; selection is visual only
    fn category_tabs(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.horizontal(|ui| {
            for (index, tab) in CATEGORY_TABS.iter().enumerate() {
                if ui
                    .selectable_label(app.library.active_category == index, *tab)
                    .clicked()
                {
                    app.library.active_category = index;
                    tracing::debug!("Filtering files by: {tab}");
                }
            }
        });
    }

    /// Shown exactly while at least one entry is checked
    fn batch_toolbar(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.horizontal(|ui| {
            ui.label(format!("{} selected", app.library.selected_count()));

            if ui.button("Delete").clicked() {
                tracing::info!("File operation: delete");
                app.toasts.show("Delete is not implemented yet");
            }
            if ui.button("Move").clicked() {
                tracing::info!("File operation: move");
                app.toasts.show("Move is not implemented yet");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cancel").clicked() {
                    app.library.clear_selection();
                }
            });
        });
    }

    /// One row per entry; returns true when a title was clicked open
    fn list_view(ui: &mut egui::Ui, app: &mut ReadletApp) -> bool {
        let mut open_book = false;
        for (index, book) in app.library.books.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.checkbox(&mut book.selected, "");
                if ui
                    .selectable_label(false, format!("\u{1F4D6} {}", book.title))
                    .clicked()
                {
                    tracing::debug!("Opening book {index}: {}", book.title);
                    open_book = true;
                }
                ui.weak(&book.author);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&book.size);
                    ui.weak(&book.format);
                    ui.weak(&book.category);
                });
            });
        }
        open_book
    }

    /// Card grid; same entries and selection model as the list
    fn grid_view(ui: &mut egui::Ui, app: &mut ReadletApp) -> bool {
        let mut open_book = false;
        egui::Grid::new("file_grid")
            .num_columns(GRID_COLUMNS)
            .spacing([16.0, 16.0])
            .show(ui, |ui| {
                for (index, book) in app.library.books.iter_mut().enumerate() {
                    ui.group(|ui| {
                        ui.set_width(150.0);
                        ui.vertical(|ui| {
                            if ui
                                .selectable_label(false, egui::RichText::new(&book.title).strong())
                                .clicked()
                            {
                                tracing::debug!("Opening book {index}: {}", book.title);
                                open_book = true;
                            }
                            ui.weak(&book.author);
                            ui.weak(format!("{} \u{00B7} {}", book.format, book.size));
                            ui.checkbox(&mut book.selected, "Select");
                        });
                    });
                    if (index + 1) % GRID_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
        open_book
    }

    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("The library is empty");
            ui.label("Import documents to see them here");
        });
    }
}
