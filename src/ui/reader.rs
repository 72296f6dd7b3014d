//! Reading pane with typography controls and table-of-contents overlay

use eframe::egui;

use crate::app::ReadletApp;
use crate::core::reading::{
    FontChoice, Layout, ReadingState, Theme, LINE_HEIGHT_RANGE,
};

/// Reading view panel
pub struct ReaderPanel;

impl ReaderPanel {
    pub fn show(ui: &mut egui::Ui, app: &mut ReadletApp) {
        Self::header(ui, app);
        ui.separator();
        Self::content(ui, app);

        Self::controls_window(ui.ctx().clone(), app);
        Self::toc_window(ui.ctx().clone(), app);
    }

    /// Book title plus the controls, contents, bookmark, and note buttons
    fn header(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.horizontal(|ui| {
            ui.heading(&app.book.title);
            ui.weak(&app.book.author);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .selectable_label(app.controls_open, "Aa")
                    .on_hover_text("Reading controls")
                    .clicked()
                {
                    app.controls_open = !app.controls_open;
                }
                if ui
                    .selectable_label(app.toc_open, "\u{2261}")
                    .on_hover_text("Contents")
                    .clicked()
                {
                    app.toc_open = !app.toc_open;
                }
                if ui
                    .selectable_label(app.bookmarked, "\u{1F516}")
                    .on_hover_text("Bookmark")
                    .clicked()
                {
                    app.toggle_bookmark();
                }
                if ui.button("\u{1F4DD}").on_hover_text("Add note").clicked() {
                    app.add_note_stub();
                }
            });
        });
    }

    /// Current chapter laid out under the active layout and typography.
    /// Clicking empty content space opens the reading controls.
    fn content(ui: &mut egui::Ui, app: &mut ReadletApp) {
        let Some(chapter) = app.book.chapters.get(app.current_chapter) else {
            Self::show_empty(ui);
            return;
        };

        let metrics = app.reading.layout.metrics();
        let output = egui::ScrollArea::vertical()
            .id_salt("reader_scroll")
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(metrics.max_width.min(ui.available_width()));
                    ui.add_space(16.0);
                    ui.heading(&chapter.title);
                    ui.add_space(12.0);

                    if metrics.columns == 2 {
                        let split = chapter.paragraphs.len().div_ceil(2);
                        ui.spacing_mut().item_spacing.x = metrics.column_gap;
                        ui.columns(2, |columns| {
                            Self::paragraphs(
                                &mut columns[0],
                                &app.reading,
                                &chapter.paragraphs[..split],
                            );
                            Self::paragraphs(
                                &mut columns[1],
                                &app.reading,
                                &chapter.paragraphs[split..],
                            );
                        });
                    } else {
                        Self::paragraphs(ui, &app.reading, &chapter.paragraphs);
                    }
                    ui.add_space(32.0);
                });
            });

        let background = ui.interact(
            output.inner_rect,
            ui.id().with("reader_background"),
            egui::Sense::click(),
        );
        if background.clicked() {
            app.controls_open = true;
        }
    }

    /// Render paragraphs with the state's font, size, and line height
    fn paragraphs(ui: &mut egui::Ui, reading: &ReadingState, paragraphs: &[String]) {
        let format = reading.text_format(ui.visuals().text_color());
        for paragraph in paragraphs {
            let mut job = egui::text::LayoutJob::default();
            job.wrap.max_width = ui.available_width();
            job.append(paragraph, 0.0, format.clone());
            ui.label(job);
            ui.add_space(reading.font_size * 0.6);
        }
    }

    /// Overlay with font, line height, theme, and layout controls
    fn controls_window(ctx: egui::Context, app: &mut ReadletApp) {
        let mut open = app.controls_open;
        egui::Window::new("Reading Controls")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 80.0))
            .show(&ctx, |ui| {
                Self::typography_controls(ui, app);
                ui.separator();
                Self::theme_controls(ui, app);
                Self::layout_controls(ui, app);
            });
        app.controls_open = open;
    }

    fn typography_controls(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.horizontal(|ui| {
            ui.label("Font size");
            if ui.button("A\u{2212}").clicked() {
                app.reading.decrease_font();
            }
            ui.monospace(app.reading.font_size_label());
            if ui.button("A+").clicked() {
                app.reading.increase_font();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Font");
            egui::ComboBox::from_id_salt("font_family")
                .selected_text(app.reading.font.label())
                .show_ui(ui, |ui| {
                    for choice in FontChoice::ALL {
                        if ui
                            .selectable_label(app.reading.font == choice, choice.label())
                            .clicked()
                        {
                            app.reading.set_font_family(choice);
                        }
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Line height");
            let mut line_height = app.reading.line_height;
            let slider = egui::Slider::new(&mut line_height, LINE_HEIGHT_RANGE)
                .step_by(0.1)
                .show_value(false);
            if ui.add(slider).changed() {
                app.reading.set_line_height(line_height);
            }
            ui.monospace(app.reading.line_height_label());
        });
    }

    fn theme_controls(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.horizontal(|ui| {
            ui.label("Theme");
            for theme in Theme::ALL {
                if ui
                    .selectable_label(app.reading.theme == theme, theme.label())
                    .clicked()
                {
                    app.reading.set_theme(theme);
                }
            }
        });
    }

    fn layout_controls(ui: &mut egui::Ui, app: &mut ReadletApp) {
        ui.horizontal(|ui| {
            ui.label("Layout");
            for layout in Layout::ALL {
                if ui
                    .selectable_label(app.reading.layout == layout, layout.label())
                    .clicked()
                {
                    app.reading.set_layout(layout);
                }
            }
        });
    }

    /// Table of contents; selecting an entry jumps there and closes the panel
    fn toc_window(ctx: egui::Context, app: &mut ReadletApp) {
        let mut open = app.toc_open;
        let mut picked = false;
        egui::Window::new("Contents")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 80.0))
            .show(&ctx, |ui| {
                for (index, chapter) in app.book.chapters.iter().enumerate() {
                    if ui
                        .selectable_label(app.current_chapter == index, &chapter.title)
                        .clicked()
                    {
                        app.current_chapter = index;
                        picked = true;
                    }
                }
            });
        app.toc_open = open && !picked;
    }

    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("Nothing to read");
            ui.label("Open a book from the library");
        });
    }
}
