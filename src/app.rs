//! Main application state and UI coordination

use eframe::egui;

use crate::core::gesture::SwipeTracker;
use crate::core::library::{Book, Library};
use crate::core::reading::{Layout, ReadingState, Theme};
use crate::core::toast::ToastQueue;
use crate::ui::{
    browser::BrowserPanel, notes::NotesPanel, reader::ReaderPanel, settings::SettingsPanel,
    toast::ToastOverlay,
};

/// Below this window width the navigation bar moves to the bottom edge
const NARROW_NAV_WIDTH: f32 = 768.0;

/// Top-level screen being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Library,
    Reader,
    Notes,
    Settings,
}

/// Active tab of the notes manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotesTab {
    #[default]
    Notes,
    Bookmarks,
}

/// Preference toggles; changes are logged, nothing is persisted
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub auto_sync: bool,
    pub page_animation: bool,
    pub notifications: bool,
}

/// Main application state
pub struct ReadletApp {
    /// Current screen
    pub page: Page,
    /// Reading-view presentation state
    pub reading: ReadingState,
    /// Document catalog and browser state
    pub library: Library,
    /// The book shown in the reading view
    pub book: Book,
    /// Chapter index into the current book
    pub current_chapter: usize,
    /// Whether the reading-controls overlay is open
    pub controls_open: bool,
    /// Whether the table-of-contents overlay is open
    pub toc_open: bool,
    /// Bookmark flag for the current position
    pub bookmarked: bool,
    /// Active tab of the notes manager
    pub notes_tab: NotesTab,
    /// Active filter index within the notes tab
    pub note_filter: usize,
    /// Active filter index within the bookmarks tab
    pub bookmark_filter: usize,
    /// Preference toggles from the settings screen
    pub preferences: Preferences,
    /// Library search box contents
    pub search_query: String,
    /// Selected sort option index
    pub sort_by: usize,
    /// Toast notifications
    pub toasts: ToastQueue,
    /// Pointer drag tracking for swipe classification
    swipe: SwipeTracker,
}

impl Default for ReadletApp {
    fn default() -> Self {
        // A broken embedded catalog degrades to an empty library
        let library = Library::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load catalog: {e:#}");
            Library::default()
        });
        let book = Book::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load sample book: {e:#}");
            Book::default()
        });

        let mut reading = ReadingState::default();
        reading.set_theme(Theme::from_name(&library.default_theme));
        reading.set_layout(Layout::from_name(&library.default_layout));

        Self {
            page: Page::default(),
            reading,
            library,
            book,
            current_chapter: 0,
            controls_open: false,
            toc_open: false,
            bookmarked: false,
            notes_tab: NotesTab::default(),
            note_filter: 0,
            bookmark_filter: 0,
            preferences: Preferences::default(),
            search_query: String::new(),
            sort_by: 0,
            toasts: ToastQueue::default(),
            swipe: SwipeTracker::default(),
        }
    }
}

impl ReadletApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::default();
        cc.egui_ctx.set_visuals(app.reading.theme.visuals());
        app
    }

    /// Toggle the bookmark at the current position
    pub fn toggle_bookmark(&mut self) {
        self.bookmarked = !self.bookmarked;
        if self.bookmarked {
            self.toasts.show("Bookmark added");
        } else {
            self.toasts.show("Bookmark removed");
        }
    }

    /// Note creation is not wired up yet
    pub fn add_note_stub(&mut self) {
        self.toasts.show("Notes are not implemented yet");
    }

    /// Keyboard shortcuts, active only while the reading view is shown
    fn handle_reader_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                self.controls_open = false;
                self.toc_open = false;
            }
            if i.key_pressed(egui::Key::B) {
                self.toggle_bookmark();
            }
            if i.key_pressed(egui::Key::N) {
                self.add_note_stub();
            }
            // Reserved for page turning
            if i.key_pressed(egui::Key::ArrowLeft) {
                tracing::debug!("Previous page shortcut (reserved)");
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                tracing::debug!("Next page shortcut (reserved)");
            }
        });
    }

    /// Classify pointer drags as swipes; gestures only log for now
    fn track_swipes(&mut self, ctx: &egui::Context) {
        let swipe = ctx.input(|i| {
            if i.pointer.any_pressed() {
                if let Some(pos) = i.pointer.interact_pos() {
                    self.swipe.begin(pos);
                }
            }
            if i.pointer.any_released() {
                i.pointer.interact_pos().and_then(|pos| self.swipe.end(pos))
            } else {
                None
            }
        });
        if let Some(swipe) = swipe {
            tracing::debug!("Swipe {swipe:?}");
        }
    }

    /// Navigation bar; drops to the bottom edge on narrow windows
    fn render_nav(&mut self, ctx: &egui::Context) {
        let narrow = ctx.screen_rect().width() < NARROW_NAV_WIDTH;
        let panel = if narrow {
            egui::TopBottomPanel::bottom("nav_bar")
        } else {
            egui::TopBottomPanel::top("nav_bar")
        };

        panel.show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (page, label) in [
                    (Page::Library, "Library"),
                    (Page::Reader, "Reader"),
                    (Page::Notes, "Notes"),
                    (Page::Settings, "Settings"),
                ] {
                    if ui.selectable_label(self.page == page, label).clicked() {
                        self.page = page;
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak("Readlet");
                });
            });
        });
    }
}

impl eframe::App for ReadletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.reading.theme.visuals());

        if self.page == Page::Reader {
            self.handle_reader_shortcuts(ctx);
        }
        self.track_swipes(ctx);

        self.render_nav(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Library => BrowserPanel::show(ui, self),
            Page::Reader => ReaderPanel::show(ui, self),
            Page::Notes => NotesPanel::show(ui, self),
            Page::Settings => SettingsPanel::show(ui, self),
        });

        ToastOverlay::show(ctx, &mut self.toasts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_embedded_catalog() {
        let app = ReadletApp::default();
        assert_eq!(app.page, Page::Library);
        assert_eq!(app.reading.theme, Theme::Light);
        assert_eq!(app.reading.layout, Layout::Single);
        assert_eq!(app.reading.font_size_label(), "16px");
        assert!(!app.library.books.is_empty());
    }

    #[test]
    fn bookmark_toggle_flips_and_acknowledges() {
        let mut app = ReadletApp::default();
        app.toggle_bookmark();
        assert!(app.bookmarked);
        app.toggle_bookmark();
        assert!(!app.bookmarked);
    }
}
