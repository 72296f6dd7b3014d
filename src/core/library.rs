//! Embedded document catalog, sample book, and browser selection state

use anyhow::{Context, Result};
use serde::Deserialize;

/// Catalog shipped with the binary; there is no on-disk library
const CATALOG_JSON: &str = include_str!("../../assets/library.json");
/// Sample book shown in the reading view
const SAMPLE_BOOK_JSON: &str = include_str!("../../assets/sample_book.json");

/// Category tabs shown above the file list; selection is visual only,
/// filtering is not implemented
pub const CATEGORY_TABS: &[&str] = &["All", "Novels", "Reference", "Magazines"];

/// How the file browser lays out its entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserView {
    #[default]
    List,
    Grid,
}

/// One document in the library
#[derive(Debug, Clone, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
    pub category: String,
    pub format: String,
    pub size: String,
    /// Batch-selection checkbox state, never persisted
    #[serde(skip)]
    pub selected: bool,
}

/// A saved note excerpt shown in the notes manager
#[derive(Debug, Clone, Deserialize)]
pub struct NoteEntry {
    pub book: String,
    pub excerpt: String,
    pub note: String,
    pub created: String,
}

/// A reading-position bookmark shown in the notes manager
#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkEntry {
    pub book: String,
    pub chapter: String,
    pub progress: String,
    pub created: String,
}

/// The library catalog plus the browser's presentation state
#[derive(Debug, Default, Deserialize)]
pub struct Library {
    pub books: Vec<BookEntry>,
    #[serde(default)]
    pub notes: Vec<NoteEntry>,
    #[serde(default)]
    pub bookmarks: Vec<BookmarkEntry>,
    /// Startup theme name, resolved with a fallback to light
    #[serde(default)]
    pub default_theme: String,
    /// Startup layout name, resolved with a fallback to single
    #[serde(default)]
    pub default_layout: String,
    #[serde(skip)]
    pub view: BrowserView,
    #[serde(skip)]
    pub active_category: usize,
}

impl Library {
    /// Parse the embedded catalog
    pub fn load() -> Result<Self> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse library catalog")
    }

    /// Number of entries currently checked for batch operations
    pub fn selected_count(&self) -> usize {
        self.books.iter().filter(|book| book.selected).count()
    }

    /// The batch toolbar is shown exactly while something is selected
    pub fn batch_active(&self) -> bool {
        self.selected_count() > 0
    }

    /// Uncheck every entry, hiding the batch toolbar
    pub fn clear_selection(&mut self) {
        for book in &mut self.books {
            book.selected = false;
        }
    }
}

/// One chapter of the sample book
#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// The book rendered in the reading view
#[derive(Debug, Default, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Parse the embedded sample book
    pub fn load() -> Result<Self> {
        serde_json::from_str(SAMPLE_BOOK_JSON).context("Failed to parse sample book")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_library() -> Library {
        Library::from_json(
            r#"{
                "books": [
                    {"title": "A", "author": "x", "category": "Novels", "format": "EPUB", "size": "1.2 MB"},
                    {"title": "B", "author": "y", "category": "Reference", "format": "PDF", "size": "4.0 MB"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn embedded_catalog_parses() {
        let library = Library::load().unwrap();
        assert!(!library.books.is_empty());
        assert!(!library.notes.is_empty());
        assert!(!library.bookmarks.is_empty());
    }

    #[test]
    fn embedded_sample_book_parses() {
        let book = Book::load().unwrap();
        assert!(!book.chapters.is_empty());
        assert!(book.chapters.iter().all(|c| !c.paragraphs.is_empty()));
    }

    #[test]
    fn batch_toolbar_tracks_selection_exactly() {
        let mut library = small_library();
        assert!(!library.batch_active());

        library.books[0].selected = true;
        assert!(library.batch_active());
        assert_eq!(library.selected_count(), 1);

        library.books[1].selected = true;
        assert_eq!(library.selected_count(), 2);

        library.books[0].selected = false;
        library.books[1].selected = false;
        assert!(!library.batch_active());
    }

    #[test]
    fn clear_selection_unchecks_everything() {
        let mut library = small_library();
        library.books[0].selected = true;
        library.books[1].selected = true;

        library.clear_selection();
        assert_eq!(library.selected_count(), 0);
    }
}
