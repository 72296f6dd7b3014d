//! UI panels for Readlet

pub mod browser;
pub mod notes;
pub mod reader;
pub mod settings;
pub mod toast;
