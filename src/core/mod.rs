//! Core state for the reading view, library catalog, gestures, and toasts

pub mod gesture;
pub mod library;
pub mod reading;
pub mod toast;
