//! Reading-view presentation state: theme, layout, and typography

use eframe::egui;

/// Smallest allowed content font size in pixels
pub const FONT_SIZE_MIN: f32 = 12.0;
/// Largest allowed content font size in pixels
pub const FONT_SIZE_MAX: f32 = 24.0;
/// Step applied by the font size buttons
pub const FONT_SIZE_STEP: f32 = 2.0;

/// Bounds of the line height slider; the setter itself does not clamp
pub const LINE_HEIGHT_RANGE: std::ops::RangeInclusive<f32> = 1.0..=2.5;

/// Color palette for the reading view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Night,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Night];

    /// Parse a theme name; unrecognized names fall back to `Light`
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Theme::Dark,
            "night" => Theme::Night,
            _ => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Night => "Night",
        }
    }

    /// Full widget palette for this theme
    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
            Theme::Night => {
                // Warm, dimmed palette for reading in the dark
                let mut visuals = egui::Visuals::dark();
                visuals.panel_fill = egui::Color32::from_rgb(24, 20, 14);
                visuals.window_fill = egui::Color32::from_rgb(32, 27, 19);
                visuals.extreme_bg_color = egui::Color32::from_rgb(16, 13, 9);
                visuals.faint_bg_color = egui::Color32::from_rgb(38, 32, 22);
                visuals.override_text_color = Some(egui::Color32::from_rgb(189, 169, 126));
                visuals
            }
        }
    }
}

/// Column/flow arrangement for the reading content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Single,
    Double,
    Scroll,
}

/// Declarative sizing rules derived from a [`Layout`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub max_width: f32,
    pub columns: usize,
    pub column_gap: f32,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Single, Layout::Double, Layout::Scroll];

    /// Parse a layout name; unrecognized names fall back to `Single`
    pub fn from_name(name: &str) -> Self {
        match name {
            "double" => Layout::Double,
            "scroll" => Layout::Scroll,
            _ => Layout::Single,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Layout::Single => "Single page",
            Layout::Double => "Two columns",
            Layout::Scroll => "Continuous scroll",
        }
    }

    /// Sizing rules for the content region
    pub fn metrics(self) -> LayoutMetrics {
        match self {
            Layout::Double => LayoutMetrics {
                max_width: 1200.0,
                columns: 2,
                column_gap: 40.0,
            },
            Layout::Single | Layout::Scroll => LayoutMetrics {
                max_width: 800.0,
                columns: 1,
                column_gap: 0.0,
            },
        }
    }
}

/// Font stack applied to the content region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontChoice {
    #[default]
    Sans,
    Mono,
}

impl FontChoice {
    pub const ALL: [FontChoice; 2] = [FontChoice::Sans, FontChoice::Mono];

    pub fn label(self) -> &'static str {
        match self {
            FontChoice::Sans => "Sans-serif",
            FontChoice::Mono => "Monospace",
        }
    }

    pub fn family(self) -> egui::FontFamily {
        match self {
            FontChoice::Sans => egui::FontFamily::Proportional,
            FontChoice::Mono => egui::FontFamily::Monospace,
        }
    }
}

/// Presentation state for the reading view, owned by the app and passed
/// to handlers by reference
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingState {
    pub font_size: f32,
    pub line_height: f32,
    pub theme: Theme,
    pub layout: Layout,
    pub font: FontChoice,
}

impl Default for ReadingState {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            line_height: 1.5,
            theme: Theme::default(),
            layout: Layout::default(),
            font: FontChoice::default(),
        }
    }
}

impl ReadingState {
    /// Increase the content font size by one step, clamped to the maximum
    pub fn increase_font(&mut self) {
        self.font_size = (self.font_size + FONT_SIZE_STEP).min(FONT_SIZE_MAX);
    }

    /// Decrease the content font size by one step, clamped to the minimum
    pub fn decrease_font(&mut self) {
        self.font_size = (self.font_size - FONT_SIZE_STEP).max(FONT_SIZE_MIN);
    }

    /// Set the line height multiplier directly; the slider enforces bounds
    pub fn set_line_height(&mut self, value: f32) {
        self.line_height = value;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn set_font_family(&mut self, font: FontChoice) {
        self.font = font;
    }

    /// Numeric readout shown next to the font size buttons
    pub fn font_size_label(&self) -> String {
        format!("{}px", self.font_size as i32)
    }

    /// Numeric readout shown next to the line height slider
    pub fn line_height_label(&self) -> String {
        format!("{:.1}", self.line_height)
    }

    /// Text format for content paragraphs under the current typography
    pub fn text_format(&self, color: egui::Color32) -> egui::TextFormat {
        egui::TextFormat {
            font_id: egui::FontId::new(self.font_size, self.font.family()),
            color,
            line_height: Some(self.font_size * self.line_height),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_stays_in_bounds() {
        let mut state = ReadingState::default();
        for _ in 0..20 {
            state.increase_font();
            assert!(state.font_size <= FONT_SIZE_MAX);
        }
        for _ in 0..20 {
            state.decrease_font();
            assert!(state.font_size >= FONT_SIZE_MIN);
        }
    }

    #[test]
    fn font_size_readout_clamps_at_maximum() {
        let mut state = ReadingState::default();
        assert_eq!(state.font_size_label(), "16px");

        for _ in 0..5 {
            state.increase_font();
        }
        assert_eq!(state.font_size_label(), "24px");

        // A sixth click leaves the size unchanged
        state.increase_font();
        assert_eq!(state.font_size_label(), "24px");
    }

    #[test]
    fn theme_switch_replaces_prior_theme() {
        let mut state = ReadingState::default();
        state.set_theme(Theme::Dark);
        state.set_theme(Theme::Night);
        assert_eq!(state.theme, Theme::Night);

        // Re-applying the same theme is a no-op
        let before = state.clone();
        state.set_theme(Theme::Night);
        assert_eq!(state, before);
    }

    #[test]
    fn unrecognized_theme_falls_back_to_light() {
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("night"), Theme::Night);
        assert_eq!(Theme::from_name("sepia"), Theme::Light);
        assert_eq!(Theme::from_name(""), Theme::Light);
    }

    #[test]
    fn unrecognized_layout_falls_back_to_single() {
        assert_eq!(Layout::from_name("double"), Layout::Double);
        assert_eq!(Layout::from_name("scroll"), Layout::Scroll);
        assert_eq!(Layout::from_name("triple"), Layout::Single);
    }

    #[test]
    fn only_double_layout_yields_two_columns() {
        assert_eq!(Layout::Double.metrics().columns, 2);
        assert_eq!(Layout::Double.metrics().max_width, 1200.0);
        assert_eq!(Layout::Double.metrics().column_gap, 40.0);

        for layout in [Layout::Single, Layout::Scroll] {
            let metrics = layout.metrics();
            assert_eq!(metrics.columns, 1);
            assert_eq!(metrics.max_width, 800.0);
        }
    }

    #[test]
    fn line_height_is_applied_unclamped() {
        let mut state = ReadingState::default();
        state.set_line_height(3.2);
        assert_eq!(state.line_height, 3.2);
        assert_eq!(state.line_height_label(), "3.2");
    }
}
