//! Swipe classification for touch and pointer drags

use eframe::egui;

/// Minimum dominant-axis travel, in points, for a drag to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
    Down,
}

/// Classify a drag delta as a swipe.
///
/// Horizontal wins when `|dx| > |dy|` and exceeds the threshold, vertical
/// when the reverse holds. Anything else (including a tie) is no swipe.
pub fn classify(delta: egui::Vec2) -> Option<Swipe> {
    if delta.x.abs() > delta.y.abs() && delta.x.abs() > SWIPE_THRESHOLD {
        if delta.x > 0.0 {
            Some(Swipe::Right)
        } else {
            Some(Swipe::Left)
        }
    } else if delta.y.abs() > delta.x.abs() && delta.y.abs() > SWIPE_THRESHOLD {
        if delta.y > 0.0 {
            Some(Swipe::Down)
        } else {
            Some(Swipe::Up)
        }
    } else {
        None
    }
}

/// Tracks a press origin and classifies the drag on release
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<egui::Pos2>,
}

impl SwipeTracker {
    /// Record the position where the pointer went down
    pub fn begin(&mut self, pos: egui::Pos2) {
        self.start = Some(pos);
    }

    /// Classify the completed drag; returns `None` without a matching press
    pub fn end(&mut self, pos: egui::Pos2) -> Option<Swipe> {
        let start = self.start.take()?;
        classify(pos - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn long_horizontal_drag_is_a_horizontal_swipe() {
        assert_eq!(classify(vec2(60.0, 10.0)), Some(Swipe::Right));
        assert_eq!(classify(vec2(-60.0, 10.0)), Some(Swipe::Left));
    }

    #[test]
    fn long_vertical_drag_is_a_vertical_swipe() {
        assert_eq!(classify(vec2(10.0, 80.0)), Some(Swipe::Down));
        assert_eq!(classify(vec2(10.0, -80.0)), Some(Swipe::Up));
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        assert_eq!(classify(vec2(30.0, 0.0)), None);
        assert_eq!(classify(vec2(0.0, 30.0)), None);
        assert_eq!(classify(vec2(21.0, 21.0)), None);
    }

    #[test]
    fn diagonal_tie_is_not_a_swipe() {
        // Neither axis dominates, so nothing is classified
        assert_eq!(classify(vec2(60.0, 60.0)), None);
        assert_eq!(classify(vec2(-60.0, 60.0)), None);
    }

    #[test]
    fn tracker_classifies_from_press_origin() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(pos2(100.0, 100.0));
        assert_eq!(tracker.end(pos2(20.0, 110.0)), Some(Swipe::Left));

        // A release without a press is ignored
        assert_eq!(tracker.end(pos2(0.0, 0.0)), None);
    }
}
