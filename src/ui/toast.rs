//! Floating toast overlay anchored above the bottom of the window

use std::time::Instant;

use eframe::egui;

use crate::core::toast::ToastQueue;

/// Overlay that renders the active toasts with their current opacity
pub struct ToastOverlay;

impl ToastOverlay {
    pub fn show(ctx: &egui::Context, toasts: &mut ToastQueue) {
        let now = Instant::now();
        toasts.tick(now);

        if !toasts.is_live() {
            return;
        }
        // Keep repainting so fades and scheduled toasts animate
        ctx.request_repaint();

        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -80.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in toasts.iter() {
                    let opacity = toast.opacity(now);
                    let background =
                        egui::Color32::from_black_alpha((204.0 * opacity) as u8);
                    let foreground = egui::Color32::WHITE.gamma_multiply(opacity);

                    egui::Frame::new()
                        .fill(background)
                        .corner_radius(4)
                        .inner_margin(egui::Margin::symmetric(24, 12))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message).color(foreground),
                            );
                        });
                    ui.add_space(8.0);
                }
            });
    }
}
