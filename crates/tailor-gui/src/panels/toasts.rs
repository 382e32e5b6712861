use tailor_core::notice::NoticeLevel;

use crate::app::TailorApp;

fn level_color(level: NoticeLevel) -> egui::Color32 {
    match level {
        NoticeLevel::Info => egui::Color32::from_rgb(52, 101, 164),
        NoticeLevel::Success => egui::Color32::from_rgb(46, 125, 50),
        NoticeLevel::Warning => egui::Color32::from_rgb(191, 128, 0),
        NoticeLevel::Error => egui::Color32::from_rgb(183, 28, 28),
    }
}

/// Stack of notices in the top-right corner of the window.
pub fn show(ctx: &egui::Context, app: &TailorApp) {
    if app.toasts.toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 36.0))
        .interactable(false)
        .show(ctx, |ui| {
            for toast in &app.toasts.toasts {
                egui::Frame::NONE
                    .fill(level_color(toast.notice.level()))
                    .corner_radius(4.0)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.set_max_width(280.0);
                        ui.colored_label(egui::Color32::WHITE, toast.notice.message());
                    });
                ui.add_space(6.0);
            }
        });
}
