use tailor_core::face::Face;

use crate::app::TailorApp;

pub fn show(ctx: &egui::Context, app: &mut TailorApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            for &face in Face::ALL {
                ui.label(format!("{face}: {}", app.designer.overlays(face).len()));
                ui.separator();
            }
            ui.label(format!("Color: {}", app.designer.color()));
            ui.separator();
            if app.designer.is_removal_pending() {
                ui.add(egui::Spinner::new().size(12.0));
                ui.label("Removing background...");
            } else {
                ui.label(format!("Removal size: {}", app.designer.tier()));
            }
        });

        ui.add_space(2.0);
    });
}
