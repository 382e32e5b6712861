use tailor_core::face::Face;
use tailor_core::removal::RemovalTier;

use crate::app::TailorApp;
use crate::convert::rgb_to_garment;
use crate::panels::helpers::{enum_combo, section_header};

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut TailorApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                garment_section(ui, app);
                ui.separator();
                view_section(ui, app);
                ui.separator();
                images_section(ui, app);
                ui.separator();
                removal_section(ui, app);
            });
        });
}

fn garment_section(ui: &mut egui::Ui, app: &mut TailorApp) {
    let color = app.designer.color();
    section_header(ui, "Garment", Some(color.to_hex().as_str()));
    ui.add_space(4.0);

    let mut rgb = [color.r, color.g, color.b];
    ui.horizontal(|ui| {
        ui.label("Color");
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            app.designer.set_color(rgb_to_garment(rgb));
        }
    });
}

fn view_section(ui: &mut egui::Ui, app: &mut TailorApp) {
    section_header(ui, "View", None);
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        for &face in Face::ALL {
            let selected = app.designer.active_face() == face;
            if ui.selectable_label(selected, face.to_string()).clicked() {
                app.designer.set_active_face(face);
            }
        }
    });
}

fn images_section(ui: &mut egui::Ui, app: &mut TailorApp) {
    let count = app.designer.active_overlays().len();
    let status = format!("{count} on {}", app.designer.active_face());
    section_header(ui, "Images", Some(status.as_str()));
    ui.add_space(4.0);

    if ui.button("Add image...").clicked() {
        app.open_image_picker();
    }

    ui.add_space(4.0);
    ui.small("Press and hold an image to reposition it.");
    ui.small("Use the bottom-right corner to resize.");
}

fn removal_section(ui: &mut egui::Ui, app: &mut TailorApp) {
    let status = app.designer.is_removal_pending().then_some("Working...");
    section_header(ui, "Background Removal", status);
    ui.add_space(4.0);

    let mut tier = app.designer.tier();
    if enum_combo(ui, "Size", &mut tier, RemovalTier::ALL) {
        app.designer.set_tier(tier);
    }

    ui.add_space(4.0);
    ui.small("Use the bottom-left button on an image to remove its background.");
}
