use tailor_core::geometry::{Point, Size, SurfaceRect};

use crate::app::TailorApp;
use crate::convert::garment_to_color32;
use crate::panels::overlay_interaction;
use crate::silhouette;

/// Width over height of the garment frame.
const FRAME_ASPECT: f32 = 5.0 / 6.0;
const MAX_FRAME_WIDTH: f32 = 520.0;
const CHECKER_SIZE: f32 = 16.0;

pub fn show(ctx: &egui::Context, app: &mut TailorApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let frame = compute_frame_rect(rect);
        let painter = ui.painter_at(frame);
        paint_checkerboard(&painter, frame);
        silhouette::paint(
            &painter,
            frame,
            app.designer.active_face(),
            garment_to_color32(app.designer.color()),
        );

        let surface = SurfaceRect::new(
            Point::new(frame.min.x, frame.min.y),
            Size::new(frame.width(), frame.height()),
        );
        overlay_interaction::show_overlays(ui, &painter, app, surface);

        draw_face_badge(&painter, frame, &app.designer.active_face().to_string());

        if app.designer.active_overlays().is_empty() {
            draw_empty_hint(ui, frame);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Largest frame of [`FRAME_ASPECT`] that fits the panel, centered.
fn compute_frame_rect(panel: egui::Rect) -> egui::Rect {
    let available = panel.shrink(16.0).size();
    let width = available.x.min(available.y * FRAME_ASPECT).min(MAX_FRAME_WIDTH);
    let height = width / FRAME_ASPECT;
    egui::Rect::from_center_size(panel.center(), egui::vec2(width, height))
}

fn paint_checkerboard(painter: &egui::Painter, frame: egui::Rect) {
    painter.rect_filled(frame, 6.0, egui::Color32::from_gray(236));
    let dark = egui::Color32::from_gray(214);

    let cols = (frame.width() / CHECKER_SIZE).ceil() as usize;
    let rows = (frame.height() / CHECKER_SIZE).ceil() as usize;
    for row in 0..rows {
        for col in (row % 2..cols).step_by(2) {
            let min = frame.min + egui::vec2(col as f32, row as f32) * CHECKER_SIZE;
            let cell = egui::Rect::from_min_size(min, egui::vec2(CHECKER_SIZE, CHECKER_SIZE))
                .intersect(frame);
            painter.rect_filled(cell, 0.0, dark);
        }
    }
}

fn draw_face_badge(painter: &egui::Painter, frame: egui::Rect, label: &str) {
    let galley = painter.layout_no_wrap(
        label.to_owned(),
        egui::FontId::proportional(14.0),
        egui::Color32::WHITE,
    );
    let pos = frame.left_top() + egui::vec2(10.0, 10.0);
    let badge = egui::Rect::from_min_size(pos, galley.size()).expand2(egui::vec2(8.0, 4.0));
    painter.rect_filled(badge, 4.0, egui::Color32::from_black_alpha(160));
    painter.galley(pos, galley, egui::Color32::WHITE);
}

fn draw_empty_hint(ui: &egui::Ui, frame: egui::Rect) {
    ui.painter().text(
        egui::pos2(frame.center().x, frame.bottom() + 4.0),
        egui::Align2::CENTER_TOP,
        "Add an image to start designing",
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(140),
    );
}
