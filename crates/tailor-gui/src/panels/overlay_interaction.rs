use tailor_core::geometry::SurfaceRect;
use tailor_core::overlay::{Overlay, OverlayId};

use crate::app::TailorApp;
use crate::convert::to_point;

const HANDLE_SIZE: f32 = 14.0;
const BUTTON_RADIUS: f32 = 11.0;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(66, 133, 244);
const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 68, 55);

enum Action {
    BeginDrag(OverlayId),
    BeginResize(OverlayId, egui::Pos2),
    ToggleBackground(OverlayId),
    Remove(OverlayId),
}

/// Screen rect of an overlay placed relative to the surface origin.
fn overlay_rect(overlay: &Overlay, surface: &SurfaceRect) -> egui::Rect {
    let min = surface.to_screen(overlay.position);
    egui::Rect::from_min_size(
        egui::pos2(min.x, min.y),
        egui::vec2(overlay.size.width, overlay.size.height),
    )
}

/// Paint the overlays of the active face in z-order and route pointer input
/// to the gesture controller.
pub fn show_overlays(
    ui: &egui::Ui,
    painter: &egui::Painter,
    app: &mut TailorApp,
    surface: SurfaceRect,
) {
    let overlays = app.designer.active_overlays();
    let pending = app.designer.pending_removal();
    let mut actions = Vec::new();

    for overlay in overlays.iter() {
        let rect = overlay_rect(overlay, &surface);
        let texture = app.textures.texture_for(ui.ctx(), overlay);
        painter.image(
            texture,
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let busy = pending == Some(overlay.id);
        actions.extend(interact(ui, painter, app, overlay, rect, busy));
    }

    for action in actions {
        apply(app, action);
    }

    follow_pointer(ui, app, &surface);
}

fn interact(
    ui: &egui::Ui,
    painter: &egui::Painter,
    app: &TailorApp,
    overlay: &Overlay,
    rect: egui::Rect,
    busy: bool,
) -> Vec<Action> {
    let id = overlay.id;
    let mut actions = Vec::new();

    let body = ui.interact(rect, ui.id().with(("overlay", id.0)), egui::Sense::drag());

    let handle_rect = egui::Rect::from_center_size(
        rect.right_bottom(),
        egui::vec2(HANDLE_SIZE, HANDLE_SIZE),
    );
    let handle = ui.interact(handle_rect, ui.id().with(("resize", id.0)), egui::Sense::drag());

    let toggle_center = rect.left_bottom() + egui::vec2(BUTTON_RADIUS + 4.0, -(BUTTON_RADIUS + 4.0));
    let toggle_rect = egui::Rect::from_center_size(toggle_center, egui::Vec2::splat(BUTTON_RADIUS * 2.0));
    let toggle = ui
        .interact(toggle_rect, ui.id().with(("toggle", id.0)), egui::Sense::click())
        .on_hover_text(if overlay.is_showing_processed() {
            "Show original"
        } else {
            "Remove background"
        });

    let remove_rect = egui::Rect::from_center_size(rect.right_top(), egui::Vec2::splat(BUTTON_RADIUS * 2.0));
    let remove = ui
        .interact(remove_rect, ui.id().with(("remove", id.0)), egui::Sense::click())
        .on_hover_text("Remove image");

    let dragging = app.designer.gestures().is_dragging(id);
    let resizing = app.designer.gestures().is_resizing(id);
    let hovered = body.hovered() || handle.hovered() || toggle.hovered() || remove.hovered();

    if hovered || dragging || resizing {
        draw_dashed_border(painter, rect);
    }
    draw_resize_handle(painter, handle_rect, handle.hovered() || resizing);
    draw_button(painter, toggle_rect, if overlay.is_showing_processed() { "↺" } else { "✂" }, ACCENT, toggle.hovered());
    draw_button(painter, remove_rect, "✖", DANGER, remove.hovered());

    if busy {
        painter.rect_filled(rect, 0.0, egui::Color32::from_white_alpha(90));
        egui::Spinner::new()
            .size(24.0)
            .paint_at(ui, egui::Rect::from_center_size(rect.center(), egui::Vec2::splat(24.0)));
    }

    if handle.drag_started() {
        if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
            actions.push(Action::BeginResize(id, origin));
        }
    } else if body.drag_started() {
        actions.push(Action::BeginDrag(id));
    }
    if toggle.clicked() {
        actions.push(Action::ToggleBackground(id));
    }
    if remove.clicked() {
        actions.push(Action::Remove(id));
    }

    if resizing || handle.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeNwSe);
    } else if dragging {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if toggle.hovered() || remove.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    } else if body.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    actions
}

fn apply(app: &mut TailorApp, action: Action) {
    match action {
        Action::BeginDrag(id) => {
            if let Err(e) = app.designer.begin_drag(id) {
                tracing::debug!("{e}");
            }
        }
        Action::BeginResize(id, origin) => {
            if let Err(e) = app.designer.begin_resize(id, to_point(origin)) {
                tracing::debug!("{e}");
            }
        }
        Action::ToggleBackground(id) => {
            let request = app.designer.toggle_background(id);
            app.run_removal(request);
        }
        Action::Remove(id) => {
            app.designer.remove(id);
        }
    }
}

/// Feed pointer moves to the active gesture until every button is released,
/// wherever the pointer is.
fn follow_pointer(ui: &egui::Ui, app: &mut TailorApp, surface: &SurfaceRect) {
    if !app.designer.gestures().is_active() {
        return;
    }

    if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
        app.designer.pointer_moved(to_point(pos), surface);
    }

    if ui.input(|i| i.pointer.any_released() || !i.pointer.any_down()) {
        app.designer.release_gesture();
    }
}

fn draw_dashed_border(painter: &egui::Painter, rect: egui::Rect) {
    let points = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    painter.extend(egui::Shape::dashed_line(
        &points,
        egui::Stroke::new(1.5, ACCENT),
        6.0,
        4.0,
    ));
}

fn draw_resize_handle(painter: &egui::Painter, rect: egui::Rect, hot: bool) {
    let fill = if hot { ACCENT } else { egui::Color32::WHITE };
    painter.rect_filled(rect, 2.0, fill);
    painter.rect_stroke(
        rect,
        2.0,
        egui::Stroke::new(1.0, ACCENT),
        egui::epaint::StrokeKind::Inside,
    );
}

fn draw_button(painter: &egui::Painter, rect: egui::Rect, glyph: &str, color: egui::Color32, hot: bool) {
    let fill = if hot { color } else { color.gamma_multiply(0.85) };
    painter.circle_filled(rect.center(), BUTTON_RADIUS, fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
}
