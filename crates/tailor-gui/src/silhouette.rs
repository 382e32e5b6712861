use tailor_core::face::Face;

/// Garment outline in unit coordinates (0..1 on both axes).
/// Every piece is convex so it can be filled directly.
const BODY: &[[f32; 2]] = &[
    [0.25, 0.12],
    [0.40, 0.06],
    [0.60, 0.06],
    [0.75, 0.12],
    [0.75, 0.98],
    [0.25, 0.98],
];

const LEFT_SLEEVE: &[[f32; 2]] = &[[0.25, 0.12], [0.05, 0.30], [0.14, 0.42], [0.25, 0.32]];

const RIGHT_SLEEVE: &[[f32; 2]] = &[[0.75, 0.12], [0.95, 0.30], [0.86, 0.42], [0.75, 0.32]];

/// Depth of the neckline below the shoulder seam, per face.
fn collar_depth(face: Face) -> f32 {
    match face {
        Face::Front => 0.14,
        Face::Back => 0.085,
    }
}

fn map(rect: egui::Rect, pts: &[[f32; 2]]) -> Vec<egui::Pos2> {
    pts.iter()
        .map(|[x, y]| rect.min + egui::vec2(x * rect.width(), y * rect.height()))
        .collect()
}

/// Paint the garment silhouette for `face`, filled with `fill`.
pub fn paint(painter: &egui::Painter, rect: egui::Rect, face: Face, fill: egui::Color32) {
    let outline = egui::Stroke::new(1.5, egui::Color32::from_black_alpha(90));

    for piece in [LEFT_SLEEVE, RIGHT_SLEEVE, BODY] {
        painter.add(egui::Shape::convex_polygon(map(rect, piece), fill, outline));
    }

    // Neckline: a shallow curve between the two neck points.
    let depth = collar_depth(face);
    let collar: Vec<[f32; 2]> = (0..=16)
        .map(|i| {
            let t = i as f32 / 16.0;
            let x = 0.40 + 0.20 * t;
            let y = 0.06 + (depth - 0.06) * (std::f32::consts::PI * t).sin();
            [x, y]
        })
        .collect();
    painter.add(egui::Shape::line(map(rect, &collar), outline));
}
