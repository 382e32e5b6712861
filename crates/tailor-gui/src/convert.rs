use tailor_core::color::GarmentColor;

/// Convert a decoded RGBA image to an egui ColorImage.
pub fn rgba_to_color_image(image: &image::RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

pub fn garment_to_color32(color: GarmentColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub fn rgb_to_garment(color: [u8; 3]) -> GarmentColor {
    GarmentColor::rgb(color[0], color[1], color[2])
}

pub fn to_point(pos: egui::Pos2) -> tailor_core::geometry::Point {
    tailor_core::geometry::Point::new(pos.x, pos.y)
}
