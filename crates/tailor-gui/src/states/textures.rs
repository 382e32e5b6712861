use std::collections::HashMap;

use tailor_core::overlay::{Overlay, OverlayId, OverlayImage};

use crate::convert::rgba_to_color_image;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Variant {
    Original,
    Processed,
}

struct CachedTexture {
    texture: egui::TextureHandle,
    source: OverlayImage,
}

/// GPU textures for overlay images, uploaded on first display.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<(OverlayId, Variant), CachedTexture>,
}

impl TextureCache {
    /// Texture for whatever image the overlay currently displays.
    pub fn texture_for(&mut self, ctx: &egui::Context, overlay: &Overlay) -> egui::TextureId {
        let variant = if overlay.is_showing_processed() {
            Variant::Processed
        } else {
            Variant::Original
        };
        let image = overlay.displayed();
        let key = (overlay.id, variant);

        let stale = self
            .entries
            .get(&key)
            .is_none_or(|cached| !cached.source.same_as(image));
        if stale {
            let name = match variant {
                Variant::Original => format!("overlay-{}", overlay.id.0),
                Variant::Processed => format!("overlay-{}-processed", overlay.id.0),
            };
            let texture = ctx.load_texture(
                name,
                rgba_to_color_image(&image.pixels),
                egui::TextureOptions::LINEAR,
            );
            self.entries.insert(
                key,
                CachedTexture {
                    texture,
                    source: image.clone(),
                },
            );
        }

        self.entries[&key].texture.id()
    }

    /// Free textures of overlays that no longer exist on either face.
    pub fn retain_overlays(&mut self, live: &[OverlayId]) {
        self.entries.retain(|(id, _), _| live.contains(id));
    }
}
