mod textures;
mod toasts;
mod ui;

pub use textures::TextureCache;
pub use toasts::ToastState;
pub use ui::UIState;
