pub mod canvas;
pub mod controls;
mod helpers;
pub mod menu_bar;
mod overlay_interaction;
pub mod status;
pub mod toasts;
