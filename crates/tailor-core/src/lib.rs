pub mod color;
pub mod config;
pub mod consts;
pub mod designer;
pub mod error;
pub mod face;
pub mod geometry;
pub mod gesture;
pub mod import;
pub mod notice;
pub mod overlay;
pub mod removal;
pub mod store;
