mod app;
mod convert;
mod messages;
mod panels;
mod silhouette;
mod states;
mod workers;

use std::path::PathBuf;

use tailor_core::config::DesignerConfig;
use tracing::warn;

/// Config file read at startup when `TAILOR_CONFIG` is not set.
const DEFAULT_CONFIG_FILE: &str = "tailor.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 640.0])
            .with_title("Tailor"),
        ..Default::default()
    };

    eframe::run_native(
        "TailorDesigner",
        options,
        Box::new(|cc| Ok(Box::new(app::TailorApp::new(&cc.egui_ctx, config)))),
    )
}

fn load_config() -> DesignerConfig {
    let path = std::env::var_os("TAILOR_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut config = if path.exists() {
        DesignerConfig::load(&path).unwrap_or_else(|e| {
            warn!(path = %path.display(), "Ignoring config: {e}");
            DesignerConfig::default()
        })
    } else {
        DesignerConfig::default()
    };
    config.apply_env();
    config
}
