use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tailor_core::face::Face;
use tailor_core::import::load_image_file;
use tailor_core::overlay::OverlayId;
use tailor_core::removal::{perform_removal, RemovalRequest, RemovalTier, RemoveBgClient};
use tracing::info;

#[derive(Clone, Copy, ValueEnum)]
pub enum TierArg {
    Preview,
    Auto,
    Full,
    #[value(name = "50mp")]
    FiftyMp,
}

impl From<TierArg> for RemovalTier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Preview => RemovalTier::Preview,
            TierArg::Auto => RemovalTier::Auto,
            TierArg::Full => RemovalTier::Full,
            TierArg::FiftyMp => RemovalTier::FiftyMegapixel,
        }
    }
}

#[derive(Args)]
pub struct RemoveBgArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output size tier (defaults to the configured tier)
    #[arg(long, value_enum)]
    pub tier: Option<TierArg>,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "no-background.png")]
    pub output: PathBuf,
}

pub fn run(args: &RemoveBgArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let client = RemoveBgClient::from_config(&config.removal).context(
        "Set removal.api_key in the config file or the TAILOR_REMOVEBG_API_KEY variable",
    )?;

    let image = load_image_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let (w, h) = image.dimensions();
    println!("Loaded {}x{} image", w, h);

    let tier = args.tier.map(RemovalTier::from).unwrap_or(config.removal.tier);
    let request = RemovalRequest {
        overlay: OverlayId(0),
        face: Face::Front,
        image,
        tier,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]")?);
    pb.set_message(format!("Removing background ({tier})"));
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = perform_removal(&client, &request);
    pb.finish_and_clear();

    let processed = match outcome.result {
        Ok(img) => img,
        Err(e) => bail!("Background removal failed: {e}"),
    };

    std::fs::write(&args.output, processed.encoded.as_slice())
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let (w, h) = processed.dimensions();
    info!(output = %args.output.display(), "Wrote processed image");
    println!("Saved {}x{} result to {}", w, h, args.output.display());

    Ok(())
}
