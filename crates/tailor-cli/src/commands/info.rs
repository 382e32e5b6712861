use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::summary::print_config_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Config file (TOML); defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    print_config_summary(&config, args.config.as_deref());
    Ok(())
}
