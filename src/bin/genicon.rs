use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use joycon_icon::{GeneratorConfig, icon, logger};

#[derive(Parser)]
#[command(name = "genicon")]
#[command(about = "Generate the controller menu-bar icon (1x and @2x PNG)", long_about = None)]
struct Cli {
    /// Write the PNGs here instead of the asset catalog folder
    #[arg(long = "out-dir", value_name = "PATH")]
    out_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.debug);

    let config = match cli.out_dir {
        Some(dir) => GeneratorConfig::with_out_dir(dir),
        None => GeneratorConfig::default(),
    };

    icon::generate(&config)
        .with_context(|| format!("icon generation into {} failed", config.out_dir.display()))?;
    Ok(())
}
