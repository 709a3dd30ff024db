use std::path::PathBuf;

use anyhow::{Context, Result};
use brickvision_core::pipeline::config::AnalysisConfig;
use brickvision_core::segmentation::EdgeConfig;
use clap::Args;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a full default AnalysisConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let mut config = AnalysisConfig::new("dice.png");
    config.annotated_output = Some(PathBuf::from("dice_annotated.png"));
    config.report_output = Some(PathBuf::from("dice_regions.toml"));
    config.edges = Some(EdgeConfig::default());
    let toml_str = config.to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
