//! Classbanners - banner image generator CLI.

mod cli;
mod logging;

use std::process;

use clap::Parser;

use classbanners::context::RenderContext;
use classbanners::error::BannerError;
use classbanners::params::parse_format;
use classbanners::settings::{discover_config_path, Settings};
use classbanners::BannerGenerator;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbosity()) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), BannerError> {
    // Load settings
    let settings_path = discover_config_path(cli.config.as_deref());
    let settings = Settings::load(&settings_path).map_err(BannerError::Settings)?;
    let defaults = &settings.defaults;

    // Validate everything before drawing
    let config = cli.banner_config(defaults)?;
    let format = cli.format_name(defaults).map(parse_format).transpose().map_err(BannerError::InvalidArgument)?;
    let output = cli.output_path(defaults);

    log::info!("Banner: {}x{}, font size {}", config.width(), config.height(), config.font_size());

    let ctx = RenderContext::from_settings(&settings);
    let generator = BannerGenerator::new(config).with_fonts(ctx.fonts);
    let banner = generator.create_banner(cli.title.as_str(), cli.subtitle.as_str(), None);

    banner.save(&output, format)?;
    println!("Banner saved to: {}", output.display());

    if cli.show {
        banner.show_with(ctx.viewer.as_ref())?;
    }

    Ok(())
}
