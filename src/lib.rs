//! Classbanners - render title/subtitle banners to image files.
//!
//! ```no_run
//! use classbanners::{BannerConfig, BannerGenerator};
//!
//! let config = BannerConfig::builder().width(1200).height(400).background_color("#FF0000").build()?;
//! let banner = BannerGenerator::new(config).create_banner("Class of 2025", "", None);
//! banner.save("out/banner.png", None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod adapters;
pub mod canvas;
pub mod context;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod output;
pub mod params;
pub mod ports;
pub mod render;
pub mod settings;
pub mod text;

pub use error::{BannerError, ConfigError};
pub use model::{Banner, BannerConfig, BannerConfigBuilder};
pub use params::{HexColor, TextAlign};
pub use render::{render, BannerGenerator};
