//! Image viewer adapter that hands the image to the platform's default
//! application.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{DynamicImage, ImageFormat};

use crate::error::BannerError;
use crate::ports::ImageViewer;

/// Environment variable naming a program to open images with.
pub const VIEWER_ENV: &str = "CLASSBANNERS_VIEWER";

/// Writes the image to a temporary PNG and opens it with `xdg-open`,
/// `open` or `start`, or with the program named by [`VIEWER_ENV`].
#[derive(Debug, Clone, Default)]
pub struct SystemViewer {
    program: Option<OsString>,
}

impl SystemViewer {
    /// Viewer using [`VIEWER_ENV`] if set, otherwise the platform opener.
    #[must_use]
    pub fn new() -> Self {
        Self { program: std::env::var_os(VIEWER_ENV).filter(|p| !p.is_empty()) }
    }

    /// Viewer that runs `program <file>`.
    #[must_use]
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: Some(program.into()) }
    }

    fn command(&self, path: &Path) -> Command {
        if let Some(program) = &self.program {
            let mut cmd = Command::new(program);
            cmd.arg(path);
            return cmd;
        }
        platform_opener(path)
    }
}

impl ImageViewer for SystemViewer {
    fn display(&self, image: &DynamicImage) -> Result<(), BannerError> {
        let path = temp_image_path()?;
        image.save_with_format(&path, ImageFormat::Png)?;
        log::debug!("Opening {} in an image viewer", path.display());

        let mut cmd = self.command(&path);
        let status = cmd
            .status()
            .map_err(|e| BannerError::Display(format!("{}: {e}", cmd.get_program().to_string_lossy())))?;
        if status.success() {
            Ok(())
        } else {
            Err(BannerError::Display(format!(
                "{} exited with {status}",
                cmd.get_program().to_string_lossy()
            )))
        }
    }
}

/// Create a fresh `.png` in the temp directory for the viewer to open.
///
/// The file is kept after this process exits since openers such as
/// `xdg-open` return before the viewer has read it.
fn temp_image_path() -> Result<PathBuf, BannerError> {
    let file = tempfile::Builder::new().prefix("classbanners-").suffix(".png").tempfile()?;
    let (_, path) = file.keep().map_err(std::io::Error::from)?;
    Ok(path)
}

#[cfg(target_os = "macos")]
fn platform_opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn platform_opener(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
