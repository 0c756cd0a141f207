//! Render context that bundles the font resolver and the image viewer.

use crate::adapters::viewer::SystemViewer;
use crate::fonts::FontResolver;
use crate::ports::ImageViewer;
use crate::settings::Settings;

/// Everything rendering and displaying needs from the outside world.
pub struct RenderContext {
    /// Font resolution chain.
    pub fonts: FontResolver,
    /// Image viewer port.
    pub viewer: Box<dyn ImageViewer>,
}

impl RenderContext {
    /// Build the context described by `settings`.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            fonts: FontResolver::new(settings.fonts.search_paths.iter().cloned()),
            viewer: Box::new(SystemViewer::new()),
        }
    }
}
