//! Font resolution: custom font, then the default scalable font, then the
//! built-in glyph set.

use std::path::{Path, PathBuf};

use crate::adapters::fonts::{BuiltinFont, FileFont, SystemFonts};
use crate::ports::FontSource;
use crate::text::Typeface;

/// Resolves a usable typeface by trying font sources in order.
///
/// Resolution never fails: the last source is the built-in glyph set.
#[derive(Debug, Clone)]
pub struct FontResolver {
    system: Option<SystemFonts>,
}

impl FontResolver {
    /// Resolver that looks in `search_paths` before the standard font
    /// directories.
    #[must_use]
    pub fn new(search_paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self { system: Some(SystemFonts::new(search_paths)) }
    }

    /// Resolver with a custom default-font lookup.
    #[must_use]
    pub fn with_system_fonts(system: SystemFonts) -> Self {
        Self { system: Some(system) }
    }

    /// Resolver that skips the default scalable font entirely, so anything
    /// but a custom font falls back to the built-in glyph set.
    #[must_use]
    pub fn builtin_only() -> Self {
        Self { system: None }
    }

    /// The ordered sources consulted for `custom`.
    fn chain(&self, custom: Option<&Path>) -> Vec<Box<dyn FontSource>> {
        let mut chain: Vec<Box<dyn FontSource>> = Vec::with_capacity(3);
        if let Some(path) = custom {
            chain.push(Box::new(FileFont::new(path)));
        }
        if let Some(system) = &self.system {
            chain.push(Box::new(system.clone()));
        }
        chain.push(Box::new(BuiltinFont));
        chain
    }

    /// Resolve a typeface, preferring the font at `custom` if given.
    #[must_use]
    pub fn resolve(&self, custom: Option<&Path>) -> Typeface {
        for source in self.chain(custom) {
            match source.load() {
                Ok(face) => {
                    log::debug!("Using {}", source.describe());
                    return face;
                }
                Err(e) => log::log!(
                    source.failure_level(),
                    "Failed to load {}, falling back to default: {e}",
                    source.describe()
                ),
            }
        }
        Typeface::builtin()
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::with_system_fonts(SystemFonts::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_custom_font_falls_back() {
        let face = FontResolver::builtin_only().resolve(Some(Path::new("/nonexistent/Custom.ttf")));
        assert!(!face.is_scalable());
    }

    #[test]
    fn corrupt_custom_font_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Custom.ttf");
        std::fs::write(&path, b"corrupt").unwrap();
        let face = FontResolver::builtin_only().resolve(Some(&path));
        assert!(!face.is_scalable());
    }

    #[test]
    fn no_system_font_uses_builtin() {
        let resolver = FontResolver::with_system_fonts(SystemFonts::with_candidates(Vec::new()));
        assert!(!resolver.resolve(None).is_scalable());
    }

    #[test]
    fn chain_order() {
        let resolver = FontResolver::with_system_fonts(SystemFonts::with_candidates(Vec::new()));
        let chain = resolver.chain(Some(Path::new("/fonts/Custom.ttf")));
        let names: Vec<String> = chain.iter().map(|s| s.describe()).collect();
        assert_eq!(names.len(), 3);
        assert!(names[0].contains("Custom.ttf"));
        assert!(names[1].contains("DejaVuSans.ttf"));
        assert_eq!(names[2], "built-in fixed font");
    }

    #[test]
    fn builtin_only_chain_skips_system() {
        let chain = FontResolver::builtin_only().chain(None);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].describe(), "built-in fixed font");
    }

    const FIXTURE_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSans.ttf");

    #[test]
    fn custom_font_is_used_when_loadable() {
        let face = FontResolver::builtin_only().resolve(Some(Path::new(FIXTURE_FONT)));
        assert!(face.is_scalable());
    }

    #[test]
    fn search_path_supplies_default_font() {
        let resolver = FontResolver::with_system_fonts(SystemFonts::with_candidates(vec![FIXTURE_FONT.into()]));
        assert!(resolver.resolve(None).is_scalable());
        assert!(resolver.resolve(Some(Path::new("/nonexistent/Custom.ttf"))).is_scalable());
    }
}
