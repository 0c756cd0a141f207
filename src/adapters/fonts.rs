//! Font source adapters: a custom font file, the system default font, and
//! the built-in glyph set.

use std::path::{Path, PathBuf};

use crate::error::FontError;
use crate::ports::FontSource;
use crate::text::Typeface;

/// File name of the default scalable font looked up in font directories.
pub const DEFAULT_FONT_FILE: &str = "DejaVuSans.ttf";

/// Directories where [`DEFAULT_FONT_FILE`] is commonly installed.
const STANDARD_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/dejavu-sans-fonts",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// Per-user font directories, relative to `$HOME`.
const USER_FONT_DIRS: &[&str] = &[".local/share/fonts", ".fonts", "Library/Fonts"];

/// Read and parse a font file.
fn load_file(path: &Path) -> Result<Typeface, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Read { path: path.to_path_buf(), source })?;
    Typeface::from_bytes(bytes).ok_or_else(|| FontError::Parse { path: path.to_path_buf() })
}

/// A font file the user asked for explicitly.
#[derive(Debug, Clone)]
pub struct FileFont {
    path: PathBuf,
}

impl FileFont {
    /// Source for the font at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FontSource for FileFont {
    fn describe(&self) -> String {
        format!("font '{}'", self.path.display())
    }

    fn load(&self) -> Result<Typeface, FontError> {
        load_file(&self.path)
    }

    fn failure_level(&self) -> log::Level {
        log::Level::Warn
    }
}

/// The default scalable font, searched for in a list of candidate paths.
#[derive(Debug, Clone)]
pub struct SystemFonts {
    candidates: Vec<PathBuf>,
}

impl SystemFonts {
    /// Search `search_paths` first, then the standard font directories.
    ///
    /// Each search path may be a font file or a directory expected to hold
    /// [`DEFAULT_FONT_FILE`].
    #[must_use]
    pub fn new(search_paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut candidates: Vec<PathBuf> = search_paths.into_iter().map(|p| expand(&p)).collect();
        candidates.extend(Self::standard_locations());
        Self { candidates }
    }

    /// Search exactly `candidates`, in order.
    #[must_use]
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Standard system and per-user locations of [`DEFAULT_FONT_FILE`].
    #[must_use]
    pub fn standard_locations() -> Vec<PathBuf> {
        let home = std::env::var_os("HOME").map(PathBuf::from);
        let user_dirs = home.iter().flat_map(|home| USER_FONT_DIRS.iter().map(move |dir| home.join(dir)));
        STANDARD_FONT_DIRS
            .iter()
            .map(PathBuf::from)
            .chain(user_dirs)
            .map(|dir| dir.join(DEFAULT_FONT_FILE))
            .collect()
    }

    /// Paths that will be tried, in order.
    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }
}

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FontSource for SystemFonts {
    fn describe(&self) -> String {
        format!("default font {DEFAULT_FONT_FILE}")
    }

    fn load(&self) -> Result<Typeface, FontError> {
        for path in self.candidates.iter().filter(|p| p.is_file()) {
            match load_file(path) {
                Ok(face) => {
                    log::debug!("Default font loaded from {}", path.display());
                    return Ok(face);
                }
                Err(e) => log::debug!("Skipping {}: {e}", path.display()),
            }
        }
        Err(FontError::NotFound { searched: self.candidates.len() })
    }
}

/// Turn a directory search path into the default font file inside it.
fn expand(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_FONT_FILE)
    } else {
        path.to_path_buf()
    }
}

/// The fixed-size glyph set compiled into the binary. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl FontSource for BuiltinFont {
    fn describe(&self) -> String {
        "built-in fixed font".to_string()
    }

    fn load(&self) -> Result<Typeface, FontError> {
        Ok(Typeface::builtin())
    }
}
