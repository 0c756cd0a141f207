//! Font source port: one strategy for obtaining a typeface.

use crate::error::FontError;
use crate::text::Typeface;

/// Provides a typeface from some external location (a file, the system
/// font directories, or a glyph set compiled into the binary).
///
/// Sources are tried in order by [`FontResolver`](crate::fonts::FontResolver);
/// a failing source is logged and skipped, never propagated.
pub trait FontSource {
    /// Short description for diagnostics, e.g. the path being tried.
    fn describe(&self) -> String;

    /// Load the typeface.
    ///
    /// # Errors
    ///
    /// Returns a [`FontError`] if this source cannot provide a font.
    fn load(&self) -> Result<Typeface, FontError>;

    /// Log level used when [`load`](FontSource::load) fails.
    ///
    /// Sources the user asked for explicitly should warn; speculative
    /// lookups only need debug output.
    fn failure_level(&self) -> log::Level {
        log::Level::Debug
    }
}
