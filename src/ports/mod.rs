//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the rendering core and an
//! external resource. Implementations live in `src/adapters/`.

pub mod font_source;
pub mod viewer;

pub use font_source::FontSource;
pub use viewer::ImageViewer;
