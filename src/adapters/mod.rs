//! Adapter implementations for port traits.
//!
//! - `fonts` — custom file, system default and built-in font sources
//! - `viewer` — platform image viewer

pub mod fonts;
pub mod viewer;
