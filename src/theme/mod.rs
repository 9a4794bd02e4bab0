//! Visual themes, user overrides and the contrast resolver.
//!
//! A render consumes exactly one [`Theme`], produced by [`resolve_theme`]
//! from a named base theme and the user's [`ThemeOverrides`].

mod color;
mod settings;
#[allow(clippy::module_inception)]
mod theme;

pub use color::*;
pub use settings::RenderSettings;
pub use theme::*;
