//! Shared UI pieces for the TEQDR review screen.
//!
//! Provides themes, markdown rendering and image loading used by the
//! review app's components.

pub mod file_utils;
pub mod markdown;
pub mod theme;

pub use file_utils::{image_mime_type, load_image_as_data_url, resolve_image_src};
pub use markdown::{RenderedBody, render_interpretation, render_markdown_to_html};
pub use theme::{CURRENT_THEME, Theme, ThemeSwitcher, ThemedRoot};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
