//! Image loading for display in the webview.

use std::path::{Path, PathBuf};

/// MIME type for an image path, by extension.
pub fn image_mime_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn absolute(path: &str) -> Option<PathBuf> {
    if path.starts_with('/') {
        Some(PathBuf::from(path))
    } else {
        Some(std::env::current_dir().ok()?.join(path))
    }
}

/// Convert a local file path to a data URL for display in webview.
pub fn load_image_as_data_url(path: &str) -> Option<String> {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    let full_path = absolute(path)?;
    let data = match std::fs::read(&full_path) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!(path = %full_path.display(), error = %e, "Image not readable");
            return None;
        }
    };

    let encoded = STANDARD.encode(&data);
    Some(format!("data:{};base64,{}", image_mime_type(&full_path), encoded))
}

/// Resolves an image reference to something an `img` element can show.
///
/// Remote and data URLs pass through; local paths are inlined. `None`
/// means the caller should show a placeholder.
pub fn resolve_image_src(image: &str) -> Option<String> {
    if image.is_empty() {
        return None;
    }
    if image.starts_with("data:") || image.starts_with("http://") || image.starts_with("https://") {
        return Some(image.to_string());
    }
    load_image_as_data_url(image)
}
