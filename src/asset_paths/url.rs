use std::path::Path;

use crate::project::BasePath;

/// Produce the canonical relative key for a file discovered on disk.
///
/// Keys always use forward slashes so that ignore entries and cached URLs look
/// the same on every platform, regardless of the native directory separator.
/// Returns `None` when a component is not valid UTF-8, since no URL could
/// address such a file.
pub fn relative_key(relative: &Path) -> Option<String> {
    let components = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(components.join("/"))
}

/// Produce the URL a cached asset is requested under.
pub fn make_asset_url(base: &BasePath, relative_key: &str) -> String {
    base.join(relative_key)
}
