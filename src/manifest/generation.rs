//! Build the precache manifest embedded into the generated service worker.

use tracing::info;

use crate::asset_paths::make_asset_url;
use crate::error::InjectResult;
use crate::manifest::scanning::collect_assets;
use crate::models::{CacheManifest, CacheVersion};
use crate::project::InjectionContext;

/// Enumerate the site and turn every kept file into a cached URL.
///
/// The base path itself is always the first entry. The generated scripts are
/// excluded in addition to the user's ignore entries.
pub fn generate_cache_manifest(
    context: &InjectionContext,
    version: CacheVersion,
) -> InjectResult<CacheManifest> {
    let ignore = context.effective_ignore();
    let files = collect_assets(&context.root, &ignore)?;

    let mut assets = Vec::with_capacity(files.len() + 1);
    assets.push(context.base.as_str().to_string());
    assets.extend(files.iter().map(|file| make_asset_url(&context.base, file)));

    info!(
        root = %context.root.display(),
        count = assets.len(),
        "collected precache assets"
    );

    Ok(CacheManifest { version, assets })
}
