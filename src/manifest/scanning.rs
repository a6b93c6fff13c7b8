//! Directory scanning utilities for harvesting cacheable site files.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::asset_paths::relative_key;
use crate::error::{InjectError, InjectResult};
use crate::selection::AssetInclusion;

/// Walk `root` and return the relative path of every regular file the selection keeps.
///
/// Entries are visited depth-first in file name order so repeated runs over the
/// same tree produce identical output. Excluded directories are not descended.
/// Symbolic links and other non-regular entries are skipped. Any unreadable
/// directory or entry, or a name that is not valid UTF-8, fails the whole walk.
pub fn collect_assets<S: AssetInclusion>(root: &Path, selection: &S) -> InjectResult<Vec<String>> {
    collect_assets_recursively(root, Path::new(""), selection)
}

fn collect_assets_recursively<S: AssetInclusion>(
    dir: &Path,
    relative_root: &Path,
    selection: &S,
) -> InjectResult<Vec<String>> {
    let mut entries = fs::read_dir(dir)
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .map_err(|err| InjectError::enumerate(dir, err))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut assets = Vec::new();
    for entry in entries {
        let path = entry.path();
        let next_relative = relative_root.join(entry.file_name());
        let Some(key) = relative_key(&next_relative) else {
            return Err(InjectError::enumerate(
                &path,
                io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
            ));
        };

        if !selection.is_included(&key) {
            debug!(path = %key, "ignored");
            continue;
        }

        let file_type = entry
            .file_type()
            .map_err(|err| InjectError::enumerate(&path, err))?;

        if file_type.is_dir() {
            assets.extend(collect_assets_recursively(&path, &next_relative, selection)?);
        } else if file_type.is_file() {
            assets.push(key);
        } else {
            debug!(path = %key, "skipping non-regular entry");
        }
    }

    Ok(assets)
}
