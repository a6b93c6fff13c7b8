//! Filters deciding which site files end up in the precache list.

use std::collections::BTreeSet;

/// Trait describing which relative paths the asset enumerator keeps.
pub trait AssetInclusion {
  /// Returns `true` when the file or directory at `relative_path` should be cached.
  fn is_included(&self, relative_path: &str) -> bool;
}

/// Relative paths excluded from caching.
///
/// Entries are matched exactly against the enumerator's forward-slash
/// representation. Ignoring a directory prunes everything beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
  entries: BTreeSet<String>,
}

impl IgnoreSet {
  /// Parse a comma-separated list such as `css,drafts/old.html`.
  pub fn from_csv(value: &str) -> Self {
    value.split(',').map(str::to_string).collect()
  }

  /// Returns `true` when `relative_path` is listed.
  pub fn contains(&self, relative_path: &str) -> bool {
    self.entries.contains(relative_path)
  }

  /// Copy of this set extended with further entries.
  pub fn with_entries<I, S>(&self, extra: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut entries = self.entries.clone();
    entries.extend(normalise_list(
      extra.into_iter().map(|value| value.as_ref().to_string()),
    ));
    Self { entries }
  }

  /// Returns true when no entries are listed.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterate the normalised entries in sorted order.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(String::as_str)
  }
}

impl AssetInclusion for IgnoreSet {
  fn is_included(&self, relative_path: &str) -> bool {
    !self.contains(relative_path)
  }
}

impl FromIterator<String> for IgnoreSet {
  fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
    Self {
      entries: normalise_list(iter),
    }
  }
}

impl Extend<String> for IgnoreSet {
  fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
    self.entries.extend(normalise_list(iter));
  }
}

/// Convert raw entries into a sorted, de-duplicated set.
///
/// Values are trimmed and lose leading/trailing slashes so `css/` and `/css`
/// both name the `css` directory. Backslashes are separators only on Windows;
/// elsewhere they are legal file name characters and are kept. Empty entries
/// are discarded.
fn normalise_list(values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
  values
    .into_iter()
    .map(|value| {
      let value = value.trim();
      let value = if cfg!(windows) {
        value.replace('\\', "/")
      } else {
        value.to_string()
      };
      value.trim_matches('/').to_string()
    })
    .filter(|value| !value.is_empty())
    .collect()
}
