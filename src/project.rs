//! Descriptions of the target site and the artifacts written into it.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{InjectError, InjectResult};
use crate::selection::IgnoreSet;

/// File names of the artifacts managed inside the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceWorkerLayout {
  /// Entry HTML document patched with the registration tag.
  pub index_html_file: String,
  /// Generated script that registers the service worker.
  pub registration_script_file: String,
  /// Generated service worker script.
  pub service_worker_file: String,
  /// Prefix shared by every cache store key owned by the generated worker.
  pub cache_key_prefix: String,
}

impl Default for ServiceWorkerLayout {
  fn default() -> Self {
    Self {
      index_html_file: "index.html".into(),
      registration_script_file: "register-sw.js".into(),
      service_worker_file: "sw.js".into(),
      cache_key_prefix: "version-".into(),
    }
  }
}

impl ServiceWorkerLayout {
  /// Generated files that must never end up in the precache list.
  pub fn generated_files(&self) -> [&str; 2] {
    [
      self.service_worker_file.as_str(),
      self.registration_script_file.as_str(),
    ]
  }

  /// Path of the entry document below `root`.
  pub fn index_path(&self, root: &Path) -> PathBuf {
    root.join(&self.index_html_file)
  }

  /// Path of the registration script below `root`.
  pub fn registration_path(&self, root: &Path) -> PathBuf {
    root.join(&self.registration_script_file)
  }

  /// Path of the service worker script below `root`.
  pub fn service_worker_path(&self, root: &Path) -> PathBuf {
    root.join(&self.service_worker_file)
  }
}

/// URL path prefix the site is served under.
///
/// Always starts and ends with `/`. Used as the service worker scope and as
/// the prefix of every cached asset URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
  /// Validate and normalise a user supplied base path.
  ///
  /// A missing trailing slash is appended before validation, so an empty
  /// value resolves to `/`. Whitespace is significant.
  pub fn parse(raw: &str) -> InjectResult<Self> {
    let mut value = raw.to_string();
    if !value.ends_with('/') {
      value.push('/');
    }
    if !value.starts_with('/') {
      return Err(InjectError::InvalidBasePath(raw.to_string()));
    }
    Ok(Self(value))
  }

  /// The normalised base path.
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Absolute URL of a file published at the site root.
  pub fn join(&self, relative: &str) -> String {
    format!("{}{}", self.0, relative)
  }
}

impl Default for BasePath {
  fn default() -> Self {
    Self("/".into())
  }
}

impl fmt::Display for BasePath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Options controlling the generated service worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerOptions {
  /// Emit a cache-first `fetch` handler.
  pub intercept_fetch: bool,
}

impl Default for WorkerOptions {
  fn default() -> Self {
    Self {
      intercept_fetch: true,
    }
  }
}

/// Everything required to inject a service worker into one site.
#[derive(Debug, Clone)]
pub struct InjectionContext {
  /// Directory containing the site, including its entry document.
  pub root: PathBuf,
  /// Artifact naming.
  pub layout: ServiceWorkerLayout,
  /// URL prefix the site is served under.
  pub base: BasePath,
  /// User supplied relative paths excluded from the precache list.
  pub ignore: IgnoreSet,
  /// Generated worker options.
  pub options: WorkerOptions,
}

impl InjectionContext {
  /// Context with the default layout, base path `/`, and nothing ignored.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      layout: ServiceWorkerLayout::default(),
      base: BasePath::default(),
      ignore: IgnoreSet::default(),
      options: WorkerOptions::default(),
    }
  }

  /// Replace the base path.
  pub fn with_base(mut self, base: BasePath) -> Self {
    self.base = base;
    self
  }

  /// Replace the ignore set.
  pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
    self.ignore = ignore;
    self
  }

  /// Replace the artifact layout.
  pub fn with_layout(mut self, layout: ServiceWorkerLayout) -> Self {
    self.layout = layout;
    self
  }

  /// Replace the worker options.
  pub fn with_options(mut self, options: WorkerOptions) -> Self {
    self.options = options;
    self
  }

  /// User ignore entries plus the generated artifacts.
  pub fn effective_ignore(&self) -> IgnoreSet {
    self.ignore.with_entries(self.layout.generated_files())
  }

  /// The `<script>` tag inserted into the entry document.
  pub fn registration_tag(&self) -> String {
    format!(
      "<script src=\"{}\"></script>",
      self.base.join(&self.layout.registration_script_file)
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn appends_missing_trailing_slash() {
    assert_eq!(BasePath::parse("/app").unwrap().as_str(), "/app/");
    assert_eq!(BasePath::parse("/app/").unwrap().as_str(), "/app/");
  }

  #[test]
  fn empty_base_resolves_to_root() {
    assert_eq!(BasePath::parse("").unwrap().as_str(), "/");
  }

  #[test]
  fn rejects_relative_base() {
    let err = BasePath::parse("app").unwrap_err();
    assert!(matches!(err, InjectError::InvalidBasePath(value) if value == "app"));
  }

  #[test]
  fn rejects_base_with_leading_whitespace() {
    assert!(matches!(
      BasePath::parse(" /app"),
      Err(InjectError::InvalidBasePath(value)) if value == " /app"
    ));
  }

  #[test]
  fn keeps_trailing_whitespace_verbatim() {
    assert_eq!(BasePath::parse("/app ").unwrap().as_str(), "/app /");
  }

  #[test]
  fn builds_registration_tag_from_base() {
    let context = InjectionContext::new("site").with_base(BasePath::parse("/docs").unwrap());
    assert_eq!(
      context.registration_tag(),
      "<script src=\"/docs/register-sw.js\"></script>"
    );
  }

  #[test]
  fn effective_ignore_covers_generated_scripts() {
    let context = InjectionContext::new("site").with_ignore(IgnoreSet::from_csv("css"));
    let ignore = context.effective_ignore();
    assert!(ignore.contains("css"));
    assert!(ignore.contains("sw.js"));
    assert!(ignore.contains("register-sw.js"));
    assert!(!context.ignore.contains("sw.js"));
  }
}
