//! Data structures produced while injecting a service worker.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Cache store key identifying one generation of the precache.
///
/// Computed once per run and threaded through script generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CacheVersion(String);

impl CacheVersion {
  /// Version for the current instant.
  pub fn now(prefix: &str) -> Self {
    Self::from_timestamp(prefix, Utc::now())
  }

  /// Version for a fixed instant, formatted like `Date.prototype.toISOString`.
  pub fn from_timestamp(prefix: &str, timestamp: DateTime<Utc>) -> Self {
    Self(format!(
      "{prefix}{}",
      timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    ))
  }

  /// The full cache key, prefix included.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for CacheVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Precache contents embedded into the generated service worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheManifest {
  /// Cache store key for this generation.
  pub version: CacheVersion,
  /// Asset URLs, the base path first, then every enumerated file.
  pub assets: Vec<String>,
}

/// Result of patching the entry document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOutcome {
  /// The registration tag was inserted and the document rewritten.
  Injected,
  /// The tag was already present; the document was left untouched.
  AlreadyPresent,
}

/// Summary of one injection run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionReport {
  /// Entry document path.
  pub index_html: PathBuf,
  /// Whether the entry document was changed.
  pub index_outcome: PatchOutcome,
  /// Registration script path.
  pub registration_script: PathBuf,
  /// Service worker script path.
  pub service_worker: PathBuf,
  /// Version key of the replaced service worker, when one could be read.
  pub previous_version: Option<String>,
  /// Generated precache contents.
  pub manifest: CacheManifest,
}
