//! Generate the precaching service worker script.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{InjectError, InjectResult};
use crate::models::CacheManifest;
use crate::project::{InjectionContext, WorkerOptions};

const LIFECYCLE_TEMPLATE: &str = r#"
self.addEventListener("install", (event) => event.waitUntil(install()));
self.addEventListener("activate", (event) => event.waitUntil(activate()));
"#;

const FETCH_LISTENER: &str = r#"self.addEventListener("fetch", (event) => event.respondWith(respond(event.request)));
"#;

const LIFECYCLE_HANDLERS: &str = r#"
async function install() {
  self.skipWaiting();
  const cache = await caches.open(VERSION);
  await cache.addAll(ASSETS);
  await deleteOldVersions();
}

async function activate() {
  await self.clients.claim();
  await deleteOldVersions();
}
"#;

const FETCH_HANDLER: &str = r#"
async function respond(request) {
  const cache = await caches.open(VERSION);
  const cached = await cache.match(request);
  return cached || fetch(request);
}
"#;

fn version_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r#"(?m)^const VERSION = "([^"\\]*)";$"#).expect("invalid version regex")
  })
}

/// Render the service worker text for a precache manifest.
///
/// The worker skips waiting on install, precaches every asset into a store
/// keyed by the manifest version, and on both install and activate deletes
/// every store whose key starts with `cache_key_prefix` other than the current
/// one. With fetch interception enabled, requests are answered from the
/// current store first and fall back to the network.
pub fn render_service_worker(
  manifest: &CacheManifest,
  cache_key_prefix: &str,
  options: WorkerOptions,
) -> String {
  let version = Value::from(manifest.version.as_str());
  let assets = Value::from(manifest.assets.clone());
  let prefix = Value::from(cache_key_prefix);

  let mut script = format!("const VERSION = {version};\nconst ASSETS = {assets:#};\n");
  script.push_str(LIFECYCLE_TEMPLATE);
  if options.intercept_fetch {
    script.push_str(FETCH_LISTENER);
  }
  script.push_str(LIFECYCLE_HANDLERS);
  if options.intercept_fetch {
    script.push_str(FETCH_HANDLER);
  }
  script.push_str(&format!(
    r#"
async function deleteOldVersions() {{
  const versions = await getInstalledVersions();
  const pastVersions = versions.filter((key) => key !== VERSION);
  await Promise.all(pastVersions.map((key) => caches.delete(key)));
}}

async function getInstalledVersions() {{
  const keys = await caches.keys();
  return keys.filter((key) => key.startsWith({prefix}));
}}
"#
  ));
  script
}

/// Read the version key embedded in a previously generated worker.
///
/// Returns `None` when the file is missing, unreadable, or was not produced by
/// this tool.
pub fn read_existing_version(path: &Path) -> Option<String> {
  let content = fs::read_to_string(path).ok()?;
  let captures = version_pattern().captures(&content)?;
  captures.get(1).map(|value| value.as_str().to_string())
}

/// Write the service worker into the site root, replacing any previous copy.
pub fn write_service_worker(
  context: &InjectionContext,
  manifest: &CacheManifest,
) -> InjectResult<PathBuf> {
  let target = context.layout.service_worker_path(&context.root);
  let script = render_service_worker(manifest, &context.layout.cache_key_prefix, context.options);
  debug!(bytes = script.len(), fetch = context.options.intercept_fetch, "rendered service worker");

  fs::write(&target, script).map_err(|err| InjectError::write(&target, err))?;
  info!(path = %target.display(), version = %manifest.version, "wrote service worker");
  Ok(target)
}
