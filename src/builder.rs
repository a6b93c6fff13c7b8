//! Injection orchestrator sequencing the HTML patch and the generated scripts.

use tracing::info;

use crate::bundle::registration::write_registration_script;
use crate::bundle::site::patch_site_index;
use crate::bundle::worker::{read_existing_version, write_service_worker};
use crate::error::InjectResult;
use crate::manifest::generate_cache_manifest;
use crate::models::{CacheVersion, InjectionReport};
use crate::project::InjectionContext;

/// High-level helper that makes a static site offline capable.
///
/// Steps run in a fixed order: patch the entry document, write the
/// registration script, then enumerate the site and write the service worker.
/// The first failure aborts the run. Steps that already completed are not
/// rolled back, so a failed enumeration or worker write can leave a patched
/// `index.html` and a fresh registration script behind.
pub struct ServiceWorkerInjector {
  context: InjectionContext,
}

impl ServiceWorkerInjector {
  /// Create an injector for the provided context.
  pub fn new(context: InjectionContext) -> Self {
    Self { context }
  }

  /// Run every step with a version derived from the current time.
  pub fn run(&self) -> InjectResult<InjectionReport> {
    let version = CacheVersion::now(&self.context.layout.cache_key_prefix);
    self.run_with_version(version)
  }

  /// Run every step using an explicit cache version.
  pub fn run_with_version(&self, version: CacheVersion) -> InjectResult<InjectionReport> {
    let context = &self.context;

    let index_outcome = patch_site_index(context)?;
    let registration_script = write_registration_script(context)?;

    let previous_version = read_existing_version(&context.layout.service_worker_path(&context.root));
    let manifest = generate_cache_manifest(context, version)?;
    if let Some(previous) = &previous_version {
      info!(previous = %previous, current = %manifest.version, "replacing cache version");
    }
    let service_worker = write_service_worker(context, &manifest)?;

    Ok(InjectionReport {
      index_html: context.layout.index_path(&context.root),
      index_outcome,
      registration_script,
      service_worker,
      previous_version,
      manifest,
    })
  }
}
