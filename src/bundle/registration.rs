//! Generate the script that registers the service worker from the entry document.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use crate::error::{InjectError, InjectResult};
use crate::project::{BasePath, InjectionContext, ServiceWorkerLayout};

/// Render the single registration statement for the service worker.
pub fn render_registration_script(layout: &ServiceWorkerLayout, base: &BasePath) -> String {
  let script_url = Value::from(base.join(&layout.service_worker_file));
  let scope = Value::from(base.as_str());
  format!("navigator.serviceWorker.register({script_url}, {{ scope: {scope} }});")
}

/// Write the registration script into the site root, replacing any previous copy.
pub fn write_registration_script(context: &InjectionContext) -> InjectResult<PathBuf> {
  let target = context.layout.registration_path(&context.root);
  let script = render_registration_script(&context.layout, &context.base);
  fs::write(&target, script).map_err(|err| InjectError::write(&target, err))?;
  info!(path = %target.display(), "wrote registration script");
  Ok(target)
}
