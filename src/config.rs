//! Project configuration loader describing artifact names and injection defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{InjectError, InjectResult};
use crate::project::{ServiceWorkerLayout, WorkerOptions};
use crate::selection::IgnoreSet;

/// Optional JSON configuration. Command-line flags take precedence over every field.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    /// URL path prefix the site is served under.
    pub base: Option<String>,
    /// Relative paths excluded from the precache list.
    pub ignore: Vec<String>,
    /// File name of the entry HTML document.
    pub index_html_file: String,
    /// File name of the generated registration script.
    pub registration_script_file: String,
    /// File name of the generated service worker.
    pub service_worker_file: String,
    /// Prefix of every cache store key owned by the generated worker.
    pub cache_key_prefix: String,
    /// Whether the worker answers fetches from the precache.
    pub intercept_fetch: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let layout = ServiceWorkerLayout::default();
        Self {
            base: None,
            ignore: Vec::new(),
            index_html_file: layout.index_html_file,
            registration_script_file: layout.registration_script_file,
            service_worker_file: layout.service_worker_file,
            cache_key_prefix: layout.cache_key_prefix,
            intercept_fetch: WorkerOptions::default().intercept_fetch,
        }
    }
}

impl ProjectConfig {
    /// Read configuration from a specific JSON file.
    ///
    /// Unlike a missing optional setting, a named file that is missing or does
    /// not parse is an error.
    pub fn from_path(path: &Path) -> InjectResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| InjectError::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|err| InjectError::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    /// Convert the configuration into an owned layout description.
    pub fn to_layout(&self) -> ServiceWorkerLayout {
        ServiceWorkerLayout {
            index_html_file: self.index_html_file.clone(),
            registration_script_file: self.registration_script_file.clone(),
            service_worker_file: self.service_worker_file.clone(),
            cache_key_prefix: self.cache_key_prefix.clone(),
        }
    }

    /// Worker options described by the configuration.
    pub fn worker_options(&self) -> WorkerOptions {
        WorkerOptions {
            intercept_fetch: self.intercept_fetch,
        }
    }

    /// Ignore entries listed in the configuration.
    pub fn ignore_set(&self) -> IgnoreSet {
        self.ignore.iter().cloned().collect()
    }
}
