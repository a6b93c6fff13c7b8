#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod project;
pub mod selection;

pub use builder::ServiceWorkerInjector;
pub use error::{InjectError, InjectResult};
pub use models::{CacheManifest, CacheVersion, InjectionReport, PatchOutcome};
pub use project::{BasePath, InjectionContext, ServiceWorkerLayout, WorkerOptions};
pub use selection::{AssetInclusion, IgnoreSet};
