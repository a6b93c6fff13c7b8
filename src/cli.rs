//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::error::InjectResult;
use crate::project::{BasePath, InjectionContext};

/// Inject a precaching service worker into a static website.
///
/// Patches index.html with a registration tag, then writes register-sw.js
/// and sw.js next to it.
#[derive(Parser, Debug)]
#[command(name = "sw-inject")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to website directory containing index.html
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Base path for imports and the service worker scope (must start with /)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Comma separated relative file paths to be ignored
    #[arg(short, long, value_name = "FILES", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Configuration file path
    #[arg(short, long, env = "SW_INJECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate a worker without the cache-first fetch handler
    #[arg(long)]
    pub no_fetch: bool,

    /// Print a JSON report of the generated artifacts
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merge flags over the configuration file and validate the result.
    ///
    /// Nothing is written before this succeeds.
    pub fn resolve_context(&self) -> InjectResult<InjectionContext> {
        let config = match &self.config {
            Some(path) => ProjectConfig::from_path(path)?,
            None => ProjectConfig::default(),
        };

        let base = BasePath::parse(self.base.as_deref().or(config.base.as_deref()).unwrap_or("/"))?;

        let mut ignore = config.ignore_set();
        ignore.extend(self.ignore.iter().cloned());

        let mut options = config.worker_options();
        if self.no_fetch {
            options.intercept_fetch = false;
        }

        Ok(InjectionContext::new(&self.directory)
            .with_layout(config.to_layout())
            .with_base(base)
            .with_ignore(ignore)
            .with_options(options))
    }
}
