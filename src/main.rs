//! sw-inject - make a static website available offline
//!
//! CLI entry point: resolve inputs, run the injector, report the outcome.

use clap::Parser;
use offline_sw_inject::ServiceWorkerInjector;
use offline_sw_inject::cli::Cli;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and must still succeed
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let context = cli.resolve_context()?;
    let report = ServiceWorkerInjector::new(context).run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        info!(
            version = %report.manifest.version,
            assets = report.manifest.assets.len(),
            "service worker ready"
        );
    }

    Ok(())
}

/// 0 = warn, 1 = info, 2+ = debug. `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("offline_sw_inject=warn,sw_inject=warn"),
        1 => EnvFilter::new("offline_sw_inject=info,sw_inject=info"),
        _ => EnvFilter::new("offline_sw_inject=debug,sw_inject=debug"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
