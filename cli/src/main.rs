/*!

This is the command line interface for the ACK SageMaker data sources and manifests. It lists the
available types, prints their schemas and runs their `Read` against a cluster or offline.

!*/

mod config_file;
mod diagnostics;
mod manifest;
mod read;
mod schema;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use provider::{Provider, ProviderConfig};
use std::path::PathBuf;

/// The command line interface for the ACK SageMaker data sources and manifests.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    /// Path to the kubeconfig file. Also can be passed with the KUBECONFIG environment variable.
    #[clap(long = "kubeconfig")]
    kubeconfig: Option<PathBuf>,
    /// The kubeconfig context to use instead of the current context.
    #[clap(long = "context")]
    context: Option<String>,
    /// Do not connect to a cluster. Only manifests can be read.
    #[clap(long = "offline")]
    offline: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// List the type names of all data sources and manifests.
    Types(types::Types),
    /// Print the schema of a data source or manifest as JSON.
    Schema(schema::Schema),
    /// Run the `Read` of a data source or manifest and print its state as JSON.
    Read(read::Read),
    /// Render a manifest and print the YAML document.
    Manifest(manifest::Manifest),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Types(types) => types.run(Provider::offline()).await,
        Command::Schema(schema) => schema.run(Provider::offline()).await,
        Command::Manifest(manifest) => manifest.run(Provider::offline()).await,
        Command::Read(read) => {
            let config = ProviderConfig {
                kubeconfig: args.kubeconfig,
                context: args.context,
                offline: args.offline,
            };
            let provider = Provider::configure(&config)
                .await
                .context("Unable to configure the provider")?;
            read.run(provider).await
        }
    }
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate and the libraries.
            default_logger(level).init();
        }
    }
}

/// The logger used without `RUST_LOG`: `level` applies to this crate, the provider and the model.
fn default_logger(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter(Some(env!("CARGO_CRATE_NAME")), level)
        .filter(Some("ack_sagemaker_provider"), level)
        .filter(Some("ack_sagemaker_model"), level);
    builder
}

#[cfg(test)]
mod test {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(level: LevelFilter, target: &str, at: Level) -> bool {
        default_logger(level)
            .build()
            .enabled(&Metadata::builder().target(target).level(at).build())
    }

    #[test]
    fn log_level_reaches_the_libraries() {
        assert!(enabled(
            LevelFilter::Trace,
            "ack_sagemaker_model::clients::crd_client",
            Level::Trace
        ));
        assert!(enabled(
            LevelFilter::Debug,
            "ack_sagemaker_provider::data_source",
            Level::Debug
        ));
        assert!(!enabled(
            LevelFilter::Info,
            "ack_sagemaker_model::clients::crd_client",
            Level::Trace
        ));
        assert!(!enabled(LevelFilter::Trace, "hyper::proto", Level::Trace));
    }
}
