//! Cluster Inventory
//!
//! Diagnostic entry point: loads a cluster configuration and prints the
//! descriptor the resource collector would hand to that provider's backend.

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cluster_inventory::values::{debug_as_json_string, debug_as_json_string_indent};
use cluster_inventory::{CloudProvider, ClusterConfig, ClusterInfo, Error, Result};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Cluster Inventory - show how a cluster is scoped for resource discovery
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cluster configuration file (YAML)
    #[arg(long, env = "CLUSTER_CONFIG")]
    cluster: String,

    /// Cloud provider identifier; defaults to the cluster's cloudProvider
    #[arg(long, env = "CLOUD_PROVIDER")]
    provider: Option<String>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

// =============================================================================
// Main
// =============================================================================

fn main() {
    let args = Args::parse();

    init_logging(&args);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    info!("Loading cluster configuration from {}", args.cluster);
    let cluster = ClusterConfig::load(&args.cluster)?;

    let provider_id = args
        .provider
        .as_deref()
        .or(cluster.cloud_provider.as_deref())
        .ok_or_else(|| {
            Error::Configuration(format!(
                "no cloud provider given for cluster {}; pass --provider or set cloudProvider",
                cluster.name
            ))
        })?;
    let provider: CloudProvider = provider_id.parse()?;

    let info = ClusterInfo::for_provider(&cluster, provider)?;
    info!("Cluster {} resolved for {}", info.name(), provider);

    let rendered = if args.pretty {
        debug_as_json_string_indent(&info)
    } else {
        debug_as_json_string(&info)
    };
    println!("{}", rendered);

    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so stdout carries only the descriptor
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
