//! CT-CLI: Crime Trace command line.

use anyhow::{Context, Result};
use clap::Parser;

use ct_cli::commands::{self, Command};
use ct_cli::config::CliConfig;
use ct_cli::wiring::Services;
use ct_telemetry::{encode_metrics, init_telemetry, TelemetryConfig};

/// Crime Trace: wallet login and citizen registration
#[derive(Parser, Debug)]
#[command(name = "ct-cli")]
#[command(about = "Wallet-based login and citizen registration for Crime Trace")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print Prometheus counters after the command
    #[arg(long, global = true)]
    metrics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("failed to initialize telemetry")?;

    let config = CliConfig::from_env();
    let services = Services::from_config(&config)?;

    let result = match cli.command {
        Command::Login { role, station_id } => {
            commands::login(&services, role, station_id.as_deref())
                .await
                .map(|grant| println!("{}", commands::describe_grant(&grant)))
                .map_err(anyhow::Error::from)
        }
        Command::Register(args) => commands::register(&services, args)
            .await
            .map(|outcome| println!("{}", commands::describe_registration(&outcome))),
        Command::Fingerprint { id_type, id_number } => {
            shared_crypto::fingerprint(&id_type, &id_number)
                .map(|fp| println!("{fp}"))
                .map_err(anyhow::Error::from)
        }
    };

    if cli.metrics {
        print!("{}", encode_metrics()?);
    }

    result
}
