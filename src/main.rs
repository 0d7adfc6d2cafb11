use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use squadsheets::adapters::config::app_config::AppConfig;
use squadsheets::prettyprint::prettyprint::PrettyFormatter;
use squadsheets::Routine;
use tracing::{error, info, instrument};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

mod cli;
mod routine_factory;

use cli::Cli;
use routine_factory::SyncAdminsRoutineFactory;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_tracing(&cli) {
        eprintln!("failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }
    setup_panic_hook();

    if run(&cli).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[instrument(skip(cli))]
async fn run(cli: &Cli) -> bool {
    info!(path = %cli.config.display(), "loading configuration");
    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(report) => {
            error!("{:?}", report);
            return false;
        }
    };

    let routine = match SyncAdminsRoutineFactory::create(config, cli).await {
        Ok(routine) => routine,
        Err(report) => {
            error!("{:?}", report);
            return false;
        }
    };

    match routine.run().await {
        Ok(()) => {
            info!("✅ {}: OK", routine.name());
            true
        }
        Err(report) => {
            error!("❌ {}: {:?}", routine.name(), report);
            false
        }
    }
}

fn setup_tracing(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let (writer, ansi) = match &cli.log {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(ansi))
        .with_writer(writer)
        .with_ansi(ansi);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("squadsheets", level)
                .with_default(tracing::Level::WARN),
        )
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
