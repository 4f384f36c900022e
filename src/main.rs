use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use payflow::backend::HttpBackend;
use payflow::cli::Cli;
use payflow::flow::{FlowDefaults, PaymentFlowController};
use payflow::headless::run_headless;
use payflow::logging::{init_tracing, LogOutput};
use payflow::sdk::StripeSdk;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return Ok(ExitCode::from(1));
        }
    };

    init_tracing(if cli.headless {
        LogOutput::Stderr
    } else {
        LogOutput::FileFromEnv
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let _enter = runtime.enter();

    let backend = HttpBackend::new(&config.backend).context("Failed to build backend client")?;
    let sdk = StripeSdk::new(&config.provider).context("Failed to build payment SDK client")?;
    let controller = Arc::new(PaymentFlowController::new(
        backend,
        sdk,
        FlowDefaults::from(&config),
    ));

    if cli.headless {
        let mut stdout = io::stdout().lock();
        let state = runtime.block_on(run_headless(&controller, &mut stdout))?;
        return Ok(if state.is_error() {
            ExitCode::from(1)
        } else {
            ExitCode::SUCCESS
        });
    }

    payflow::ui::run(runtime.handle().clone(), controller)?;
    Ok(ExitCode::SUCCESS)
}
