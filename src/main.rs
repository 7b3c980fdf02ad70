use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use sellerscope::args::{Cli, Mode};
use sellerscope::config::Config;
use sellerscope::controller::submit_and_wait;
use sellerscope::service::HttpAnalysisService;
use sellerscope::ui::form::{FormState, FormView, Phase};
use sellerscope::ui::TuiOptions;
use sellerscope::{logging, ui};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    match logging::init(&config.logging) {
        Ok(path) => tracing::debug!(target: "main", log_file = %path.display(), "logging initialized"),
        Err(err) => eprintln!("Warning: logging disabled: {err}"),
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let service = Arc::new(
        HttpAnalysisService::new(&config.service).context("failed to set up HTTP client")?,
    );

    match cli.mode() {
        Mode::Check => {
            let health = runtime.block_on(service.health());
            match health {
                Ok(health) if health.is_ok() => {
                    println!("{}: {}", service.base_url(), health.status);
                    Ok(ExitCode::SUCCESS)
                }
                Ok(health) => {
                    println!("{}: {}", service.base_url(), health.status);
                    Ok(ExitCode::from(1))
                }
                Err(err) => {
                    tracing::warn!(target: "main", error = ?err, "health probe failed");
                    println!("{}: unreachable ({})", service.base_url(), err);
                    Ok(ExitCode::from(1))
                }
            }
        }

        Mode::OneShot { link } => {
            if link.trim().is_empty() {
                eprintln!("Error: --link must not be empty");
                return Ok(ExitCode::from(2));
            }
            let state = runtime.block_on(submit_and_wait(&*service, FormState::with_link(link)));
            let view = FormView::project(&state);

            let mut stdout = io::stdout().lock();
            for line in view.report_lines() {
                writeln!(stdout, "{line}")?;
            }
            stdout.flush()?;

            Ok(if state.phase() == Phase::Error {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }

        Mode::Interactive { initial_link } => {
            ui::run(TuiOptions {
                service: service.clone(),
                service_url: service.base_url().to_string(),
                runtime: runtime.handle().clone(),
                tick_rate: Duration::from_millis(config.ui.tick_ms),
                initial_link,
            })
            .context("terminal UI failed")?;
            // Let an in-flight request finish or fail without blocking exit
            runtime.shutdown_background();
            Ok(ExitCode::SUCCESS)
        }
    }
}
