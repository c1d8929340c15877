//! CLI entrypoint for hwhelper
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use hwhelper_application::{
    DispatchLogger, NoDispatchLogger, ProbeEndpointsUseCase, SolveInput, SolveUseCase,
    UpstreamGateway,
};
use hwhelper_domain::{EndpointRegistry, Severity, mask_secret};
use hwhelper_infrastructure::{
    ConfigError, ConfigLoader, FileConfig, JsonlDispatchLogger, ReqwestUpstreamGateway,
};
use hwhelper_presentation::{AppState, Cli, Command, ConsoleFormatter, ProgressReporter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let command = cli.resolved_command();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(ConfigError::from)?;

    // Serve logs requests at info; one-shot commands stay quiet
    let default_level = match command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    let log_file = cli.log_file.clone().or_else(|| config.logging.log_file.clone());
    let _log_guard = logging::init(cli.verbose, default_level, log_file.as_deref())
        .context("Failed to set up logging")?;

    if command == Command::ShowConfig {
        show_config(&cli, &config);
        return Ok(ExitCode::SUCCESS);
    }

    for issue in config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    // === Dependency Injection ===
    let registry = Arc::new(config.to_registry()?);
    let params = config.to_dispatch_params();
    let gateway: Arc<dyn UpstreamGateway> =
        Arc::new(ReqwestUpstreamGateway::new().context("Failed to build HTTP client")?);

    let dispatch_log = cli
        .dispatch_log
        .clone()
        .or_else(|| config.logging.dispatch_log.clone());
    let solve = SolveUseCase::new(gateway.clone(), registry.clone(), params)
        .with_logger(dispatch_logger(dispatch_log));
    let probe = ProbeEndpointsUseCase::new(gateway, registry.clone(), params);

    match command {
        Command::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            let address = server.bind_address();

            print_banner(&address, &config, &registry);

            let listener = tokio::net::TcpListener::bind(&address)
                .await
                .with_context(|| format!("Failed to bind {}", address))?;

            let shutdown = CancellationToken::new();
            tokio::spawn(cancel_on_signal(shutdown.clone()));

            let state = AppState::new(solve, probe).with_shutdown(shutdown);
            hwhelper_presentation::serve(listener, state).await?;
            info!("Server stopped");
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask {
            question,
            subject,
            json,
            quiet,
        } => {
            let cancel = CancellationToken::new();
            tokio::spawn(cancel_on_signal(cancel.clone()));

            let input = SolveInput::new(subject, Some(question)).with_cancellation(cancel);
            let result = if quiet || json {
                solve.execute(input).await
            } else {
                let progress = ProgressReporter::new();
                solve.execute_with_progress(input, &progress).await
            };

            match result {
                Ok(solution) => {
                    if json {
                        println!("{}", ConsoleFormatter::format_solution_json(&solution));
                    } else {
                        println!("{}", ConsoleFormatter::format_solution(&solution));
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    if json {
                        println!("{}", ConsoleFormatter::format_error_json(&e));
                    } else {
                        eprintln!("{}", ConsoleFormatter::format_error(&e));
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Probe { json } => {
            let results = probe.execute().await;
            if json {
                println!("{}", ConsoleFormatter::format_probe_json(&results));
            } else {
                println!("{}", ConsoleFormatter::format_probe(&results));
            }
            if results.iter().any(|r| r.working) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::ShowConfig => Ok(ExitCode::SUCCESS),
    }
}

fn dispatch_logger(path: Option<PathBuf>) -> Arc<dyn DispatchLogger> {
    match path.and_then(JsonlDispatchLogger::new) {
        Some(logger) => {
            info!("Dispatch events -> {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoDispatchLogger),
    }
}

fn print_banner(address: &str, config: &FileConfig, registry: &EndpointRegistry) {
    let line = "=".repeat(70);
    println!();
    println!("{}", line);
    println!("HWHelper API - upstream agent dispatch");
    println!("{}", line);
    println!("Listening:  http://{}", address);
    println!("Project:    {}", config.upstream.project_id);
    println!("Token:      {}", mask_secret(registry.default_credential()));
    println!("Endpoints:  {}", registry.len());
    println!("{}", line);
    println!();
}

fn show_config(cli: &Cli, config: &FileConfig) {
    if cli.no_config {
        println!("Configuration files disabled (--no-config)");
    } else {
        ConfigLoader::print_config_sources(cli.config.as_ref());
    }
    println!();

    match config.to_registry() {
        Ok(registry) => print!("{}", ConsoleFormatter::format_endpoints(&registry)),
        Err(e) => println!("Endpoints: {}", e),
    }

    let params = config.to_dispatch_params();
    println!(
        "\nTimeouts: attempt {}s, probe {}s",
        params.attempt_timeout.as_secs(),
        params.probe_timeout.as_secs()
    );

    let issues = config.validate();
    if !issues.is_empty() {
        println!("\nIssues:");
        for issue in issues {
            let level = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            println!("  [{}] {}", level, issue.message);
        }
    }
}

/// Cancel `token` on Ctrl-C or SIGTERM.
async fn cancel_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Could not listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
    token.cancel();
}
