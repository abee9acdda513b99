//! Launcher main entry point
//!
//! Reads `TARGET_SERVICES` and starts each named service as a task
//! in this process.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calculator_service::{CalculationRequest, CalculatorSdk};
use launcher_lib::{default_registry, LauncherConfig};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launcher=info,launcher_lib=info,calculator_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_help() {
    println!("Launcher - runs the requested services in one process");
    println!();
    println!("Usage:");
    println!("  launcher                 Start the services listed in TARGET_SERVICES");
    println!("  launcher --list          List services that can be started");
    println!("  launcher calc <op> <a> <b>  Run one calculation through the calculator SDK");
    println!("  launcher --help          Show this help");
    println!();
    println!("Environment Variables:");
    println!("  TARGET_SERVICES          Comma-separated services to start (required)");
    println!("  CALCULATOR_ADDR          Calculator listen address (default: 0.0.0.0:8080)");
    println!("  CALCULATOR_SERVICE_URL   Calculator base URL for the HTTP SDK");
    println!("  CALCULATOR_SDK_MODE      SDK mode: local or http (default: local)");
    println!("  RUST_LOG                 Log filter");
}

/// One calculation through the SDK, in the mode named by `CALCULATOR_SDK_MODE`
async fn run_calc(args: &[String]) -> ExitCode {
    let [operation, a, b] = args else {
        eprintln!("Usage: launcher calc <add|subtract|multiply|divide> <a> <b>");
        return ExitCode::FAILURE;
    };
    let (Ok(a), Ok(b)) = (a.parse::<f64>(), b.parse::<f64>()) else {
        eprintln!("Operands must be numbers: {} {}", a, b);
        return ExitCode::FAILURE;
    };

    let sdk = CalculatorSdk::from_env();
    tracing::info!("Calculating {} in {} mode", operation, sdk.mode());

    match sdk.calculate(&CalculationRequest::new(operation.as_str(), a, b)).await {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Calculation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_launcher() -> ExitCode {
    let config = match LauncherConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting Launcher v{}", config.version);

    let registry = default_registry();
    let summary = launcher_lib::run(&config.requested_services(), &registry).await;

    if !summary.failed.is_empty() {
        tracing::warn!("Services finished with errors: {}", summary.failed.join(", "));
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    // Load .env before the log filter is read from the environment
    let dotenv_result = dotenv::dotenv();

    let args: Vec<String> = std::env::args().collect();
    let mut calc_args = None;
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            "--list" => {
                for name in default_registry().names() {
                    println!("{}", name);
                }
                return ExitCode::SUCCESS;
            }
            "calc" => calc_args = Some(args[2..].to_vec()),
            other => {
                eprintln!("Unknown argument: {}", other);
                print_help();
                return ExitCode::FAILURE;
            }
        }
    }

    init_tracing();

    if dotenv_result.is_err() {
        tracing::warn!(".env file not found or failed to load");
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match calc_args {
        Some(calc_args) => runtime.block_on(run_calc(&calc_args)),
        None => runtime.block_on(run_launcher()),
    }
}
