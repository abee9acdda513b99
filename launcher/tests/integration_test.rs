//! Integration tests for the launcher with calculator-service
//!
//! These tests start services through the registry and reach the
//! calculator through its SDK.

use std::sync::{Arc, Mutex};

use calculator_service::{
    api, CalculationRequest, CalculatorSdk, HttpCalculator, Operation, SdkMode,
};
use launcher_lib::{parse_service_list, run, ServiceRegistry};

#[tokio::test]
async fn test_calculator_started_by_launcher() {
    // Bind up front so the test knows the port before the service starts
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    let slot = Arc::new(Mutex::new(Some(listener)));

    let registry = ServiceRegistry::builder()
        .register(calculator_service::SERVICE_NAME, move || {
            let listener = slot.lock().unwrap().take();
            async move {
                let listener = listener.ok_or_else(|| anyhow::anyhow!("listener already taken"))?;
                api::serve_listener(tokio::net::TcpListener::from_std(listener)?).await
            }
        })
        .build();

    // The calculator serves forever, so the launch never completes
    let requested = parse_service_list("calculator-svc, , bogus-svc");
    let launch = tokio::spawn(async move { run(&requested, &registry).await });

    let sdk = CalculatorSdk::http(HttpCalculator::with_base_url(format!("http://{}", addr)));
    let result = sdk
        .calculate(&CalculationRequest::new(Operation::Multiply, 3.0, 4.0))
        .await
        .unwrap();
    assert_eq!(result, 12.0);

    let local = CalculatorSdk::new(SdkMode::Local);
    let req = CalculationRequest::new(Operation::Divide, 10.0, 0.0);
    let remote_err = sdk.calculate(&req).await.unwrap_err();
    let local_err = local.calculate(&req).await.unwrap_err();
    assert_eq!(remote_err.to_string(), local_err.to_string());

    assert!(!launch.is_finished());
    launch.abort();
}

#[tokio::test]
async fn test_launch_reports_unmatched_services() {
    let registry = ServiceRegistry::builder()
        .register(calculator_service::SERVICE_NAME, || async { Ok(()) })
        .build();

    let requested = parse_service_list("calculator-svc, , bogus-svc");
    let summary = run(&requested, &registry).await;

    assert_eq!(summary.started, vec!["calculator-svc"]);
    assert_eq!(summary.unmatched, vec!["bogus-svc"]);
}

#[tokio::test]
async fn test_launch_with_nothing_requested() {
    let registry = launcher_lib::default_registry();

    let summary = run(&parse_service_list(""), &registry).await;

    assert!(summary.started.is_empty());
    assert!(summary.unmatched.is_empty());
}
