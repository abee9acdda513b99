//! Integration tests for the calculator SDK
//!
//! These tests run the HTTP endpoint on an ephemeral port and verify that
//! local and HTTP modes behave the same.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use calculator_service::{
    api, CalculationRequest, CalculatorError, CalculatorSdk, HttpCalculator, Operation, SdkMode,
};
use tokio::net::TcpListener;

async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_calculator() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(api::serve_listener(listener));
    addr
}

fn http_sdk(addr: SocketAddr) -> CalculatorSdk {
    CalculatorSdk::http(HttpCalculator::with_base_url(format!("http://{}", addr)))
}

#[tokio::test]
async fn test_local_and_http_agree() {
    let addr = spawn_calculator().await;
    let local = CalculatorSdk::new(SdkMode::Local);
    let remote = http_sdk(addr);

    let inputs = [(7.5, 2.5), (-3.25, 4.0), (1000.0, 0.125), (0.0, 9.0)];

    for op in Operation::ALL {
        for (a, b) in inputs {
            let req = CalculationRequest::new(op, a, b);
            let expected = local.calculate(&req).await.unwrap();
            let actual = remote.calculate(&req).await.unwrap();
            assert_eq!(expected, actual, "{op}({a}, {b})");
        }
    }
}

#[tokio::test]
async fn test_multiply_scenario() {
    let addr = spawn_calculator().await;
    let req = CalculationRequest::new(Operation::Multiply, 3.0, 4.0);

    for sdk in [CalculatorSdk::new(SdkMode::Local), http_sdk(addr)] {
        assert_eq!(sdk.calculate(&req).await.unwrap(), 12.0);
    }
}

#[tokio::test]
async fn test_divide_by_zero_in_both_modes() {
    let addr = spawn_calculator().await;
    let req = CalculationRequest::new(Operation::Divide, 10.0, 0.0);

    for sdk in [CalculatorSdk::new(SdkMode::Local), http_sdk(addr)] {
        let err = sdk.calculate(&req).await.unwrap_err();
        assert!(err.is_invalid_operation(), "{:?}: {:?}", sdk.mode(), err);
        assert_eq!(err.to_string(), "division by zero is not allowed");
    }
}

#[tokio::test]
async fn test_unknown_operation_in_both_modes() {
    let addr = spawn_calculator().await;
    let req = CalculationRequest::new("modulo", 10.0, 3.0);

    for sdk in [CalculatorSdk::new(SdkMode::Local), http_sdk(addr)] {
        let err = sdk.calculate(&req).await.unwrap_err();
        assert!(err.is_invalid_operation(), "{:?}: {:?}", sdk.mode(), err);
        assert_eq!(err.to_string(), "invalid operation specified");
    }
}

#[tokio::test]
async fn test_server_error_status() {
    let router = Router::new().route(
        "/calculator",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn_router(router).await;

    let err = http_sdk(addr)
        .calculate(&CalculationRequest::new(Operation::Add, 1.0, 2.0))
        .await
        .unwrap_err();

    assert!(matches!(err, CalculatorError::Remote { status: 500 }), "{:?}", err);
}

#[tokio::test]
async fn test_uncoded_bad_request_is_remote_error() {
    let router = Router::new().route(
        "/calculator",
        post(|| async { (StatusCode::BAD_REQUEST, Json(serde_json::json!({"error": "nope"}))) }),
    );
    let addr = spawn_router(router).await;

    let err = http_sdk(addr)
        .calculate(&CalculationRequest::new(Operation::Add, 1.0, 2.0))
        .await
        .unwrap_err();

    assert!(matches!(err, CalculatorError::Remote { status: 400 }), "{:?}", err);
}

#[tokio::test]
async fn test_unexpected_response_shape() {
    let router = Router::new().route(
        "/calculator",
        post(|| async { Json(serde_json::json!({"data": 3.0})) }),
    );
    let addr = spawn_router(router).await;

    let err = http_sdk(addr)
        .calculate(&CalculationRequest::new(Operation::Add, 1.0, 2.0))
        .await
        .unwrap_err();

    assert!(matches!(err, CalculatorError::Decode(_)), "{:?}", err);
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = http_sdk(addr)
        .calculate(&CalculationRequest::new(Operation::Add, 1.0, 2.0))
        .await
        .unwrap_err();

    assert!(matches!(err, CalculatorError::Transport(_)), "{:?}", err);
}

#[tokio::test]
async fn test_overflow_in_both_modes() {
    let addr = spawn_calculator().await;
    let req = CalculationRequest::new(Operation::Multiply, 1e308, 10.0);

    for sdk in [CalculatorSdk::new(SdkMode::Local), http_sdk(addr)] {
        let err = sdk.calculate(&req).await.unwrap_err();
        assert!(err.is_invalid_operation(), "{:?}: {:?}", sdk.mode(), err);
        assert_eq!(err.to_string(), "result is not a finite number");
    }
}

#[tokio::test]
async fn test_client_timeout() {
    let router = Router::new().route(
        "/calculator",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(serde_json::json!({"result": 3.0}))
        }),
    );
    let addr = spawn_router(router).await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let calculator = HttpCalculator::with_base_url(format!("http://{}", addr)).with_client(client);

    let err = CalculatorSdk::http(calculator)
        .calculate(&CalculationRequest::new(Operation::Add, 1.0, 2.0))
        .await
        .unwrap_err();

    match err {
        CalculatorError::Transport(e) => assert!(e.is_timeout(), "{:?}", e),
        other => panic!("expected transport error, got {other:?}"),
    }
}
