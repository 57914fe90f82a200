//! End-to-end client behavior against a mocked gateway.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use momo_client::{ClientError, Credentials, MomoClient, PaymentService};
use momo_types::{PaymentRequest, WithdrawalRequest};

fn client_for(server: &MockServer) -> MomoClient {
    MomoClient::new(Credentials {
        app_username: "app".to_string(),
        app_password: "pass".to_string(),
        base_url: server.uri(),
    })
}

fn payment_request() -> PaymentRequest {
    PaymentRequest {
        amount: "5".to_string(),
        from: "+237671738755".to_string(),
        description: "Payment for subscription".to_string(),
        external_reference: "payment_12345".to_string(),
    }
}

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/token/"))
        .and(body_json(json!({"username": "app", "password": "pass"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": token, "expires_in": 3600})),
        )
        .mount(server)
        .await;
}

// ─────────────────────────────────────────────────────────────────────────────
// Token acquisition
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn acquire_token_returns_mocked_value() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1").await;

    let client = client_for(&server);
    let token = client.tokens().acquire().await.unwrap();

    assert_eq!(token.token, "tok-1");
    assert_eq!(token.expires_in, 3600);
}

#[tokio::test]
async fn acquire_token_maps_400_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad creds"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.tokens().acquire().await.unwrap_err();

    match &err {
        ClientError::Authentication { body } => assert!(body.contains("bad creds")),
        other => panic!("expected authentication error, got {other:?}"),
    }
    assert!(err.to_string().contains("bad creds"));
}

#[tokio::test]
async fn sequential_token_calls_issue_independent_requests() {
    let server = MockServer::start().await;
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = calls.clone();

    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(move |_: &wiremock::Request| {
            let n = calls_clone.fetch_add(1, Ordering::SeqCst) + 1;
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": format!("tok-{n}"), "expires_in": 3600}))
        })
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.tokens().acquire().await.unwrap();
    let second = client.tokens().acquire().await.unwrap();

    assert_eq!(first.token, "tok-1");
    assert_eq!(second.token, "tok-2");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Collection (payment)
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn initiate_payment_returns_typed_response() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-abc").await;

    Mock::given(method("POST"))
        .and(path("/collect/"))
        .and(header("Authorization", "Token tok-abc"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "amount": "5",
            "from": "+237671738755",
            "description": "Payment for subscription",
            "external_reference": "payment_12345"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"reference": "R1", "ussd_code": "*123#", "operator": "MTN"}),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client.initiate_payment(payment_request()).await.unwrap();

    assert_eq!(resp.reference, "R1");
    assert_eq!(resp.ussd_code, "*123#");
    assert_eq!(resp.operator, "MTN");
}

#[tokio::test]
async fn initiate_payment_maps_400_to_gateway_rejected() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-abc").await;

    Mock::given(method("POST"))
        .and(path("/collect/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("insufficient funds"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.initiate_payment(payment_request()).await.unwrap_err();

    match &err {
        ClientError::GatewayRejected {
            operation,
            status,
            body,
        } => {
            assert_eq!(*operation, "collect");
            assert_eq!(*status, 400);
            assert!(body.contains("insufficient funds"));
        }
        other => panic!("expected gateway rejection, got {other:?}"),
    }
    assert_eq!(err.operation(), "collect");
}

#[tokio::test]
async fn token_failure_propagates_through_payment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad creds"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.initiate_payment(payment_request()).await.unwrap_err();

    assert!(matches!(err, ClientError::Authentication { .. }));
}

// Non-400 error statuses intentionally fall through to the success
// decode path; a 500 with a non-JSON body therefore reports Decoding.
#[tokio::test]
async fn non_400_error_status_surfaces_as_decoding_error() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-abc").await;

    Mock::given(method("POST"))
        .and(path("/collect/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.initiate_payment(payment_request()).await.unwrap_err();

    match err {
        ClientError::Decoding { operation, .. } => assert_eq!(operation, "collect"),
        other => panic!("expected decoding error, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Withdrawal (disbursement)
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn withdraw_returns_typed_response() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-abc").await;

    Mock::given(method("POST"))
        .and(path("/withdraw/"))
        .and(header("Authorization", "Token tok-abc"))
        .and(body_json(json!({
            "amount": "10",
            "to": "+237600000000",
            "description": "Payout",
            "external_reference": "payout_1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reference": "W1"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .withdraw(WithdrawalRequest {
            amount: "10".to_string(),
            to: "+237600000000".to_string(),
            description: "Payout".to_string(),
            external_reference: "payout_1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(resp.reference, "W1");
}

// ─────────────────────────────────────────────────────────────────────────────
// Transport failures
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn connection_refused_surfaces_as_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = MomoClient::new(Credentials {
        app_username: "app".to_string(),
        app_password: "pass".to_string(),
        base_url: format!("http://127.0.0.1:{port}"),
    });

    let err = client.initiate_payment(payment_request()).await.unwrap_err();
    match err {
        ClientError::Transport { operation, .. } => assert_eq!(operation, "token"),
        other => panic!("expected transport error, got {other:?}"),
    }
}
