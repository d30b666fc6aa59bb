mod common;

use common::*;
use dynect_client::{DynectError, Method, ResourcePath, ResponseStatus};
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn connect_stores_token_and_posts_credentials() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(success(json!({"token": TOKEN, "version": "3.7.0"})));

    session.connect(&credentials()).await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some(TOKEN));

    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, url("Session"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.header_count("Auth-Token"), 0);
    assert_eq!(
        body_json(&request),
        json!({"customer_name": "acme", "user_name": "ops", "password": "hunter2"})
    );
}

#[tokio::test]
async fn rejected_login_leaves_session_unauthenticated() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(failure("login: Credentials you entered did not match those in our database"));

    let err = session.connect(&credentials()).await.unwrap_err();

    assert!(err.is_rejection());
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
    assert!(session
        .last_response()
        .unwrap()
        .contains("Credentials you entered did not match"));
}

#[tokio::test]
async fn rejected_login_never_stores_returned_token() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(json!({"status": "incomplete", "data": {"token": "half-baked"}}));

    let err = session.connect(&credentials()).await.unwrap_err();

    assert!(matches!(
        err,
        DynectError::Rejected { status: ResponseStatus::Incomplete, .. }
    ));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn successful_login_without_token_is_a_decode_error() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(success(json!({"version": "3.7.0"})));

    let err = session.connect(&credentials()).await.unwrap_err();

    assert!(matches!(err, DynectError::Decode(_)));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn token_is_sent_exactly_once_after_connect() {
    let transport = FakeTransport::new();
    let session = connected(&transport).await;
    transport.respond(success(json!(["/REST/Zone/example.com/"])));
    transport.respond(success(json!({"zone": "example.com"})));

    session.zones().list().await.unwrap();
    session.zones().get("example.com").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.header_count("Auth-Token"), 1);
        assert_eq!(request.header("Auth-Token"), Some(TOKEN));
        assert_eq!(request.header_count("Content-Type"), 1);
    }
}

#[tokio::test]
async fn requests_before_login_carry_no_token() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(failure("token: Login token invalid"));

    let err = session.zones().get("example.com").await.unwrap_err();

    assert!(err.is_rejection());
    assert_eq!(transport.last_request().header_count("Auth-Token"), 0);
}

#[tokio::test]
async fn disconnect_clears_token() {
    let transport = FakeTransport::new();
    let session = connected(&transport).await;
    transport.respond(success(json!({})));

    session.disconnect().await.unwrap();

    assert!(!session.is_authenticated());
    let request = transport.last_request();
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.url, url("Session"));
    assert_eq!(request.header("Auth-Token"), Some(TOKEN));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn disconnect_clears_token_even_when_rejected() {
    let transport = FakeTransport::new();
    let session = connected(&transport).await;
    transport.respond(failure("logout: token already expired"));

    let err = session.disconnect().await.unwrap_err();

    assert!(err.is_rejection());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn disconnect_clears_token_on_transport_failure() {
    let transport = FakeTransport::new();
    let session = connected(&transport).await;
    transport.fail("connection reset by peer");

    let err = session.disconnect().await.unwrap_err();

    assert!(err.is_transport());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn execute_without_payload_sends_no_body() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(success(json!({})));
    transport.respond(success(json!({})));
    transport.respond(success(json!({})));

    session
        .execute(&ResourcePath::zone("example.com"), Method::Put, None)
        .await
        .unwrap();
    session
        .execute(&ResourcePath::zone("example.com"), Method::Put, Some(json!({})))
        .await
        .unwrap();
    session
        .execute(&ResourcePath::zone("example.com"), Method::Put, Some(serde_json::Value::Null))
        .await
        .unwrap();

    for request in transport.requests() {
        assert!(request.body.is_none(), "unexpected body: {:?}", request.body);
    }
}

#[tokio::test]
async fn execute_encodes_non_empty_payload() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(success(json!({})));

    session
        .execute(
            &ResourcePath::zone("example.com"),
            Method::Put,
            Some(json!({"freeze": "TRUE"})),
        )
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.url, url("Zone/example.com"));
    assert_eq!(request.body.as_deref(), Some(r#"{"freeze":"TRUE"}"#));
}

#[tokio::test]
async fn execute_returns_envelope_without_judging_status() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(failure("zone: No such zone"));

    let envelope = session
        .execute(&ResourcePath::zone("missing.example"), Method::Get, None)
        .await
        .unwrap();

    assert_eq!(envelope.status, ResponseStatus::Failure);
    assert_eq!(envelope.msgs[0].err_cd.as_deref(), Some("INVALID_DATA"));
}

#[tokio::test]
async fn transport_failure_clears_response_cache() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(success(json!({"zone": "example.com"})));
    transport.fail("connection refused");

    session.zones().get("example.com").await.unwrap();
    assert!(session.last_response().is_some());

    let err = session.zones().get("example.com").await.unwrap_err();
    assert!(err.is_transport());
    assert!(session.last_response().is_none());
}

#[tokio::test]
async fn undecodable_body_is_kept_for_inspection() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond_raw("<html><body>502 Bad Gateway</body></html>");

    let err = session.zones().get("example.com").await.unwrap_err();

    assert!(matches!(err, DynectError::Decode(_)));
    assert_eq!(
        session.last_response().as_deref(),
        Some("<html><body>502 Bad Gateway</body></html>")
    );
}

#[tokio::test]
async fn clones_share_the_token() {
    let transport = FakeTransport::new();
    let session = connected(&transport).await;
    let other = session.clone();
    transport.respond(success(json!({})));

    other.disconnect().await.unwrap();

    assert!(!session.is_authenticated());
}

#[test]
fn each_operation_completes_its_round_trip_before_returning() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    transport.respond(success(json!({"token": TOKEN})));

    tokio_test::assert_ok!(tokio_test::block_on(session.connect(&credentials())));

    assert_eq!(transport.request_count(), 1);
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn concurrent_clones_do_not_overwrite_a_failed_exchange() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    let other = session.clone();
    transport.fail_after("connection reset", Duration::from_millis(100));
    transport.respond(success(json!({"zone": "fast.example"})));

    let slow = async {
        let result = session.zones().get("slow.example").await;
        (result, session.last_response())
    };
    let fast = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        other.zones().get("fast.example").await
    };
    let ((slow_result, cache_after_failure), fast_result) = tokio::join!(slow, fast);

    assert!(slow_result.unwrap_err().is_transport());
    assert!(cache_after_failure.is_none());
    assert_eq!(fast_result.unwrap().get("zone"), Some(&json!("fast.example")));
    assert!(session.last_response().unwrap().contains("fast.example"));

    let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec![url("Zone/slow.example"), url("Zone/fast.example")]);
}

#[tokio::test]
async fn disconnect_waits_for_a_login_in_flight() {
    let transport = FakeTransport::new();
    let session = session(&transport);
    let other = session.clone();
    transport.respond_after(success(json!({"token": TOKEN})), Duration::from_millis(100));
    transport.respond(success(json!({})));

    let creds = credentials();
    let login = session.connect(&creds);
    let logout = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        other.disconnect().await
    };
    let (login, logout) = tokio::join!(login, logout);

    login.unwrap();
    logout.unwrap();
    assert!(!session.is_authenticated());

    let requests = transport.requests();
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].header("Auth-Token"), Some(TOKEN));
}
