//! Tests against the real service.
//!
//! Run with `JUDICIAL_USER=... JUDICIAL_PASSWORD=... cargo test -- --ignored`
//! between 00:00 and 06:00 Taipei time. Outside the window or without
//! credentials the tests return early.

use tw_judicial::{BlockingJudicialClient, ClientError, service_window};

fn credentials() -> Option<(String, String)> {
    if !service_window::in_service_window() {
        eprintln!(
            "skipping: outside the service window (Taipei hour {:02})",
            service_window::taipei_hour_now()
        );
        return None;
    }
    match (
        std::env::var("JUDICIAL_USER"),
        std::env::var("JUDICIAL_PASSWORD"),
    ) {
        (Ok(user), Ok(password)) if !user.is_empty() && !password.is_empty() => {
            Some((user, password))
        }
        _ => {
            eprintln!("skipping: set JUDICIAL_USER and JUDICIAL_PASSWORD");
            None
        }
    }
}

#[test]
#[ignore = "requires network access and service credentials"]
fn live_authenticate_returns_token() {
    let Some((user, password)) = credentials() else {
        return;
    };
    let client = BlockingJudicialClient::from_default_server().expect("default url");
    let token = client.authenticate(&user, &password).expect("auth");
    assert!(!token.is_empty());
}

#[test]
#[ignore = "requires network access and service credentials"]
fn live_wrong_password_is_rejected() {
    if !service_window::in_service_window() {
        return;
    }
    let client = BlockingJudicialClient::from_default_server().expect("default url");
    let error = client
        .authenticate("not_exist_user", "wrong_password")
        .expect_err("bad credentials should fail");
    assert!(matches!(error, ClientError::Auth(_)), "got {error}");
}

#[test]
#[ignore = "requires network access and service credentials"]
fn live_list_and_fetch_document() {
    let Some((user, password)) = credentials() else {
        return;
    };
    let client = BlockingJudicialClient::from_default_server().expect("default url");
    let token = client.authenticate(&user, &password).expect("auth");

    let first = client.list_changes(&token).expect("list");
    let second = client.list_changes(&token).expect("list");
    assert_eq!(first, second);

    let document = client
        .get_document(&token, "TPBA,113,訴,501,20240808,1")
        .expect("document");
    assert!(!document.id.is_empty());
}
