// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests of the Google Calendar client against a wiremock server.

use chrono::NaiveDate;
use orangeair_calendar::{GoogleCalendar, ServiceAccountKey};
use orangeair_config::model::CalendarConfig;
use orangeair_core::{Adapter, CalendarAdapter, HealthStatus, OrangeairError, TimeBucket};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = include_str!("fixtures/test_key.pem");
const CALENDAR_ID: &str = "team@group.calendar.google.com";

fn service_account(server: &MockServer) -> ServiceAccountKey {
    serde_json::from_value(json!({
        "type": "service_account",
        "client_email": "booking-bot@orangeair.iam.gserviceaccount.com",
        "private_key_id": "test-key",
        "private_key": TEST_KEY,
        "token_uri": format!("{}/token", server.uri()),
    }))
    .expect("test key should parse")
}

fn client(server: &MockServer) -> GoogleCalendar {
    let config = CalendarConfig {
        api_base_url: server.uri(),
        ..CalendarConfig::default()
    };
    GoogleCalendar::new(&service_account(server), &config).expect("client should build")
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.test",
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn events_are_listed_with_expected_query_and_bucketed() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/calendars/team%40group.calendar.google.com/events"))
        .and(header("authorization", "Bearer ya29.test"))
        .and(query_param("maxResults", "100"))
        .and(query_param("singleEvents", "true"))
        .and(query_param("orderBy", "startTime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "calendar#events",
            "items": [
                {"id": "a", "start": {"dateTime": "2025-06-01T09:30:00+09:00"}},
                {"id": "b", "start": {"date": "2025-06-01"}},
                {"id": "c", "start": {"dateTime": "2025-06-01T15:00:00+09:00"}},
                {"id": "d", "start": {"dateTime": "2025-06-02T19:00:00+09:00"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let slots = client(&server).reserved_slots(CALENDAR_ID).await.unwrap();

    let june = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
    let pairs: Vec<_> = slots.iter().map(|s| (s.date, s.bucket)).collect();
    assert_eq!(
        pairs,
        vec![
            (june(1), TimeBucket::Morning),
            (june(1), TimeBucket::LateAfternoon),
            (june(2), TimeBucket::Evening),
        ]
    );
}

#[tokio::test]
async fn empty_calendar_yields_no_slots() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let slots = client(&server).reserved_slots(CALENDAR_ID).await.unwrap();
    assert!(slots.is_empty());
}

#[tokio::test]
async fn unauthorized_events_request_is_an_auth_error() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": 401, "message": "Request had invalid authentication credentials."}
        })))
        .mount(&server)
        .await;

    let err = client(&server).reserved_slots(CALENDAR_ID).await.unwrap_err();
    match err {
        OrangeairError::CalendarAuth { message } => {
            assert!(message.contains("invalid authentication credentials"));
        }
        other => panic!("expected CalendarAuth, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_token_exchange_is_an_auth_error_and_skips_the_listing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).reserved_slots(CALENDAR_ID).await.unwrap_err();
    assert!(matches!(err, OrangeairError::CalendarAuth { .. }));
}

#[tokio::test]
async fn server_error_is_a_calendar_error() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend unavailable"))
        .mount(&server)
        .await;

    let err = client(&server).reserved_slots(CALENDAR_ID).await.unwrap_err();
    assert!(matches!(err, OrangeairError::Calendar { .. }));
    assert!(err.is_external());
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn malformed_event_time_fails_the_whole_read() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "ok", "start": {"dateTime": "2025-06-01T09:30:00+09:00"}},
                {"id": "bad", "start": {"dateTime": "2025-06-01 9am"}}
            ]
        })))
        .mount(&server)
        .await;

    let err = client(&server).reserved_slots(CALENDAR_ID).await.unwrap_err();
    assert!(matches!(err, OrangeairError::Calendar { .. }));
    assert!(err.to_string().contains("bad"));
}

#[tokio::test]
async fn health_is_healthy_until_a_token_exchange_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "The OAuth client was not found."
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let calendar = client(&server);
    assert_eq!(calendar.name(), "google-calendar");
    assert_eq!(calendar.health_check().await.unwrap(), HealthStatus::Healthy);
    assert!(server.received_requests().await.unwrap().is_empty());

    let err = calendar.reserved_slots(CALENDAR_ID).await.unwrap_err();
    assert!(matches!(err, OrangeairError::CalendarAuth { .. }));
    match calendar.health_check().await.unwrap() {
        HealthStatus::Unhealthy(reason) => assert!(reason.contains("401")),
        other => panic!("expected unhealthy, got {other:?}"),
    }

    calendar.reserved_slots(CALENDAR_ID).await.unwrap();
    assert_eq!(calendar.health_check().await.unwrap(), HealthStatus::Healthy);
}
