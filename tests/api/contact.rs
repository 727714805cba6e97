use std::time::{Duration, Instant};

use serde_json::{Value, json};

use crate::helpers::{
    FailingSink, RecordingSink, spawn_app, spawn_app_with, test_configuration, valid_submission,
};

fn violated_fields(body: &Value) -> Vec<&str> {
    body["errors"]
        .as_array()
        .expect("Response body has no `errors` array.")
        .iter()
        .map(|e| e["path"][0].as_str().unwrap_or(""))
        .collect()
}

#[tokio::test]
async fn contact_returns_200_and_acknowledges_a_valid_submission() {
    let app = spawn_app().await;

    let response = app.post_contact(&valid_submission()).await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Your message has been received. I'll get back to you soon!"
        })
    );
}

#[tokio::test]
async fn contact_hands_the_submission_to_the_sink() {
    let sink = RecordingSink::default();
    let app = spawn_app_with(test_configuration(), sink.clone()).await;

    app.post_contact(&valid_submission()).await;

    let received = sink.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name.as_ref(), "Jo");
    assert_eq!(received[0].email.as_ref(), "jo@example.com");
    assert_eq!(received[0].subject.as_ref(), "Hello there");
    assert_eq!(received[0].message.as_ref(), "This is a test message.");
}

#[tokio::test]
async fn the_same_submission_twice_is_acknowledged_twice() {
    let sink = RecordingSink::default();
    let app = spawn_app_with(test_configuration(), sink.clone()).await;

    for _ in 0..2 {
        let response = app.post_contact(&valid_submission()).await;
        assert_eq!(200, response.status().as_u16());
    }

    assert_eq!(sink.received().len(), 2);
}

#[tokio::test]
async fn contact_returns_400_with_every_violation_at_once() {
    let sink = RecordingSink::default();
    let app = spawn_app_with(test_configuration(), sink.clone()).await;
    let payload = json!({
        "name": "J",
        "email": "bad",
        "subject": "Hi",
        "message": "short"
    });

    let response = app.post_contact(&payload).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Validation failed"));
    assert_eq!(
        violated_fields(&body),
        vec!["name", "email", "subject", "message"]
    );
    assert!(sink.received().is_empty());
}

#[tokio::test]
async fn contact_returns_400_for_each_invalid_field() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("name", json!("A"), "Name must be at least 2 characters"),
        ("email", json!("not-an-email"), "Invalid email address"),
        ("subject", json!("Hey"), "Subject must be at least 5 characters"),
        ("message", json!("Too short"), "Message must be at least 10 characters"),
    ];

    for (field, value, expected_message) in test_cases {
        let mut payload = valid_submission();
        payload[field] = value;

        let response = app.post_contact(&payload).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when {} was invalid.",
            field
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(violated_fields(&body), vec![field]);
        assert_eq!(body["errors"][0]["message"], json!(expected_message));
    }
}

#[tokio::test]
async fn contact_measures_names_in_utf16_code_units() {
    let app = spawn_app().await;
    let test_cases = vec![
        "\u{1F44D}",
        "e\u{301}",
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}",
    ];

    for name in test_cases {
        let mut payload = valid_submission();
        payload["name"] = json!(name);

        let response = app.post_contact(&payload).await;

        assert_eq!(
            200,
            response.status().as_u16(),
            "The API rejected the name {:?}.",
            name
        );
    }
}

#[tokio::test]
async fn contact_returns_400_for_addresses_without_a_public_domain() {
    let app = spawn_app().await;

    for email in ["jo@localhost", "jo@[127.0.0.1]"] {
        let mut payload = valid_submission();
        payload["email"] = json!(email);

        let response = app.post_contact(&payload).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API accepted the address {}.",
            email
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(violated_fields(&body), vec!["email"]);
    }
}

#[tokio::test]
async fn contact_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    let mut missing_email = valid_submission();
    missing_email.as_object_mut().unwrap().remove("email");

    let response = app.post_contact(&missing_email).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(violated_fields(&body), vec!["email"]);
    assert_eq!(body["errors"][0]["message"], json!("Required"));
}

#[tokio::test]
async fn contact_returns_400_when_the_body_is_not_json() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("name=le%20guin&email=ursula_le_guin%40gmail.com", "application/x-www-form-urlencoded"),
        ("{\"name\": \"Jo\",", "application/json"),
        ("", "application/json"),
    ];

    for (body, content_type) in test_cases {
        let response = app.post_contact_raw(body.into(), content_type).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {:?}.",
            body
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["errors"][0]["path"], json!([]));
    }
}

#[tokio::test]
async fn contact_accepts_json_without_a_json_content_type() {
    let app = spawn_app().await;

    let response = app
        .post_contact_raw(valid_submission().to_string(), "text/plain")
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn contact_returns_413_when_the_body_exceeds_the_limit() {
    let mut config = test_configuration();
    config.application.max_body_bytes = 256;
    let app = spawn_app_with(config, RecordingSink::default()).await;
    let mut payload = valid_submission();
    payload["message"] = json!("a".repeat(1024));

    let response = app.post_contact(&payload).await;

    assert_eq!(413, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn contact_returns_500_without_details_when_the_sink_fails() {
    let app = spawn_app_with(test_configuration(), FailingSink).await;

    let response = app.post_contact(&valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "Something went wrong processing your request"
        })
    );
}

#[tokio::test]
async fn contact_waits_for_the_simulated_delay_before_acknowledging() {
    let mut config = test_configuration();
    config.contact.simulated_delay_ms = 300;
    let app = spawn_app_with(config, RecordingSink::default()).await;

    let started = Instant::now();
    let response = app.post_contact(&valid_submission()).await;

    assert_eq!(200, response.status().as_u16());
    assert!(started.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn the_simulated_delay_does_not_serialize_requests() {
    let mut config = test_configuration();
    config.contact.simulated_delay_ms = 400;
    let app = spawn_app_with(config, RecordingSink::default()).await;

    let started = Instant::now();
    let payload = valid_submission();
    let (first, second) = tokio::join!(app.post_contact(&payload), app.post_contact(&payload));

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
    assert!(started.elapsed() < Duration::from_millis(800));
}
