//! Verify the response pipeline against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector describes either a simulated response or a transport
//! failure, plus the expected error class and notification message. The
//! vectors double as a readable table of the whole error taxonomy.

use std::sync::{Arc, Mutex};

use datagen_client::{
    ApiClient, ApiError, HttpRequest, HttpResponse, Notifier, Transport, TransportError,
};
use serde_json::Value;

/// Transport that replays one scripted outcome.
struct VectorTransport {
    outcome: Value,
}

impl Transport for VectorTransport {
    fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Some(response) = self.outcome.get("response") {
            return Ok(HttpResponse {
                status: response["status"].as_u64().unwrap() as u16,
                body: response["body"].as_str().unwrap().to_string(),
            });
        }
        let failure = &self.outcome["transport_failure"];
        let detail = failure["detail"].as_str().unwrap().to_string();
        match failure["class"].as_str().unwrap() {
            "no_response" => Err(TransportError::NoResponse(detail)),
            "request" => Err(TransportError::Request(detail)),
            other => panic!("unknown transport failure class: {other}"),
        }
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn error_pipeline_test_vectors() {
    let raw = include_str!("../test-vectors/error_cases.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expect = &case["expect"];

        let notifier = RecordingNotifier::default();
        let client = ApiClient::with_parts(
            "http://vectors.local",
            Arc::new(VectorTransport { outcome: case.clone() }),
            Arc::new(notifier.clone()),
        );

        let result = client.get("/probe");
        let messages = notifier.messages.lock().unwrap().clone();

        match expect["kind"].as_str().unwrap() {
            "success" => {
                let payload = result.unwrap_or_else(|err| panic!("{name}: unexpected error {err}"));
                let expected: Value =
                    serde_json::from_str(case["response"]["body"].as_str().unwrap()).unwrap();
                assert_eq!(payload, expected, "{name}: payload");
                assert!(messages.is_empty(), "{name}: success must not notify");
                continue;
            }
            "application" => {
                assert!(matches!(result, Err(ApiError::Application(_))), "{name}: class");
            }
            "status" => {
                let expected_status = expect["status"].as_u64().unwrap() as u16;
                match result {
                    Err(ApiError::Status { status, .. }) => {
                        assert_eq!(status, expected_status, "{name}: status")
                    }
                    other => panic!("{name}: expected status error, got {other:?}"),
                }
            }
            "no_response" => {
                assert!(matches!(result, Err(ApiError::NoResponse(_))), "{name}: class");
            }
            "request" => {
                assert!(matches!(result, Err(ApiError::Request(_))), "{name}: class");
            }
            "decode" => {
                assert!(matches!(result, Err(ApiError::Decode(_))), "{name}: class");
            }
            other => panic!("{name}: unknown expected kind {other}"),
        }

        assert_eq!(messages.len(), 1, "{name}: exactly one notification");
        if let Some(expected_message) = expect.get("notification") {
            assert_eq!(messages[0], expected_message.as_str().unwrap(), "{name}: message");
        }
    }
}
