use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn returns_the_raw_output_without_recording_anything() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::EXECUTE,
            &json!({
                "code": "__solve_two_sum",
                "language": "javascript",
                "input": [[2, 7, 11, 15], 9],
                "entry_point": "twoSum",
            }),
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["output"], json!([0, 1]));
    assert_eq!(res.body["error"], json!(null));
    assert!(res.body["runtime_ms"].is_u64());

    // A run is not a submission.
    let feed = app.get(routes::ACTIVITIES).await;
    assert_eq!(feed.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn failures_come_back_as_errors_not_http_failures() {
    let app = TestApp::spawn().await;

    let threw = app
        .post(
            routes::EXECUTE,
            &json!({
                "code": "__throw",
                "language": "javascript",
                "input": [1],
                "entry_point": "solve",
            }),
        )
        .await;
    assert_eq!(threw.status, 200);
    assert_eq!(threw.body["output"], json!(null));
    assert_eq!(threw.body["error"], "Error: boom");

    let hung = app
        .post(
            routes::EXECUTE,
            &json!({
                "code": "anything",
                "language": "javascript",
                "input": ["spin"],
                "entry_point": "solve",
            }),
        )
        .await;
    assert_eq!(hung.status, 200);
    assert_eq!(hung.body["error"], "Time limit exceeded");

    let polyglot = app
        .post(
            routes::EXECUTE,
            &json!({
                "code": "DISPLAY 'hi'",
                "language": "cobol",
                "input": [1],
                "entry_point": "solve",
            }),
        )
        .await;
    assert_eq!(polyglot.status, 200);
    assert_eq!(polyglot.body["error"], "Language not supported");
}

#[tokio::test]
async fn rejects_bad_payloads_before_running() {
    let app = TestApp::spawn().await;

    let empty = app
        .post(
            routes::EXECUTE,
            &json!({
                "code": "   ",
                "language": "javascript",
                "input": [1],
                "entry_point": "solve",
            }),
        )
        .await;
    assert_eq!(empty.status, 400);
    assert_eq!(empty.error_code(), "VALIDATION_ERROR");

    let scalar_input = app
        .post(
            routes::EXECUTE,
            &json!({
                "code": "__solve_two_sum",
                "language": "javascript",
                "input": 9,
                "entry_point": "twoSum",
            }),
        )
        .await;
    assert_eq!(scalar_input.status, 400);
    assert_eq!(scalar_input.error_code(), "VALIDATION_ERROR");
}
