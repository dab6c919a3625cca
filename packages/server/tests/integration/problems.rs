use serde_json::json;

use crate::common::{TestApp, routes};

mod problem_creation {
    use super::*;

    #[tokio::test]
    async fn created_problem_is_fetchable_with_zeroed_counters() {
        let app = TestApp::spawn().await;
        let id = app.create_two_sum_problem().await;

        let res = app.get(&routes::problem(&id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["title"], "Two Sum");
        assert_eq!(res.body["difficulty"], "Easy");
        assert_eq!(res.body["entry_point"], "twoSum");
        assert_eq!(res.body["total_test_cases"], 3);
        assert_eq!(res.body["total_submissions"], 0);
        assert_eq!(res.body["acceptance_rate"], 0);
        // Hidden test data never leaves the server.
        assert!(res.body.get("test_cases").is_none());
    }

    #[tokio::test]
    async fn rejects_a_problem_without_test_cases() {
        let app = TestApp::spawn().await;
        let res = app
            .post(
                routes::PROBLEMS,
                &json!({
                    "title": "Empty",
                    "description": "No cases.",
                    "difficulty": "Easy",
                    "category": "Array",
                    "test_cases": [],
                    "entry_point": "solve",
                }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn rejects_malformed_json_bodies() {
        let app = TestApp::spawn().await;
        let res = app
            .client
            .post(format!("http://{}{}", app.addr, routes::PROBLEMS))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        let res = crate::common::TestResponse::from_response(res).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
    }
}

mod problem_listing {
    use super::*;

    async fn seed_three(app: &TestApp) {
        app.create_problem(&json!({
            "title": "Two Sum",
            "description": "Indices adding to target.",
            "difficulty": "Easy",
            "category": "Array",
            "tags": ["array", "hash-table"],
            "test_cases": [{ "input": [[1], 1], "expected_output": [0] }],
            "entry_point": "twoSum",
        }))
        .await;
        app.create_problem(&json!({
            "title": "Bubble Sort",
            "description": "Sort ascending.",
            "difficulty": "Easy",
            "category": "Sorting",
            "tags": ["sorting"],
            "test_cases": [{ "input": [[2, 1]], "expected_output": [1, 2] }],
            "entry_point": "bubbleSort",
        }))
        .await;
        app.create_problem(&json!({
            "title": "Quick Sort",
            "description": "Sort ascending, quickly.",
            "difficulty": "Medium",
            "category": "Sorting",
            "tags": ["sorting", "divide-and-conquer"],
            "test_cases": [{ "input": [[2, 1]], "expected_output": [1, 2] }],
            "entry_point": "quickSort",
        }))
        .await;
    }

    #[tokio::test]
    async fn no_filters_returns_everything() {
        let app = TestApp::spawn().await;
        seed_three(&app).await;

        let res = app.get(routes::PROBLEMS).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["total"], 3);
    }

    #[tokio::test]
    async fn all_present_predicates_must_match() {
        let app = TestApp::spawn().await;
        seed_three(&app).await;

        let res = app
            .get(&format!(
                "{}?difficulty=Easy&category=Sorting",
                routes::PROBLEMS
            ))
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["total"], 1);
        assert_eq!(res.body["data"][0]["title"], "Bubble Sort");
    }

    #[tokio::test]
    async fn tags_and_search_filter_independently() {
        let app = TestApp::spawn().await;
        seed_three(&app).await;

        let by_tag = app
            .get(&format!("{}?tags=hash-table", routes::PROBLEMS))
            .await;
        assert_eq!(by_tag.body["total"], 1);
        assert_eq!(by_tag.body["data"][0]["title"], "Two Sum");

        let by_search = app.get(&format!("{}?search=quickly", routes::PROBLEMS)).await;
        assert_eq!(by_search.body["total"], 1);
        assert_eq!(by_search.body["data"][0]["title"], "Quick Sort");
    }

    #[tokio::test]
    async fn unknown_difficulty_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let res = app
            .get(&format!("{}?difficulty=Impossible", routes::PROBLEMS))
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
    }
}

mod problem_detail {
    use super::*;

    #[tokio::test]
    async fn unknown_problem_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app
            .get(&routes::problem("00000000-0000-0000-0000-000000000000"))
            .await;
        assert_eq!(res.status, 404);
        assert_eq!(res.error_code(), "NOT_FOUND");
    }
}
