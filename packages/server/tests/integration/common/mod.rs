use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use common::Outcome;
use judge::{ResourceLimits, Runner, RunnerRegistry};
use server::config::{AppConfig, CorsConfig, JudgeConfig, ScoringConfig, ServerConfig};
use server::seed::seed_sample_data;
use server::state::AppState;

pub mod routes {
    pub const PROBLEMS: &str = "/api/v1/problems";
    pub const EXECUTE: &str = "/api/v1/execute";
    pub const SUBMISSIONS: &str = "/api/v1/submissions";
    pub const USERS: &str = "/api/v1/users";
    pub const LEADERBOARD: &str = "/api/v1/leaderboard";
    pub const ACTIVITIES: &str = "/api/v1/activities";
    pub const CONTESTS: &str = "/api/v1/contests";
    pub const CONTESTS_ACTIVE: &str = "/api/v1/contests/active";

    pub fn problem(id: &str) -> String {
        format!("/api/v1/problems/{id}")
    }

    pub fn submission(id: &str) -> String {
        format!("/api/v1/submissions/{id}")
    }

    pub fn user(id: &str) -> String {
        format!("/api/v1/users/{id}")
    }

    pub fn user_submissions(id: &str) -> String {
        format!("/api/v1/users/{id}/submissions")
    }

    pub fn user_activities(id: &str) -> String {
        format!("/api/v1/users/{id}/activities")
    }

    pub fn contest_join(id: &str) -> String {
        format!("/api/v1/contests/{id}/join")
    }
}

/// Wall-clock limit used by the test judge; keeps timeout scenarios fast.
pub const TEST_TIME_LIMIT_MS: u64 = 300;

/// A deterministic stand-in for the JavaScript runner. The submitted code
/// selects a behavior via a marker substring, and per-case behavior can be
/// driven by a string directive in the input's first element.
struct ScriptedRunner;

#[async_trait]
impl Runner for ScriptedRunner {
    fn language(&self) -> &str {
        "javascript"
    }

    async fn execute(
        &self,
        code: &str,
        _entry_point: &str,
        input: &Value,
        limits: &ResourceLimits,
    ) -> Outcome {
        if let Some(directive) = input.get(0).and_then(Value::as_str) {
            match directive {
                "spin" => {
                    tokio::time::sleep(limits.wall_time).await;
                    return Outcome::Timeout;
                }
                "boom" => return Outcome::RuntimeError("Error: boom".to_string()),
                _ => {}
            }
        }
        if code.contains("__bad_syntax") {
            return Outcome::CompileError("SyntaxError: unexpected token".to_string());
        }
        if code.contains("__throw") {
            return Outcome::RuntimeError("Error: boom".to_string());
        }
        if code.contains("__spin") {
            tokio::time::sleep(limits.wall_time).await;
            return Outcome::Timeout;
        }
        if code.contains("__solve_two_sum") {
            return two_sum(input, false);
        }
        if code.contains("__reverse_two_sum") {
            return two_sum(input, true);
        }
        if code.contains("__sort") {
            let Some(mut values) = input
                .get(0)
                .and_then(Value::as_array)
                .map(|a| a.iter().filter_map(Value::as_i64).collect::<Vec<_>>())
            else {
                return Outcome::RuntimeError("TypeError: expected an array".to_string());
            };
            values.sort_unstable();
            return Outcome::Value(json!(values));
        }
        Outcome::RuntimeError("TypeError: entry is not a function".to_string())
    }
}

fn two_sum(input: &Value, reversed: bool) -> Outcome {
    let (Some(nums), Some(target)) = (
        input.get(0).and_then(Value::as_array),
        input.get(1).and_then(Value::as_i64),
    ) else {
        return Outcome::RuntimeError("TypeError: bad arguments".to_string());
    };
    let nums: Vec<i64> = nums.iter().filter_map(Value::as_i64).collect();
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if nums[i] + nums[j] == target {
                let pair = if reversed { json!([j, i]) } else { json!([i, j]) };
                return Outcome::Value(pair);
            }
        }
    }
    Outcome::RuntimeError("Error: no solution".to_string())
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsConfig {
                allow_origins: vec![],
                max_age: 3600,
            },
        },
        judge: JudgeConfig {
            time_limit_ms: TEST_TIME_LIMIT_MS,
            memory_limit_kb: 1_048_576,
            max_code_bytes: 65_536,
            node_bin: "node".to_string(),
            python_bin: "python3".to_string(),
        },
        scoring: ScoringConfig { accepted_award: 10 },
    }
}

/// A running test server backed by the scripted runner.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_inner(false).await
    }

    /// Server with the sample data loaded, as in production startup.
    pub async fn spawn_seeded() -> Self {
        Self::spawn_inner(true).await
    }

    async fn spawn_inner(seeded: bool) -> Self {
        let mut registry = RunnerRegistry::new();
        registry.register(Arc::new(ScriptedRunner));
        let state = AppState::with_registry(test_config(), registry);
        if seeded {
            seed_sample_data(&state.stores);
        }

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");
        TestResponse::from_response(res).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");
        TestResponse::from_response(res).await
    }

    /// Register a user via the API and return their id.
    pub async fn create_user(&self, username: &str) -> String {
        let res = self
            .post(routes::USERS, &json!({ "username": username }))
            .await;
        assert_eq!(res.status, 201, "create_user failed: {}", res.text);
        res.id()
    }

    /// Create the stock two-sum problem via the API and return its id.
    pub async fn create_two_sum_problem(&self) -> String {
        self.create_problem(&json!({
            "title": "Two Sum",
            "description": "Return indices of the two numbers adding to target.",
            "difficulty": "Easy",
            "category": "Array",
            "tags": ["array", "hash-table"],
            "test_cases": [
                { "input": [[2, 7, 11, 15], 9], "expected_output": [0, 1] },
                { "input": [[3, 2, 4], 6], "expected_output": [1, 2] },
                { "input": [[3, 3], 6], "expected_output": [0, 1] },
            ],
            "entry_point": "twoSum",
        }))
        .await
    }

    /// Create a problem from a JSON payload and return its id.
    pub async fn create_problem(&self, payload: &Value) -> String {
        let res = self.post(routes::PROBLEMS, payload).await;
        assert_eq!(res.status, 201, "create_problem failed: {}", res.text);
        res.id()
    }

    /// Submit code and return the judged response.
    pub async fn submit(
        &self,
        user_id: &str,
        problem_id: &str,
        language: &str,
        code: &str,
    ) -> TestResponse {
        self.post(
            routes::SUBMISSIONS,
            &json!({
                "user_id": user_id,
                "problem_id": problem_id,
                "language": language,
                "code": code,
            }),
        )
        .await
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .expect("response body should contain 'id'")
            .to_string()
    }

    pub fn error_code(&self) -> &str {
        self.body["code"].as_str().unwrap_or_default()
    }
}
