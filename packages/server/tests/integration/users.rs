use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn registration_returns_a_zeroed_profile() {
    let app = TestApp::spawn().await;
    let res = app
        .post(routes::USERS, &json!({ "username": "coderunner24" }))
        .await;
    assert_eq!(res.status, 201);
    assert_eq!(res.body["username"], "coderunner24");
    assert_eq!(res.body["score"], 0);
    assert_eq!(res.body["problems_solved"], 0);

    let fetched = app.get(&routes::user(&res.id())).await;
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body["username"], "coderunner24");
}

#[tokio::test]
async fn duplicate_usernames_conflict() {
    let app = TestApp::spawn().await;
    app.create_user("taken").await;

    let res = app.post(routes::USERS, &json!({ "username": "taken" })).await;
    assert_eq!(res.status, 409);
    assert_eq!(res.error_code(), "USERNAME_TAKEN");
}

#[tokio::test]
async fn invalid_usernames_are_rejected() {
    let app = TestApp::spawn().await;
    for bad in ["ab", "has space", "emoji🙂"] {
        let res = app.post(routes::USERS, &json!({ "username": bad })).await;
        assert_eq!(res.status, 400, "{bad}");
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn unknown_user_lookups_are_not_found() {
    let app = TestApp::spawn().await;
    let ghost = "00000000-0000-0000-0000-000000000000";
    assert_eq!(app.get(&routes::user(ghost)).await.status, 404);
    assert_eq!(app.get(&routes::user_submissions(ghost)).await.status, 404);
    assert_eq!(app.get(&routes::user_activities(ghost)).await.status, 404);
}
