use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn sample_contest_is_listed_and_active() {
    let app = TestApp::spawn_seeded().await;

    let listed = app.get(routes::CONTESTS).await;
    assert_eq!(listed.status, 200);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let active = app.get(routes::CONTESTS_ACTIVE).await;
    assert_eq!(active.status, 200);
    assert_eq!(active.body["title"], "Weekly Contest 1");
    assert_eq!(active.body["participant_count"], 0);
}

#[tokio::test]
async fn joining_twice_registers_once() {
    let app = TestApp::spawn_seeded().await;
    let user = app.create_user("joiner").await;
    let contest = app.get(routes::CONTESTS_ACTIVE).await.id();

    let first = app
        .post(&routes::contest_join(&contest), &json!({ "user_id": user }))
        .await;
    assert_eq!(first.status, 200);
    assert_eq!(first.body["participant_count"], 1);

    let second = app
        .post(&routes::contest_join(&contest), &json!({ "user_id": user }))
        .await;
    assert_eq!(second.status, 200);
    assert_eq!(second.body["participant_count"], 1);

    // One join, one activity entry.
    let feed = app.get(&routes::user_activities(&user)).await;
    assert_eq!(feed.body.as_array().unwrap().len(), 1);
    assert_eq!(feed.body[0]["kind"], "contest_joined");
}

#[tokio::test]
async fn joining_requires_existing_contest_and_user() {
    let app = TestApp::spawn_seeded().await;
    let user = app.create_user("lost").await;
    let ghost = "00000000-0000-0000-0000-000000000000";

    let no_contest = app
        .post(&routes::contest_join(ghost), &json!({ "user_id": user }))
        .await;
    assert_eq!(no_contest.status, 404);

    let contest = app.get(routes::CONTESTS_ACTIVE).await.id();
    let no_user = app
        .post(&routes::contest_join(&contest), &json!({ "user_id": ghost }))
        .await;
    assert_eq!(no_user.status, 404);
}

#[tokio::test]
async fn no_active_contest_is_not_found() {
    let app = TestApp::spawn().await;
    let res = app.get(routes::CONTESTS_ACTIVE).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.error_code(), "NOT_FOUND");
}
