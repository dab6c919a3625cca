use crate::common::{TestApp, routes};

#[tokio::test]
async fn ranks_by_score_descending() {
    let app = TestApp::spawn().await;
    let problem = app.create_two_sum_problem().await;
    let ace = app.create_user("ace").await;
    let mid = app.create_user("mid").await;
    app.create_user("idle").await;

    app.submit(&ace, &problem, "javascript", "__solve_two_sum")
        .await;
    app.submit(&ace, &problem, "javascript", "__solve_two_sum")
        .await;
    app.submit(&mid, &problem, "javascript", "__solve_two_sum")
        .await;

    let res = app.get(routes::LEADERBOARD).await;
    assert_eq!(res.status, 200);
    let entries = res.body.as_array().unwrap();
    assert_eq!(entries[0]["username"], "ace");
    assert_eq!(entries[0]["score"], 20);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[1]["username"], "mid");
    assert_eq!(entries[2]["username"], "idle");
    assert_eq!(entries[2]["score"], 0);
}

#[tokio::test]
async fn equal_scores_rank_the_earlier_registration_first() {
    let app = TestApp::spawn_seeded().await;

    // The sample data carries two users tied on score.
    let res = app.get(routes::LEADERBOARD).await;
    let entries = res.body.as_array().unwrap();
    assert_eq!(entries[0]["username"], "coderunner24");
    assert_eq!(entries[1]["username"], "User123");
    assert_eq!(entries[0]["score"], entries[1]["score"]);

    // Two reads of unchanged data agree.
    let again = app.get(routes::LEADERBOARD).await;
    assert_eq!(res.body, again.body);
}

#[tokio::test]
async fn limit_bounds_the_ranking() {
    let app = TestApp::spawn_seeded().await;
    let res = app.get(&format!("{}?limit=2", routes::LEADERBOARD)).await;
    assert_eq!(res.body.as_array().unwrap().len(), 2);
}
