use crate::common::{TestApp, routes};

#[tokio::test]
async fn feed_is_most_recent_first() {
    let app = TestApp::spawn().await;
    let user = app.create_user("busy").await;
    let problem = app.create_two_sum_problem().await;
    app.submit(&user, &problem, "javascript", "__solve_two_sum")
        .await;

    let res = app.get(routes::ACTIVITIES).await;
    assert_eq!(res.status, 200);
    let feed = res.body.as_array().unwrap();
    assert_eq!(feed.len(), 2);
    // The solve lands after the submit.
    assert_eq!(feed[0]["kind"], "problem_solved");
    assert_eq!(feed[1]["kind"], "submission_made");
    assert!(
        feed[0]["description"]
            .as_str()
            .unwrap()
            .contains("busy solved Two Sum")
    );
}

#[tokio::test]
async fn limit_bounds_the_feed() {
    let app = TestApp::spawn().await;
    let user = app.create_user("prolific").await;
    let problem = app.create_two_sum_problem().await;
    for _ in 0..3 {
        app.submit(&user, &problem, "javascript", "__throw").await;
    }

    let res = app.get(&format!("{}?limit=2", routes::ACTIVITIES)).await;
    assert_eq!(res.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn failed_submissions_produce_no_solve_entry() {
    let app = TestApp::spawn().await;
    let user = app.create_user("unlucky").await;
    let problem = app.create_two_sum_problem().await;
    app.submit(&user, &problem, "javascript", "__throw").await;

    let res = app.get(&routes::user_activities(&user)).await;
    let feed = res.body.as_array().unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["kind"], "submission_made");
}
