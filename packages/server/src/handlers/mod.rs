pub mod activity;
pub mod contest;
pub mod execute;
pub mod leaderboard;
pub mod problem;
pub mod submission;
pub mod user;
