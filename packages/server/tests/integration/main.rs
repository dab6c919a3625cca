mod common;

mod activities;
mod contests;
mod execute;
mod leaderboard;
mod problems;
mod users;
