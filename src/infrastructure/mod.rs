pub mod repo_activity;
pub mod seed;
