//! Search behavior tests.

mod common;

#[path = "search/ranking.rs"]
mod ranking;

#[path = "search/structured_query.rs"]
mod structured_query;

#[path = "search/edge_cases.rs"]
mod edge_cases;

#[path = "search/determinism.rs"]
mod determinism;
