//! Application layer orchestrating the engines for a single session.
//!
//! `Session` stands in for the view layer: it owns the state store, feeds user
//! actions to the savings and quiz engines, and builds the end-of-session report.

pub mod report;
pub mod session;
