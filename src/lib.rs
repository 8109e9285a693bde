#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! DISC-profile task allocation TUI client.
//!
//! Collects a name, four DISC scores, a task, and a deadline; validates
//! them; submits them to the allocation endpoint; and shows the returned
//! allocation text or an error.

pub mod api;
pub mod logging;
pub mod model;
pub mod tui;
