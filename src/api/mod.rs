//! Allocation endpoint client (HTTP/JSON).
//!
//! One request shape (`POST /allocate`), two reply shapes: `{"allocation"}`
//! on success, `{"error"}` for a business failure. Anything else is a
//! transport-level problem.

mod client;
mod error;

pub use client::{AllocationClient, DEFAULT_SERVER_URL, SERVER_URL_ENV};
pub use error::ApiError;
