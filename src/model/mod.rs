mod disc;
mod request;
mod validation;

pub use disc::{DiscFactor, DiscProfile};
pub use request::{AllocationRequest, SubmissionDraft};
pub use validation::{ValidationError, parse_score};
