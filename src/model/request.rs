use serde::{Deserialize, Serialize};

use super::disc::{DiscFactor, DiscProfile};
use super::validation::{ValidationError, parse_score};

/// Raw form input, borrowed from the entry screen, awaiting validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionDraft<'a> {
    pub name: &'a str,
    pub task: &'a str,
    pub deadline: &'a str,
    /// Raw score inputs in D, I, S, C order.
    pub scores: [&'a str; 4],
}

impl SubmissionDraft<'_> {
    /// Validates the draft and builds the request to send.
    ///
    /// Presence of name, task, and deadline is checked first (one error
    /// covering all three), then each score in D, I, S, C order,
    /// short-circuiting on the first invalid one.
    pub fn validate(&self) -> Result<AllocationRequest, ValidationError> {
        if self.name.is_empty() || self.task.is_empty() || self.deadline.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let mut parsed = [0u8; 4];
        for (slot, (&factor, raw)) in parsed
            .iter_mut()
            .zip(DiscFactor::all().iter().zip(self.scores))
        {
            *slot = parse_score(factor, raw)?;
        }
        let [dominance, influence, steadiness, conscientiousness] = parsed;

        Ok(AllocationRequest {
            name: self.name.to_string(),
            disc_scores: DiscProfile {
                dominance,
                influence,
                steadiness,
                conscientiousness,
            },
            task: self.task.to_string(),
            deadline: self.deadline.to_string(),
        })
    }
}

/// The body of `POST /allocate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub name: String,
    #[serde(rename = "discScores")]
    pub disc_scores: DiscProfile,
    pub task: String,
    pub deadline: String,
}
