use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four DISC behavioral-assessment factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscFactor {
    Dominance,
    Influence,
    Steadiness,
    Conscientiousness,
}

static ALL_FACTORS: &[DiscFactor] = &[
    DiscFactor::Dominance,
    DiscFactor::Influence,
    DiscFactor::Steadiness,
    DiscFactor::Conscientiousness,
];

impl DiscFactor {
    /// Returns the single-letter key used on the wire and in the UI.
    pub fn letter(&self) -> &'static str {
        match self {
            DiscFactor::Dominance => "D",
            DiscFactor::Influence => "I",
            DiscFactor::Steadiness => "S",
            DiscFactor::Conscientiousness => "C",
        }
    }

    /// Returns all factors in wire-key order (D, I, S, C).
    pub fn all() -> &'static [DiscFactor] {
        ALL_FACTORS
    }
}

#[mutants::skip]
impl fmt::Display for DiscFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// A validated DISC profile: one integer in `0..=100` per factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscProfile {
    #[serde(rename = "D")]
    pub dominance: u8,
    #[serde(rename = "I")]
    pub influence: u8,
    #[serde(rename = "S")]
    pub steadiness: u8,
    #[serde(rename = "C")]
    pub conscientiousness: u8,
}

impl DiscProfile {
    /// Returns the score for a factor.
    pub fn score(&self, factor: DiscFactor) -> u8 {
        match factor {
            DiscFactor::Dominance => self.dominance,
            DiscFactor::Influence => self.influence,
            DiscFactor::Steadiness => self.steadiness,
            DiscFactor::Conscientiousness => self.conscientiousness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_match_wire_keys() {
        assert_eq!(DiscFactor::Dominance.letter(), "D");
        assert_eq!(DiscFactor::Influence.letter(), "I");
        assert_eq!(DiscFactor::Steadiness.letter(), "S");
        assert_eq!(DiscFactor::Conscientiousness.letter(), "C");
    }

    #[test]
    fn all_is_in_wire_key_order() {
        let letters: Vec<&str> = DiscFactor::all().iter().map(|f| f.letter()).collect();
        assert_eq!(letters, vec!["D", "I", "S", "C"]);
    }

    #[test]
    fn display_uses_letter() {
        assert_eq!(DiscFactor::Steadiness.to_string(), "S");
    }

    #[test]
    fn score_accessor_per_factor() {
        let profile = DiscProfile {
            dominance: 10,
            influence: 20,
            steadiness: 30,
            conscientiousness: 40,
        };
        assert_eq!(profile.score(DiscFactor::Dominance), 10);
        assert_eq!(profile.score(DiscFactor::Influence), 20);
        assert_eq!(profile.score(DiscFactor::Steadiness), 30);
        assert_eq!(profile.score(DiscFactor::Conscientiousness), 40);
    }

    #[test]
    fn profile_serializes_with_letter_keys() {
        let profile = DiscProfile {
            dominance: 50,
            influence: 60,
            steadiness: 70,
            conscientiousness: 80,
        };
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"D": 50, "I": 60, "S": 70, "C": 80})
        );
    }
}
