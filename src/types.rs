//! Core row type and condition-derived labels.
//!
//! A schedule is a flat `Vec<TrialRow>`, one row per (subject, trial). The
//! Partner and Similarity labels are total functions of the condition and are
//! never assigned independently; conditions outside 1..=6 panic.

use std::fmt;

/// Partner type shown to the subject. Odd conditions (1,3,5) pair with a
/// human, even conditions (2,4,6) with an AI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Partner {
    Human,
    Ai,
}

impl Partner {
    #[inline]
    pub fn from_condition(condition: u8) -> Self {
        match condition {
            1 | 3 | 5 => Partner::Human,
            2 | 4 | 6 => Partner::Ai,
            _ => panic!("condition out of range: {}", condition),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Partner::Human => "Human",
            Partner::Ai => "AI",
        }
    }
}

/// Similarity manipulation level: conditions 1,2 → low, 3,4 → medium,
/// 5,6 → high.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Similarity {
    Low,
    Medium,
    High,
}

impl Similarity {
    #[inline]
    pub fn from_condition(condition: u8) -> Self {
        match condition {
            1 | 2 => Similarity::Low,
            3 | 4 => Similarity::Medium,
            5 | 6 => Similarity::High,
            _ => panic!("condition out of range: {}", condition),
        }
    }

    /// Single-letter label used in the exported table.
    pub fn as_str(self) -> &'static str {
        match self {
            Similarity::Low => "L",
            Similarity::Medium => "M",
            Similarity::High => "H",
        }
    }
}

/// Whether the partner's answer on this trial matches the subject's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrialType {
    Same,
    Diff,
}

impl TrialType {
    pub fn as_str(self) -> &'static str {
        match self {
            TrialType::Same => "SAME",
            TrialType::Diff => "DIFF",
        }
    }
}

/// Answer position for a DIFF trial, or the SAME sentinel.
///
/// DIFF trials carry one of the three answer positions; SAME trials have no
/// position and export as the literal string `Same`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerIndex {
    Position(u8),
    Same,
}

impl fmt::Display for AnswerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerIndex::Position(p) => write!(f, "{}", p),
            AnswerIndex::Same => write!(f, "{}", crate::constants::SAME_ANSWER_SENTINEL),
        }
    }
}

/// One trial of one subject — a single line of the exported schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialRow {
    pub subject: u32,
    /// Experimental condition 1..=6, constant across a subject's 16 rows.
    pub condition: u8,
    /// Trial number 1..=16, unique within a subject.
    pub trial_number: u8,
    pub trial_question: &'static str,
    pub partner: Partner,
    pub similarity: Similarity,
    pub trial_type: TrialType,
    pub answer_index: AnswerIndex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_from_condition() {
        for c in [1, 3, 5] {
            assert_eq!(Partner::from_condition(c), Partner::Human);
        }
        for c in [2, 4, 6] {
            assert_eq!(Partner::from_condition(c), Partner::Ai);
        }
    }

    #[test]
    fn test_similarity_from_condition() {
        assert_eq!(Similarity::from_condition(1), Similarity::Low);
        assert_eq!(Similarity::from_condition(2), Similarity::Low);
        assert_eq!(Similarity::from_condition(3), Similarity::Medium);
        assert_eq!(Similarity::from_condition(4), Similarity::Medium);
        assert_eq!(Similarity::from_condition(5), Similarity::High);
        assert_eq!(Similarity::from_condition(6), Similarity::High);
    }

    #[test]
    #[should_panic(expected = "condition out of range")]
    fn test_partner_rejects_out_of_range() {
        Partner::from_condition(7);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Partner::Human.as_str(), "Human");
        assert_eq!(Partner::Ai.as_str(), "AI");
        assert_eq!(Similarity::Low.as_str(), "L");
        assert_eq!(Similarity::Medium.as_str(), "M");
        assert_eq!(Similarity::High.as_str(), "H");
        assert_eq!(TrialType::Same.as_str(), "SAME");
        assert_eq!(TrialType::Diff.as_str(), "DIFF");
    }

    #[test]
    fn test_answer_index_display() {
        assert_eq!(AnswerIndex::Position(2).to_string(), "2");
        assert_eq!(AnswerIndex::Same.to_string(), "Same");
    }
}
