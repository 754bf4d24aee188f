//! Design constants and condition-derived counts.
//!
//! The experimental design is 2 (partner: Human/AI) × 3 (similarity: L/M/H),
//! encoded as conditions 1–6. Odd conditions are Human-partner, even are AI;
//! conditions 1,2 / 3,4 / 5,6 are low / medium / high similarity. The
//! similarity level also fixes how many of a subject's 16 trials show the
//! matching answer: 4, 8 or 12.

/// Trials per subject. Trial numbers run 1..=16 and index the question table.
pub const TRIALS_PER_SUBJECT: usize = 16;

/// Number of experimental conditions (2 partner types × 3 similarity levels).
pub const CONDITION_COUNT: usize = 6;

/// Seed used for all production schedule runs.
pub const DEFAULT_SEED: u64 = 1234;

/// Answer positions highlighted on DIFF trials.
pub const ANSWER_POSITIONS: [u8; 3] = [1, 2, 3];

/// Sentinel written to the Answer Index column on SAME trials.
pub const SAME_ANSWER_SENTINEL: &str = "Same";

/// Base question table, indexed by trial number − 1. Each entry is the topic
/// prompt shown on that trial; cohorts may override single entries (see
/// [`crate::config::CohortConfig::question_overrides`]).
pub const BASE_QUESTIONS: [&str; TRIALS_PER_SUBJECT] = [
    "favorite season",
    "social media",
    "movie genres",
    "cuisines",
    "oversea countries",
    "music genres",
    "historical figures",
    "deserted on an island",
    "a million dollars",
    "fear most",
    "qualities in friend",
    "gossip",
    "stressful things",
    "how to unwind",
    "personal qualities",
    "change about yourself",
];

/// Number of SAME trials for a subject in `condition`: 4 for low-similarity
/// conditions (1,2), 8 for medium (3,4), 12 for high (5,6).
///
/// Panics on a condition outside 1..=6 — that is a configuration bug, not a
/// runtime state.
#[inline]
pub fn same_trial_count(condition: u8) -> usize {
    match condition {
        1 | 2 => 4,
        3 | 4 => 8,
        5 | 6 => 12,
        _ => panic!("condition out of range: {}", condition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_trial_count_mapping() {
        assert_eq!(same_trial_count(1), 4);
        assert_eq!(same_trial_count(2), 4);
        assert_eq!(same_trial_count(3), 8);
        assert_eq!(same_trial_count(4), 8);
        assert_eq!(same_trial_count(5), 12);
        assert_eq!(same_trial_count(6), 12);
    }

    #[test]
    #[should_panic(expected = "condition out of range")]
    fn test_same_trial_count_rejects_zero() {
        same_trial_count(0);
    }

    #[test]
    fn test_base_questions() {
        assert_eq!(BASE_QUESTIONS.len(), TRIALS_PER_SUBJECT);
        assert_eq!(BASE_QUESTIONS[0], "favorite season");
        assert_eq!(BASE_QUESTIONS[13], "how to unwind");
        assert_eq!(BASE_QUESTIONS[15], "change about yourself");
    }
}
