//! Condition assignment and subject/trial indexing.
//!
//! Produces the three aligned per-row sequences the assembler zips together:
//! shuffled conditions (one condition per subject, each repeated 16×),
//! subject ids (each repeated 16× consecutively) and trial numbers (1..=16
//! per subject). Only the condition sequence consumes randomness.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::config::CohortConfig;
use crate::constants::TRIALS_PER_SUBJECT;

/// Shuffle the cohort's condition pool and expand each entry to one row per
/// trial. Element `i * 16 + t` is the condition of the cohort's `i`-th
/// subject — random assignment of subjects to conditions happens here.
pub fn assign_conditions(config: &CohortConfig, rng: &mut SmallRng) -> Vec<u8> {
    let mut pool = config.condition_pool();
    pool.shuffle(rng);

    let mut conditions = Vec::with_capacity(pool.len() * TRIALS_PER_SUBJECT);
    for condition in pool {
        conditions.extend(std::iter::repeat(condition).take(TRIALS_PER_SUBJECT));
    }
    conditions
}

/// Per-row subject ids: each id from the cohort's contiguous range repeated
/// 16× consecutively, aligned with [`assign_conditions`] output.
pub fn subject_ids(config: &CohortConfig) -> Vec<u32> {
    let mut subjects = Vec::with_capacity(config.row_count());
    for id in config.subject_ids() {
        subjects.extend(std::iter::repeat(id).take(TRIALS_PER_SUBJECT));
    }
    subjects
}

/// Per-row trial numbers: 1..=16 repeated once per subject.
pub fn trial_numbers(num_subjects: usize) -> Vec<u8> {
    let mut trials = Vec::with_capacity(num_subjects * TRIALS_PER_SUBJECT);
    for _ in 0..num_subjects {
        trials.extend(1..=TRIALS_PER_SUBJECT as u8);
    }
    trials
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::primary_cohort;
    use rand::SeedableRng;

    #[test]
    fn test_assign_conditions_shape() {
        let cfg = primary_cohort();
        let mut rng = SmallRng::seed_from_u64(7);
        let conditions = assign_conditions(&cfg, &mut rng);

        assert_eq!(conditions.len(), cfg.row_count());
        // Constant within each subject's block of 16.
        for block in conditions.chunks(TRIALS_PER_SUBJECT) {
            assert!(block.iter().all(|&c| c == block[0]));
        }
        // Shuffling preserves the pool multiset.
        for c in 1..=6u8 {
            let per_subject = conditions.iter().filter(|&&x| x == c).count() / TRIALS_PER_SUBJECT;
            assert_eq!(per_subject, 30);
        }
    }

    #[test]
    fn test_assign_conditions_deterministic() {
        let cfg = primary_cohort();
        let mut rng1 = SmallRng::seed_from_u64(42);
        let mut rng2 = SmallRng::seed_from_u64(42);
        assert_eq!(
            assign_conditions(&cfg, &mut rng1),
            assign_conditions(&cfg, &mut rng2)
        );
    }

    #[test]
    fn test_subject_ids_contiguous_blocks() {
        let cfg = primary_cohort();
        let subjects = subject_ids(&cfg);
        assert_eq!(subjects.len(), 2880);
        assert_eq!(subjects[0], 1);
        assert_eq!(subjects[15], 1);
        assert_eq!(subjects[16], 2);
        assert_eq!(*subjects.last().unwrap(), 180);
    }

    #[test]
    fn test_trial_numbers_cycle() {
        let trials = trial_numbers(3);
        assert_eq!(trials.len(), 48);
        assert_eq!(trials[0], 1);
        assert_eq!(trials[15], 16);
        assert_eq!(trials[16], 1);
        assert_eq!(trials[47], 16);
    }
}
