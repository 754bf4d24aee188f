//! Cohort configuration: subject ranges, condition pools, question tables.
//!
//! The study ran in two batches. The first covered subjects 1–180 with 30
//! subjects in each of the six conditions. Too many of those participants
//! had to be excluded, so a supplemental batch covered subjects 181–200,
//! backfilling only the Human-partner conditions (8 in condition 1, 6 each
//! in 3 and 5) and swapping the trial-14 prompt. Both batches are expressed
//! as [`CohortConfig`] values consumed by one generator.

use crate::constants::{BASE_QUESTIONS, CONDITION_COUNT, TRIALS_PER_SUBJECT};

/// Parameters for one cohort run.
pub struct CohortConfig {
    pub name: &'static str,
    /// First subject id; ids are contiguous from here.
    pub first_subject: u32,
    /// Subjects per condition; index c holds the count for condition c+1.
    pub condition_counts: [usize; CONDITION_COUNT],
    /// (trial number, prompt) pairs replacing entries of the base table.
    pub question_overrides: &'static [(u8, &'static str)],
    /// Schedule filename under the output directory.
    pub output_file: &'static str,
}

impl CohortConfig {
    /// Total subjects in this cohort.
    pub fn subject_count(&self) -> usize {
        self.condition_counts.iter().sum()
    }

    /// Total rows the generated schedule will contain.
    pub fn row_count(&self) -> usize {
        self.subject_count() * TRIALS_PER_SUBJECT
    }

    /// Contiguous subject ids, one per pool entry.
    pub fn subject_ids(&self) -> std::ops::Range<u32> {
        self.first_subject..self.first_subject + self.subject_count() as u32
    }

    /// Condition pool before shuffling: condition c repeated
    /// `condition_counts[c-1]` times, in condition order.
    pub fn condition_pool(&self) -> Vec<u8> {
        let mut pool = Vec::with_capacity(self.subject_count());
        for (i, &count) in self.condition_counts.iter().enumerate() {
            pool.extend(std::iter::repeat(i as u8 + 1).take(count));
        }
        pool
    }

    /// Question table for this cohort: the base table with overrides applied.
    ///
    /// Panics if an override names a trial outside 1..=16 — a configuration
    /// bug, caught before any schedule is produced.
    pub fn question_table(&self) -> [&'static str; TRIALS_PER_SUBJECT] {
        let mut table = BASE_QUESTIONS;
        for &(trial, prompt) in self.question_overrides {
            assert!(
                (1..=TRIALS_PER_SUBJECT as u8).contains(&trial),
                "question override for invalid trial number {}",
                trial
            );
            table[trial as usize - 1] = prompt;
        }
        table
    }
}

/// First batch: subjects 1–180, 30 per condition, base question table.
pub fn primary_cohort() -> CohortConfig {
    CohortConfig {
        name: "primary",
        first_subject: 1,
        condition_counts: [30; CONDITION_COUNT],
        question_overrides: &[],
        output_file: "randomized_trials.csv",
    }
}

/// Supplemental batch: subjects 181–200, Human-partner conditions only
/// (8 × cond 1, 6 × cond 3, 6 × cond 5), trial 14 asks about political
/// positions instead of unwinding.
pub fn supplemental_cohort() -> CohortConfig {
    CohortConfig {
        name: "supplemental",
        first_subject: 181,
        condition_counts: [8, 0, 6, 0, 6, 0],
        question_overrides: &[(14, "political positions")],
        output_file: "randomized_trials_ss181_to_ss200.csv",
    }
}

/// Look up a built-in cohort by name.
pub fn cohort_by_name(name: &str) -> Option<CohortConfig> {
    match name {
        "primary" => Some(primary_cohort()),
        "supplemental" => Some(supplemental_cohort()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_cohort_shape() {
        let cfg = primary_cohort();
        assert_eq!(cfg.subject_count(), 180);
        assert_eq!(cfg.row_count(), 2880);
        assert_eq!(cfg.subject_ids(), 1..181);

        let pool = cfg.condition_pool();
        assert_eq!(pool.len(), 180);
        for c in 1..=6u8 {
            assert_eq!(pool.iter().filter(|&&x| x == c).count(), 30);
        }
    }

    #[test]
    fn test_supplemental_cohort_shape() {
        let cfg = supplemental_cohort();
        assert_eq!(cfg.subject_count(), 20);
        assert_eq!(cfg.subject_ids(), 181..201);

        let pool = cfg.condition_pool();
        assert_eq!(pool.iter().filter(|&&x| x == 1).count(), 8);
        assert_eq!(pool.iter().filter(|&&x| x == 3).count(), 6);
        assert_eq!(pool.iter().filter(|&&x| x == 5).count(), 6);
        assert!(pool.iter().all(|&x| x == 1 || x == 3 || x == 5));
    }

    #[test]
    fn test_question_override_applies() {
        let base = primary_cohort().question_table();
        let supp = supplemental_cohort().question_table();
        assert_eq!(base[0], supp[0]);
        assert_eq!(base[13], "how to unwind");
        assert_eq!(supp[13], "political positions");
    }

    #[test]
    fn test_cohort_by_name() {
        assert_eq!(cohort_by_name("primary").unwrap().first_subject, 1);
        assert_eq!(cohort_by_name("supplemental").unwrap().first_subject, 181);
        assert!(cohort_by_name("pilot").is_none());
    }
}
