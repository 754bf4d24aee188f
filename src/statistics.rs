//! Assignment statistics aggregated from a generated schedule.
//!
//! Summarizes how the randomization came out: subjects per condition and the
//! SAME/DIFF row split, alongside the seed so a schedule file can be matched
//! to its statistics. Describes the assignment only — no analysis of
//! collected experimental data happens anywhere in this crate.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::{same_trial_count, TRIALS_PER_SUBJECT};
use crate::types::{Partner, Similarity, TrialRow, TrialType};

#[derive(Serialize)]
pub struct ScheduleStatistics {
    pub cohort: String,
    pub seed: u64,
    pub num_subjects: usize,
    pub num_rows: usize,
    pub conditions: Vec<ConditionStatistics>,
}

/// Per-condition breakdown of the assignment.
#[derive(Serialize)]
pub struct ConditionStatistics {
    pub condition: u8,
    pub partner: &'static str,
    pub similarity: &'static str,
    pub num_subjects: usize,
    pub same_trials_per_subject: usize,
    pub same_rows: usize,
    pub diff_rows: usize,
}

/// Aggregate per-condition counts from a generated schedule.
pub fn aggregate_statistics(rows: &[TrialRow], cohort: &str, seed: u64) -> ScheduleStatistics {
    let mut same_rows: BTreeMap<u8, usize> = BTreeMap::new();
    let mut diff_rows: BTreeMap<u8, usize> = BTreeMap::new();
    for row in rows {
        match row.trial_type {
            TrialType::Same => *same_rows.entry(row.condition).or_default() += 1,
            TrialType::Diff => *diff_rows.entry(row.condition).or_default() += 1,
        }
    }

    let mut conditions = Vec::new();
    let mut observed: Vec<u8> = same_rows
        .keys()
        .chain(diff_rows.keys())
        .copied()
        .collect();
    observed.sort_unstable();
    observed.dedup();

    for condition in observed {
        let same = same_rows.get(&condition).copied().unwrap_or(0);
        let diff = diff_rows.get(&condition).copied().unwrap_or(0);
        conditions.push(ConditionStatistics {
            condition,
            partner: Partner::from_condition(condition).as_str(),
            similarity: Similarity::from_condition(condition).as_str(),
            num_subjects: (same + diff) / TRIALS_PER_SUBJECT,
            same_trials_per_subject: same_trial_count(condition),
            same_rows: same,
            diff_rows: diff,
        });
    }

    ScheduleStatistics {
        cohort: cohort.to_string(),
        seed,
        num_subjects: rows.len() / TRIALS_PER_SUBJECT,
        num_rows: rows.len(),
        conditions,
    }
}

/// Write statistics as pretty JSON. Fatal on failure.
pub fn save_statistics(stats: &ScheduleStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::supplemental_cohort;
    use crate::schedule::generate_schedule;

    #[test]
    fn test_aggregate_supplemental() {
        let cfg = supplemental_cohort();
        let rows = generate_schedule(&cfg, 1234);
        let stats = aggregate_statistics(&rows, cfg.name, 1234);

        assert_eq!(stats.num_subjects, 20);
        assert_eq!(stats.num_rows, 320);
        assert_eq!(stats.conditions.len(), 3);

        let by_cond: BTreeMap<u8, &ConditionStatistics> =
            stats.conditions.iter().map(|c| (c.condition, c)).collect();
        assert_eq!(by_cond[&1].num_subjects, 8);
        assert_eq!(by_cond[&3].num_subjects, 6);
        assert_eq!(by_cond[&5].num_subjects, 6);

        // SAME rows are exact: subjects × per-subject SAME count.
        assert_eq!(by_cond[&1].same_rows, 8 * 4);
        assert_eq!(by_cond[&3].same_rows, 6 * 8);
        assert_eq!(by_cond[&5].same_rows, 6 * 12);
        assert_eq!(by_cond[&5].diff_rows, 6 * 4);

        for c in stats.conditions.iter() {
            assert_eq!(c.partner, "Human");
        }
    }
}
