//! Same/diff subset sampling and answer-position draws.
//!
//! Both samplers mutate a fully assembled row table in place. The SAME draw
//! is grouped per subject; the answer draw is independent per row. Draw
//! order matters for reproducibility: [`mark_same_trials`] walks subjects in
//! increasing id order, [`draw_answer_indices`] walks rows in table order.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::seq::index;
use rand::Rng;

use crate::constants::{same_trial_count, ANSWER_POSITIONS, TRIALS_PER_SUBJECT};
use crate::types::{AnswerIndex, TrialRow, TrialType};

/// For each subject, draw a condition-sized subset of its 16 trial numbers
/// without replacement and mark those rows SAME, all others DIFF.
///
/// Rows are partitioned by subject in a single pass; the BTreeMap keeps the
/// per-subject draws in increasing subject order regardless of row layout.
/// Every k-subset of a subject's trials is equally likely.
pub fn mark_same_trials(rows: &mut [TrialRow], rng: &mut SmallRng) {
    let mut by_subject: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (i, row) in rows.iter().enumerate() {
        by_subject.entry(row.subject).or_default().push(i);
    }

    for indices in by_subject.values() {
        assert_eq!(
            indices.len(),
            TRIALS_PER_SUBJECT,
            "subject {} has {} rows",
            rows[indices[0]].subject,
            indices.len()
        );
        let condition = rows[indices[0]].condition;
        let k = same_trial_count(condition);

        // Drawn values are 0-based trial offsets; trial numbers are 1-based.
        let mut same = [false; TRIALS_PER_SUBJECT];
        for offset in index::sample(rng, TRIALS_PER_SUBJECT, k) {
            same[offset] = true;
        }

        for &i in indices {
            let row = &mut rows[i];
            row.trial_type = if same[row.trial_number as usize - 1] {
                TrialType::Same
            } else {
                TrialType::Diff
            };
        }
    }
}

/// Draw one answer position uniformly from [`ANSWER_POSITIONS`] for every
/// DIFF row; SAME rows get the sentinel. Each row's draw is independent, in
/// table order.
pub fn draw_answer_indices(rows: &mut [TrialRow], rng: &mut SmallRng) {
    for row in rows.iter_mut() {
        row.answer_index = match row.trial_type {
            TrialType::Diff => {
                AnswerIndex::Position(ANSWER_POSITIONS[rng.random_range(0..ANSWER_POSITIONS.len())])
            }
            TrialType::Same => AnswerIndex::Same,
        };
    }
}
