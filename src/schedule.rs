//! Schedule assembly: the full generation pipeline for one cohort.
//!
//! [`generate_schedule`] seeds one `SmallRng` and runs the stages in their
//! fixed order: condition shuffle, row assembly with derived labels,
//! per-subject SAME draws, per-row answer draws. Reordering any of these
//! changes the output for a given seed — the draw order is part of the
//! reproducibility contract, so all stages share the one rng handle.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::assignment::{assign_conditions, subject_ids, trial_numbers};
use crate::config::CohortConfig;
use crate::sampling::{draw_answer_indices, mark_same_trials};
use crate::types::{AnswerIndex, Partner, Similarity, TrialRow, TrialType};

/// Generate the complete schedule for one cohort with the given seed.
pub fn generate_schedule(config: &CohortConfig, seed: u64) -> Vec<TrialRow> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let conditions = assign_conditions(config, &mut rng);
    let subjects = subject_ids(config);
    let trials = trial_numbers(config.subject_count());

    let mut rows = assemble_rows(config, &conditions, &subjects, &trials);
    mark_same_trials(&mut rows, &mut rng);
    draw_answer_indices(&mut rows, &mut rng);
    rows
}

/// Zip the three aligned sequences into rows and derive the question,
/// partner and similarity columns. Trial type and answer index are filled
/// by the samplers afterwards.
///
/// Panics if the sequences are misaligned — a pool whose size does not match
/// the cohort's subject count would silently shear every downstream column,
/// so the run aborts instead.
fn assemble_rows(
    config: &CohortConfig,
    conditions: &[u8],
    subjects: &[u32],
    trials: &[u8],
) -> Vec<TrialRow> {
    let expected = config.row_count();
    assert_eq!(conditions.len(), expected, "condition sequence misaligned");
    assert_eq!(subjects.len(), expected, "subject sequence misaligned");
    assert_eq!(trials.len(), expected, "trial sequence misaligned");

    let questions = config.question_table();

    let mut rows = Vec::with_capacity(expected);
    for i in 0..expected {
        let condition = conditions[i];
        let trial_number = trials[i];
        rows.push(TrialRow {
            subject: subjects[i],
            condition,
            trial_number,
            trial_question: questions[trial_number as usize - 1],
            partner: Partner::from_condition(condition),
            similarity: Similarity::from_condition(condition),
            trial_type: TrialType::Diff,
            answer_index: AnswerIndex::Same,
        });
    }
    rows
}
