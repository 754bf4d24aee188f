//! # Trialgen — randomized trial schedules for the partner-similarity study
//!
//! Generates the master trial sheet for a human-subjects study comparing
//! perceived similarity to a "Human" versus an "AI" conversation partner.
//! Each subject is randomly assigned to one of six conditions (partner type
//! × similarity level) and expanded to sixteen trials; within each subject a
//! condition-dependent subset of trials is marked SAME (partner gives the
//! matching answer) and the rest DIFF, with a random answer position drawn
//! for every DIFF trial.
//!
//! ## Pipeline
//!
//! One sequential pass per cohort, driven by [`schedule::generate_schedule`]:
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | 1 | [`assignment`] | Shuffle the cohort's condition pool, expand each entry to 16 rows |
//! | 2 | [`assignment`] | Aligned subject-id and trial-number sequences |
//! | 3 | [`schedule`] | Assemble rows; derive question, partner, similarity |
//! | 4 | [`sampling`] | Per-subject SAME-subset draw (4/8/12 of 16 by condition) |
//! | 5 | [`sampling`] | Per-row answer-position draw for DIFF trials |
//! | 6 | [`export`] | Write the delimited schedule file |
//! | 7 | [`statistics`] | Aggregate per-condition assignment counts |
//!
//! ## Reproducibility
//!
//! All randomness comes from a single [`rand::rngs::SmallRng`] seeded once
//! per cohort run and passed explicitly through the stages. The draw order
//! is fixed — condition shuffle, then per-subject SAME draws in increasing
//! subject order, then row-by-row answer draws — so a given seed and cohort
//! configuration always produce a byte-identical schedule file.

pub mod assignment;
pub mod config;
pub mod constants;
pub mod export;
pub mod sampling;
pub mod schedule;
pub mod statistics;
pub mod types;
