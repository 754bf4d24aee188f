//! Delimited-text export of a generated schedule.
//!
//! The downstream experiment software reads this file as its trial schedule,
//! so the column order and types are load-bearing: a leading unnamed 0-based
//! row index, then Subject, Condition, Trial Number, Trial Question,
//! Partner, Similarity, Trial Type, Answer Index. Numeric columns are plain
//! integers; Answer Index is an integer on DIFF rows and the string `Same`
//! on SAME rows.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::TrialRow;

/// Header line; the first column (the row index) is unnamed.
pub const CSV_HEADER: &str =
    ",Subject,Condition,Trial Number,Trial Question,Partner,Similarity,Trial Type,Answer Index";

/// Write the schedule to `path`, one line per row plus the header.
///
/// The parent directory is created if missing. I/O errors propagate to the
/// caller; no partial-file cleanup is attempted.
pub fn write_schedule(rows: &[TrialRow], path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "{}", CSV_HEADER)?;
    for (index, row) in rows.iter().enumerate() {
        writeln!(
            f,
            "{},{},{},{},{},{},{},{},{}",
            index,
            row.subject,
            row.condition,
            row.trial_number,
            row.trial_question,
            row.partner.as_str(),
            row.similarity.as_str(),
            row.trial_type.as_str(),
            row.answer_index,
        )?;
    }
    f.flush()?;
    Ok(())
}
