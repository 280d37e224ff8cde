//! Renames fastq files after the client labels found in the sample sheet.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{RelabelError, Result};
use crate::fastq::FastqName;
use crate::samplesheet::SampleSheet;

/// What a relabeling run did
#[derive(Debug, Default)]
pub struct RenameReport {
    /// (old name, new name) in the order the renames happened
    pub renamed: Vec<(String, String)>,
    /// fastq files without a matching sample sheet row
    pub unmatched: Vec<String>,
    /// entries that are not fastq files
    pub skipped: usize,
}

/// The cleaned table has to be a file and the fastq directory a directory.
pub fn check_inputs(table: &Path, fastq_dir: &Path) -> Result<()> {
    if !table.is_file() || !fastq_dir.is_dir() {
        return Err(RelabelError::MissingInput {
            table: table.to_path_buf(),
            fastq_dir: fastq_dir.to_path_buf(),
        });
    }
    Ok(())
}

/// Renames every fastq file in `fastq_dir` whose sample id appears in `table`.
///
/// Entries are visited in file name order. Renames happen right away; the
/// first file that breaks the naming convention ends the run and leaves
/// every later file untouched.
pub fn relabel(table: &Path, fastq_dir: &Path) -> Result<RenameReport> {
    check_inputs(table, fastq_dir)?;
    let ss = SampleSheet::from_path(table)?;

    let mut report = RenameReport::default();
    for entry in WalkDir::new(fastq_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| RelabelError::io(fastq_dir, e.into()))?;
        let file_name = match entry.file_name().to_str() {
            Some(n) => n.to_string(),
            None => {
                warn!("Skipping {}: not a valid UTF-8 name", entry.path().display());
                report.skipped += 1;
                continue;
            }
        };

        let fastq = match FastqName::parse(&file_name)? {
            Some(f) => f,
            None => {
                debug!("{}: not a fastq file, skipping", file_name);
                report.skipped += 1;
                continue;
            }
        };

        debug!(
            "{}: sample {} ({}, lane {})",
            file_name, fastq.sample_id, fastq.sample_no, fastq.lane
        );
        let row = ss.find(&fastq.sample_id);
        if let Some(row) = row {
            debug!("{}: matched {:?}", file_name, row.extra_cols);
        }
        match row.and_then(|row| row.client_label.as_deref()) {
            Some(label) => {
                let new_name = fastq.relabeled(label);
                let target = entry.path().with_file_name(&new_name);
                fs::rename(entry.path(), &target).map_err(|e| RelabelError::io(entry.path(), e))?;
                info!("{} -> {}", file_name, new_name);
                report.renamed.push((file_name, new_name));
            }
            None => {
                debug!("{}: no sample sheet entry for {}", file_name, fastq.sample_id);
                report.unmatched.push(file_name);
            }
        }
    }

    Ok(report)
}
