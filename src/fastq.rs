//! Demultiplexer output file names.
//!
//! Files come out of the sequencer as `<sample>_S<n>_L<lane>_R<read>_001.fastq.gz`.

use crate::error::{RelabelError, Result};

/// Only files with exactly this extension (everything after the first dot) are touched
pub const FASTQ_EXT: &str = "fastq.gz";

/// A fastq file name split into its positional fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqName {
    pub sample_id: String,
    pub sample_no: String,
    pub lane: String,
    pub read: String,
    pub segment: String,
    pub extension: String,
}

impl FastqName {
    /// Splits `file_name` into its fields.
    ///
    /// Returns `Ok(None)` for names that are not fastq files. A fastq file whose
    /// base name does not have exactly five `_`-separated fields is an error.
    pub fn parse(file_name: &str) -> Result<Option<Self>> {
        let (base, ext) = match file_name.split_once('.') {
            Some(parts) => parts,
            None => return Ok(None),
        };
        if ext != FASTQ_EXT {
            return Ok(None);
        }

        let parts: Vec<&str> = base.split('_').collect();
        if parts.len() != 5 {
            return Err(RelabelError::NamingConventionViolation {
                file: file_name.to_string(),
            });
        }

        Ok(Some(FastqName {
            sample_id: parts[0].to_string(),
            sample_no: parts[1].to_string(),
            lane: parts[2].to_string(),
            read: parts[3].to_string(),
            segment: parts[4].to_string(),
            extension: ext.to_string(),
        }))
    }

    /// Builds the new name: sample id, client label, read and segment.
    /// Sample number and lane are dropped.
    pub fn relabeled(&self, client_label: &str) -> String {
        format!(
            "{}_{}_{}_{}.{}",
            self.sample_id, client_label, self.read, self.segment, self.extension
        )
    }
}
