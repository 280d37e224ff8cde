//! Sample sheet built from the cleaned AirTable export.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{RelabelError, Result};

/// Column holding the sample identifier that prefixes every fastq file name
pub const COL_SAMPLE_ID: &str = "Sample ID";

/// Column holding the label the client knows the sample by
pub const COL_CLIENT_LABEL: &str = "Client Vial Label";

/// A sample sheet containing the rows of the export, in file order
#[derive(Debug)]
pub struct SampleSheet {
    pub entries: Vec<SampleRow>,
}

/// An entry of a SampleSheet
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SampleRow {
    /// `None` if the row was too short to reach the column
    pub sample_id: Option<String>,
    pub client_label: Option<String>,

    /// All columns of the row by header name, including the two above
    pub extra_cols: HashMap<String, String>,
}

impl SampleSheet {
    pub fn new() -> Self {
        SampleSheet {
            entries: Vec::new(),
        }
    }

    /// Parses a comma-separated table with a header row.
    ///
    /// Rows may be shorter or longer than the header. Fails if the header
    /// lacks one of the sample id or client label columns.
    pub fn from_path(path: &Path) -> Result<Self> {
        let csv_err = |source: csv::Error| RelabelError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .flexible(true)
            .from_path(path)
            .map_err(csv_err)?;

        let header_row: Vec<String> = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let column = |name: &str| {
            header_row
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| RelabelError::MissingColumn {
                    column: name.to_string(),
                    path: path.to_path_buf(),
                })
        };
        let col_sample_id = column(COL_SAMPLE_ID)?;
        let col_client_label = column(COL_CLIENT_LABEL)?;

        let mut result = SampleSheet::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            result.entries.push(SampleRow {
                sample_id: record.get(col_sample_id).map(|s| s.to_string()),
                client_label: record.get(col_client_label).map(|s| s.to_string()),
                extra_cols: header_row
                    .iter()
                    .cloned()
                    .zip(record.iter().map(|s| s.to_string()))
                    .collect(),
            });
        }

        debug!("{}: {} sample rows", path.display(), result.entries.len());
        Ok(result)
    }

    /// The first row whose sample id equals `sample_id` exactly.
    pub fn find(&self, sample_id: &str) -> Option<&SampleRow> {
        self.entries
            .iter()
            .find(|e| e.sample_id.as_deref() == Some(sample_id))
    }
}
