mod config;
mod error;
mod fastq;
mod normalize;
mod rename;
mod samplesheet;

use env_logger::Env;
use structopt::StructOpt;

use crate::error::{RelabelError, Result};
use crate::rename::RenameReport;

#[macro_use]
extern crate log;

fn run(config: &config::Opt) -> Result<RenameReport> {
    if let Some(workdir) = &config.workdir {
        std::env::set_current_dir(workdir).map_err(|e| RelabelError::WorkdirMissing {
            path: workdir.clone(),
            source: e,
        })?;
    }

    normalize::normalize(&config.export, &config.table)?;

    info!("Renaming files...");
    let report = rename::relabel(&config.table, &config.fastq_dir)?;
    info!(
        "{} renamed, {} without a sample sheet entry, {} other files skipped",
        report.renamed.len(),
        report.unmatched.len(),
        report.skipped
    );
    if !report.unmatched.is_empty() {
        warn!("Not renamed: {}", report.unmatched.join(" "));
    }
    info!("Done");
    Ok(report)
}

fn main() {
    let config = config::Opt::from_args();

    // set up logging
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run(&config) {
        println!("ERROR: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn opt(dir: &Path) -> config::Opt {
        config::Opt {
            workdir: None,
            export: dir.join("HLA Samples-Grid view.csv"),
            table: dir.join("airtable_data.csv"),
            fastq_dir: dir.join("exported_fastq"),
        }
    }

    #[test]
    fn export_to_renamed_fastqs() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let config = opt(dir.path());
        fs::write(
            &config.export,
            "\u{feff}Sample ID,Client Vial Label\nS1,Alice™\nS3,Bob (re-run)\n",
        )
        .unwrap();
        fs::create_dir(&config.fastq_dir).unwrap();
        for f in &[
            "S1_S1_L001_R1_001.fastq.gz",
            "S1_S1_L001_R2_001.fastq.gz",
            "S2_S2_L001_R1_001.fastq.gz",
            "S3_S3_L001_R1_001.fastq.gz",
        ] {
            fs::write(config.fastq_dir.join(f), "").unwrap();
        }

        let report = run(&config)?;

        assert_eq!(
            fs::read_to_string(&config.table).unwrap(),
            "Sample ID,Client Vial Label\nS1,Alice\nS3,Bob re-run\n"
        );
        assert_eq!(report.renamed.len(), 3);
        assert_eq!(report.unmatched, vec!["S2_S2_L001_R1_001.fastq.gz"]);
        for f in &[
            "S1_Alice_R1_001.fastq.gz",
            "S1_Alice_R2_001.fastq.gz",
            "S2_S2_L001_R1_001.fastq.gz",
            "S3_Bob re-run_R1_001.fastq.gz",
        ] {
            assert!(config.fastq_dir.join(f).exists(), "{} missing", f);
        }
        Ok(())
    }

    #[test]
    fn missing_export() {
        let dir = TempDir::new().unwrap();
        let config = opt(dir.path());
        fs::create_dir(&config.fastq_dir).unwrap();
        let err = run(&config).unwrap_err();
        assert!(matches!(err, RelabelError::SourceMissing { .. }));
        assert!(!config.table.exists());
    }

    #[test]
    fn missing_fastq_dir() {
        let dir = TempDir::new().unwrap();
        let config = opt(dir.path());
        fs::write(&config.export, "Sample ID,Client Vial Label\nS1,Alice\n").unwrap();
        let err = run(&config).unwrap_err();
        assert!(matches!(err, RelabelError::MissingInput { .. }));
        // the cleaned table is still written before the check
        assert!(config.table.exists());
    }

    #[test]
    fn missing_workdir() {
        let dir = TempDir::new().unwrap();
        let mut config = opt(dir.path());
        config.workdir = Some(dir.path().join("nope"));
        assert!(matches!(run(&config), Err(RelabelError::WorkdirMissing { .. })));
        assert!(!config.table.exists());
    }

    #[test]
    fn defaults() {
        let config = config::Opt::from_iter(&["fastq-relabel"]);
        assert!(config.workdir.is_none());
        assert_eq!(config.export, Path::new("HLA Samples-Grid view.csv"));
        assert_eq!(config.table, Path::new("airtable_data.csv"));
        assert_eq!(config.fastq_dir, Path::new("exported_fastq"));
    }
}
