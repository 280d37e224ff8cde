use std::path::PathBuf;
use structopt::StructOpt;

/// Relabel demultiplexed fastq files with the client vial labels from an AirTable export
#[derive(StructOpt, Debug)]
pub struct Opt {
    /// Switch to this directory before doing anything else (default: stay where we are)
    #[structopt(long, parse(from_os_str))]
    pub workdir: Option<PathBuf>,

    /// Table exported from AirTable
    #[structopt(default_value = "HLA Samples-Grid view.csv", long, parse(from_os_str))]
    pub export: PathBuf,

    /// Cleaned copy of the export, overwritten on every run
    #[structopt(default_value = "airtable_data.csv", long, parse(from_os_str))]
    pub table: PathBuf,

    /// Folder with the fastq files to rename
    #[structopt(default_value = "exported_fastq", long, parse(from_os_str))]
    pub fastq_dir: PathBuf,
}
