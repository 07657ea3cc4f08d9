use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default number of rows generated for every table.
pub const DEFAULT_ROWS: u32 = 20;

/// Options for a dataset generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetOptions {
    /// Directory where the CSV files and run report are written.
    pub out_dir: PathBuf,
    /// Rows generated for every table.
    pub rows: u32,
    /// Seed for the run; a random seed is drawn and reported when absent.
    pub seed: Option<u64>,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            rows: DEFAULT_ROWS,
            seed: None,
        }
    }
}

/// Summary of one written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows: u64,
    pub bytes_written: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Seed the run was generated from; rerunning with it reproduces the
    /// dataset byte for byte.
    pub seed: u64,
    pub tables: Vec<TableReport>,
    pub rows_total: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl DatasetReport {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            tables: Vec::new(),
            rows_total: 0,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: &str, rows: u64, bytes_written: u64) {
        self.rows_total += rows;
        self.bytes_written += bytes_written;
        self.tables.push(TableReport {
            table: table.to_string(),
            rows,
            bytes_written,
        });
    }
}
