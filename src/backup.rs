use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::TrackerError;
use crate::frequency_table::FrequencyTable;
use crate::report::render_list;

pub struct BackupWriter {
    path: PathBuf,
    backup_file: BufWriter<File>,
}

impl BackupWriter {
    /// Opens `backup_path` for writing, truncating any previous backup.
    pub fn create(backup_path: &Path) -> Result<Self, TrackerError> {
        let backup_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(backup_path)
            .map_err(|source| TrackerError::DestinationUnwritable {
                path: backup_path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: backup_path.to_path_buf(),
            backup_file: BufWriter::new(backup_file),
        })
    }

    pub fn write_table(mut self, table: &FrequencyTable) -> Result<(), TrackerError> {
        let mut write_all = || -> std::io::Result<()> {
            for line in render_list(table.entries()) {
                writeln!(self.backup_file, "{}", line)?;
            }
            self.backup_file.flush()
        };
        write_all().map_err(|source| TrackerError::DestinationUnwritable {
            path: self.path.clone(),
            source,
        })
    }
}

pub fn write_backup(table: &FrequencyTable, backup_path: &Path) -> Result<(), TrackerError> {
    BackupWriter::create(backup_path)?.write_table(table)?;
    log::info!("Wrote {} entries to {}", table.len(), backup_path.display());
    Ok(())
}
