use std::io;
use std::path::PathBuf;

use crate::error::TableError;

/// The two content tables the store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableName {
    Tips,
    Sponsors,
}

impl TableName {
    pub fn file_name(self) -> &'static str {
        match self {
            TableName::Tips => "tips.csv",
            TableName::Sponsors => "sponsors.csv",
        }
    }
}

/// Read-only file store for the content tables.
///
/// There is deliberately no write path: the admin surface edits rows in
/// memory and exports them as a download, and an operator replaces the
/// backing file out-of-band.
#[derive(Clone)]
pub struct TableStore {
    data_dir: PathBuf,
}

impl TableStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Raw text of a table. A missing file maps to `TableError::NotFound`
    /// so callers can distinguish "not provisioned" from real I/O trouble.
    pub async fn read(&self, name: TableName) -> Result<String, TableError> {
        let path = self.data_dir.join(name.file_name());
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(TableError::NotFound {
                file: name.file_name().to_string(),
            }),
            Err(e) => Err(TableError::Io(e)),
        }
    }
}
