//! JSONL (JSON Lines) files.
//!
//! Each snapshot collection is one file with one JSON document per line,
//! using the field names of the hosted collections.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};

/// Snapshot collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Fighters,
    WeightClasses,
    Fights,
    Combinations,
}

impl SnapshotKind {
    pub const ALL: [SnapshotKind; 4] = [
        SnapshotKind::Fighters,
        SnapshotKind::WeightClasses,
        SnapshotKind::Fights,
        SnapshotKind::Combinations,
    ];

    pub fn filename(&self) -> &'static str {
        match self {
            SnapshotKind::Fighters => "fighters.jsonl",
            SnapshotKind::WeightClasses => "weight_classes.jsonl",
            SnapshotKind::Fights => "fights.jsonl",
            SnapshotKind::Combinations => "combinations.jsonl",
        }
    }
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn write_lines(&self, file: File, items: &[T]) -> Result<usize, StorageError> {
        let mut writer = BufWriter::new(file);
        for item in items {
            let json = serde_json::to_string(item)?;
            writeln!(writer, "{}", json)?;
        }
        writer.flush()?;
        Ok(items.len())
    }

    /// Append one document.
    pub fn append(&self, item: &T) -> Result<(), StorageError> {
        self.append_batch(std::slice::from_ref(item))?;
        debug!("Appended document to {:?}", self.path);
        Ok(())
    }

    /// Append documents, creating the file if needed.
    pub fn append_batch(&self, items: &[T]) -> Result<usize, StorageError> {
        if items.is_empty() {
            return Ok(0);
        }

        self.ensure_dir()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let count = self.write_lines(file, items)?;
        info!("Appended {} documents to {:?}", count, self.path);
        Ok(count)
    }

    /// Replace the file contents.
    pub fn write_all(&self, items: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;
        let file = File::create(&self.path)?;

        let count = self.write_lines(file, items)?;
        info!("Wrote {} documents to {:?}", count, self.path);
        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Reader for a snapshot collection.
    pub fn for_snapshot(config: &StorageConfig, kind: SnapshotKind) -> Self {
        Self::new(config.snapshot_path(kind))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every document. A missing file reads as empty; malformed lines
    /// are logged and skipped.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            debug!("No file at {:?}", self.path);
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut items = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(item) => items.push(item),
                Err(e) => {
                    warn!("Skipping line {} in {:?}: {}", idx + 1, self.path, e);
                }
            }
        }

        debug!("Read {} documents from {:?}", items.len(), self.path);
        Ok(items)
    }

    pub fn read_where<F>(&self, predicate: F) -> Result<Vec<T>, StorageError>
    where
        F: Fn(&T) -> bool,
    {
        let all = self.read_all()?;
        Ok(all.into_iter().filter(predicate).collect())
    }

    /// First document matching `predicate`.
    pub fn find<F>(&self, predicate: F) -> Result<Option<T>, StorageError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.read_all()?.into_iter().find(predicate))
    }

    /// Non-empty lines in the file.
    pub fn count(&self) -> Result<usize, StorageError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let count = reader
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }

    /// Stream documents without buffering the whole file.
    pub fn iter(&self) -> Result<JsonlIterator<T>, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::PathNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        Ok(JsonlIterator {
            reader: BufReader::new(file),
            _marker: PhantomData,
        })
    }
}

/// Iterator over JSONL documents. Parse errors are yielded, not skipped.
pub struct JsonlIterator<T> {
    reader: BufReader<File>,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Iterator for JsonlIterator<T> {
    type Item = Result<T, StorageError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    return Some(serde_json::from_str(&line).map_err(StorageError::Json));
                }
                Err(e) => return Some(Err(StorageError::Io(e))),
            }
        }
    }
}
