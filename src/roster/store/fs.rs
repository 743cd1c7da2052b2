use super::RecordStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Column headers of the backing file. Existing files written by earlier
/// versions of the tool use exactly this layout, so order matters.
const HEADER: [&str; 5] = ["ID", "Name", "Position", "Salary", "Email"];

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: IndexMap<String, Employee>,
}

impl FileStore {
    /// Open a store backed by `path` and load the full collection. A missing
    /// file is not an error; the store starts empty and the file appears on
    /// the first mutation. A malformed file fails the whole load.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = Self::load(&path)?;
        debug!(path = %path.display(), records = records.len(), "store opened");
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<IndexMap<String, Employee>> {
        if !path.exists() {
            return Ok(IndexMap::new());
        }
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = IndexMap::new();
        for row in reader.deserialize() {
            let employee: Employee = row?;
            // Later rows win on a duplicate ID, same as the insert below.
            records.insert(employee.id.clone(), employee);
        }
        Ok(records)
    }

    /// Rewrite the whole backing file from the in-memory collection, in
    /// iteration order. The table goes to a uniquely named temp file that is
    /// renamed over the original, so an interrupted save leaves the previous
    /// file intact.
    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            ensure_dir(dir)?;
        }

        let tmp = self
            .path
            .with_file_name(format!(".employees-{}.tmp", Uuid::new_v4()));
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)?;
        writer.write_record(HEADER)?;
        for employee in self.records.values() {
            writer.serialize(employee)?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp, &self.path).map_err(RosterError::Io)?;
        debug!(records = self.records.len(), "store saved");
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn insert(&mut self, employee: &Employee) -> Result<()> {
        self.records
            .insert(employee.id.clone(), employee.clone());
        self.save()
    }

    fn get(&self, id: &str) -> Option<Employee> {
        self.records.get(id).cloned()
    }

    fn list(&self) -> Vec<Employee> {
        self.records.values().cloned().collect()
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        if self.records.shift_remove(id).is_none() {
            return Err(RosterError::NotFound(id.to_string()));
        }
        self.save()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(RosterError::Io)?;
    }
    Ok(())
}
