use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    BoardflowError, Result, ShareLock,
    store::{DbCollection, db::DbDocument, map_db_err},
};

/// One collection persisted as a single JSON array on disk.
///
/// Records are kept in memory; every mutation rewrites the backing file
/// under the write lock, so a failed write surfaces on the operation that
/// caused it.
#[derive(Debug)]
pub struct FileCollect<T> {
    name: &'static str,
    path: PathBuf,
    rows: ShareLock<HashMap<String, T>>,
}

impl<T> FileCollect<T>
where
    T: DbDocument + Serialize + DeserializeOwned,
{
    /// Opens the collection file under `dir`, creating an empty collection
    /// when the file does not exist yet.
    pub fn new(
        dir: &Path,
        name: &'static str,
    ) -> Result<Self> {
        let path = dir.join(format!("{}.{}.json", super::STORE_NAMESPACE, name));
        let rows = Self::read_document(&path)?;

        Ok(Self {
            name,
            path,
            rows: Arc::new(RwLock::new(rows)),
        })
    }

    fn read_document(path: &Path) -> Result<HashMap<String, T>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(map_db_err(e)),
        };
        let records: Vec<T> = serde_json::from_str(&text).map_err(map_db_err)?;
        Ok(records.into_iter().map(|r| (r.id().to_string(), r)).collect())
    }

    fn write_document(
        &self,
        rows: &HashMap<String, T>,
    ) -> Result<()> {
        let mut records: Vec<&T> = rows.values().collect();
        records.sort_by(|a, b| a.id().cmp(b.id()));

        let text = serde_json::to_string_pretty(&records).map_err(map_db_err)?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(map_db_err)?;
        }
        fs::write(&self.path, text).map_err(map_db_err)
    }
}

impl<T> DbCollection for FileCollect<T>
where
    T: DbDocument + Serialize + DeserializeOwned + Send + Sync,
{
    type Item = T;

    fn exists(
        &self,
        id: &str,
    ) -> Result<bool> {
        let rows = self.rows.read().unwrap();
        Ok(rows.contains_key(id))
    }

    fn find(
        &self,
        id: &str,
    ) -> Result<T> {
        let rows = self.rows.read().unwrap();
        rows.get(id).cloned().ok_or(BoardflowError::Store(format!("{}: record {} not found", self.name, id)))
    }

    fn list(&self) -> Result<Vec<T>> {
        let rows = self.rows.read().unwrap();
        Ok(rows.values().cloned().collect())
    }

    fn create(
        &self,
        data: &T,
    ) -> Result<bool> {
        let mut rows = self.rows.write().unwrap();
        if rows.contains_key(data.id()) {
            return Err(BoardflowError::Store(format!("{}: record {} already exists", self.name, data.id())));
        }
        rows.insert(data.id().to_string(), data.clone());
        self.write_document(&rows)?;
        Ok(true)
    }

    fn update(
        &self,
        data: &T,
    ) -> Result<bool> {
        let mut rows = self.rows.write().unwrap();
        if !rows.contains_key(data.id()) {
            return Err(BoardflowError::Store(format!("{}: record {} not found", self.name, data.id())));
        }
        rows.insert(data.id().to_string(), data.clone());
        self.write_document(&rows)?;
        Ok(true)
    }

    fn delete(
        &self,
        id: &str,
    ) -> Result<bool> {
        let mut rows = self.rows.write().unwrap();
        let removed = rows.remove(id).is_some();
        if removed {
            self.write_document(&rows)?;
        }
        Ok(removed)
    }
}
