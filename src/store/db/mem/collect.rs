use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::{
    BoardflowError, Result, ShareLock,
    store::{DbCollection, db::DbDocument},
};

/// Generic in-memory collection keyed by record id.
#[derive(Debug)]
pub struct Collect<T> {
    name: &'static str,
    rows: ShareLock<HashMap<String, T>>,
}

impl<T> Collect<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T> DbCollection for Collect<T>
where
    T: DbDocument + Send + Sync,
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
        Ok(true)
    }

    fn delete(
        &self,
        id: &str,
    ) -> Result<bool> {
        let mut rows = self.rows.write().unwrap();
        Ok(rows.remove(id).is_some())
    }
}
