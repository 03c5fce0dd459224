//! In-memory gateway double shared by catalog and action tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use kivu_domain::{KivuError, Record, Result};

use crate::ports::{CacheInvalidator, Domain, ErpGateway};

/// Canned-data gateway. Reads serve whatever was registered per model,
/// writes either succeed (recording the call) or return the configured
/// error.
#[derive(Default)]
pub struct MockGateway {
    records: HashMap<String, Vec<Record>>,
    write_error: Option<KivuError>,
    pub created: Mutex<Vec<(String, Record)>>,
    pub updated: Mutex<Vec<(String, i64, Record)>>,
    pub deleted: Mutex<Vec<(String, i64)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(mut self, model: &str, records: Vec<Record>) -> Self {
        self.records.insert(model.to_string(), records);
        self
    }

    #[must_use]
    pub fn with_write_error(mut self, error: KivuError) -> Self {
        self.write_error = Some(error);
        self
    }
}

#[async_trait]
impl ErpGateway for MockGateway {
    async fn search_read(
        &self,
        model: &str,
        _fields: &[&str],
        _domain: Domain,
        limit: u32,
    ) -> Vec<Record> {
        let mut records = self.records.get(model).cloned().unwrap_or_default();
        records.truncate(limit as usize);
        records
    }

    async fn read_one(&self, model: &str, id: i64, _fields: &[&str]) -> Option<Record> {
        self.records.get(model)?.iter().find(|r| r.id() == id).cloned()
    }

    async fn create(&self, model: &str, values: Record) -> Result<i64> {
        if let Some(err) = &self.write_error {
            return Err(err.clone());
        }
        self.created.lock().unwrap().push((model.to_string(), values));
        Ok(101)
    }

    async fn update(&self, model: &str, id: i64, values: Record) -> Result<bool> {
        if let Some(err) = &self.write_error {
            return Err(err.clone());
        }
        self.updated.lock().unwrap().push((model.to_string(), id, values));
        Ok(true)
    }

    async fn delete(&self, model: &str, id: i64) -> Result<bool> {
        if let Some(err) = &self.write_error {
            return Err(err.clone());
        }
        self.deleted.lock().unwrap().push((model.to_string(), id));
        Ok(true)
    }
}

/// Invalidator that records the view paths it was asked to flush.
#[derive(Default)]
pub struct RecordingInvalidator {
    pub paths: Mutex<Vec<String>>,
}

impl CacheInvalidator for RecordingInvalidator {
    fn invalidate(&self, view_path: &str) {
        self.paths.lock().unwrap().push(view_path.to_string());
    }
}
