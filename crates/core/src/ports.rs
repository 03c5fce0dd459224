//! Port interfaces for the ERP gateway

use async_trait::async_trait;
use kivu_domain::{FieldValue, Record, Result};

/// Defensive cap applied when a caller does not pass an explicit limit.
/// Not a correctness guarantee: callers needing more rows must raise it.
pub const DEFAULT_LIMIT: u32 = 100;

/// One filter triple of an ERP search domain: `field operator value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: String,
    pub operator: String,
    pub value: FieldValue,
}

impl Clause {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self { field: field.into(), operator: operator.into(), value: value.into() }
    }

    /// Equality clause, the overwhelmingly common case.
    pub fn eq(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(field, "=", value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(field, "<", value)
    }

    /// Wire shape of the clause: a three-element array.
    pub fn to_value(&self) -> FieldValue {
        FieldValue::Array(vec![
            FieldValue::Str(self.field.clone()),
            FieldValue::Str(self.operator.clone()),
            self.value.clone(),
        ])
    }
}

/// Search filter: a conjunction of clauses. Empty means unconstrained.
pub type Domain = Vec<Clause>;

/// Generic record operations against the remote ERP.
///
/// Read operations return plain values and are expected to fail open
/// (empty on any transport or auth failure); the implementation logs the
/// underlying cause. Write operations propagate failures so callers never
/// mistake a lost write for a successful one.
#[async_trait]
pub trait ErpGateway: Send + Sync {
    /// Search for records and read the given fields in one round trip.
    /// Record order is whatever the ERP returns; it is not guaranteed
    /// stable across calls.
    async fn search_read(
        &self,
        model: &str,
        fields: &[&str],
        domain: Domain,
        limit: u32,
    ) -> Vec<Record>;

    /// Read a single record by id, or `None` when it does not exist or the
    /// read failed.
    async fn read_one(&self, model: &str, id: i64, fields: &[&str]) -> Option<Record>;

    /// Create a record, returning its newly assigned id.
    async fn create(&self, model: &str, values: Record) -> Result<i64>;

    /// Update a record's fields.
    async fn update(&self, model: &str, id: i64, values: Record) -> Result<bool>;

    /// Delete a record. Fails with `KivuError::RestrictViolation` when the
    /// ERP refuses because other records still reference it.
    async fn delete(&self, model: &str, id: i64) -> Result<bool>;
}

/// Invalidation hook for cached rendered views.
///
/// Write actions call this after a successful create/update/delete so the
/// next read of the affected page is not stale. The page layer supplies the
/// real implementation; [`NoopInvalidator`] serves contexts without a view
/// cache (tests, CLIs).
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, view_path: &str);
}

/// A [`CacheInvalidator`] that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInvalidator;

impl CacheInvalidator for NoopInvalidator {
    fn invalidate(&self, _view_path: &str) {}
}
