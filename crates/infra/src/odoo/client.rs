use std::collections::BTreeMap;

use async_trait::async_trait;
use kivu_core::{Clause, Domain, ErpGateway};
use kivu_domain::{ErpConfig, FieldValue, KivuError, Record, Result};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::http::HttpClient;
use crate::xmlrpc::{self, Response};

/// Gateway to an Odoo-style ERP over XML-RPC.
///
/// Each operation authenticates against `/xmlrpc/2/common` and then calls
/// `execute_kw` on `/xmlrpc/2/object`. Authentication happens per call
/// unless [`ErpConfig::cache_session`] is set, in which case the user id is
/// reused until a call fails with an auth error.
///
/// Reads fail open: any failure is logged and surfaces as empty data, so a
/// dashboard page renders with blanks rather than an error screen. Writes
/// fail loud through `Result`.
pub struct OdooClient {
    config: ErpConfig,
    http: HttpClient,
    cached_uid: Mutex<Option<i64>>,
}

impl OdooClient {
    pub fn new(config: ErpConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(1)
            .build()?;
        Ok(Self { config, http, cached_uid: Mutex::new(None) })
    }

    /// Authenticate and return the ERP user id.
    pub async fn authenticate(&self) -> Result<i64> {
        if self.config.cache_session {
            if let Some(uid) = *self.cached_uid.lock().await {
                return Ok(uid);
            }
        }

        let url = self.config.common_endpoint()?;
        let body = xmlrpc::method_call(
            "authenticate",
            &[
                FieldValue::from(self.config.database.as_str()),
                FieldValue::from(self.config.username.as_str()),
                FieldValue::from(self.config.password.as_str()),
                FieldValue::Struct(BTreeMap::new()),
            ],
        );

        let response = self.http.post_xml(&url, body).await?;
        let uid = match xmlrpc::parse_response(&response)? {
            Response::Value(FieldValue::Int(uid)) if uid > 0 => uid,
            Response::Value(_) => {
                return Err(KivuError::Auth(
                    "ERP rejected the configured credentials".to_string(),
                ));
            }
            Response::Fault(fault) => return Err(xmlrpc::fault_to_error(fault)),
        };

        if self.config.cache_session {
            *self.cached_uid.lock().await = Some(uid);
        }

        debug!(uid, "authenticated against ERP");
        Ok(uid)
    }

    /// Run one `execute_kw` call against the object endpoint.
    async fn execute_kw(
        &self,
        model: &str,
        method: &str,
        args: Vec<FieldValue>,
        kwargs: BTreeMap<String, FieldValue>,
    ) -> Result<FieldValue> {
        let uid = self.authenticate().await?;
        let url = self.config.object_endpoint()?;

        let body = xmlrpc::method_call(
            "execute_kw",
            &[
                FieldValue::from(self.config.database.as_str()),
                FieldValue::Int(uid),
                FieldValue::from(self.config.password.as_str()),
                FieldValue::from(model),
                FieldValue::from(method),
                FieldValue::Array(args),
                FieldValue::Struct(kwargs),
            ],
        );

        debug!(model, method, "executing ERP call");
        let response = self.http.post_xml(&url, body).await?;
        match xmlrpc::parse_response(&response)? {
            Response::Value(value) => Ok(value),
            Response::Fault(fault) => {
                let err = xmlrpc::fault_to_error(fault);
                if matches!(err, KivuError::Auth(_)) {
                    // A stale cached session is the usual cause; the next
                    // call re-authenticates from scratch.
                    *self.cached_uid.lock().await = None;
                }
                Err(err)
            }
        }
    }

    async fn try_search_read(
        &self,
        model: &str,
        fields: &[&str],
        domain: Domain,
        limit: u32,
    ) -> Result<Vec<Record>> {
        let domain_value =
            FieldValue::Array(domain.iter().map(Clause::to_value).collect());

        let mut kwargs = BTreeMap::new();
        kwargs.insert(
            "fields".to_string(),
            FieldValue::Array(fields.iter().map(|f| FieldValue::from(*f)).collect()),
        );
        kwargs.insert("limit".to_string(), FieldValue::Int(i64::from(limit)));

        let result = self
            .execute_kw(model, "search_read", vec![FieldValue::Array(vec![domain_value])], kwargs)
            .await?;

        let FieldValue::Array(rows) = result else {
            return Err(KivuError::InvalidResponse(format!(
                "search_read on {model} did not return a list"
            )));
        };

        let records = rows
            .into_iter()
            .filter_map(|row| match row {
                FieldValue::Struct(members) => Some(Record::from(members)),
                _ => None,
            })
            .collect();
        Ok(records)
    }

    fn record_to_struct(values: Record) -> FieldValue {
        FieldValue::Struct(values.into_iter().collect())
    }
}

#[async_trait]
impl ErpGateway for OdooClient {
    async fn search_read(
        &self,
        model: &str,
        fields: &[&str],
        domain: Domain,
        limit: u32,
    ) -> Vec<Record> {
        if !self.config.is_configured() {
            return Vec::new();
        }
        match self.try_search_read(model, fields, domain, limit).await {
            Ok(records) => records,
            Err(err) => {
                warn!(model, error = %err, "search_read failed, returning no records");
                Vec::new()
            }
        }
    }

    async fn read_one(&self, model: &str, id: i64, fields: &[&str]) -> Option<Record> {
        self.search_read(model, fields, vec![Clause::eq("id", id)], 1)
            .await
            .into_iter()
            .next()
    }

    async fn create(&self, model: &str, values: Record) -> Result<i64> {
        if !self.config.is_configured() {
            return Err(KivuError::Config("ERP base URL is not set".to_string()));
        }
        let result = self
            .execute_kw(
                model,
                "create",
                vec![Self::record_to_struct(values)],
                BTreeMap::new(),
            )
            .await?;
        match result {
            FieldValue::Int(id) => Ok(id),
            other => Err(KivuError::Write(format!(
                "create on {model} returned {other:?} instead of an id"
            ))),
        }
    }

    async fn update(&self, model: &str, id: i64, values: Record) -> Result<bool> {
        if !self.config.is_configured() {
            return Err(KivuError::Config("ERP base URL is not set".to_string()));
        }
        let result = self
            .execute_kw(
                model,
                "write",
                vec![
                    FieldValue::Array(vec![FieldValue::Int(id)]),
                    Self::record_to_struct(values),
                ],
                BTreeMap::new(),
            )
            .await?;
        match result {
            FieldValue::Bool(ok) => Ok(ok),
            other => Err(KivuError::Write(format!(
                "write on {model} returned {other:?} instead of a boolean"
            ))),
        }
    }

    async fn delete(&self, model: &str, id: i64) -> Result<bool> {
        if !self.config.is_configured() {
            return Err(KivuError::Config("ERP base URL is not set".to_string()));
        }
        let result = self
            .execute_kw(
                model,
                "unlink",
                vec![FieldValue::Array(vec![FieldValue::Int(id)])],
                BTreeMap::new(),
            )
            .await?;
        match result {
            FieldValue::Bool(ok) => Ok(ok),
            other => Err(KivuError::Write(format!(
                "unlink on {model} returned {other:?} instead of a boolean"
            ))),
        }
    }
}
