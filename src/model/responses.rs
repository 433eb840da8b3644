//! Response models for the data services endpoints.
//!
//! The shapes are deliberately loose: every field is optional and unknown
//! keys are kept in a flattened map, since the API contract is passed
//! through without validation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of the SOQL query endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    /// Total number of records matching the query
    pub total_size: Option<u64>,
    /// Whether the full result set was returned
    pub done: Option<bool>,
    /// Matched records, untyped
    #[serde(default)]
    pub records: Vec<Value>,
    /// Any further fields returned by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the SOSL search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matched records, untyped
    #[serde(rename = "searchRecords", default)]
    pub search_records: Vec<Value>,
    /// Any further fields returned by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of a record create call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    /// Id of the created record
    pub id: Option<String>,
    /// Whether the create succeeded
    pub success: Option<bool>,
    /// Field-level errors reported by the server
    #[serde(default)]
    pub errors: Vec<Value>,
    /// Any further fields returned by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
