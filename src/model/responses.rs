/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A feedback record as returned by the service
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Record id
    pub id: String,
    /// Task the feedback is attached to
    pub task_id: String,
    /// Human readable task name
    #[serde(default, deserialize_with = "null_as_default")]
    pub task_name: String,
    /// Feedback values
    #[serde(default)]
    pub json_values: Value,
    /// Completions the tag selector matched
    #[serde(default, deserialize_with = "null_as_default")]
    pub matched_completion_ids: Vec<String>,
    /// Optional comment
    #[serde(default)]
    pub comment: Option<String>,
}

/// Decodes an explicit `null` as the type's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope returned by `GET /api/v1/feedback`
///
/// Pagination fields belong to the service and are kept as they came.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackListResponse {
    /// Records of the requested page
    #[serde(default)]
    pub data: Vec<FeedbackRecord>,
    /// Everything else in the envelope
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl FeedbackListResponse {
    /// Number of records in the page
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the page holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the records of the page
    pub fn iter(&self) -> impl Iterator<Item = &FeedbackRecord> {
        self.data.iter()
    }
}
