/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/v1/feedback`
///
/// `comment` is always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct CreateFeedbackRequest {
    /// Task the feedback belongs to
    pub task_id: String,
    /// Feedback values, any JSON document
    pub json_values: Value,
    /// Tags selecting the completions the feedback applies to
    pub completion_tags_selector: Vec<String>,
    /// Optional free text comment
    pub comment: Option<String>,
    /// Organization scope, filled in by the client
    pub organization_id: String,
}

impl CreateFeedbackRequest {
    /// Creates a payload with an empty organization id
    pub fn new(
        task_id: impl Into<String>,
        json_values: Value,
        completion_tags_selector: Vec<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            json_values,
            completion_tags_selector,
            comment,
            organization_id: String::new(),
        }
    }

    /// Scopes the payload to an organization
    #[must_use]
    pub fn with_organization(mut self, organization_id: &str) -> Self {
        self.organization_id = organization_id.to_string();
        self
    }
}

/// Query string of `GET /api/v1/feedback`
///
/// There is deliberately no `task_id` here: the service is never asked to
/// filter by task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListFeedbackQuery<'a> {
    /// Organization scope
    pub organization_id: &'a str,
    /// Index of the first record
    pub offset: u64,
    /// Page size
    pub limit: u64,
}

/// Caller side arguments of a list operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFeedbackParams {
    /// Index of the first record (default 0)
    pub offset: u64,
    /// Page size (default 25)
    pub limit: u64,
    /// Task to keep when filtering the returned page locally
    pub task_id: Option<String>,
}

impl Default for ListFeedbackParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
            task_id: None,
        }
    }
}

impl ListFeedbackParams {
    /// Sets the offset
    #[must_use]
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the task used for local filtering
    #[must_use]
    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }
}
