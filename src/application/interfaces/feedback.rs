use crate::error::AppError;
use crate::model::responses::FeedbackListResponse;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the feedback service
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Attaches feedback to the completions of a task selected by tags
    ///
    /// # Arguments
    /// * `task_id` - Task the feedback belongs to
    /// * `values` - Feedback values, any JSON document
    /// * `completion_tags_selector` - Tags selecting the completions
    /// * `comment` - Optional free text
    ///
    /// # Returns
    /// The decoded response body, unchanged
    async fn create(
        &self,
        task_id: &str,
        values: Value,
        completion_tags_selector: Vec<String>,
        comment: Option<String>,
    ) -> Result<Value, AppError>;

    /// Lists one page of feedback for the configured organization
    ///
    /// `task_id` is not forwarded to the service; callers filter the returned
    /// page themselves.
    async fn list(
        &self,
        offset: u64,
        limit: u64,
        task_id: Option<&str>,
    ) -> Result<FeedbackListResponse, AppError>;
}
