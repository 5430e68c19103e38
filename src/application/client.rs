/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Feedback client for the Log10 API
//!
//! # Example
//! ```ignore
//! use log10_feedback::application::client::FeedbackClient;
//! use log10_feedback::application::config::Config;
//! use log10_feedback::application::interfaces::feedback::FeedbackService;
//!
//! let client = FeedbackClient::new(Config::new())?;
//! let page = client.list(0, 25, None).await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::feedback::FeedbackService;
use crate::constants::FEEDBACK_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{CreateFeedbackRequest, ListFeedbackParams, ListFeedbackQuery};
use crate::model::responses::FeedbackListResponse;
use crate::utils::logger::{FeedbackLogger, TracingLogger};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::Level;

/// Client for creating and listing feedback
///
/// Holds no state besides its configuration; each operation is a single
/// request and response.
pub struct FeedbackClient {
    http_client: HttpClient,
    config: Arc<Config>,
    logger: Arc<dyn FeedbackLogger>,
}

impl FeedbackClient {
    /// Creates a client that logs through `tracing`
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - token or organization id cannot be sent as a header
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_logger(config, Arc::new(TracingLogger))
    }

    /// Creates a client that reports through `logger`
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - token or organization id cannot be sent as a header
    /// * `AppError::Network` - the underlying HTTP client could not be built
    pub fn with_logger(config: Config, logger: Arc<dyn FeedbackLogger>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = HttpClient::new(config.clone(), logger.clone())?;
        Ok(Self {
            http_client,
            config,
            logger,
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lists feedback using `params`
    ///
    /// Same as [`FeedbackService::list`]; the returned page is not filtered by
    /// `params.task_id`.
    pub async fn list_with(
        &self,
        params: &ListFeedbackParams,
    ) -> Result<FeedbackListResponse, AppError> {
        self.list(params.offset, params.limit, params.task_id.as_deref())
            .await
    }
}

#[async_trait]
impl FeedbackService for FeedbackClient {
    async fn create(
        &self,
        task_id: &str,
        values: Value,
        completion_tags_selector: Vec<String>,
        comment: Option<String>,
    ) -> Result<Value, AppError> {
        let payload = CreateFeedbackRequest::new(task_id, values, completion_tags_selector, comment)
            .with_organization(&self.config.organization_id);
        self.logger
            .log(Level::INFO, &format!("Creating feedback for task {task_id}"));
        self.http_client.post(FEEDBACK_PATH, &payload).await
    }

    async fn list(
        &self,
        offset: u64,
        limit: u64,
        task_id: Option<&str>,
    ) -> Result<FeedbackListResponse, AppError> {
        // The service always returns an unfiltered page; task filtering is the
        // caller's job and may yield fewer than `limit` records.
        if let Some(task_id) = task_id {
            self.logger.log(
                Level::DEBUG,
                &format!("task_id {task_id} is not sent to the service, filter the page locally"),
            );
        }
        let query = ListFeedbackQuery {
            organization_id: &self.config.organization_id,
            offset,
            limit,
        };
        self.http_client.get(FEEDBACK_PATH, &query).await
    }
}
