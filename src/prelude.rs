/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Log10 Feedback Prelude
//!
//! Brings the client, its configuration, the models and the error type into
//! scope with a single import.
//!
//! ```rust,ignore
//! use log10_feedback::prelude::*;
//!
//! let client = FeedbackClient::new(Config::new())?;
//! ```

// ============================================================================
// CONFIGURATION AND CLIENT
// ============================================================================

/// Connection settings
pub use crate::application::config::Config;

/// Feedback client
pub use crate::application::client::FeedbackClient;

/// Feedback service trait
pub use crate::application::interfaces::feedback::FeedbackService;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{CreateFeedbackRequest, ListFeedbackParams, ListFeedbackQuery};

/// Response models
pub use crate::model::responses::{FeedbackListResponse, FeedbackRecord};

// ============================================================================
// PRESENTATION
// ============================================================================

/// Table rendering and local filtering
pub use crate::presentation::feedback::{FeedbackRow, FeedbackTable, filter_by_task};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::{FeedbackLogger, TracingLogger, setup_logger};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{Level, debug, error, info, warn};
