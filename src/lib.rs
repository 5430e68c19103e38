/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Log10 Feedback
//!
//! A small client for the Log10 feedback API, plus the pieces the
//! `log10-feedback` command line tool is built from.
//!
//! The client is a pass-through: it builds a JSON payload, sends it with the
//! organization scoped headers and hands back the decoded response. Failures
//! are logged through an injectable [`utils::logger::FeedbackLogger`] and then
//! returned unchanged to the caller as an [`error::AppError`].
//!
//! ## Example
//! ```ignore
//! use log10_feedback::prelude::*;
//!
//! let client = FeedbackClient::new(Config::new())?;
//! let created = client
//!     .create("task-1", json!({"score": 5}), vec!["tagA".into()], None)
//!     .await?;
//! let page = client.list(0, 25, None).await?;
//! ```
//!
//! ## Configuration
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `LOG10_URL` | Service base URL | `https://log10.io` |
//! | `LOG10_TOKEN` | API token | none |
//! | `LOG10_ORG_ID` | Organization id | none |
//! | `LOG10_TIMEOUT_SECS` | Request timeout | no timeout |
//! | `LOGLEVEL` | Log level for `setup_logger` | `INFO` |

/// Application layer: configuration, client and service interfaces
pub mod application;
/// Command line definitions and handlers
pub mod cli;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Wire models and the HTTP transport
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Terminal presentation of feedback records
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
