/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Command line surface of `log10-feedback`
//!
//! The handlers write to any `io::Write` so they can be driven from tests.

use crate::application::interfaces::feedback::FeedbackService;
use crate::constants::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::error::AppError;
use crate::presentation::feedback::FeedbackTable;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "log10-feedback", version, about = "Create and list Log10 feedback")]
/// Top level command line arguments
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
/// Available subcommands
pub enum Command {
    /// Add feedback to a group of completions associated with a task
    #[command(name = "create-feedback")]
    CreateFeedback(CreateFeedbackArgs),
    /// List feedback
    #[command(name = "list-feedback")]
    ListFeedback(ListFeedbackArgs),
}

#[derive(Debug, Clone, Args)]
/// Arguments of `create-feedback`
pub struct CreateFeedbackArgs {
    /// Task ID
    #[arg(long = "task_id")]
    pub task_id: String,
    /// Feedback in JSON format
    #[arg(long)]
    pub values: String,
    /// Completion tags selector, comma separated
    #[arg(long = "completion_tags_selector")]
    pub completion_tags_selector: String,
    /// Comment, sent as an empty string when omitted
    #[arg(long, default_value = "")]
    pub comment: String,
}

#[derive(Debug, Clone, Args)]
/// Arguments of `list-feedback`
pub struct ListFeedbackArgs {
    /// Offset for the feedback
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub offset: u64,
    /// Number of feedback to fetch
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u64,
    /// Task ID
    #[arg(long = "task_id")]
    pub task_id: Option<String>,
}

/// Parses the `--values` argument
///
/// # Errors
/// * `AppError::InvalidPayload` - the text is not valid JSON
pub fn parse_values(values: &str) -> Result<Value, AppError> {
    serde_json::from_str(values)
        .map_err(|e| AppError::InvalidPayload(format!("values must be valid JSON: {e}")))
}

/// Splits the selector on `,`, keeping empty and padded entries as they are
#[must_use]
pub fn split_tags(selector: &str) -> Vec<String> {
    selector.split(',').map(str::to_string).collect()
}

/// Runs `create-feedback`
///
/// Any error is returned to the caller, which ends the process with a
/// non-zero status.
pub async fn create_feedback<S, W>(
    service: &S,
    args: &CreateFeedbackArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    S: FeedbackService + ?Sized,
    W: Write,
{
    writeln!(out, "Creating feedback")?;
    let values = parse_values(&args.values)?;
    let tags = split_tags(&args.completion_tags_selector);
    debug!("Selector tags: {:?}", tags);

    let response = service
        .create(&args.task_id, values, tags, Some(args.comment.clone()))
        .await?;
    writeln!(out, "{response}")?;
    Ok(())
}

/// Runs `list-feedback`
///
/// Errors from the service are reported on `out` and do not fail the
/// command; only failures to write output are returned.
pub async fn list_feedback<S, W>(
    service: &S,
    args: &ListFeedbackArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    S: FeedbackService + ?Sized,
    W: Write,
{
    let page = match service
        .list(args.offset, args.limit, args.task_id.as_deref())
        .await
    {
        Ok(page) => page,
        Err(e) => {
            writeln!(out, "Error fetching feedback {e}")?;
            if let Some(message) = e.server_error() {
                writeln!(out, "{message}")?;
            }
            return Ok(());
        }
    };

    let table = FeedbackTable::from_records(&page.data, args.task_id.as_deref());
    info!(
        "Fetched {} feedback, displaying {}",
        page.len(),
        table.total()
    );
    writeln!(out, "{table}")?;
    Ok(())
}

/// Dispatches a parsed command
pub async fn run<S, W>(service: &S, command: &Command, out: &mut W) -> Result<(), AppError>
where
    S: FeedbackService + ?Sized,
    W: Write,
{
    match command {
        Command::CreateFeedback(args) => create_feedback(service, args, out).await,
        Command::ListFeedback(args) => list_feedback(service, args, out).await,
    }
}
