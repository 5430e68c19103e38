/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::FeedbackRecord;
use prettytable::format;
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use std::fmt;

/// Title printed above the feedback table
pub const TABLE_TITLE: &str = "Feedback";

/// Column headers of the feedback table
pub const TABLE_HEADERS: [&str; 4] = ["ID", "Task Name", "Feedback", "Completion ID"];

/// Keeps the records whose `task_id` equals `task_id` exactly
///
/// With no task every record is kept. Only the records of the current page are
/// considered.
pub fn filter_by_task<'a>(
    records: &'a [FeedbackRecord],
    task_id: Option<&str>,
) -> Vec<&'a FeedbackRecord> {
    match task_id {
        Some(task_id) => records.iter().filter(|r| r.task_id == task_id).collect(),
        None => records.iter().collect(),
    }
}

/// One display row of the feedback table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRow {
    /// Record id
    pub id: String,
    /// Task name
    pub task_name: String,
    /// Feedback values as compact JSON
    pub feedback: String,
    /// Matched completion ids joined with commas
    pub matched_completion_ids: String,
}

impl From<&FeedbackRecord> for FeedbackRow {
    fn from(record: &FeedbackRecord) -> Self {
        Self {
            id: record.id.clone(),
            task_name: record.task_name.clone(),
            feedback: record.json_values.to_string(),
            matched_completion_ids: record.matched_completion_ids.join(","),
        }
    }
}

/// Feedback rows ready to be printed
///
/// `Display` renders the title, the table and the total line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackTable {
    rows: Vec<FeedbackRow>,
}

impl FeedbackTable {
    /// Builds the table from `records`, keeping only `task_id` when given
    pub fn from_records(records: &[FeedbackRecord], task_id: Option<&str>) -> Self {
        let rows = filter_by_task(records, task_id)
            .into_iter()
            .map(FeedbackRow::from)
            .collect();
        Self { rows }
    }

    /// Rows of the table
    pub fn rows(&self) -> &[FeedbackRow] {
        &self.rows
    }

    /// Number of rows displayed
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Renders the rows as a `prettytable` table with a header row
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(
            TABLE_HEADERS.iter().map(|h| Cell::new(h)).collect(),
        ));

        for row in &self.rows {
            table.add_row(Row::new(vec![
                Cell::new(&row.id),
                Cell::new(&row.task_name),
                Cell::new(&row.feedback),
                Cell::new(&row.matched_completion_ids),
            ]));
        }
        table
    }
}

impl fmt::Display for FeedbackTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TABLE_TITLE}")?;
        write!(f, "{}", self.to_table())?;
        write!(f, "Total feedback: {}", self.total())
    }
}
