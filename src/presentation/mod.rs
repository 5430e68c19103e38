/// Feedback table rendering and local filtering
pub mod feedback;

pub use feedback::{FeedbackRow, FeedbackTable, filter_by_task};
