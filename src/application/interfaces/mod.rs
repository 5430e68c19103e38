/// Feedback service interface
pub mod feedback;
