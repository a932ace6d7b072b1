pub mod dataset;
pub mod submission;
