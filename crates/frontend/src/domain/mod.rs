pub mod dataset;
pub mod preview;
pub mod submission;
