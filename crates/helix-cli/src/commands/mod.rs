pub mod build;
pub mod forms;
