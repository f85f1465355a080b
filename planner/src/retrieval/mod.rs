pub mod client;
pub mod program;

pub use client::{PlanClient, RETRIEVAL_FAILURE_MESSAGE};
pub use program::Program;
