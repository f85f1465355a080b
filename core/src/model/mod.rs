pub mod course;
pub mod plan;

pub use course::Course;
pub use plan::{DegreePlan, Semester};
