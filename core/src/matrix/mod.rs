pub mod builder;
pub mod cell;

pub use builder::{Matrix, MatrixBuilder, MatrixRow};
pub use cell::{Cell, CourseCell};
