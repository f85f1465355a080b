//! Normalization and matrix-shaping core for semester degree plans.
//!
//! Raw backend payloads map semester numbers (as text) to course lists in no
//! particular order. [`Normalizer`] turns them into an ordered [`DegreePlan`],
//! and [`MatrixBuilder`] shapes that plan into a rectangular [`Matrix`] with a
//! per-row credit total, ready to hand to a renderer.

pub mod defaults;
pub mod matrix;
pub mod model;
pub mod normalize;
pub mod prelude;

pub use matrix::{Cell, CourseCell, Matrix, MatrixBuilder, MatrixRow};
pub use model::{Course, DegreePlan, Semester};
pub use normalize::Normalizer;
pub use prelude::{InputIssue, JsonKind, PlanError, PlanResult};
