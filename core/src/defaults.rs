//! The single defaulting table for course fields.
//!
//! Defaults are applied only when a course cell is materialized for the
//! matrix; the stored [`Course`] keeps its `None`s. A course with no credits
//! and a course with a genuine `0` produce identical cells.

use crate::matrix::CourseCell;
use crate::model::Course;

pub const DEFAULT_CODE: &str = "N/A";
pub const DEFAULT_TITLE: &str = "Unknown Course";
pub const DEFAULT_CREDITS: f64 = 0.0;
pub const DEFAULT_HOURS: u32 = 0;

pub fn code(course: &Course) -> &str {
    course.code.as_deref().unwrap_or(DEFAULT_CODE)
}

pub fn title(course: &Course) -> &str {
    course.title.as_deref().unwrap_or(DEFAULT_TITLE)
}

pub fn credits(course: &Course) -> f64 {
    course.credits.unwrap_or(DEFAULT_CREDITS)
}

/// Lecture, tutorial and practical hours, in that order.
pub fn hours(course: &Course) -> (u32, u32, u32) {
    (
        course.l.unwrap_or(DEFAULT_HOURS),
        course.t.unwrap_or(DEFAULT_HOURS),
        course.p.unwrap_or(DEFAULT_HOURS),
    )
}

pub fn materialize(course: &Course) -> CourseCell {
    let (l, t, p) = hours(course);
    CourseCell {
        code: code(course).to_string(),
        title: title(course).to_string(),
        credits: credits(course),
        l,
        t,
        p,
        kind: course.kind.clone(),
    }
}
