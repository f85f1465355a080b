/// A course with every field resolved through [`crate::defaults`].
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCell {
    pub code: String,
    pub title: String,
    pub credits: f64,
    pub l: u32,
    pub t: u32,
    pub p: u32,
    pub kind: Option<String>,
}

/// One slot in a matrix row.
///
/// `Placeholder` marks the absence of a course at that column, which is not
/// the same thing as a course worth zero credits.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Course(CourseCell),
    Placeholder,
}

impl Cell {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Cell::Placeholder)
    }

    pub fn as_course(&self) -> Option<&CourseCell> {
        match self {
            Cell::Course(course) => Some(course),
            Cell::Placeholder => None,
        }
    }
}
