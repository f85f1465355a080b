use crate::defaults;
use crate::matrix::cell::Cell;
use crate::model::{DegreePlan, Semester};

pub const SEMESTER_LABEL: &str = "Sem";
pub const CREDITS_LABEL: &str = "Credits";

/// One semester's row: its number, exactly `column_count` cells and the
/// credit total of its real courses.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    semester: u32,
    cells: Vec<Cell>,
    total_credits: f64,
}

impl MatrixRow {
    pub fn semester(&self) -> u32 {
        self.semester
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn total_credits(&self) -> f64 {
        self.total_credits
    }

    pub fn course_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_placeholder()).count()
    }
}

/// Render-ready grid derived from a [`DegreePlan`].
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    header: Vec<String>,
    rows: Vec<MatrixRow>,
    column_count: usize,
}

impl Matrix {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Number of course columns, excluding the semester and credits columns.
    pub fn column_count(&self) -> usize {
        self.column_count
    }
}

pub struct MatrixBuilder;

impl MatrixBuilder {
    pub fn build(plan: &DegreePlan) -> Matrix {
        let column_count = plan.max_courses();

        let rows = plan
            .semesters()
            .iter()
            .map(|semester| Self::build_row(semester, column_count))
            .collect();

        Matrix {
            header: Self::header(column_count),
            rows,
            column_count,
        }
    }

    pub fn header(column_count: usize) -> Vec<String> {
        let mut header = Vec::with_capacity(column_count + 2);
        header.push(SEMESTER_LABEL.to_string());
        header.extend((1..=column_count).map(|i| format!("Course {i}")));
        header.push(CREDITS_LABEL.to_string());
        header
    }

    fn build_row(semester: &Semester, column_count: usize) -> MatrixRow {
        let mut cells: Vec<Cell> = semester
            .courses
            .iter()
            .map(|course| Cell::Course(defaults::materialize(course)))
            .collect();
        cells.resize(column_count, Cell::Placeholder);

        let total_credits = semester.courses.iter().map(defaults::credits).sum();

        MatrixRow {
            semester: semester.number,
            cells,
            total_credits,
        }
    }
}
