use degreeplan::{Cell, CourseCell, Matrix};

const PLACEHOLDER: &str = "-";
const SEPARATOR: &str = " | ";

fn course_text(course: &CourseCell) -> String {
    format!(
        "{} {} {} ({}-{}-{})",
        course.code, course.title, course.credits, course.l, course.t, course.p
    )
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Course(course) => course_text(course),
        Cell::Placeholder => PLACEHOLDER.to_string(),
    }
}

/// Lays the matrix out as a fixed-width text grid, one line per semester.
pub fn render_matrix(matrix: &Matrix) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(matrix.rows().len() + 1);
    lines.push(matrix.header().to_vec());
    for row in matrix.rows() {
        let mut line = Vec::with_capacity(row.cells().len() + 2);
        line.push(row.semester().to_string());
        line.extend(row.cells().iter().map(cell_text));
        line.push(row.total_credits().to_string());
        lines.push(line);
    }

    let mut widths = vec![0usize; matrix.header().len()];
    for line in &lines {
        for (width, text) in widths.iter_mut().zip(line) {
            *width = (*width).max(text.chars().count());
        }
    }

    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(text, &width)| format!("{:<width$}", text, width = width))
            .collect();
        out.push_str(padded.join(SEPARATOR).trim_end());
        out.push('\n');

        if idx == 0 {
            let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
            out.push_str(&rule.join("-+-"));
            out.push('\n');
        }
    }

    if matrix.rows().is_empty() {
        out.push_str("(no semesters)\n");
    }
    out
}
