use crate::model::Course;
use crate::prelude::{InputIssue, PlanResult};
use serde::Serialize;

/// One academic term and its courses, in the order the backend listed them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Semester {
    pub number: u32,
    pub courses: Vec<Course>,
}

impl Semester {
    pub fn new(number: u32, courses: Vec<Course>) -> Self {
        Self { number, courses }
    }
}

/// Semesters sorted strictly ascending by number.
///
/// The only way to obtain a plan is [`DegreePlan::from_semesters`] (or the
/// [`crate::Normalizer`], which goes through it), so every value upholds:
/// numbers are positive and unique, semesters are ordered, and every course
/// carrying credits carries a finite, non-negative amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DegreePlan {
    semesters: Vec<Semester>,
}

impl DegreePlan {
    pub fn from_semesters(mut semesters: Vec<Semester>) -> PlanResult<Self> {
        semesters.sort_by_key(|semester| semester.number);

        for pair in semesters.windows(2) {
            if pair[0].number == pair[1].number {
                return Err(InputIssue::DuplicateSemester {
                    number: pair[0].number,
                }
                .into());
            }
        }

        for semester in &semesters {
            if semester.number == 0 {
                return Err(InputIssue::BadSemesterKey { key: "0".into() }.into());
            }
            for (idx, course) in semester.courses.iter().enumerate() {
                if let Some(credits) = course.credits {
                    if !credits.is_finite() || credits < 0.0 {
                        return Err(InputIssue::InvalidCredits {
                            number: semester.number,
                            position: idx + 1,
                            credits,
                        }
                        .into());
                    }
                }
            }
        }

        Ok(Self { semesters })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Largest course count across semesters, zero for an empty plan.
    pub fn max_courses(&self) -> usize {
        self.semesters
            .iter()
            .map(|semester| semester.courses.len())
            .max()
            .unwrap_or(0)
    }
}
