use degreeplan::{Cell, MatrixBuilder, Normalizer};
use proptest::prelude::*;
use proptest::test_runner::Config;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

fn course_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::option::of("[A-Z]{3}[0-9]{3}"),
        proptest::option::of(0u32..=8),
        proptest::option::of(0u32..=4),
    )
        .prop_map(|(code, credits, l)| {
            let mut course = Map::new();
            if let Some(code) = code {
                course.insert("code".into(), json!(code));
            }
            if let Some(credits) = credits {
                course.insert("credits".into(), json!(credits));
            }
            if let Some(l) = l {
                course.insert("l".into(), json!(l));
            }
            Value::Object(course)
        })
}

fn raw_plan_strategy() -> impl Strategy<Value = (Vec<u32>, Value)> {
    (
        proptest::collection::btree_set(1u32..=40, 0..10),
        proptest::collection::vec(proptest::collection::vec(course_strategy(), 0..7), 10),
    )
        .prop_map(|(numbers, course_lists): (BTreeSet<u32>, Vec<Vec<Value>>)| {
            let numbers: Vec<u32> = numbers.into_iter().collect();
            let mut raw = Map::new();
            // Insert in descending order so iteration order never matches the answer by luck.
            for (number, courses) in numbers.iter().rev().zip(course_lists) {
                raw.insert(number.to_string(), Value::Array(courses));
            }
            (numbers, Value::Object(raw))
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn normalized_semesters_are_strictly_ascending((numbers, raw) in raw_plan_strategy()) {
        let plan = Normalizer::from_value(&raw).expect("valid plan");
        let got: Vec<u32> = plan.semesters().iter().map(|s| s.number).collect();
        prop_assert_eq!(got.len(), numbers.len());
        prop_assert!(got.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(got, numbers);
    }

    #[test]
    fn matrix_rows_are_rectangular_and_totals_skip_placeholders((_numbers, raw) in raw_plan_strategy()) {
        let plan = Normalizer::from_value(&raw).expect("valid plan");
        let matrix = MatrixBuilder::build(&plan);

        let widest = plan.semesters().iter().map(|s| s.courses.len()).max().unwrap_or(0);
        prop_assert_eq!(matrix.column_count(), widest);
        prop_assert_eq!(matrix.header().len(), widest + 2);
        prop_assert_eq!(matrix.rows().len(), plan.semesters().len());

        for (row, semester) in matrix.rows().iter().zip(plan.semesters()) {
            prop_assert_eq!(row.semester(), semester.number);
            prop_assert_eq!(row.cells().len(), widest);
            let real = row.cells().iter().take_while(|c| !c.is_placeholder()).count();
            prop_assert_eq!(real, semester.courses.len());
            prop_assert!(row.cells()[real..].iter().all(Cell::is_placeholder));
            let expected: f64 = semester.courses.iter().map(|c| c.credits.unwrap_or(0.0)).sum();
            prop_assert_eq!(row.total_credits(), expected);
        }
    }

    #[test]
    fn building_is_referentially_transparent((_numbers, raw) in raw_plan_strategy()) {
        let plan = Normalizer::from_value(&raw).expect("valid plan");
        prop_assert_eq!(MatrixBuilder::build(&plan), MatrixBuilder::build(&plan.clone()));
    }
}
