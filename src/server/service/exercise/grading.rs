//! Answer key validation and automatic grading.

use crate::server::{
    error::AppError,
    model::exercise::{AttemptStatus, Exercise, ExerciseType},
};

const MIN_CHOICE_OPTIONS: usize = 2;

/// Outcome of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub is_correct: bool,
    pub status: AttemptStatus,
    pub points_awarded: i32,
}

/// Checks that an exercise definition can be graded.
///
/// # Returns
/// - `Ok(())` - Definition is consistent with its type
/// - `Err(AppError::BadRequest)` - Missing options, missing or invalid answer key, or
///   negative points
pub fn validate_definition(
    exercise_type: ExerciseType,
    question: &str,
    options: &[String],
    correct_answer: Option<&str>,
    points: i32,
) -> Result<(), AppError> {
    if question.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Question must not be empty".to_string(),
        ));
    }
    if points < 0 {
        return Err(AppError::BadRequest(
            "Points must not be negative".to_string(),
        ));
    }

    let correct_answer = correct_answer
        .map(str::trim)
        .filter(|answer| !answer.is_empty());

    match exercise_type {
        ExerciseType::MultipleChoice => {
            if options.len() < MIN_CHOICE_OPTIONS {
                return Err(AppError::BadRequest(format!(
                    "Multiple choice exercises need at least {} options",
                    MIN_CHOICE_OPTIONS
                )));
            }
            let answer = correct_answer.ok_or_else(|| {
                AppError::BadRequest("Multiple choice exercises need a correct answer".to_string())
            })?;
            let resolved = resolve_choice(answer, options);
            if !options.iter().any(|option| normalize(option) == resolved) {
                return Err(AppError::BadRequest(
                    "Correct answer must match one of the options".to_string(),
                ));
            }
        }
        ExerciseType::TrueFalse => {
            if correct_answer.and_then(parse_bool).is_none() {
                return Err(AppError::BadRequest(
                    "True/false exercises need a true or false correct answer".to_string(),
                ));
            }
        }
        ExerciseType::ShortAnswer => {
            if correct_answer.is_none() {
                return Err(AppError::BadRequest(
                    "Short answer exercises need a correct answer".to_string(),
                ));
            }
        }
        ExerciseType::Essay => {}
    }

    Ok(())
}

/// Grades `answer` against the exercise's answer key.
///
/// Essays are never graded automatically and come back pending with no points.
pub fn grade(exercise: &Exercise, answer: &str) -> Grade {
    let is_correct = match exercise.exercise_type {
        ExerciseType::Essay => {
            return Grade {
                is_correct: false,
                status: AttemptStatus::Pending,
                points_awarded: 0,
            }
        }
        ExerciseType::MultipleChoice => exercise.correct_answer.as_deref().is_some_and(|key| {
            resolve_choice(answer, &exercise.options) == resolve_choice(key, &exercise.options)
        }),
        ExerciseType::TrueFalse => match (
            parse_bool(answer),
            exercise.correct_answer.as_deref().and_then(parse_bool),
        ) {
            (Some(given), Some(expected)) => given == expected,
            _ => false,
        },
        ExerciseType::ShortAnswer => exercise
            .correct_answer
            .as_deref()
            .is_some_and(|key| collapse_whitespace(answer) == collapse_whitespace(key)),
    };

    Grade {
        is_correct,
        status: AttemptStatus::Graded,
        points_awarded: if is_correct { exercise.points } else { 0 },
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Resolves a choice to option text. A value equal to an option's text is that option;
/// otherwise a zero-based index selects one. Anything else is compared as text.
fn resolve_choice(value: &str, options: &[String]) -> String {
    let value = normalize(value);
    if options.iter().any(|option| normalize(option) == value) {
        return value;
    }
    match value.parse::<usize>() {
        Ok(index) if index < options.len() => normalize(&options[index]),
        _ => value,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match normalize(value).as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

fn collapse_whitespace(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn exercise(exercise_type: ExerciseType, options: &[&str], correct: Option<&str>) -> Exercise {
        Exercise {
            id: 1,
            lesson_id: 1,
            exercise_type,
            question: "Question?".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.map(str::to_string),
            points: 10,
            position: 0,
            created_at: Utc::now(),
        }
    }

    /// Tests grading of multiple choice answers.
    ///
    /// Verifies that option text and option indexes resolve to the same choice on both
    /// the answer and the answer key.
    ///
    /// Expected: matching choices are correct regardless of case or index form
    #[test]
    fn grades_multiple_choice_by_text_or_index() {
        let by_text = exercise(
            ExerciseType::MultipleChoice,
            &["Paris", "Rome"],
            Some("Paris"),
        );
        assert!(grade(&by_text, " paris ").is_correct);
        assert!(grade(&by_text, "0").is_correct);
        assert!(!grade(&by_text, "1").is_correct);
        assert!(!grade(&by_text, "Berlin").is_correct);

        let by_index = exercise(ExerciseType::MultipleChoice, &["Paris", "Rome"], Some("1"));
        assert!(grade(&by_index, "ROME").is_correct);
        assert_eq!(grade(&by_index, "rome").points_awarded, 10);
        assert_eq!(grade(&by_index, "paris").points_awarded, 0);
    }

    /// Tests grading when the options are numerals themselves.
    ///
    /// Verifies that a value naming an option's text wins over reading it as an index.
    ///
    /// Expected: the key "2" means the option "2", not the option at index 2
    #[test]
    fn numeral_options_match_text_before_index() {
        let ex = exercise(ExerciseType::MultipleChoice, &["1", "2", "3"], Some("2"));
        assert!(grade(&ex, "2").is_correct);
        assert!(!grade(&ex, "3").is_correct);

        let out_of_range = exercise(ExerciseType::MultipleChoice, &["1", "2", "7"], Some("7"));
        assert!(grade(&out_of_range, "7").is_correct);
        assert!(grade(&out_of_range, "2").points_awarded == 0);
    }

    #[test]
    fn grades_true_false_synonyms() {
        let ex = exercise(ExerciseType::TrueFalse, &[], Some("True"));
        for answer in ["true", "T", "yes", "y", "1"] {
            assert!(grade(&ex, answer).is_correct, "{answer} should be true");
        }
        for answer in ["false", "no", "0", "maybe"] {
            assert!(!grade(&ex, answer).is_correct, "{answer} should not match");
        }
    }

    #[test]
    fn grades_short_answer_ignoring_spacing_and_case() {
        let ex = exercise(ExerciseType::ShortAnswer, &[], Some("Mitochondria  cell"));
        assert!(grade(&ex, "  mitochondria cell ").is_correct);
        assert!(!grade(&ex, "mitochondriacell").is_correct);
    }

    #[test]
    fn essay_is_pending() {
        let ex = exercise(ExerciseType::Essay, &[], None);
        let result = grade(&ex, "A long answer");
        assert!(!result.is_correct);
        assert_eq!(result.status, AttemptStatus::Pending);
        assert_eq!(result.points_awarded, 0);
    }

    #[test]
    fn validates_definitions_per_type() {
        let options = vec!["A".to_string(), "B".to_string()];

        assert!(
            validate_definition(ExerciseType::MultipleChoice, "Q", &options, Some("b"), 5).is_ok()
        );
        assert!(
            validate_definition(ExerciseType::MultipleChoice, "Q", &options, Some("1"), 5).is_ok()
        );
        assert!(
            validate_definition(ExerciseType::MultipleChoice, "Q", &options, Some("C"), 5).is_err()
        );
        assert!(validate_definition(
            ExerciseType::MultipleChoice,
            "Q",
            &options[..1],
            Some("A"),
            5
        )
        .is_err());
        assert!(validate_definition(ExerciseType::MultipleChoice, "Q", &options, None, 5).is_err());

        assert!(validate_definition(ExerciseType::TrueFalse, "Q", &[], Some("no"), 5).is_ok());
        assert!(
            validate_definition(ExerciseType::TrueFalse, "Q", &[], Some("perhaps"), 5).is_err()
        );

        assert!(validate_definition(ExerciseType::ShortAnswer, "Q", &[], Some(" "), 5).is_err());
        assert!(validate_definition(ExerciseType::Essay, "Q", &[], None, 5).is_ok());

        assert!(validate_definition(ExerciseType::Essay, "  ", &[], None, 5).is_err());
        assert!(validate_definition(ExerciseType::Essay, "Q", &[], None, -1).is_err());
    }
}
