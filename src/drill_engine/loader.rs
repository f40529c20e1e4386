//! Exercise set loading and boundary validation.
//!
//! The exercise data arrives fully materialized as a JSON array. Everything
//! the interaction core assumes about it is checked here, once, so a bad
//! record fails loudly before the first exercise is shown.

use std::collections::HashSet;

use crate::drill_engine::{error::ExerciseError, models::Exercise};

/// Parse a JSON array of exercises and validate it.
pub fn load_exercises(json: &str) -> Result<Vec<Exercise>, ExerciseError> {
    let exercises: Vec<Exercise> = serde_json::from_str(json)?;
    validate_exercises(&exercises)?;
    tracing::debug!(count = exercises.len(), "loaded exercise set");
    Ok(exercises)
}

/// Check the invariants the interaction core relies on.
pub fn validate_exercises(exercises: &[Exercise]) -> Result<(), ExerciseError> {
    if exercises.is_empty() {
        return Err(ExerciseError::EmptyPool);
    }

    let mut ids = HashSet::with_capacity(exercises.len());
    for (index, ex) in exercises.iter().enumerate() {
        let required = [
            ("id",     &ex.id),
            ("type",   &ex.kind),
            ("prompt", &ex.prompt),
            ("answer", &ex.answer),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ExerciseError::MissingField { index, field });
            }
        }

        if !ids.insert(ex.id.as_str()) {
            return Err(ExerciseError::DuplicateId { id: ex.id.clone() });
        }

        if !ex.choices.is_empty() && !ex.choices.iter().any(|c| c == &ex.answer) {
            return Err(ExerciseError::AnswerNotAmongChoices { id: ex.id.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::models::InteractionMode;

    const SAMPLE: &str = r#"[
        { "id": "e1", "type": "vocab", "prompt": "house?", "answer": "dom" },
        { "id": "e2", "type": "vocab", "prompt": "cat?", "answer": "kot",
          "choices": ["dom", "kot", "pies"], "explanation": "kot = cat" }
    ]"#;

    #[test]
    fn loads_free_text_and_multiple_choice() {
        let set = load_exercises(SAMPLE).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].mode(), InteractionMode::FreeText);
        assert_eq!(set[0].explanation, None);
        assert_eq!(set[1].mode(), InteractionMode::MultipleChoice);
        assert_eq!(set[1].kind, "vocab");
        assert_eq!(set[1].explanation.as_deref(), Some("kot = cat"));
    }

    #[test]
    fn missing_required_field_is_a_json_error() {
        let err = load_exercises(r#"[{ "id": "e1", "type": "vocab", "answer": "dom" }]"#)
            .unwrap_err();
        assert!(matches!(err, ExerciseError::Json(_)), "got {err:?}");
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let err = load_exercises(r#"[{ "id": "e1", "type": "vocab", "prompt": "?", "answer": "  " }]"#)
            .unwrap_err();
        assert!(matches!(err, ExerciseError::MissingField { index: 0, field: "answer" }));
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(load_exercises("[]"), Err(ExerciseError::EmptyPool)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let set = vec![
            Exercise::new("a", "vocab", "1?", "x"),
            Exercise::new("a", "vocab", "2?", "y"),
        ];
        let err = validate_exercises(&set).unwrap_err();
        assert!(matches!(err, ExerciseError::DuplicateId { ref id } if id == "a"));
    }

    #[test]
    fn answer_must_be_one_of_the_choices() {
        let set = vec![Exercise::new("m", "vocab", "?", "dom").with_choices(["kot", "pies"])];
        let err = validate_exercises(&set).unwrap_err();
        assert!(matches!(err, ExerciseError::AnswerNotAmongChoices { ref id } if id == "m"));
    }
}
