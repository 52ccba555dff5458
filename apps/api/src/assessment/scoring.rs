use std::collections::HashMap;

use serde::Serialize;

use crate::assessment::questions::{find_question, QUESTIONS};
use crate::errors::AppError;
use crate::models::member::{Evaluation, EvaluationAxis};

const MIN_ANSWER: u8 = 1;
const MAX_ANSWER: u8 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentScore {
    pub evaluation: Evaluation,
    /// Fraction of the catalog answered, 0.0 – 1.0.
    pub completion: f64,
}

/// Averages answers per category. Unanswered categories stay neutral.
pub fn score_answers(answers: &HashMap<String, u8>) -> Result<AssessmentScore, AppError> {
    let mut sums: HashMap<EvaluationAxis, (u32, u32)> = HashMap::new();

    for (id, &answer) in answers {
        let question = find_question(id)
            .ok_or_else(|| AppError::Validation(format!("unknown question id '{id}'")))?;

        if !(MIN_ANSWER..=MAX_ANSWER).contains(&answer) {
            return Err(AppError::Validation(format!(
                "answer for '{id}' must be between {MIN_ANSWER} and {MAX_ANSWER}, got {answer}"
            )));
        }

        let entry = sums.entry(question.category).or_insert((0, 0));
        entry.0 += u32::from(answer);
        entry.1 += 1;
    }

    let mut evaluation = Evaluation::default();
    for (axis, (sum, count)) in sums {
        evaluation.set(axis, f64::from(sum) / f64::from(count));
    }

    Ok(AssessmentScore {
        evaluation,
        completion: completion(answers),
    })
}

pub fn completion(answers: &HashMap<String, u8>) -> f64 {
    let answered = QUESTIONS
        .iter()
        .filter(|q| answers.contains_key(q.id))
        .count();
    answered as f64 / QUESTIONS.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::NEUTRAL_SCORE;

    fn answers(pairs: &[(&str, u8)]) -> HashMap<String, u8> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_empty_answers_are_neutral() {
        let score = score_answers(&HashMap::new()).unwrap();
        assert_eq!(score.evaluation, Evaluation::default());
        assert_eq!(score.completion, 0.0);
    }

    #[test]
    fn test_category_mean() {
        let score = score_answers(&answers(&[("ps-1", 5), ("ps-2", 4), ("gr-1", 2)])).unwrap();
        assert!((score.evaluation.safety - 4.5).abs() < 1e-9);
        assert_eq!(score.evaluation.grit, 2.0);
        assert_eq!(score.evaluation.execution, NEUTRAL_SCORE);
    }

    #[test]
    fn test_full_completion() {
        let all: HashMap<String, u8> = QUESTIONS.iter().map(|q| (q.id.to_string(), 4)).collect();
        let score = score_answers(&all).unwrap();
        assert_eq!(score.completion, 1.0);
        assert_eq!(score.evaluation, Evaluation::uniform(4.0));
    }

    #[test]
    fn test_unknown_question_rejected() {
        let err = score_answers(&answers(&[("xx-1", 3)])).unwrap_err();
        assert!(err.to_string().contains("unknown question id 'xx-1'"));
    }

    #[test]
    fn test_out_of_range_answer_rejected() {
        assert!(score_answers(&answers(&[("ps-1", 0)])).is_err());
        assert!(score_answers(&answers(&[("ps-1", 6)])).is_err());
    }
}
