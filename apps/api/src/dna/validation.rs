use std::collections::HashSet;

use crate::errors::AppError;
use crate::models::member::{EvaluationAxis, TeamMember};

const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 5.0;

/// Checks a submitted roster before it reaches the engine.
///
/// Every problem is collected into one `Validation` error. More than one
/// leader flag is not an error; the engine keeps the first.
pub fn validate_roster(roster: &[TeamMember], max_size: usize) -> Result<(), AppError> {
    let mut problems = Vec::new();

    if roster.len() > max_size {
        problems.push(format!(
            "roster has {} members; at most {max_size} are allowed",
            roster.len()
        ));
    }

    let mut seen_ids = HashSet::new();
    for (index, member) in roster.iter().enumerate() {
        let position = index + 1;

        if member.id.trim().is_empty() {
            problems.push(format!("member #{position}: id cannot be empty"));
        } else if !seen_ids.insert(member.id.as_str()) {
            problems.push(format!("member #{position}: duplicate id '{}'", member.id));
        }

        if member.name.trim().is_empty() {
            problems.push(format!("member #{position}: name cannot be empty"));
        }
        if member.role.trim().is_empty() {
            problems.push(format!("member #{position}: role cannot be empty"));
        }

        for axis in EvaluationAxis::ALL {
            let score = member.evaluation.get(axis);
            if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                problems.push(format!(
                    "member #{position}: {axis:?} score {score} is outside 1–5"
                ));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::Evaluation;

    #[test]
    fn test_valid_roster_passes() {
        let roster = vec![
            TeamMember::new("a", "김민지", "Frontend Engineer"),
            TeamMember::new("b", "사라 첸", "Senior Engineer"),
        ];
        assert!(validate_roster(&roster, 50).is_ok());
    }

    #[test]
    fn test_empty_roster_passes() {
        assert!(validate_roster(&[], 50).is_ok());
    }

    #[test]
    fn test_multiple_leaders_are_allowed() {
        let mut a = TeamMember::new("a", "A", "CEO");
        a.is_leader = true;
        let mut b = TeamMember::new("b", "B", "CTO");
        b.is_leader = true;
        assert!(validate_roster(&[a, b], 50).is_ok());
    }

    #[test]
    fn test_collects_every_problem() {
        let mut bad = TeamMember::new("a", " ", "");
        bad.evaluation = Evaluation {
            grit: 7.0,
            ..Evaluation::default()
        };
        let dup = TeamMember::new("a", "B", "Designer");

        let err = validate_roster(&[bad, dup], 50).unwrap_err();
        let AppError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert!(msg.contains("name cannot be empty"), "{msg}");
        assert!(msg.contains("role cannot be empty"), "{msg}");
        assert!(msg.contains("Grit score 7"), "{msg}");
        assert!(msg.contains("duplicate id 'a'"), "{msg}");
    }

    #[test]
    fn test_roster_size_limit() {
        let roster: Vec<TeamMember> = (0..3)
            .map(|i| TeamMember::new(&format!("m{i}"), "N", "Engineer"))
            .collect();
        let err = validate_roster(&roster, 2).unwrap_err();
        assert!(err.to_string().contains("at most 2"));
    }

    #[test]
    fn test_nan_score_rejected() {
        let mut m = TeamMember::new("a", "A", "Engineer");
        m.evaluation.safety = f64::NAN;
        assert!(validate_roster(&[m], 50).is_err());
    }
}
