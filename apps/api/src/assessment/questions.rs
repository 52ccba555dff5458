use serde::Serialize;

use crate::models::member::EvaluationAxis;

/// One Likert item (1 = 전혀 아님 … 5 = 매우 그렇다).
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentQuestion {
    pub id: &'static str,
    pub category: EvaluationAxis,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,
}

const fn question(
    id: &'static str,
    category: EvaluationAxis,
    text: &'static str,
    source: &'static str,
) -> AssessmentQuestion {
    AssessmentQuestion {
        id,
        category,
        text,
        source: Some(source),
    }
}

pub const QUESTIONS: &[AssessmentQuestion] = &[
    // Psychological safety: Amy Edmondson
    question(
        "ps-1",
        EvaluationAxis::Safety,
        "나는(이 분은) 실수를 하더라도 숨기지 않고 솔직하게 공유하며, 이를 학습의 기회로 삼는다.",
        "Amy Edmondson",
    ),
    question(
        "ps-2",
        EvaluationAxis::Safety,
        "나는(이 분은) 동료들에게 어려운 문제나 걱정거리를 제기하는 것에 대해 주저함이 없다.",
        "Amy Edmondson",
    ),
    question(
        "ps-3",
        EvaluationAxis::Safety,
        "나는(이 분은) 나의 독특한 기술이나 재능을 팀에서 적극적으로 활용하려고 노력한다.",
        "Amy Edmondson",
    ),
    question(
        "ps-4",
        EvaluationAxis::Safety,
        "나는(이 분은) 모르는 것이 있을 때 동료에게 도움을 요청하는 것을 부끄러워하지 않는다.",
        "Amy Edmondson",
    ),
    // Execution
    question(
        "ex-1",
        EvaluationAxis::Execution,
        "나는(이 분은) 목표를 달성하기 위해 구체적이고 명확한 행동 계획을 수립하는 편이다.",
        "High Performance Models",
    ),
    question(
        "ex-2",
        EvaluationAxis::Execution,
        "결정이 내려지면, 지체 없이 실행에 옮기며 약속된 기한을 철저히 준수한다.",
        "High Performance Models",
    ),
    question(
        "ex-3",
        EvaluationAxis::Execution,
        "업무 진행 과정에서의 병목 현상이나 장애물을 만나면 주도적으로 해결책을 찾는다.",
        "High Performance Models",
    ),
    // Grit: Angela Duckworth
    question(
        "gr-1",
        EvaluationAxis::Grit,
        "나는(이 분은) 좌절이나 실패를 겪더라도 쉽게 포기하지 않고 끝까지 목표를 추구한다.",
        "Angela Duckworth",
    ),
    question(
        "gr-2",
        EvaluationAxis::Grit,
        "장기적인 성과를 위해 당장의 지루함이나 어려움을 견뎌내는 인내심이 있다.",
        "Angela Duckworth",
    ),
    question(
        "gr-3",
        EvaluationAxis::Grit,
        "프로젝트가 어려워져도 처음의 열정과 관심을 유지하며 끝까지 마무리한다.",
        "Angela Duckworth",
    ),
    // Openness: Big Five
    question(
        "op-1",
        EvaluationAxis::Openness,
        "나는(이 분은) 기존의 방식에 얽매이지 않고 새로운 아이디어와 접근 방식을 적극 수용한다.",
        "Big Five Inventory",
    ),
    question(
        "op-2",
        EvaluationAxis::Openness,
        "다양한 배경이나 관점을 가진 사람들과 일하는 것을 즐기며, 이를 배움의 기회로 여긴다.",
        "Big Five Inventory",
    ),
    question(
        "op-3",
        EvaluationAxis::Openness,
        "변화하는 상황이나 불확실성에 대해 불안해하기보다 유연하게 대처한다.",
        "Big Five Inventory",
    ),
    // Impact: Project Aristotle
    question(
        "im-1",
        EvaluationAxis::Impact,
        "나는(이 분은) 자신의 업무가 조직과 고객에게 긍정적인 영향을 미친다고 믿으며 일한다.",
        "Project Aristotle",
    ),
    question(
        "im-2",
        EvaluationAxis::Impact,
        "내가 하는 일의 의미와 목적에 대해 명확하게 인지하고 있으며, 이를 중요하게 생각한다.",
        "Project Aristotle",
    ),
    // Communication
    question(
        "cm-1",
        EvaluationAxis::Communication,
        "나는(이 분은) 정보를 투명하게 공유하며, 동료들에게 예의 바르고 솔직하게 소통한다.",
        "Google re:Work",
    ),
    question(
        "cm-2",
        EvaluationAxis::Communication,
        "동료의 의견을 경청하며, 내 의견과 다르더라도 존중하는 태도를 유지한다.",
        "Active Listening",
    ),
];

pub fn questions_by_category(category: EvaluationAxis) -> Vec<&'static AssessmentQuestion> {
    QUESTIONS.iter().filter(|q| q.category == category).collect()
}

pub fn find_question(id: &str) -> Option<&'static AssessmentQuestion> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_seventeen_unique_ids() {
        assert_eq!(QUESTIONS.len(), 17);
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn test_every_axis_has_questions() {
        for axis in EvaluationAxis::ALL {
            assert!(
                !questions_by_category(axis).is_empty(),
                "no questions for {axis:?}"
            );
        }
    }

    #[test]
    fn test_category_filter_keeps_catalog_order() {
        let ids: Vec<_> = questions_by_category(EvaluationAxis::Safety)
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec!["ps-1", "ps-2", "ps-3", "ps-4"]);
    }

    #[test]
    fn test_find_question() {
        assert_eq!(
            find_question("gr-2").map(|q| q.category),
            Some(EvaluationAxis::Grit)
        );
        assert!(find_question("zz-9").is_none());
    }
}
