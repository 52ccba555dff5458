//! Per-member strengths narrative built from a single self-assessment.

use crate::models::member::{Evaluation, EvaluationAxis};

const STRONG: f64 = 4.0;
const WEAK: f64 = 2.5;

/// Axes sorted by score, highest first. Ties keep declaration order.
fn ranked(evaluation: &Evaluation) -> Vec<(EvaluationAxis, f64)> {
    let mut entries: Vec<(EvaluationAxis, f64)> = EvaluationAxis::ALL
        .iter()
        .map(|axis| (*axis, evaluation.get(*axis)))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
}

fn opening(name: &str, axis: EvaluationAxis, e: &Evaluation) -> String {
    let (lead, follow) = match axis {
        EvaluationAxis::Execution => (
            "목표를 끝까지 완수해내는 강력한 '실행력'이 돋보입니다.",
            if e.grit >= STRONG {
                "장애물에도 굴하지 않는 '끈기'까지 갖추어 어려운 프로젝트도 믿고 맡길 수 있는 인재입니다."
            } else if e.communication >= STRONG {
                "협업 과정에서도 빠르고 명확하게 소통하며 팀의 속도를 높여줍니다."
            } else {
                "다만, 실행 속도만큼 과정에서의 소통도 챙긴다면 더욱 완벽한 성과를 낼 것입니다."
            },
        ),
        EvaluationAxis::Safety => (
            "팀 내에서 '심리적 안정감'을 형성하는 데 핵심적인 역할을 합니다.",
            if e.openness >= STRONG {
                "동료의 다양한 의견을 유연하게 수용하며 창의적인 문화를 만듭니다."
            } else if e.communication >= STRONG {
                "솔직하고 투명한 소통으로 팀의 신뢰 자본을 구축하는 스타일입니다."
            } else {
                "팀의 결속력을 높이는 따뜻한 리더십을 발휘할 수 있습니다."
            },
        ),
        EvaluationAxis::Grit => (
            "쉽게 포기하지 않는 '끈기(Grit)'가 가장 큰 강점입니다.",
            if e.execution >= STRONG {
                "장기적인 목표를 위해 꾸준히 실행하며 반드시 성과를 만들어냅니다."
            } else {
                "어려운 과제에 직면했을 때 팀의 버팀목이 되어줄 것입니다."
            },
        ),
        EvaluationAxis::Impact => (
            "업무의 의미와 '영향력'을 중요하게 여기는 동기부여형 인재입니다.",
            if e.execution >= STRONG {
                "높은 목표 의식을 바탕으로 실제적인 성과를 만들어내는 드라이브가 강합니다."
            } else {
                "팀의 비전과 미션에 깊이 공감하며 동료들에게 영감을 줍니다."
            },
        ),
        EvaluationAxis::Communication => (
            "명확하고 투명한 '소통 능력'이 탁월합니다.",
            if e.safety >= STRONG {
                "동료의 의견을 경청하며 안전한 대화 분위기를 주도합니다."
            } else {
                "복잡한 문제도 원활한 커뮤니케이션으로 풀어가는 해결사 역할을 합니다."
            },
        ),
        EvaluationAxis::Openness => (
            "새로운 아이디어에 열려있는 '개방성'이 강점입니다.",
            if e.impact >= STRONG {
                "변화를 두려워하지 않고 혁신적인 시도를 통해 조직에 임팩트를 만듭니다."
            } else {
                "유연한 사고로 팀에 신선한 관점을 제공합니다."
            },
        ),
    };
    format!("{name}님은 {lead} {follow}")
}

pub fn generate_member_analysis(name: &str, evaluation: &Evaluation) -> String {
    let sorted = ranked(evaluation);

    let Some(&(primary, top_score)) = sorted.first().filter(|(_, s)| *s >= STRONG) else {
        return format!(
            "{name}님은 전반적으로 균형 잡힌 역량을 보유하고 있으며, 특정 분야의 전문성을 개발할 잠재력이 큽니다."
        );
    };

    let mut narrative = opening(name, primary, evaluation);

    // Lowest axis, reported only when it is weak and scores are not all equal.
    if let Some(&(weakest, low_score)) = sorted.last() {
        if low_score <= WEAK && top_score != low_score {
            narrative.push_str(&format!(
                " 단, '{}' 측면에서는 의도적인 노력이나 팀 차원의 보완이 필요할 수 있습니다.",
                weakest.label()
            ));
        }
    }

    narrative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_strong_trait_is_balanced() {
        let text = generate_member_analysis("김민지", &Evaluation::uniform(3.5));
        assert!(text.starts_with("김민지님은 전반적으로 균형"));
    }

    #[test]
    fn test_execution_with_grit() {
        let e = Evaluation {
            execution: 5.0,
            grit: 4.5,
            ..Evaluation::default()
        };
        let text = generate_member_analysis("사라", &e);
        assert!(text.contains("'실행력'"));
        assert!(text.contains("'끈기'까지"));
        assert!(!text.contains("단,"));
    }

    #[test]
    fn test_tie_keeps_axis_order() {
        // safety and openness tie at 4.0; safety is declared first.
        let e = Evaluation {
            safety: 4.0,
            openness: 4.0,
            ..Evaluation::default()
        };
        let text = generate_member_analysis("준", &e);
        assert!(text.contains("'심리적 안정감'을 형성"));
        assert!(text.contains("창의적인 문화"));
    }

    #[test]
    fn test_weak_trait_caution_names_lowest_axis() {
        let e = Evaluation {
            communication: 4.8,
            impact: 2.0,
            grit: 1.0,
            ..Evaluation::default()
        };
        let text = generate_member_analysis("하나", &e);
        assert!(text.contains("'소통 능력'이 탁월"));
        assert!(text.contains("단, '끈기(Grit)' 측면"));
    }

    #[test]
    fn test_openness_with_impact() {
        let e = Evaluation {
            openness: 5.0,
            impact: 4.0,
            ..Evaluation::default()
        };
        let text = generate_member_analysis("윤", &e);
        assert!(text.contains("혁신적인 시도"));
    }
}
