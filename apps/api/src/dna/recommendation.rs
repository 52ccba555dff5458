use serde::{Deserialize, Serialize};

use crate::models::member::{Mbti, Strategy};

pub const CLONE_MATCH_SCORE: u32 = 92;
pub const COMPLEMENT_MATCH_SCORE: u32 = 85;

/// Suggested hire persona for the chosen strategy. A fixed lookup, not a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub persona: String,
    pub reason: String,
    pub conflict: String,
    pub match_score: u32,
}

fn letter_trait(letter: char) -> &'static str {
    match letter {
        'E' => "외향형",
        'I' => "내향형",
        'S' => "현실형",
        'N' => "직관형",
        'T' => "사고형",
        'F' => "감정형",
        'J' => "계획형",
        _ => "탐색형",
    }
}

/// `ENTJ` → `ENTJ (외향형 · 직관형)`, labelling the first two letters.
fn decorate(mbti: &Mbti) -> String {
    let letters = mbti.letters();
    format!(
        "{} ({} · {})",
        mbti.code(),
        letter_trait(letters[0]),
        letter_trait(letters[1])
    )
}

pub fn build_recommendation(team_mbti: &Mbti, strategy: Strategy) -> Recommendation {
    match strategy {
        Strategy::Clone => Recommendation {
            persona: decorate(team_mbti),
            reason: "팀의 핵심 성향과 일치하는 인재로, 빠른 적응과 즉각적인 시너지를 기대할 수 있습니다."
                .to_string(),
            conflict: "비슷한 관점이 강화되어 사각지대가 커지고 집단 사고에 빠질 위험이 있습니다."
                .to_string(),
            match_score: CLONE_MATCH_SCORE,
        },
        Strategy::Complement => Recommendation {
            persona: decorate(&team_mbti.inverted()),
            reason: "팀에 부족한 관점을 채워 의사결정의 균형을 맞추고 새로운 성장 동력을 제공합니다."
                .to_string(),
            conflict: "초기에는 업무 방식 차이로 마찰이 생길 수 있어, 명확한 역할 정의와 온보딩이 필요합니다."
                .to_string(),
            match_score: COMPLEMENT_MATCH_SCORE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mbti(code: &str) -> Mbti {
        code.parse().unwrap()
    }

    #[test]
    fn test_complement_inverts_every_letter() {
        let rec = build_recommendation(&mbti("ENTJ"), Strategy::Complement);
        assert!(rec.persona.starts_with("ISFP "), "persona was {}", rec.persona);
        assert_eq!(rec.match_score, 85);
    }

    #[test]
    fn test_clone_keeps_team_code() {
        let rec = build_recommendation(&mbti("ISTP"), Strategy::Clone);
        assert_eq!(rec.persona, "ISTP (내향형 · 현실형)");
        assert_eq!(rec.match_score, 92);
    }

    #[test]
    fn test_complement_labels_follow_inverted_code() {
        let rec = build_recommendation(&mbti("INFP"), Strategy::Complement);
        assert_eq!(rec.persona, "ESTJ (외향형 · 현실형)");
    }

    #[test]
    fn test_text_is_constant_across_inputs() {
        let a = build_recommendation(&mbti("ENTJ"), Strategy::Clone);
        let b = build_recommendation(&mbti("ISFP"), Strategy::Clone);
        assert_eq!(a.reason, b.reason);
        assert_eq!(a.conflict, b.conflict);
        assert_eq!(a.match_score, b.match_score);
    }
}
