//! MBTI vector aggregation: turns a roster into a four-axis team vector.
//!
//! Each member with a code maps to ±1 per axis. The leader (if any) is blended
//! at 50% against the mean of everyone else, so the leader sets half the
//! culture regardless of headcount. Members without a code are excluded from
//! the averages entirely rather than contributing zeros.

use serde::{Deserialize, Serialize};

use crate::models::member::{Mbti, TeamMember};

/// Above this magnitude an axis letter is reported as dominant.
pub const DOMINANT_THRESHOLD: f64 = 0.3;
/// Above this magnitude the opposite letter is reported as missing.
pub const DEFICIENCY_THRESHOLD: f64 = 0.5;

/// Team position on the four MBTI axes, each in [-1, 1].
/// Positive means E, S, T, J respectively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MbtiVector {
    #[serde(rename = "EI")]
    pub ei: f64,
    #[serde(rename = "SN")]
    pub sn: f64,
    #[serde(rename = "TF")]
    pub tf: f64,
    #[serde(rename = "JP")]
    pub jp: f64,
}

impl MbtiVector {
    pub fn from_mbti(mbti: &Mbti) -> Self {
        let sign = |positive: bool| if positive { 1.0 } else { -1.0 };
        Self {
            ei: sign(mbti.extravert),
            sn: sign(mbti.sensing),
            tf: sign(mbti.thinking),
            jp: sign(mbti.judging),
        }
    }

    fn add(self, other: MbtiVector) -> MbtiVector {
        MbtiVector {
            ei: self.ei + other.ei,
            sn: self.sn + other.sn,
            tf: self.tf + other.tf,
            jp: self.jp + other.jp,
        }
    }

    fn div(self, divisor: f64) -> MbtiVector {
        MbtiVector {
            ei: self.ei / divisor,
            sn: self.sn / divisor,
            tf: self.tf / divisor,
            jp: self.jp / divisor,
        }
    }

    /// Code read off the axis signs; zero counts as the negative letter.
    pub fn recommended_mbti(&self) -> Mbti {
        Mbti {
            extravert: self.ei > 0.0,
            sensing: self.sn > 0.0,
            thinking: self.tf > 0.0,
            judging: self.jp > 0.0,
        }
    }
}

/// Per-member vector. Unset codes yield the zero vector.
pub fn member_vector(member: &TeamMember) -> MbtiVector {
    member
        .mbti
        .as_ref()
        .map(MbtiVector::from_mbti)
        .unwrap_or_default()
}

/// Index of the leader whose flag is honoured: the first flagged member.
pub fn resolve_leader(roster: &[TeamMember]) -> Option<usize> {
    let mut flagged = roster.iter().enumerate().filter(|(_, m)| m.is_leader);
    let first = flagged.next().map(|(i, _)| i);

    let ignored = flagged.count();
    if ignored > 0 {
        tracing::debug!(ignored, "multiple leaders flagged; keeping the first");
    }

    first
}

/// Aggregates the roster into a single team vector.
pub fn aggregate_vector(roster: &[TeamMember], leader: Option<usize>) -> MbtiVector {
    let leader_vec = leader
        .and_then(|i| roster.get(i))
        .and_then(|m| m.mbti.as_ref())
        .map(MbtiVector::from_mbti);

    let others: Vec<MbtiVector> = roster
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != leader)
        .filter_map(|(_, m)| m.mbti.as_ref().map(MbtiVector::from_mbti))
        .collect();

    let others_vec = if others.is_empty() {
        MbtiVector::default()
    } else {
        others
            .iter()
            .fold(MbtiVector::default(), |acc, v| acc.add(*v))
            .div(others.len() as f64)
    };

    match leader_vec {
        Some(lv) if !others.is_empty() => lv.add(others_vec).div(2.0),
        Some(lv) => lv,
        None => others_vec,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait labels
// ────────────────────────────────────────────────────────────────────────────

struct AxisLabels {
    positive_trait: &'static str,
    negative_trait: &'static str,
    /// Reported when the axis leans hard negative: the positive letter is missing.
    positive_missing: &'static str,
    /// Reported when the axis leans hard positive: the negative letter is missing.
    negative_missing: &'static str,
}

static EI_LABELS: AxisLabels = AxisLabels {
    positive_trait: "E (외향)",
    negative_trait: "I (내향)",
    positive_missing: "E (추진력)",
    negative_missing: "I (신중함)",
};

static SN_LABELS: AxisLabels = AxisLabels {
    positive_trait: "S (감각)",
    negative_trait: "N (직관)",
    positive_missing: "S (현실감각)",
    negative_missing: "N (비전)",
};

static TF_LABELS: AxisLabels = AxisLabels {
    positive_trait: "T (사고)",
    negative_trait: "F (감정)",
    positive_missing: "T (논리)",
    negative_missing: "F (공감)",
};

static JP_LABELS: AxisLabels = AxisLabels {
    positive_trait: "J (판단)",
    negative_trait: "P (인식)",
    positive_missing: "J (체계)",
    negative_missing: "P (유연성)",
};

fn axes(vector: &MbtiVector) -> [(f64, &'static AxisLabels); 4] {
    [
        (vector.ei, &EI_LABELS),
        (vector.sn, &SN_LABELS),
        (vector.tf, &TF_LABELS),
        (vector.jp, &JP_LABELS),
    ]
}

/// Letters whose axis magnitude exceeds [`DOMINANT_THRESHOLD`], in EI/SN/TF/JP order.
pub fn dominant_traits(vector: &MbtiVector) -> Vec<String> {
    axes(vector)
        .iter()
        .filter(|(score, _)| score.abs() > DOMINANT_THRESHOLD)
        .map(|(score, labels)| {
            if *score > 0.0 {
                labels.positive_trait.to_string()
            } else {
                labels.negative_trait.to_string()
            }
        })
        .collect()
}

/// Opposite letters of axes whose magnitude exceeds [`DEFICIENCY_THRESHOLD`].
pub fn deficiencies(vector: &MbtiVector) -> Vec<String> {
    axes(vector)
        .iter()
        .filter(|(score, _)| score.abs() > DEFICIENCY_THRESHOLD)
        .map(|(score, labels)| {
            if *score > 0.0 {
                labels.negative_missing.to_string()
            } else {
                labels.positive_missing.to_string()
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Narratives
// ────────────────────────────────────────────────────────────────────────────

const DNA_BALANCED: &str =
    "균형 잡힌 팀: 특정 성향에 치우치지 않아 다양한 상황에 유연하게 대응할 수 있습니다.";

/// Picks the team-DNA narrative. Checks run in order; the first match wins.
pub fn dna_description(vector: &MbtiVector) -> &'static str {
    let (sn, tf, jp) = (vector.sn, vector.tf, vector.jp);

    if sn < 0.0 && tf > 0.0 && jp > 0.0 {
        "전략적 실행가 팀: 큰 그림을 논리적으로 설계하고 체계적으로 밀어붙이는 추진력이 강합니다."
    } else if sn < 0.0 && tf < 0.0 {
        "비전 공감형 팀: 사람과 가치에 집중하며 구성원에게 영감을 주는 문화를 만듭니다."
    } else if sn < 0.0 && jp < 0.0 {
        "탐험가 팀: 새로운 아이디어를 빠르게 시도하고 변화에 민첩하게 적응합니다."
    } else if sn > 0.0 && jp > 0.0 {
        "안정적 운영가 팀: 검증된 방식과 명확한 프로세스로 꾸준한 성과를 만들어냅니다."
    } else if sn > 0.0 && jp < 0.0 {
        "현장 해결사 팀: 눈앞의 문제를 실용적으로 빠르게 해결하는 데 강합니다."
    } else {
        DNA_BALANCED
    }
}

/// Picks the deficiency narrative for the strongest-leaning axis order EI, SN, TF, JP.
pub fn deficiency_description(vector: &MbtiVector) -> &'static str {
    if vector.ei > DEFICIENCY_THRESHOLD {
        "외향적인 에너지가 넘치는 만큼, 한 걸음 물러서 깊이 검토하는 신중함이 부족할 수 있습니다."
    } else if vector.ei < -DEFICIENCY_THRESHOLD {
        "내부 숙고에 강한 반면, 외부와 적극적으로 연결하고 밀어붙이는 추진력이 부족할 수 있습니다."
    } else if vector.sn > DEFICIENCY_THRESHOLD {
        "현실 감각이 뛰어나지만, 장기적인 방향을 제시하는 비전이 부족할 수 있습니다."
    } else if vector.sn < -DEFICIENCY_THRESHOLD {
        "아이디어는 풍부하지만, 이를 현실로 옮기는 구체적인 실행 감각이 부족할 수 있습니다."
    } else if vector.tf > DEFICIENCY_THRESHOLD {
        "논리적 판단이 강한 만큼, 구성원의 감정을 살피는 공감이 부족할 수 있습니다."
    } else if vector.tf < -DEFICIENCY_THRESHOLD {
        "관계와 조화를 중시하는 만큼, 냉정한 의사결정을 내리는 논리가 부족할 수 있습니다."
    } else if vector.jp > DEFICIENCY_THRESHOLD {
        "계획과 체계가 탄탄하지만, 예상치 못한 변화에 대응하는 유연성이 부족할 수 있습니다."
    } else if vector.jp < -DEFICIENCY_THRESHOLD {
        "유연하고 즉흥적인 만큼, 일을 마무리 짓는 체계가 부족할 수 있습니다."
    } else {
        "뚜렷하게 결핍된 성향이 없습니다. 채용 전략은 팀 목표를 기준으로 선택하세요."
    }
}
