//! Team DNA analysis: the single entry point the hiring-request flow calls.
//!
//! Pure and synchronous: the full result is recomputed from the roster on
//! every call. Members without an MBTI are left out of the personality
//! vector but still count toward evaluation averages and role balance.

use serde::{Deserialize, Serialize};

use crate::dna::readiness::{compute_readiness, growth_grade, RadarPoint, ReadinessMetrics};
use crate::dna::recommendation::{build_recommendation, Recommendation};
use crate::dna::roadmap::{build_roadmap, RoadmapInputs};
use crate::dna::role_balance::{compute_role_balance, RoleBalance, RoleShares};
use crate::dna::vector::{
    aggregate_vector, deficiencies, deficiency_description, dna_description, dominant_traits,
    resolve_leader, MbtiVector,
};
use crate::models::member::{Strategy, TeamMember};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub mbti_vector: MbtiVector,
    pub recommended_mbti: String,
    pub dominant_traits: Vec<String>,
    pub deficiencies: Vec<String>,
    pub dna_description: String,
    pub deficiency_description: String,
    pub recommendation: Recommendation,
    pub radar_data: Vec<RadarPoint>,
    pub growth_score: u32,
    pub growth_grade: String,
    pub readiness_metrics: ReadinessMetrics,
    pub role_balance: RoleBalance,
    pub role_shares: RoleShares,
    pub understaffed: bool,
    pub leader_id: Option<String>,
    pub roadmap: Vec<String>,
}

pub fn compute_team_analysis(roster: &[TeamMember], strategy: Strategy) -> AnalysisResult {
    let leader = resolve_leader(roster);
    let vector = aggregate_vector(roster, leader);
    let team_mbti = vector.recommended_mbti();

    let dominant = dominant_traits(&vector);
    let missing = deficiencies(&vector);
    let recommendation = build_recommendation(&team_mbti, strategy);

    let readiness = compute_readiness(roster);
    let role_balance = compute_role_balance(roster);

    let roadmap = build_roadmap(&RoadmapInputs {
        team_size: roster.len(),
        metrics: &readiness.metrics,
        deficiencies: &missing,
        recommended_mbti: &team_mbti,
    });

    let leader_id = leader.and_then(|i| roster.get(i)).map(|m| m.id.clone());

    tracing::debug!(
        members = roster.len(),
        leader = ?leader_id,
        team_mbti = %team_mbti,
        growth_score = readiness.growth_score,
        "team analysis computed"
    );

    AnalysisResult {
        mbti_vector: vector,
        recommended_mbti: team_mbti.code(),
        dominant_traits: dominant,
        deficiencies: missing,
        dna_description: dna_description(&vector).to_string(),
        deficiency_description: deficiency_description(&vector).to_string(),
        recommendation,
        radar_data: readiness.radar,
        growth_score: readiness.growth_score,
        growth_grade: growth_grade(readiness.growth_score).to_string(),
        readiness_metrics: readiness.metrics,
        role_shares: role_balance.shares(),
        understaffed: role_balance.is_understaffed(),
        role_balance,
        leader_id,
        roadmap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::Evaluation;

    fn member(id: &str, role: &str, mbti: &str, is_leader: bool) -> TeamMember {
        let mut m = TeamMember::new(id, id, role);
        m.mbti = if mbti.is_empty() {
            None
        } else {
            Some(mbti.parse().unwrap())
        };
        m.is_leader = is_leader;
        m
    }

    #[test]
    fn test_empty_roster_does_not_panic() {
        let result = compute_team_analysis(&[], Strategy::Complement);
        assert!(result.radar_data.is_empty());
        assert_eq!(result.mbti_vector, MbtiVector::default());
        assert_eq!(result.recommended_mbti, "INFP");
        assert_eq!(result.growth_score, 0);
        assert_eq!(result.leader_id, None);
        assert!(result.dominant_traits.is_empty());
        assert!(result.deficiencies.is_empty());
    }

    #[test]
    fn test_leader_weighted_team() {
        let roster = vec![
            member("ceo", "CEO", "ENTJ", true),
            member("dev", "Backend Developer", "INTJ", false),
            member("des", "Product Designer", "ENTP", false),
        ];
        let result = compute_team_analysis(&roster, Strategy::Complement);

        // others: EI 0, SN -1, TF 1, JP 0 → blended with ENTJ
        assert_eq!(
            result.mbti_vector,
            MbtiVector {
                ei: 0.5,
                sn: -1.0,
                tf: 1.0,
                jp: 0.5
            }
        );
        assert_eq!(result.recommended_mbti, "ENTJ");
        assert!(result.recommendation.persona.starts_with("ISFP"));
        assert_eq!(result.recommendation.match_score, 85);
        assert_eq!(result.leader_id.as_deref(), Some("ceo"));
        assert_eq!(
            result.dominant_traits,
            vec!["E (외향)", "N (직관)", "T (사고)", "J (판단)"]
        );
        assert_eq!(result.deficiencies, vec!["S (현실감각)", "F (공감)"]);
        assert!(result.dna_description.starts_with("전략적 실행가"));
        assert_eq!(
            result.role_balance,
            RoleBalance {
                hacker: 1.0,
                hustler: 1.0,
                hipster: 1.0
            }
        );
    }

    #[test]
    fn test_founder_fallback_role_balance() {
        let roster = vec![member("f", "Founder", "ISTP", false)];
        let result = compute_team_analysis(&roster, Strategy::Clone);
        assert_eq!(
            result.role_balance,
            RoleBalance {
                hacker: 0.5,
                hustler: 0.0,
                hipster: 0.0
            }
        );
        assert!(result.understaffed);
    }

    #[test]
    fn test_roadmap_small_weak_team() {
        let mut solo = member("s", "Founder", "ESTJ", true);
        solo.evaluation = Evaluation::uniform(1.0);
        let result = compute_team_analysis(&[solo], Strategy::Clone);

        assert_eq!(result.growth_score, 30);
        assert_eq!(result.growth_grade, "C-");
        assert_eq!(result.roadmap.len(), 5);
        assert!(result.roadmap[4].contains("ESTJ"));
    }

    #[test]
    fn test_blank_mbti_still_counts_for_evaluation() {
        let mut strong = member("a", "Engineer", "ISTJ", false);
        strong.evaluation = Evaluation::uniform(5.0);
        let mut unknown = member("b", "Engineer", "", false);
        unknown.evaluation = Evaluation::uniform(3.0);

        let result = compute_team_analysis(&[strong, unknown], Strategy::Clone);
        // MBTI comes only from the first member.
        assert_eq!(result.recommended_mbti, "ISTJ");
        // Evaluation averages both: (100 + 60) / 2.
        assert!(result.radar_data.iter().all(|p| (p.value - 80.0).abs() < 1e-9));
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let roster = vec![
            member("a", "CTO", "INTJ", true),
            member("b", "Growth Marketer", "ESFP", false),
            member("c", "Founder", "", false),
        ];
        let first = compute_team_analysis(&roster, Strategy::Complement);
        let second = compute_team_analysis(&roster, Strategy::Complement);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = compute_team_analysis(&[member("a", "CTO", "INTJ", true)], Strategy::Clone);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("mbtiVector").is_some());
        assert!(json["mbtiVector"].get("EI").is_some());
        assert!(json.get("recommendedMbti").is_some());
        assert!(json.get("radarData").is_some());
        assert!(json["recommendation"].get("matchScore").is_some());
        assert!(json.get("roleBalance").is_some());
    }
}
