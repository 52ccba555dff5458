use crate::dna::readiness::ReadinessMetrics;
use crate::models::member::Mbti;

/// Below this sub-metric value the roadmap suggests a remedy.
pub const METRIC_ALERT_THRESHOLD: f64 = 60.0;
pub const MIN_TEAM_SIZE: usize = 3;

/// Inputs the roadmap reads; all already computed by the other stages.
pub struct RoadmapInputs<'a> {
    pub team_size: usize,
    pub metrics: &'a ReadinessMetrics,
    pub deficiencies: &'a [String],
    pub recommended_mbti: &'a Mbti,
}

/// Ordered advisory list. Every check runs; none suppresses another.
pub fn build_roadmap(inputs: &RoadmapInputs<'_>) -> Vec<String> {
    let mut roadmap = Vec::new();

    if inputs.team_size < MIN_TEAM_SIZE {
        roadmap.push(
            "핵심 인력 확보: 팀 규모가 작아 역할 공백이 큽니다. Hacker·Hustler·Hipster 3축을 먼저 채우세요."
                .to_string(),
        );
    }

    if inputs.metrics.stability < METRIC_ALERT_THRESHOLD {
        roadmap.push(
            "심리적 안정감 강화: 정기 1:1과 회고를 도입해 실패를 솔직하게 공유하는 문화를 만드세요."
                .to_string(),
        );
    }

    if inputs.metrics.velocity < METRIC_ALERT_THRESHOLD {
        roadmap.push(
            "실행 속도 개선: 주간 목표와 마감 기준을 명확히 하고 병목을 빠르게 해소할 오너를 지정하세요."
                .to_string(),
        );
    }

    if inputs.metrics.innovation < METRIC_ALERT_THRESHOLD {
        roadmap.push(
            "혁신 역량 확보: 새로운 시도를 장려하는 실험 예산과 아이디어 공유 채널을 마련하세요."
                .to_string(),
        );
    }

    if let Some(top) = inputs.deficiencies.first() {
        roadmap.push(format!(
            "성향 보완 채용: 현재 팀 성향은 {}입니다. 이 성향에서 부족한 '{top}' 역량을 갖춘 인재 영입을 검토하세요.",
            inputs.recommended_mbti
        ));
    }

    roadmap
}
