use serde::Serialize;

/// Hiring playbook for one funding stage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringGuide {
    pub stage: &'static str,
    pub title: &'static str,
    pub keywords: &'static [&'static str],
    pub strategy: &'static str,
    pub description: &'static str,
    pub typical_roles: &'static [&'static str],
    pub challenges: &'static str,
    pub solution: &'static str,
    pub investment_scale: &'static str,
}

pub const GUIDES: &[HiringGuide] = &[
    HiringGuide {
        stage: "pre-seed",
        title: "Pre-seed (팀 빌딩)",
        keywords: &["비전", "공동창업", "아이디어", "설득"],
        strategy: "공동 창업자를 모으고 아이디어를 구체화하며 사업의 첫 발을 떼는 단계입니다.",
        description: "비전을 공유하고 초기 제품을 함께 기획할 핵심 멤버를 찾습니다.",
        typical_roles: &["Co-founder (Tech)", "Founding Designer", "Business Generalist"],
        challenges: "구체적인 보상보다는 '비전'으로 사람을 설득해야 하는 어려움이 있습니다. 아직 제품이 없기 때문에 신뢰를 주기가 어렵습니다.",
        solution: "Comes는 창업자의 성향(DNA)을 분석하여, 부족한 역량을 채워줄 수 있는 '상호보완적' 파트너를 찾도록 돕습니다. 또한, 초기 HR 전문가가 직접 투입되어 팀 빌딩 컨설팅을 함께 제공합니다.",
        investment_scale: "1억 원 미만",
    },
    HiringGuide {
        stage: "angel",
        title: "Angel (시장 조사)",
        keywords: &["문제정의", "고객인터뷰", "시장분석", "가설설정"],
        strategy: "타겟 시장의 문제를 정의하고 실제 고객의 목소리를 통해 사업의 가능성을 확인하는 단계입니다.",
        description: "고객 인터뷰 및 시장 조사를 주도적으로 수행할 수 있는 인재가 필요합니다.",
        typical_roles: &["Product Owner", "UX Researcher", "Full-stack Engineer (Prototyping)"],
        challenges: "수많은 가설 중에서 무엇을 먼저 검증할지 판단하기 어렵고, 빠른 실행력이 요구됩니다.",
        solution: "Comes는 초기 가설 검증 경험이 풍부하고, 불확실성을 즐기는 '주도적 성향'의 인재를 매칭합니다. 또한, 초기 HR 전문가가 직접 투입되어 팀 빌딩 컨설팅을 함께 제공합니다.",
        investment_scale: "1억 ~ 5억 원",
    },
    HiringGuide {
        stage: "seed",
        title: "Seed (MVP 개발 및 테스트)",
        keywords: &["MVP", "빠른실행", "PMF", "가설검증"],
        strategy: "최소 기능 제품(MVP)을 제작하여 가설을 검증하고 제품의 시장 적합성(PMF)을 찾아가는 단계입니다.",
        description: "핵심 기능 위주로 빠르게 제품을 개발하고 테스트할 수 있는 빌더가 필요합니다.",
        typical_roles: &["Frontend Engineer", "Backend Engineer", "Growth Marketer (Early)"],
        challenges: "적은 리소스로 빠르게 제품을 만들어야 하며, 기술 부채와 속도 사이의 균형을 잡아야 합니다.",
        solution: "Comes는 화려한 스펙보다 '손이 빠르고(Fast Executor)' 실무 도구 능숙도가 높은 실전형 인재를 추천합니다.",
        investment_scale: "5억 ~ 20억 원",
    },
    HiringGuide {
        stage: "pre-a",
        title: "Pre-A (출시)",
        keywords: &["정식출시", "초기유저", "데이터분석", "운영모델"],
        strategy: "정식 서비스를 시장에 선보이고 초기 유저를 확보하며 운영 데이터 모델을 구축하는 단계입니다.",
        description: "안정적인 서비스 운영과 데이터 기반의 개선이 가능한 인재를 찾습니다.",
        typical_roles: &["Data Analyst", "DevOps Engineer", "Performance Marketer"],
        challenges: "늘어나는 트래픽과 사용자 피드백을 체계적으로 관리하고, 지표를 개선해야 합니다.",
        solution: "Comes는 데이터 리터러시를 갖추고, 체계적인 시스템 구축 경험이 있는 '스케일업(Scale-up)' 인재를 연결합니다.",
        investment_scale: "20억 ~ 50억 원+",
    },
];

pub fn find_guide(stage: &str) -> Option<&'static HiringGuide> {
    let stage = stage.trim().to_ascii_lowercase();
    GUIDES.iter().find(|g| g.stage == stage)
}
