//! Hacker / Hustler / Hipster split.
//!
//! Role titles are matched case-insensitively against keyword lists in a
//! fixed order. Titles with no keyword fall back to the member's own MBTI
//! vector and add half a point.

use serde::{Deserialize, Serialize};

use crate::dna::vector::member_vector;
use crate::models::member::TeamMember;

const HACKER_KEYWORDS: &[&str] = &["dev", "engineer", "cto", "tech", "architect"];
const HUSTLER_KEYWORDS: &[&str] = &["biz", "sale", "marketer", "ceo", "op", "growth"];
const HIPSTER_KEYWORDS: &[&str] = &["design", "product", "art", "cx", "ux"];

const FALLBACK_WEIGHT: f64 = 0.5;

/// Minimum headcount for a complete 3H founding team.
pub const GOLDEN_TRIANGLE_SIZE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleArchetype {
    Hacker,
    Hustler,
    Hipster,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleBalance {
    pub hacker: f64,
    pub hustler: f64,
    pub hipster: f64,
}

/// Whole-percent share of each archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleShares {
    pub hacker: u32,
    pub hustler: u32,
    pub hipster: u32,
}

impl RoleBalance {
    pub fn total(&self) -> f64 {
        self.hacker + self.hustler + self.hipster
    }

    fn add(&mut self, archetype: RoleArchetype, weight: f64) {
        match archetype {
            RoleArchetype::Hacker => self.hacker += weight,
            RoleArchetype::Hustler => self.hustler += weight,
            RoleArchetype::Hipster => self.hipster += weight,
        }
    }

    pub fn shares(&self) -> RoleShares {
        let total = match self.total() {
            t if t > 0.0 => t,
            _ => 1.0,
        };
        let percent = |value: f64| ((value / total) * 100.0).round() as u32;
        RoleShares {
            hacker: percent(self.hacker),
            hustler: percent(self.hustler),
            hipster: percent(self.hipster),
        }
    }

    pub fn is_understaffed(&self) -> bool {
        self.total() < GOLDEN_TRIANGLE_SIZE
    }
}

/// Keyword classification of a role title; `None` when nothing matches.
pub fn classify_role(role: &str) -> Option<RoleArchetype> {
    let role_lower = role.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| role_lower.contains(k));

    if matches(HACKER_KEYWORDS) {
        Some(RoleArchetype::Hacker)
    } else if matches(HUSTLER_KEYWORDS) {
        Some(RoleArchetype::Hustler)
    } else if matches(HIPSTER_KEYWORDS) {
        Some(RoleArchetype::Hipster)
    } else {
        None
    }
}

fn classify_by_personality(member: &TeamMember) -> RoleArchetype {
    let v = member_vector(member);
    if v.tf > 0.0 {
        RoleArchetype::Hacker
    } else if v.ei > 0.0 {
        RoleArchetype::Hustler
    } else {
        RoleArchetype::Hipster
    }
}

pub fn compute_role_balance(roster: &[TeamMember]) -> RoleBalance {
    let mut balance = RoleBalance::default();
    for member in roster {
        match classify_role(&member.role) {
            Some(archetype) => balance.add(archetype, 1.0),
            None => balance.add(classify_by_personality(member), FALLBACK_WEIGHT),
        }
    }
    balance
}
