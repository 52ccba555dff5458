use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// MBTI code
// ────────────────────────────────────────────────────────────────────────────

/// A four-letter personality code, stored as one flag per axis.
///
/// Each flag is `true` for the "positive" letter of its axis (E, S, T, J)
/// and `false` for its pair (I, N, F, P).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mbti {
    pub extravert: bool,
    pub sensing: bool,
    pub thinking: bool,
    pub judging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid MBTI code '{0}': expected four letters from E/I, S/N, T/F, J/P")]
pub struct InvalidMbti(pub String);

impl Mbti {
    pub fn letters(&self) -> [char; 4] {
        [
            if self.extravert { 'E' } else { 'I' },
            if self.sensing { 'S' } else { 'N' },
            if self.thinking { 'T' } else { 'F' },
            if self.judging { 'J' } else { 'P' },
        ]
    }

    pub fn code(&self) -> String {
        self.letters().iter().collect()
    }

    /// Flips every letter to its pair: E↔I, S↔N, T↔F, J↔P.
    pub fn inverted(&self) -> Mbti {
        Mbti {
            extravert: !self.extravert,
            sensing: !self.sensing,
            thinking: !self.thinking,
            judging: !self.judging,
        }
    }
}

impl FromStr for Mbti {
    type Err = InvalidMbti;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let letters: Vec<char> = upper.chars().collect();
        if letters.len() != 4 {
            return Err(InvalidMbti(s.to_string()));
        }

        let axis = |c: char, pos: char, neg: char| -> Result<bool, InvalidMbti> {
            match c {
                c if c == pos => Ok(true),
                c if c == neg => Ok(false),
                _ => Err(InvalidMbti(s.to_string())),
            }
        };

        Ok(Mbti {
            extravert: axis(letters[0], 'E', 'I')?,
            sensing: axis(letters[1], 'S', 'N')?,
            thinking: axis(letters[2], 'T', 'F')?,
            judging: axis(letters[3], 'J', 'P')?,
        })
    }
}

impl TryFrom<String> for Mbti {
    type Error = InvalidMbti;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mbti> for String {
    fn from(value: Mbti) -> Self {
        value.code()
    }
}

impl fmt::Display for Mbti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Member tags
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommStyle {
    Direct,
    Indirect,
    Data,
    Relation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollabStyle {
    Leader,
    Supporter,
    Mediator,
    Solo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strength {
    Vision,
    Execution,
    #[serde(rename = "Domain Expert")]
    DomainExpert,
    Networker,
    Strategist,
    #[serde(rename = "Mood Maker")]
    MoodMaker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Clone,
    Complement,
}

// ────────────────────────────────────────────────────────────────────────────
// Self-assessment
// ────────────────────────────────────────────────────────────────────────────

pub const NEUTRAL_SCORE: f64 = 3.0;

fn neutral() -> f64 {
    NEUTRAL_SCORE
}

/// The six competency axes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationAxis {
    Safety,
    Execution,
    Impact,
    Openness,
    Communication,
    Grit,
}

impl EvaluationAxis {
    pub const ALL: [EvaluationAxis; 6] = [
        EvaluationAxis::Safety,
        EvaluationAxis::Execution,
        EvaluationAxis::Impact,
        EvaluationAxis::Openness,
        EvaluationAxis::Communication,
        EvaluationAxis::Grit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EvaluationAxis::Safety => "심리적 안정감",
            EvaluationAxis::Execution => "실행력",
            EvaluationAxis::Impact => "영향력",
            EvaluationAxis::Openness => "개방성",
            EvaluationAxis::Communication => "소통 능력",
            EvaluationAxis::Grit => "끈기(Grit)",
        }
    }
}

/// Per-axis scores on a 1–5 scale. Missing axes are neutral (3).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default = "neutral")]
    pub safety: f64,
    #[serde(default = "neutral")]
    pub execution: f64,
    #[serde(default = "neutral")]
    pub impact: f64,
    #[serde(default = "neutral")]
    pub openness: f64,
    #[serde(default = "neutral")]
    pub communication: f64,
    #[serde(default = "neutral")]
    pub grit: f64,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::uniform(NEUTRAL_SCORE)
    }
}

impl Evaluation {
    pub fn uniform(score: f64) -> Self {
        Self {
            safety: score,
            execution: score,
            impact: score,
            openness: score,
            communication: score,
            grit: score,
        }
    }

    pub fn get(&self, axis: EvaluationAxis) -> f64 {
        match axis {
            EvaluationAxis::Safety => self.safety,
            EvaluationAxis::Execution => self.execution,
            EvaluationAxis::Impact => self.impact,
            EvaluationAxis::Openness => self.openness,
            EvaluationAxis::Communication => self.communication,
            EvaluationAxis::Grit => self.grit,
        }
    }

    pub fn set(&mut self, axis: EvaluationAxis, score: f64) {
        let slot = match axis {
            EvaluationAxis::Safety => &mut self.safety,
            EvaluationAxis::Execution => &mut self.execution,
            EvaluationAxis::Impact => &mut self.impact,
            EvaluationAxis::Openness => &mut self.openness,
            EvaluationAxis::Communication => &mut self.communication,
            EvaluationAxis::Grit => &mut self.grit,
        };
        *slot = score;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Team member
// ────────────────────────────────────────────────────────────────────────────

/// One row of the hiring-request roster.
///
/// `mbti`, `commStyle` and `collabStyle` accept an empty string as "unset",
/// which is what the request form submits before a selection is made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub mbti: Option<Mbti>,
    #[serde(default)]
    pub is_leader: bool,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub comm_style: Option<CommStyle>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub collab_style: Option<CollabStyle>,
    #[serde(default)]
    pub strengths: BTreeSet<Strength>,
    #[serde(default)]
    pub evaluation: Evaluation,
}

#[cfg(test)]
impl TeamMember {
    pub fn new(id: &str, name: &str, role: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            mbti: None,
            is_leader: false,
            comm_style: None,
            collab_style: None,
            strengths: BTreeSet::new(),
            evaluation: Evaluation::default(),
        }
    }
}

/// Deserializes `null`, a missing field, or a blank string as `None`.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) if !s.trim().is_empty() => {
            T::deserialize(s.into_deserializer()).map(Some)
        }
        _ => Ok(None),
    }
}
