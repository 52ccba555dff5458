//! Evaluation aggregation: radar values, readiness sub-metrics and the
//! composite growth score.
//!
//! Each 1–5 score is scaled ×20 and averaged across the roster. Averages are
//! floored at 30 so a weak axis never renders as an empty spoke.

use serde::{Deserialize, Serialize};

use crate::models::member::{EvaluationAxis, TeamMember};

const SCORE_SCALE: f64 = 20.0;
pub const DISPLAY_FLOOR: f64 = 30.0;
pub const DISPLAY_CEILING: f64 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthWeights {
    pub stability: f64,
    pub velocity: f64,
    pub innovation: f64,
}

impl Default for GrowthWeights {
    fn default() -> Self {
        Self {
            stability: 0.4,
            velocity: 0.3,
            innovation: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadinessMetrics {
    pub stability: f64,
    pub velocity: f64,
    pub innovation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessReport {
    pub radar: Vec<RadarPoint>,
    pub metrics: ReadinessMetrics,
    pub growth_score: u32,
}

pub fn clamp_display(value: f64) -> f64 {
    value.clamp(DISPLAY_FLOOR, DISPLAY_CEILING)
}

/// Raw (unclamped) roster average per axis on the 20–100 scale.
/// Returns `None` for an empty roster.
fn axis_averages(roster: &[TeamMember]) -> Option<[f64; 6]> {
    if roster.is_empty() {
        return None;
    }

    let count = roster.len() as f64;
    let mut averages = [0.0_f64; 6];
    for (slot, axis) in averages.iter_mut().zip(EvaluationAxis::ALL) {
        let sum: f64 = roster
            .iter()
            .map(|m| m.evaluation.get(axis) * SCORE_SCALE)
            .sum();
        *slot = sum / count;
    }
    Some(averages)
}

/// stability×0.4 + velocity×0.3 + innovation×0.3, clamped and rounded.
pub fn compute_growth_score(metrics: &ReadinessMetrics, weights: &GrowthWeights) -> u32 {
    let blended = metrics.stability * weights.stability
        + metrics.velocity * weights.velocity
        + metrics.innovation * weights.innovation;
    clamp_display(blended).round() as u32
}

pub fn compute_readiness(roster: &[TeamMember]) -> ReadinessReport {
    let Some(averages) = axis_averages(roster) else {
        return ReadinessReport {
            radar: vec![],
            metrics: ReadinessMetrics::default(),
            growth_score: 0,
        };
    };

    let radar = EvaluationAxis::ALL
        .iter()
        .zip(averages.iter())
        .map(|(axis, avg)| RadarPoint {
            label: axis.label().to_string(),
            value: clamp_display(*avg),
        })
        .collect();

    // `EvaluationAxis::ALL` is in declaration order.
    let avg = |axis: EvaluationAxis| averages[axis as usize];
    let metrics = ReadinessMetrics {
        stability: clamp_display(avg(EvaluationAxis::Safety)),
        velocity: clamp_display((avg(EvaluationAxis::Execution) + avg(EvaluationAxis::Grit)) / 2.0),
        innovation: clamp_display(
            (avg(EvaluationAxis::Openness) + avg(EvaluationAxis::Impact)) / 2.0,
        ),
    };

    let growth_score = compute_growth_score(&metrics, &GrowthWeights::default());

    ReadinessReport {
        radar,
        metrics,
        growth_score,
    }
}

/// Letter grade shown on the readiness gauge.
pub fn growth_grade(score: u32) -> &'static str {
    match score {
        s if s >= 90 => "S",
        s if s >= 80 => "A",
        s if s >= 70 => "B",
        s if s >= 60 => "C",
        _ => "C-",
    }
}
