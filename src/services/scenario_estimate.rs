use serde::{Deserialize, Serialize};

use crate::domain::scenario::{EstimateName, SimpleScenario, SimpleScenarioSet};
use crate::services::cost_model::HOURS_PER_MONTH;

/// Flat-team cost: one rate, a full-time team, a single duration.
pub fn simple_total_cost(scenario: &SimpleScenario) -> f64 {
    scenario.hourly_rate * HOURS_PER_MONTH * scenario.duration_months * scenario.team_size
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateLine {
    pub name: String,
    pub hourly_rate: f64,
    pub duration_months: f64,
    pub team_size: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub scenarios: Vec<EstimateLine>,
}

pub fn estimate_all(set: &SimpleScenarioSet) -> EstimateReport {
    let scenarios = EstimateName::ALL
        .iter()
        .map(|name| {
            let scenario = set.get(*name);
            EstimateLine {
                name: name.label().to_string(),
                hourly_rate: scenario.hourly_rate,
                duration_months: scenario.duration_months,
                team_size: scenario.team_size,
                total_cost: simple_total_cost(&scenario),
            }
        })
        .collect();
    EstimateReport { scenarios }
}
